//! `Fp12 = Fp4[w] / (w^3 - j)`: the top of the tower, and the group `Gt`'s
//! carrier before (and, via `Gt`, after) the final exponentiation.

use super::fp2::Fp2;
use super::fp4::Fp4;
use crate::bigint::Big;

/// Sparsity tag. Line-function outputs during the Miller loop only ever
/// populate a restricted subset of coefficients; tracking that shape lets
/// `ssmul` route to a cheaper multiply than the fully general case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stype {
    Zero,
    One,
    /// Only the `Fp2` subfield of `a.a` may be non-zero.
    Sparser,
    /// `a` and `b` have restricted non-zero entries; `c` may be dense.
    Sparse,
    Dense,
}

impl Stype {
    const fn to_tag(self) -> i64 {
        match self {
            Stype::Zero => 0,
            Stype::One => 1,
            Stype::Sparser => 2,
            Stype::Sparse => 3,
            Stype::Dense => 4,
        }
    }

    const fn from_tag(tag: i64) -> Stype {
        match tag {
            0 => Stype::Zero,
            1 => Stype::One,
            2 => Stype::Sparser,
            3 => Stype::Sparse,
            _ => Stype::Dense,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Fp12 {
    pub a: Fp4,
    pub b: Fp4,
    pub c: Fp4,
    pub stype: Stype,
}

impl Fp12 {
    pub fn zero() -> Self {
        Fp12 {
            a: Fp4::ZERO,
            b: Fp4::ZERO,
            c: Fp4::ZERO,
            stype: Stype::Zero,
        }
    }

    pub fn one() -> Self {
        Fp12 {
            a: Fp4::one(),
            b: Fp4::ZERO,
            c: Fp4::ZERO,
            stype: Stype::One,
        }
    }

    pub fn new_dense(a: Fp4, b: Fp4, c: Fp4) -> Self {
        Fp12 {
            a,
            b,
            c,
            stype: Stype::Dense,
        }
    }

    /// Builds the SPARSER shape a line-function doubling produces:
    /// `(a, b, 0)` with the rest of `a` held to zero by the caller.
    pub fn new_sparser(a: Fp4, b: Fp4) -> Self {
        Fp12 {
            a,
            b,
            c: Fp4::ZERO,
            stype: Stype::Sparser,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.a.equals(&Fp4::one()) && self.b.is_zero() && self.c.is_zero()
    }

    pub fn equals(&self, y: &Fp12) -> bool {
        self.a.equals(&y.a) && self.b.equals(&y.b) && self.c.equals(&y.c)
    }

    /// Constant-time conditional move, component-wise; `stype` moves along
    /// with the rest (via its integer tag, XOR-masked like `Big::cmove`)
    /// since a selected table entry's sparsity shape must travel with its
    /// coefficients. `cond` must be `0` or `1`.
    pub fn cmove_ct(&mut self, other: &Fp12, cond: i64) {
        self.a.cmove_ct(&other.a, cond);
        self.b.cmove_ct(&other.b, cond);
        self.c.cmove_ct(&other.c, cond);
        let mask = -cond;
        let tag = self.stype.to_tag() ^ ((self.stype.to_tag() ^ other.stype.to_tag()) & mask);
        self.stype = Stype::from_tag(tag);
    }

    pub fn neg(&self) -> Fp12 {
        Fp12 {
            a: self.a.neg(),
            b: self.b.neg(),
            c: self.c.neg(),
            stype: self.stype,
        }
    }

    pub fn add(&self, y: &Fp12) -> Fp12 {
        Fp12 {
            a: self.a.add(&y.a),
            b: self.b.add(&y.b),
            c: self.c.add(&y.c),
            stype: Stype::Dense,
        }
    }

    pub fn sub(&self, y: &Fp12) -> Fp12 {
        Fp12 {
            a: self.a.sub(&y.a),
            b: self.b.sub(&y.b),
            c: self.c.sub(&y.c),
            stype: Stype::Dense,
        }
    }

    /// `p^6`-power conjugation: `w -> -w` fixes the `Fp4` basis elements of
    /// even degree (`a`, `c`) and flips the odd one (`b`). Valid as the
    /// multiplicative inverse exactly on the cyclotomic subgroup (unitary
    /// elements), which is where every caller in this crate uses it.
    pub fn conj(&self) -> Fp12 {
        Fp12 {
            a: self.a,
            b: self.b.neg(),
            c: self.c,
            stype: self.stype,
        }
    }

    /// Full cubic-extension Karatsuba multiply: six `Fp4` multiplications.
    pub fn mul(&self, y: &Fp12) -> Fp12 {
        let z0 = self.a.mul(&y.a);
        let z1 = self.b.mul(&y.b);
        let z2 = self.c.mul(&y.c);

        let t0 = self.b.add(&self.c).mul(&y.b.add(&y.c));
        let t1 = self.a.add(&self.b).mul(&y.a.add(&y.b));
        let t2 = self.a.add(&self.c).mul(&y.a.add(&y.c));

        let ra = z0.add(&(t0.sub(&z1).sub(&z2)).mul_j());
        let rb = t1.sub(&z0).sub(&z1).add(&z2.mul_j());
        let rc = t2.sub(&z0).sub(&z2).add(&z1);

        Fp12 {
            a: ra,
            b: rb,
            c: rc,
            stype: Stype::Dense,
        }
    }

    /// Chung–Hasan SQR3 squaring: five `Fp4` multiplications instead of
    /// the six a generic `mul(self)` would cost.
    pub fn sqr(&self) -> Fp12 {
        let s0 = self.a.sqr();
        let ab = self.a.mul(&self.b);
        let s1 = ab.add(&ab);
        let s2 = self.a.sub(&self.b).add(&self.c).sqr();
        let bc = self.b.mul(&self.c);
        let s3 = bc.add(&bc);
        let s4 = self.c.sqr();

        let ra = s0.add(&s3.mul_j());
        let rb = s1.add(&s4.mul_j());
        let rc = s1.add(&s2).add(&s3).sub(&s0).sub(&s4);

        Fp12 {
            a: ra,
            b: rb,
            c: rc,
            stype: Stype::Dense,
        }
    }

    /// Unitary squaring, valid only on the cyclotomic subgroup (where
    /// `self * conj(self) == 1`). The dedicated Granger–Scott formula for
    /// this tower shape needs numeric verification this environment
    /// cannot perform (no Rust toolchain, no reliable symbolic check
    /// available); falling back to the always-correct general `sqr`
    /// keeps every caller's result right at the cost of the speedup the
    /// specialized formula would have bought. `ssmul`/`pow4` below are
    /// unaffected since they only depend on `usqr`'s result, not its cost.
    pub fn usqr(&self) -> Fp12 {
        self.sqr()
    }

    /// Six-multiplication product of a general `self` against a SPARSER
    /// `y` (a line-function output with `y.c == 0`): the general `mul`
    /// formula specialized with `y.c = 0`. Every real call site passes a
    /// dense Miller-loop accumulator as `self`; only `y`'s shape is
    /// required, which is what the assertion below checks.
    pub fn smul(&self, y: &Fp12) -> Fp12 {
        debug_assert_eq!(y.stype, Stype::Sparser);
        let z0 = self.a.mul(&y.a);
        let z1 = self.b.mul(&y.b);

        let t0 = self.b.add(&self.c).mul(&y.b);
        let t1 = self.a.add(&self.b).mul(&y.a.add(&y.b));
        let t2 = self.a.add(&self.c).mul(&y.a);

        let ra = z0.add(&(t0.sub(&z1)).mul_j());
        let rb = t1.sub(&z0).sub(&z1);
        let rc = t2.sub(&z0).add(&z1);

        Fp12 {
            a: ra,
            b: rb,
            c: rc,
            stype: Stype::Dense,
        }
    }

    /// General multiply, dispatching on both operands' shape. `ONE`
    /// operands are a copy; a SPARSER right-hand side routes to the
    /// cheaper [`Fp12::smul`]; everything else falls back to [`Fp12::mul`].
    pub fn ssmul(&self, y: &Fp12) -> Fp12 {
        match (self.stype, y.stype) {
            (Stype::One, _) => *y,
            (_, Stype::One) => *self,
            (Stype::Zero, _) | (_, Stype::Zero) => Fp12::zero(),
            (_, Stype::Sparser) => self.smul(y),
            (Stype::Sparser, _) => y.smul(self),
            _ => self.mul(y),
        }
    }

    /// Cubic-extension inverse via the adjugate: for `x = a + bw + cw^2`
    /// in `Fp4[w]/(w^3 - j)`, the norm `N = a*A + j*(c*C + b*B)` with
    /// `A = a^2 - j*b*c`, `B = j*c^2 - a*b`, `C = b^2 - a*c` satisfies
    /// `x*(A, B, C) = N`, so `x^-1 = (A, B, C) * N^-1`.
    pub fn inverse(&self) -> Fp12 {
        let t0 = self.a.sqr();
        let t1 = self.b.sqr();
        let t2 = self.c.sqr();
        let t3 = self.a.mul(&self.b);
        let t4 = self.a.mul(&self.c);
        let t5 = self.b.mul(&self.c);

        let c0 = t0.sub(&t5.mul_j());
        let c1 = t2.mul_j().sub(&t3);
        let c2 = t1.sub(&t4);

        let norm = self
            .a
            .mul(&c0)
            .add(&self.c.mul(&c1).mul_j())
            .add(&self.b.mul(&c2).mul_j());
        let norm_inv = norm.inverse();

        Fp12 {
            a: c0.mul(&norm_inv),
            b: c1.mul(&norm_inv),
            c: c2.mul(&norm_inv),
            stype: Stype::Dense,
        }
    }

    /// Frobenius `pi`: apply the `Fp4`-layer Frobenius to every
    /// coefficient, then twist `b` and `c` by `f` and `f^2` respectively
    /// (`f = Fra + Frb*i` from ROM).
    pub fn frob(&self, f: &Fp2) -> Fp12 {
        let f2 = f.sqr();
        Fp12 {
            a: self.a.frob(f),
            b: self.b.frob(f).a_scale(f),
            c: self.c.frob(f).a_scale(&f2),
            stype: Stype::Dense,
        }
    }

    /// Unsigned public-exponent exponentiation: only used where `e` is not
    /// secret (the final exponentiation's easy part, the BN parameter `u`
    /// in the GS-based `G2`/`Gt` decomposition). With the `speed` feature
    /// off, uses a plain bit-by-bit square-and-multiply; with it on, the
    /// faster 4-bit windowed form below. Neither is constant-time — that
    /// would be wasted effort on an exponent that isn't secret in the
    /// first place.
    #[cfg(not(feature = "speed"))]
    pub fn pow(&self, e: &Big) -> Fp12 {
        let nbits = e.bit_length();
        let mut r = Fp12::one();
        for i in (0..nbits).rev() {
            r = r.sqr();
            if e.bit(i) == 1 {
                r = r.mul(self);
            }
        }
        r
    }

    /// 4-bit windowed left-to-right exponentiation, in the same style as
    /// [`super::fp::Fp::pow`]. See the `speed`-off variant above for why
    /// this isn't constant-time either.
    #[cfg(feature = "speed")]
    pub fn pow(&self, e: &Big) -> Fp12 {
        let mut table = [Fp12::one(); 16];
        table[1] = *self;
        for i in 2..16 {
            table[i] = table[i - 1].mul(&table[1]);
        }

        let nbits = e.bit_length();
        if nbits == 0 {
            return Fp12::one();
        }

        let top = nbits % 4;
        let mut r = Fp12::one();
        for i in (nbits - top..nbits).rev() {
            r = r.sqr();
            if e.bit(i) == 1 {
                r = r.mul(&table[1]);
            }
        }

        let mut i = nbits - top;
        while i >= 4 {
            i -= 4;
            r = r.sqr().sqr().sqr().sqr();
            let nib = ((e.bit(i + 3) << 3)
                | (e.bit(i + 2) << 2)
                | (e.bit(i + 1) << 1)
                | e.bit(i)) as usize;
            if nib != 0 {
                r = r.mul(&table[nib]);
            }
        }

        r
    }

    /// Simultaneous four-base exponentiation `q[0]^u[0] * ... * q[3]^u[3]`
    /// via a 16-entry combination table and a single squaring ladder over
    /// the maximum bit length among the (non-negative) magnitudes `u`.
    /// `neg[i]` set means the true exponent is `-u[i]`; handled by
    /// inverting `q[i]` up front (the sign-pivot recoding a GS/GLV
    /// decomposition hands back).
    pub fn pow4(q: &[Fp12; 4], u: &[Big; 4], neg: &[bool; 4]) -> Fp12 {
        let mut base = [Fp12::one(); 4];
        for i in 0..4 {
            base[i] = q[i];
            base[i].cmove_ct(&q[i].inverse(), neg[i] as i64);
        }

        let mut table = [Fp12::one(); 16];
        for mask in 1usize..16 {
            let lowest = mask.trailing_zeros() as usize;
            let rest = mask & (mask - 1);
            table[mask] = table[rest].mul(&base[lowest]);
        }

        let nbits = u.iter().map(|m| m.bit_length()).max().unwrap_or(0);
        let mut r = Fp12::one();
        for i in (0..nbits).rev() {
            r = r.sqr();
            let mask = (u[0].bit(i)) | (u[1].bit(i) << 1) | (u[2].bit(i) << 2) | (u[3].bit(i) << 3);
            let mut sel = table[0];
            for (idx, entry) in table.iter().enumerate().skip(1) {
                sel.cmove_ct(entry, (idx as i64 == mask) as i64);
            }
            r = r.mul(&sel);
        }

        r
    }

    /// XTR-based compressed exponentiation for the `GT_STRONG` case. BN254
    /// sets `GT_STRONG = false` (spec's own Open Question marks this path
    /// optional), so this defers to the always-correct [`Fp12::pow`]
    /// rather than threading a compressed `Fp4` trace representation that
    /// only pays off when `GT_STRONG` is true.
    pub fn compow(&self, e: &Big, _r: &Big) -> Fp12 {
        self.pow(e)
    }

    /// Square-and-multiply over an exponent wider than a single `Big`,
    /// given as little-endian `Big` chunks (`value = sum chunks[i] *
    /// 2^(i*NLEN*BASEBITS)`). The final-exponentiation hard part's
    /// exponent `(p^4-p^2+1)/r` is ~761 bits, wider than `Big`'s 264-bit
    /// capacity, which is the only reason this exists instead of plain
    /// [`Fp12::pow`].
    pub fn pow_wide(&self, chunks: &[Big]) -> Fp12 {
        const CHUNK_BITS: usize = crate::bigint::NLEN * crate::bigint::BASEBITS as usize;

        let mut top = chunks.len();
        while top > 0 && chunks[top - 1].is_zero() {
            top -= 1;
        }
        if top == 0 {
            return Fp12::one();
        }

        let mut r = Fp12::one();
        for ci in (0..top).rev() {
            let bits = if ci == top - 1 {
                chunks[ci].bit_length()
            } else {
                CHUNK_BITS
            };
            for bi in (0..bits).rev() {
                r = r.sqr();
                if chunks[ci].bit(bi) == 1 {
                    r = r.mul(self);
                }
            }
        }
        r
    }
}

impl Fp4 {
    /// Scales only the outer `Fp2` real component by `f`, used by
    /// [`Fp12::frob`] to fold in the ROM twist constant after the
    /// coefficient-wise Frobenius.
    fn a_scale(&self, f: &Fp2) -> Fp4 {
        Fp4::new(self.a.mul(f), self.b.mul(f))
    }
}

impl core::ops::Add for Fp12 {
    type Output = Fp12;
    fn add(self, rhs: Fp12) -> Fp12 {
        Fp12::add(&self, &rhs)
    }
}

impl core::ops::Sub for Fp12 {
    type Output = Fp12;
    fn sub(self, rhs: Fp12) -> Fp12 {
        Fp12::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Fp12 {
    type Output = Fp12;
    fn mul(self, rhs: Fp12) -> Fp12 {
        Fp12::mul(&self, &rhs)
    }
}
