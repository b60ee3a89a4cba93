//! `Fp`: the base field, elements stored in Montgomery form.
//!
//! A value `v` is represented as `f = v*R mod p` with `R = 2^(BASEBITS*NLEN)`.
//! Arithmetic is lazy: `add`/`sub`/`neg` just combine limbs and bump `xes`,
//! an upper bound on how many multiples of `p` the representative might
//! exceed a single reduced value by. Multiplication always forces the
//! inputs through a real reduction implicitly (the Montgomery reduction in
//! `mul`/`sqr` brings `xes` back down to `2`), so the only place excess can
//! accumulate without bound is a chain of adds, which is why `FEXCESS`
//! exists as a forcing threshold.

use crate::bigint::{Big, DBig};
use crate::rom;

/// Ceiling on [`Fp::xes`] before an operation forces a [`Fp::reduce`].
pub const FEXCESS: i32 = (1 << 10) - 1;

#[derive(Clone, Copy, Debug)]
pub struct Fp {
    pub(crate) f: Big,
    pub(crate) xes: i32,
}

impl Fp {
    pub const ZERO: Self = Fp {
        f: Big::ZERO,
        xes: 1,
    };

    /// Builds `Fp::from_big(Big::ONE)` without going through `nres`, since
    /// the Montgomery form of 1 is just `R mod p`, which is `R2MODP`
    /// reduced once — cheaper to special-case at the one call site that
    /// needs a fast identity (`Fp12`'s `ONE` constant).
    pub fn one() -> Self {
        Fp::from_big(Big::ONE)
    }

    /// Lifts a plain residue into Montgomery form: `nres(a) = a*R mod p`.
    pub fn from_big(a: Big) -> Self {
        let d = a.mul(&rom::R2MODP);
        let f = Big::monty(&rom::MODULUS, rom::MCONST, &d);
        Fp { f, xes: 1 }
    }

    /// Montgomery form -> plain residue: `redc(self) = f*R^-1 mod p`.
    pub fn redc(&self) -> Big {
        let mut d = DBig::ZERO;
        d.0[..crate::bigint::NLEN].copy_from_slice(&self.f.0);
        let mut out = Big::monty(&rom::MODULUS, rom::MCONST, &d);
        out.reduce_mod(&rom::MODULUS);
        out
    }

    /// Product in Montgomery form: `(a*b)*R mod p`. Resets `xes` to `2`
    /// (Montgomery reduction always fully reduces its DBig input modulo
    /// `p`, but the result can be as large as `p` itself before the final
    /// conditional subtraction inside `monty`, hence `2` rather than `1`).
    pub fn mul(&self, y: &Fp) -> Fp {
        let d = self.f.mul(&y.f);
        let f = Big::monty(&rom::MODULUS, rom::MCONST, &d);
        Fp { f, xes: 2 }
    }

    pub fn sqr(&self) -> Fp {
        let d = self.f.sqr();
        let f = Big::monty(&rom::MODULUS, rom::MCONST, &d);
        Fp { f, xes: 2 }
    }

    /// Lazy addition: limb-wise sum, `xes` bumped by `y.xes`. Forces a
    /// reduction when the combined excess would risk overflowing the
    /// 24-bit-limb-times-excess bound tracked by [`FEXCESS`].
    pub fn add(&self, y: &Fp) -> Fp {
        let mut f = self.f;
        f.add(&y.f);
        let mut out = Fp {
            f,
            xes: self.xes + y.xes,
        };
        if out.xes > FEXCESS {
            out.reduce();
        }
        out
    }

    pub fn sub(&self, y: &Fp) -> Fp {
        self.add(&y.neg())
    }

    /// Negation via subtraction from a multiple of the modulus large
    /// enough to keep every limb non-negative, bumping `xes` by one.
    pub fn neg(&self) -> Fp {
        let mut m = rom::MODULUS;
        m.imul((self.xes + 1) as i64);
        let mut f = m;
        f.sub(&self.f);
        f.norm();
        let mut out = Fp {
            f,
            xes: self.xes + 1,
        };
        if out.xes > FEXCESS {
            out.reduce();
        }
        out
    }

    /// Multiplies by a small non-negative constant. When `c*xes` would
    /// still fit under `FEXCESS` this is a cheap limb-wise scale; otherwise
    /// it falls back to a full Montgomery multiply by `nres(c)`.
    pub fn imul(&self, c: i64) -> Fp {
        if (c as i32) * self.xes <= FEXCESS {
            let mut f = self.f;
            f.imul(c);
            let mut out = Fp {
                f,
                xes: self.xes * c as i32,
            };
            out.reduce_if_needed();
            out
        } else {
            self.mul(&Fp::from_big(Big::from_u32(c as u32)))
        }
    }

    fn reduce_if_needed(&mut self) {
        if self.xes > FEXCESS {
            self.reduce();
        }
    }

    /// Brings `self` to a fully reduced representative (`xes = 1`) in
    /// constant time: normalize, then subtract `p` shifted up to the
    /// current excess's bit length, working down via `ssn`-style
    /// conditional subtraction (delegated to [`Big::reduce_mod`], which
    /// already implements that fixed-iteration-count discipline).
    pub fn reduce(&mut self) {
        self.f.norm();
        self.f.reduce_mod(&rom::MODULUS);
        self.xes = 1;
    }

    /// Constant-time conditional move: when `cond` is `1`, overwrites
    /// `self` with `other`; when `0`, leaves `self` unchanged. `cond` must
    /// be `0` or `1`. Both operands are brought to `xes = 1` first so the
    /// limb-wise `Big::cmove` underneath compares like representations.
    pub fn cmove_ct(&mut self, other: &Fp, cond: i64) {
        let mut s = self.reduced();
        s.f.cmove(&other.reduced().f, cond);
        *self = s;
    }

    /// Returns a copy reduced to `xes = 1`, leaving `self` untouched.
    pub fn reduced(&self) -> Fp {
        let mut out = *self;
        out.reduce();
        out
    }

    /// Equality after reducing both sides — the only sound way to compare
    /// lazily-represented values.
    pub fn equals(&self, y: &Fp) -> bool {
        self.reduced().f.cmp(&y.reduced().f) == core::cmp::Ordering::Equal
    }

    pub fn is_zero(&self) -> bool {
        self.reduced().f.is_zero()
    }

    /// 4-bit windowed left-to-right exponentiation with a 16-entry table.
    /// Not constant-time: only ever called on public exponents (the
    /// final-exponentiation "speed" path, ROM-constant derivations, and
    /// `sqrt`/`inverse`).
    pub fn pow(&self, e: &Big) -> Fp {
        let mut table = [Fp::one(); 16];
        table[1] = self.reduced();
        for i in 2..16 {
            table[i] = table[i - 1].mul(&table[1]);
        }

        let nbits = e.bit_length();
        if nbits == 0 {
            return Fp::one();
        }

        // align to a 4-bit boundary so the main loop always consumes whole
        // nibbles, then process the partial top nibble separately.
        let top = nbits % 4;
        let mut r = Fp::one();
        for i in (nbits - top..nbits).rev() {
            r = r.sqr();
            if e.bit(i) == 1 {
                r = r.mul(&table[1]);
            }
        }

        let mut i = nbits - top;
        while i >= 4 {
            i -= 4;
            r = r.sqr();
            r = r.sqr();
            r = r.sqr();
            r = r.sqr();
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

    /// `x^((p-3)/4)` / `x^((p-5)/8)`-style addition-chain exponent used by
    /// [`Fp::sqrt`]. For BN254, `p ≡ 3 (mod 4)`, so the square root (when
    /// it exists) is `x^((p+1)/4)`; this is implemented directly via
    /// [`Fp::pow`] against the precomputed exponent rather than a bespoke
    /// addition chain, since `pow`'s 4-bit window already amortizes the
    /// squarings the chain would otherwise hand-schedule.
    pub fn fpow(&self) -> Fp {
        let mut e = rom::MODULUS;
        e.add(&Big::ONE);
        e.norm();
        e.shr(2);
        self.pow(&e)
    }

    /// `sqrt(self) = self^((p+1)/4)` (valid because `p ≡ 3 mod 4`),
    /// returning `None` when `self` is a quadratic non-residue.
    pub fn sqrt(&self) -> Option<Fp> {
        if self.is_zero() {
            return Some(Fp::ZERO);
        }
        let r = self.fpow();
        if r.sqr().equals(self) {
            Some(r)
        } else {
            None
        }
    }

    /// Jacobi symbol of the reduced residue against the modulus.
    pub fn jacobi(&self) -> i32 {
        crate::bigint::jacobi(&self.reduced().f, &rom::MODULUS)
    }

    /// Fermat inverse: `self^(p-2)`. Never fails for non-zero input;
    /// callers must not invoke this on zero.
    pub fn inverse(&self) -> Fp {
        let mut e = rom::MODULUS;
        e.sub(&Big::from_u32(2));
        e.norm();
        self.pow(&e)
    }
}

impl core::ops::Add for Fp {
    type Output = Fp;
    fn add(self, rhs: Fp) -> Fp {
        Fp::add(&self, &rhs)
    }
}

impl core::ops::Sub for Fp {
    type Output = Fp;
    fn sub(self, rhs: Fp) -> Fp {
        Fp::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Fp {
    type Output = Fp;
    fn mul(self, rhs: Fp) -> Fp {
        Fp::mul(&self, &rhs)
    }
}

impl core::ops::Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp::neg(&self)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
