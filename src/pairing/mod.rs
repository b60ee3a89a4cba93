//! The Optimal Ate pairing over BN254: the Miller loop (single and
//! interleaved double-pairing forms), the final exponentiation, the GLV/GS
//! scalar decompositions, and the public `G1`/`G2`/`Gt` scalar-multiplication
//! entry points built on them.

mod decompose;
mod line;

use crate::bigint::Big;
use crate::curves::{Ecp, Ecp2, G1Affine, G2Affine};
use crate::fields::{Fp, Fp12, Fp2};
use crate::rom;

pub use decompose::{glv, gs};

/// A scalar reduced modulo the group order `r`, the type `G1`/`G2`/`Gt`
/// exponentiation take their exponents as.
#[derive(Clone, Copy, Debug)]
pub struct Scalar(pub Big);

impl Scalar {
    pub fn new(v: Big) -> Self {
        let mut r = v;
        r.reduce_mod(&rom::CURVE_ORDER);
        Scalar(r)
    }

    pub fn zero() -> Self {
        Scalar(Big::ZERO)
    }

    /// Decodes a big-endian 32-byte scalar, reducing it mod the group
    /// order `r` the same way [`Scalar::new`] does.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Scalar::new(Big::from_bytes(bytes))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// The target group `Gt`, the order-`r` cyclotomic subgroup of `Fp12*`
/// that pairing values and their products live in.
#[derive(Clone, Copy, Debug)]
pub struct Gt(pub Fp12);

impl Gt {
    pub fn one() -> Self {
        Gt(Fp12::one())
    }

    pub fn mul(&self, y: &Gt) -> Gt {
        Gt(self.0.ssmul(&y.0))
    }

    pub fn equals(&self, y: &Gt) -> bool {
        self.0.equals(&y.0)
    }

    pub fn pow(&self, e: &Scalar) -> Gt {
        Gt(gt_pow(&self.0, &e.0))
    }
}

fn frobenius_x() -> Fp2 {
    Fp2::new(Fp::from_big(rom::FRA), Fp::from_big(rom::FRB))
}

/// `n = 6u+2` and `n3 = 3n`, the Miller-loop exponent pair. `6u` alone
/// already exceeds `i64`, hence the `Big` arithmetic.
fn loop_exponents() -> (Big, Big) {
    let mut n = Big::from_u64(rom::CURVE_BNX as u64);
    n.imul(6);
    n.norm();
    n.add(&Big::from_u32(2));
    n.norm();

    let mut n3 = n;
    n3.imul(3);
    n3.norm();

    (n, n3)
}

/// Per-pair Miller-loop accumulator state: the running point `a` (doubled
/// and added to across loop steps) and the fixed affine `G2`/`G1` operands
/// a doubling/addition line is evaluated against.
struct MillerState {
    a: Ecp2,
    p_affine: Ecp2,
    neg_p_affine: Ecp2,
    qx: Fp,
    qy: Fp,
}

impl MillerState {
    fn new(p2: &Ecp2, p1: &Ecp) -> Self {
        let qa = p1.to_affine();
        let pa = p2.to_affine();
        let p_affine = Ecp2 {
            x: pa.x,
            y: pa.y,
            z: Fp2::one(),
        };
        let neg_p_affine = Ecp2 {
            x: pa.x,
            y: pa.y.neg(),
            z: Fp2::one(),
        };
        MillerState {
            a: p_affine,
            p_affine,
            neg_p_affine,
            qx: qa.x,
            qy: qa.y,
        }
    }

    fn double_step(&mut self) -> Fp12 {
        line::line_double(&mut self.a, self.qx, self.qy)
    }

    fn add_step(&mut self, bt: i64) -> Option<Fp12> {
        if bt == 1 {
            Some(line::line_add(&mut self.a, &self.p_affine, self.qx, self.qy))
        } else if bt == -1 {
            Some(line::line_add(
                &mut self.a,
                &self.neg_p_affine,
                self.qx,
                self.qy,
            ))
        } else {
            None
        }
    }

    /// R-ate fixup: folds in the two Frobenius conjugates of the fixed
    /// `G2` point after the main loop.
    fn fixup(&mut self) -> Fp12 {
        let fr = frobenius_x();
        self.a = self.a.neg();
        let k1 = self.p_affine.frob(&fr);
        let lv1 = line::line_add(&mut self.a, &k1, self.qx, self.qy);
        let k2 = k1.frob(&fr).neg();
        let lv2 = line::line_add(&mut self.a, &k2, self.qx, self.qy);
        lv1.mul(&lv2)
    }
}

/// Miller loop for a single pair, *without* the final exponentiation:
/// `P` in `G2`, `Q` in `G1`.
pub fn ate(p2: &Ecp2, p1: &Ecp) -> Fp12 {
    if p1.is_infinity() || p2.is_infinity() {
        return Fp12::one();
    }

    let (n, n3) = loop_exponents();
    let nb = n3.bit_length();
    let mut st = MillerState::new(p2, p1);
    let mut r = Fp12::one();

    for i in (1..nb - 1).rev() {
        r = r.sqr();
        r = r.ssmul(&st.double_step());
        let bt = n3.bit(i) - n.bit(i);
        if let Some(lv) = st.add_step(bt) {
            r = r.ssmul(&lv);
        }
    }

    r = r.conj();
    r = r.ssmul(&st.fixup());
    r
}

/// Interleaved double Miller loop: `ate(P, Q) * ate(R, S)`, sharing one
/// squaring per loop step instead of running two independent loops.
pub fn ate2(p2: &Ecp2, p1: &Ecp, r2: &Ecp2, r1: &Ecp) -> Fp12 {
    if p1.is_infinity() || p2.is_infinity() {
        return ate(r2, r1);
    }
    if r1.is_infinity() || r2.is_infinity() {
        return ate(p2, p1);
    }

    let (n, n3) = loop_exponents();
    let nb = n3.bit_length();
    let mut st1 = MillerState::new(p2, p1);
    let mut st2 = MillerState::new(r2, r1);
    let mut acc = Fp12::one();

    for i in (1..nb - 1).rev() {
        acc = acc.sqr();
        acc = acc.ssmul(&st1.double_step());
        acc = acc.ssmul(&st2.double_step());
        let bt = n3.bit(i) - n.bit(i);
        if let Some(lv) = st1.add_step(bt) {
            acc = acc.ssmul(&lv);
        }
        if let Some(lv) = st2.add_step(bt) {
            acc = acc.ssmul(&lv);
        }
    }

    acc = acc.conj();
    acc = acc.ssmul(&st1.fixup());
    acc = acc.ssmul(&st2.fixup());
    acc
}

/// Final exponentiation: easy part `m^((p^6-1)(p^2+1))` followed by the
/// hard part `^((p^4-p^2+1)/r)` via [`Fp12::pow_wide`].
pub fn fexp(m: &Fp12) -> Fp12 {
    let fr = frobenius_x();
    let f1 = m.conj().mul(&m.inverse());
    let f2 = f1.frob(&fr).frob(&fr).mul(&f1);
    f2.pow_wide(&rom::FEXP_HARD_EXP)
}

/// Starts a multi-pairing accumulation.
pub fn initmp() -> Fp12 {
    Fp12::one()
}

/// Folds one more pair's Miller loop into a multi-pairing accumulator.
pub fn another(acc: &mut Fp12, p2: &Ecp2, p1: &Ecp) {
    *acc = acc.mul(&ate(p2, p1));
}

/// Finishes a multi-pairing accumulation with the shared final
/// exponentiation (valid since `fexp` is a group homomorphism on the
/// product of Miller-loop values).
pub fn miller(acc: &Fp12) -> Fp12 {
    fexp(acc)
}

/// `G1` scalar multiplication via the GLV 2-way decomposition and the
/// endomorphism `phi(x,y) = (CURVE_CRU*x, y)`.
pub fn g1_mul(p: &Ecp, e: &Big) -> Ecp {
    let ([k0, k1], [n0, n1]) = decompose::glv(e);
    let p0 = if n0 { p.neg() } else { *p };
    let phi_p = Ecp {
        x: p.x.mul(&Fp::from_big(rom::CURVE_CRU)),
        y: p.y,
        z: p.z,
    };
    let p1 = if n1 { phi_p.neg() } else { phi_p };
    p0.mul2(&k0, &p1, &k1)
}

/// `G2` scalar multiplication via the base-`u` 4-way decomposition and
/// [`Ecp2::mul4`] (see [`gs`]'s doc comment for the substitution this
/// makes for the literal Frobenius-based construction).
pub fn g2_mul(p: &Ecp2, e: &Big) -> Ecp2 {
    let (digits, neg) = decompose::gs(e);
    let u = Big::from_u64(rom::CURVE_BNX as u64);

    let q0 = *p;
    let q1 = q0.mul(&u);
    let q2 = q1.mul(&u);
    let q3 = q2.mul(&u);

    Ecp2::mul4(&[q0, q1, q2, q3], &digits, &neg)
}

/// `Gt` exponentiation, mirroring [`g2_mul`]'s base-`u` decomposition via
/// [`Fp12::pow4`].
pub fn gt_pow(d: &Fp12, e: &Big) -> Fp12 {
    let (digits, neg) = decompose::gs(e);
    let u = Big::from_u64(rom::CURVE_BNX as u64);

    let d0 = *d;
    let d1 = d0.pow(&u);
    let d2 = d1.pow(&u);
    let d3 = d2.pow(&u);

    Fp12::pow4(&[d0, d1, d2, d3], &digits, &neg)
}

/// Computes a single pairing `e(Q, P)` with `Q in G2`, `P in G1`, including
/// the final exponentiation.
pub fn pairing(q: &G2Affine, p: &G1Affine) -> Gt {
    if p.infinity || q.infinity {
        return Gt::one();
    }
    let p2 = Ecp2 {
        x: q.x,
        y: q.y,
        z: Fp2::one(),
    };
    let p1 = Ecp {
        x: p.x,
        y: p.y,
        z: Fp::one(),
    };
    Gt(fexp(&ate(&p2, &p1)))
}

/// Convenience wrapper computing `prod_i e(g2s[i], g1s[i])` with a single
/// shared final exponentiation.
pub fn multi_pairing(g1s: &[G1Affine], g2s: &[G2Affine]) -> Gt {
    let mut acc = initmp();
    for (p, q) in g1s.iter().zip(g2s.iter()) {
        if p.infinity || q.infinity {
            continue;
        }
        let p2 = Ecp2 {
            x: q.x,
            y: q.y,
            z: Fp2::one(),
        };
        let p1 = Ecp {
            x: p.x,
            y: p.y,
            z: Fp::one(),
        };
        another(&mut acc, &p2, &p1);
    }
    Gt(miller(&acc))
}
