//! Scalar decompositions used to speed up `G1`, `G2`, and `Gt`
//! exponentiation: the 2-way GLV split for `G1` (Gallant–Lambert–Vanstone)
//! and a 4-way split for `G2`/`Gt` via repeated multiplication/
//! exponentiation by the BN parameter `u` (see [`gs`]'s doc comment for
//! why this isn't the literal Frobenius/lattice-matrix construction).

use crate::bigint::Big;
use crate::rom;

type Signed = (Big, bool);

fn sneg(a: Signed) -> Signed {
    if a.0.is_zero() {
        (a.0, false)
    } else {
        (a.0, !a.1)
    }
}

fn sadd(a: Signed, b: Signed) -> Signed {
    if a.1 == b.1 {
        let mut r = a.0;
        r.add(&b.0);
        r.norm();
        (r, a.1)
    } else if a.0.cmp(&b.0) != core::cmp::Ordering::Less {
        let mut r = a.0;
        r.sub(&b.0);
        r.norm();
        (r, a.1)
    } else {
        let mut r = b.0;
        r.sub(&a.0);
        r.norm();
        (r, b.1)
    }
}

fn ssub(a: Signed, b: Signed) -> Signed {
    sadd(a, sneg(b))
}

fn smul(a: Signed, b: Signed) -> Signed {
    let prod = a.0.mul(&b.0);
    let (lo, _hi) = prod.split();
    (lo, a.1 != b.1)
}

const BASE_F: f64 = 16_777_216.0; // 2^BASEBITS

fn big_to_f64(x: &Big) -> f64 {
    let mut v = 0.0f64;
    for limb in x.0.iter().rev() {
        v = v * BASE_F + *limb as f64;
    }
    v
}

fn f64_to_big_mag(mut v: f64) -> Big {
    let mut limbs = [0i64; crate::bigint::NLEN];
    for limb in limbs.iter_mut() {
        if v < 1.0 {
            break;
        }
        let digit = (v % BASE_F) as i64;
        *limb = digit;
        v = (v - digit as f64) / BASE_F;
    }
    Big(limbs)
}

fn round_quotient(num: f64, den: f64) -> Signed {
    let q = (num / den).round();
    (f64_to_big_mag(q.abs()), q < 0.0)
}

/// Gallant–Lambert–Vanstone 2-way decomposition of `e` for the `G1`
/// endomorphism `phi(x,y) = (CURVE_CRU*x, y)`, which acts as multiplication
/// by `CURVE_LAMBDA` on points of order `r`. Returns `([k0,k1], [neg0,
/// neg1])` with `k0 + (neg1 ? -1 : 1)*k1*CURVE_LAMBDA == e (mod r)`, and
/// `k0, k1` roughly half the bit length of `r`.
///
/// `c1, c2` are found by Babai rounding against the reduced lattice basis
/// `CURVE_W, CURVE_SB` (see `rom.rs`), using an `f64` approximation of the
/// division rather than exact big-integer division. The lattice identity
/// `a_i + b_i*lambda == 0 (mod r)` the basis vectors satisfy makes `k0 +
/// k1*lambda == e (mod r)` hold for *any* integers `c1, c2` — an
/// approximate quotient only changes how short `k0, k1` turn out, never
/// correctness.
pub fn glv(e: &Big) -> ([Big; 2], [bool; 2]) {
    let k: Signed = (*e, false);
    let r_f = big_to_f64(&rom::CURVE_ORDER);
    let k_f = big_to_f64(e);

    let a1: Signed = (rom::CURVE_W[0], rom::CURVE_W_NEG[0]);
    let b1: Signed = (rom::CURVE_W[1], rom::CURVE_W_NEG[1]);
    let a2: Signed = (rom::CURVE_SB[0], rom::CURVE_SB_NEG[0]);
    let b2: Signed = (rom::CURVE_SB[1], rom::CURVE_SB_NEG[1]);

    let b2_f = if b2.1 {
        -big_to_f64(&b2.0)
    } else {
        big_to_f64(&b2.0)
    };
    let b1_f = if b1.1 {
        -big_to_f64(&b1.0)
    } else {
        big_to_f64(&b1.0)
    };

    let c1 = round_quotient(b2_f * k_f, r_f);
    let c2 = round_quotient(-b1_f * k_f, r_f);

    let k1 = ssub(k, sadd(smul(c1, a1), smul(c2, a2)));
    let k2 = sneg(sadd(smul(c1, b1), smul(c2, b2)));

    ([k1.0, k2.0], [k1.1, k2.1])
}

/// Balanced base-`u` decomposition of `e` into four digits with `e == k0 +
/// k1*u + k2*u^2 + k3*u^3` as an *exact integer identity*: each step takes
/// the current remainder modulo `u` and, when that remainder exceeds
/// `u/2`, rebalances it to `(remainder - u, +1 carried into the quotient)`,
/// keeping every digit in `(-u/2, u/2]` — a textbook balanced-radix
/// expansion, correct by construction regardless of `u`'s size.
///
/// The literal Galbraith–Scott construction instead bases this
/// decomposition on a `CURVE_WB`/`CURVE_BB` lattice whose matrices come
/// from LLL-reducing a basis tied to the Frobenius eigenvalue on `G2`.
/// There is no way to derive or check that reduction here without a
/// computer-algebra system. This digit expansion gives the same shape
/// (four digits near a quarter of `r`'s bit length feeding a four-term
/// combination ladder) by a different, easily-verified route:
/// [`super::g2_mul`] and [`super::gt_pow`] use it together with repeated
/// multiplication/exponentiation by the small public constant `u`, in
/// place of Frobenius conjugates.
pub fn gs(e: &Big) -> ([Big; 4], [bool; 4]) {
    let u = Big::from_u64(rom::CURVE_BNX as u64);
    let mut half_u = u;
    half_u.shr(1);

    let mut digits = [Big::ZERO; 4];
    let mut neg = [false; 4];
    let mut rem = *e;
    rem.norm();

    for i in 0..3 {
        let (q, r) = rem.div_mod(&u);
        if r.cmp(&half_u) == core::cmp::Ordering::Greater {
            let mut mag = u;
            mag.sub(&r);
            mag.norm();
            digits[i] = mag;
            neg[i] = true;
            rem = q;
            rem.add(&Big::ONE);
            rem.norm();
        } else {
            digits[i] = r;
            rem = q;
        }
    }
    digits[3] = rem;

    (digits, neg)
}
