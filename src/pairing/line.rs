//! The sparse `Fp12` produced by evaluating a tangent or chord line of the
//! Miller loop at a `G1` point.

use crate::curves::Ecp2;
use crate::fields::{Fp, Fp12, Fp2, Fp4};
use crate::rom;

fn scale(v: Fp2, s: Fp) -> Fp2 {
    Fp2::new(v.a.mul(&s), v.b.mul(&s))
}

fn twisted_b3() -> Fp2 {
    let b = Fp::from_big(crate::bigint::Big::from_u32(rom::CURVE_B_I as u32));
    let b_twist = Fp2::new(b, Fp::ZERO).div_ip();
    b_twist.add(&b_twist).add(&b_twist)
}

/// Doubling line: evaluates the tangent at `2*a` at `Q = (qx, qy)`,
/// advancing `a` to `2*a` in place (D-type twist).
pub fn line_double(a: &mut Ecp2, qx: Fp, qy: Fp) -> Fp12 {
    let (x, y, z) = (a.x, a.y, a.z);

    let yz = y.mul(&z);
    let l00 = scale(yz, qy).neg().add(&scale(yz, qy).neg());

    let z2 = z.sqr();
    let y2 = y.sqr();
    let l01 = twisted_b3().mul(&z2).sub(&y2);

    let x2 = x.sqr();
    let l10 = scale(x2.add(&x2).add(&x2), qx);

    *a = a.dbl();

    Fp12::new_sparser(Fp4::new(l00, l01), Fp4::new(l10, Fp2::ZERO))
}

/// Addition line: evaluates the chord through `a` and `b` at `Q = (qx,
/// qy)`, advancing `a` to `a + b` in place.
pub fn line_add(a: &mut Ecp2, b: &Ecp2, qx: Fp, qy: Fp) -> Fp12 {
    let (x1, y1, z1) = (a.x, a.y, a.z);
    let (x2, y2) = (b.x, b.y);

    let t = x1.sub(&z1.mul(&x2));
    let u = y1.sub(&z1.mul(&y2));

    let l00 = scale(t, qy);
    let l01 = u.mul(&x2).sub(&t.mul(&y2));
    let l10 = scale(u, qx).neg();

    *a = a.add(b);

    Fp12::new_sparser(Fp4::new(l00, l01), Fp4::new(l10, Fp2::ZERO))
}
