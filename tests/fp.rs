use bn254_pairing::bigint::Big;
use bn254_pairing::{Fp, Fp12, Fp2, Fp4};

#[test]
fn fp_add_sub_round_trips() {
    let a = Fp::from_big(Big::from_u32(123));
    let b = Fp::from_big(Big::from_u32(77));
    let sum = a.add(&b);
    assert!(sum.sub(&b).equals(&a));
}

#[test]
fn fp_inverse_is_multiplicative_inverse() {
    let a = Fp::from_big(Big::from_u32(42));
    let inv = a.inverse();
    assert!(a.mul(&inv).equals(&Fp::one()));
}

#[test]
fn fp_sqrt_of_a_square_squares_back() {
    let a = Fp::from_big(Big::from_u32(19));
    let sq = a.sqr();
    let root = sq.sqrt().expect("a square must have a root mod a prime");
    assert!(root.sqr().equals(&sq));
}

#[test]
fn fp_redc_from_big_round_trips() {
    let x = Big::from_u32(999_999);
    let a = Fp::from_big(x);
    assert_eq!(a.redc().cmp(&x), core::cmp::Ordering::Equal);
}

#[test]
fn fp2_mul_distributes_over_add() {
    let a = Fp2::new(Fp::from_big(Big::from_u32(3)), Fp::from_big(Big::from_u32(5)));
    let b = Fp2::new(Fp::from_big(Big::from_u32(7)), Fp::from_big(Big::from_u32(11)));
    let c = Fp2::new(Fp::from_big(Big::from_u32(13)), Fp::from_big(Big::from_u32(17)));

    let lhs = a.mul(&b.add(&c));
    let rhs = a.mul(&b).add(&a.mul(&c));
    assert!(lhs.equals(&rhs));
}

#[test]
fn fp2_inverse_is_multiplicative_inverse() {
    let a = Fp2::new(Fp::from_big(Big::from_u32(9)), Fp::from_big(Big::from_u32(4)));
    let inv = a.inverse();
    assert!(a.mul(&inv).equals(&Fp2::one()));
}

#[test]
fn fp2_mul_ip_is_linear() {
    let a = Fp2::new(Fp::from_big(Big::from_u32(2)), Fp::from_big(Big::from_u32(3)));
    let b = Fp2::new(Fp::from_big(Big::from_u32(5)), Fp::from_big(Big::from_u32(7)));
    assert!(a.add(&b).mul_ip().equals(&a.mul_ip().add(&b.mul_ip())));
}

#[test]
fn fp4_inverse_is_multiplicative_inverse() {
    let a = Fp4::new(
        Fp2::new(Fp::from_big(Big::from_u32(6)), Fp::from_big(Big::from_u32(2))),
        Fp2::new(Fp::from_big(Big::from_u32(1)), Fp::from_big(Big::from_u32(8))),
    );
    let inv = a.inverse();
    assert!(a.mul(&inv).equals(&Fp4::one()));
}

#[test]
fn fp12_mul_matches_sqr_on_repeated_multiplication() {
    let a = Fp12::new_dense(
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(2)), Fp::from_big(Big::from_u32(1))),
            Fp2::new(Fp::from_big(Big::from_u32(3)), Fp::from_big(Big::from_u32(4))),
        ),
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(5)), Fp::from_big(Big::from_u32(6))),
            Fp2::new(Fp::from_big(Big::from_u32(7)), Fp::from_big(Big::from_u32(8))),
        ),
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(9)), Fp::from_big(Big::from_u32(10))),
            Fp2::new(Fp::from_big(Big::from_u32(11)), Fp::from_big(Big::from_u32(12))),
        ),
    );
    assert!(a.mul(&a).equals(&a.sqr()));
}

#[test]
fn fp12_inverse_is_multiplicative_inverse() {
    let a = Fp12::new_dense(
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(2)), Fp::from_big(Big::from_u32(1))),
            Fp2::new(Fp::from_big(Big::from_u32(3)), Fp::from_big(Big::from_u32(4))),
        ),
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(5)), Fp::from_big(Big::from_u32(6))),
            Fp2::new(Fp::from_big(Big::from_u32(7)), Fp::from_big(Big::from_u32(8))),
        ),
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(9)), Fp::from_big(Big::from_u32(10))),
            Fp2::new(Fp::from_big(Big::from_u32(11)), Fp::from_big(Big::from_u32(12))),
        ),
    );
    let inv = a.inverse();
    assert!(a.mul(&inv).equals(&Fp12::one()));
}

#[test]
fn fp12_pow_matches_repeated_multiplication() {
    let a = Fp12::new_dense(
        Fp4::new(
            Fp2::new(Fp::from_big(Big::from_u32(2)), Fp::from_big(Big::from_u32(0))),
            Fp2::new(Fp::from_big(Big::from_u32(0)), Fp::from_big(Big::from_u32(0))),
        ),
        Fp4::ZERO,
        Fp4::ZERO,
    );
    let five = a.mul(&a).mul(&a).mul(&a).mul(&a);
    let pow5 = a.pow(&Big::from_u32(5));
    assert!(five.equals(&pow5));
}
