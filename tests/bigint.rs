use bn254_pairing::bigint::Big;
use bn254_pairing::rom;

#[test]
fn zero_is_additive_identity() {
    let mut a = Big::from_u32(12345);
    a.add(&Big::ZERO);
    a.norm();
    assert_eq!(a.cmp(&Big::from_u32(12345)), core::cmp::Ordering::Equal);
}

#[test]
fn add_then_sub_round_trips() {
    let mut a = Big::from_u32(998_877);
    let b = Big::from_u32(123_456);
    a.add(&b);
    a.norm();
    a.sub(&b);
    a.norm();
    assert_eq!(a.cmp(&Big::from_u32(998_877)), core::cmp::Ordering::Equal);
}

#[test]
fn div_mod_satisfies_division_identity() {
    let a = rom::MODULUS;
    let m = Big::from_u32(1_000_003);
    let (q, r) = a.div_mod(&m);
    let mut check = q.mul(&m).split().0;
    check.add(&r);
    check.norm();
    assert_eq!(check.cmp(&a), core::cmp::Ordering::Equal);
    assert_eq!(r.cmp(&m), core::cmp::Ordering::Less);
}

#[test]
fn reduce_mod_leaves_value_in_range() {
    let mut a = rom::MODULUS;
    a.add(&rom::MODULUS);
    a.add(&Big::from_u32(17));
    a.norm();
    a.reduce_mod(&rom::MODULUS);
    assert_eq!(a.cmp(&Big::from_u32(17)), core::cmp::Ordering::Equal);
}

#[test]
fn bytes_round_trip() {
    let a = rom::CURVE_GY;
    let bytes = a.to_bytes();
    let back = Big::from_bytes(&bytes);
    assert_eq!(back.cmp(&a), core::cmp::Ordering::Equal);
}

#[test]
fn from_u64_matches_limb_construction() {
    let v: u64 = 4_965_661_367_192_848_881;
    let a = Big::from_u64(v);
    assert_eq!(a.bit_length(), 63);
}

#[test]
fn invmodp_is_a_real_inverse() {
    // `a` is small enough that `a * inv < R` (the `Big` capacity), so the
    // double-width product's high half is zero and the low half alone can
    // be reduced mod `p`.
    let p = rom::MODULUS;
    let a = Big::from_u32(7);
    let inv = a.invmodp(&p);
    let (lo, _hi) = a.mul(&inv).split();
    let mut r = lo;
    r.reduce_mod(&p);
    assert_eq!(r.cmp(&Big::ONE), core::cmp::Ordering::Equal);
}

#[test]
fn modulus_minus_one_bytes_round_trip() {
    let mut p_minus_1 = rom::MODULUS;
    p_minus_1.sub(&Big::ONE);
    p_minus_1.norm();
    let bytes = p_minus_1.to_bytes();
    let back = Big::from_bytes(&bytes);
    assert_eq!(back.cmp(&p_minus_1), core::cmp::Ordering::Equal);
    assert_eq!(&back.to_bytes()[..], &bytes[..]);
}

#[test]
fn curve_order_divides_nothing_smaller_trivially() {
    assert!(rom::CURVE_ORDER.bit_length() > 0);
    assert_ne!(rom::CURVE_ORDER.cmp(&Big::ZERO), core::cmp::Ordering::Equal);
}
