use bn254_pairing::bigint::Big;
use bn254_pairing::curves::G1DecodeError;
use bn254_pairing::{Ecp, Ecp2};
use bn254_pairing::rom;

#[test]
fn g1_generator_add_matches_dbl() {
    let g = Ecp::generator();
    let sum = g.add(&g);
    let dbl = g.dbl();
    assert!(sum.to_affine().x.equals(&dbl.to_affine().x));
    assert!(sum.to_affine().y.equals(&dbl.to_affine().y));
}

#[test]
fn g1_generator_has_order_r() {
    let g = Ecp::generator();
    let p = g.mul(&rom::CURVE_ORDER);
    assert!(p.is_infinity());
}

#[test]
fn g1_mul_by_one_is_identity() {
    let g = Ecp::generator();
    let p = g.mul(&Big::ONE);
    assert!(p.to_affine().x.equals(&g.to_affine().x));
    assert!(p.to_affine().y.equals(&g.to_affine().y));
}

#[test]
fn g1_add_neg_is_infinity() {
    let g = Ecp::generator();
    let n = g.neg();
    assert!(g.add(&n).is_infinity());
}

#[test]
fn g1_bytes_round_trip() {
    let g = Ecp::generator();
    let bytes = g.to_bytes(false);
    let back = Ecp::from_bytes(&bytes);
    assert!(back.equals(&g));
}

#[test]
fn g1_compressed_tag_matches_y_parity_and_round_trips() {
    let g = Ecp::generator();
    let bytes = g.to_bytes(true);
    assert_eq!(bytes.len(), 33);
    let y_parity = g.to_affine().y.redc().parity();
    assert_eq!(bytes[0], if y_parity == 0 { 0x02 } else { 0x03 });

    let back = Ecp::from_bytes(&bytes);
    assert!(back.equals(&g));
}

#[test]
fn g1_decode_rejects_bad_tag() {
    let mut bytes = Ecp::generator().to_bytes(false);
    bytes[0] = 0x07;
    match Ecp::try_from_bytes(&bytes) {
        Err(G1DecodeError::BadTag(0x07)) => {}
        other => panic!("expected BadTag(0x07), got {other:?}"),
    }
}

#[test]
fn g1_decode_rejects_truncated_input() {
    let bytes = Ecp::generator().to_bytes(false);
    match Ecp::try_from_bytes(&bytes[..10]) {
        Err(G1DecodeError::Truncated) => {}
        other => panic!("expected Truncated, got {other:?}"),
    }
}

#[test]
fn g2_generator_add_matches_dbl() {
    let g = Ecp2::generator();
    let sum = g.add(&g);
    let dbl = g.dbl();
    assert!(sum.equals(&dbl));
}

#[test]
fn g2_generator_has_order_r() {
    let g = Ecp2::generator();
    let p = g.mul(&rom::CURVE_ORDER);
    assert!(p.is_infinity());
}

#[test]
fn g2_add_neg_is_infinity() {
    let g = Ecp2::generator();
    let n = g.neg();
    assert!(g.add(&n).is_infinity());
}

#[test]
fn g2_bytes_round_trip() {
    let g = Ecp2::generator();
    let bytes = g.to_bytes();
    let back = Ecp2::from_bytes(&bytes);
    assert!(back.equals(&g));
}

#[test]
fn g2_decode_rejects_out_of_range_coordinate() {
    let mut bytes = Ecp2::generator().to_bytes();
    // All-0xff is far above the field modulus.
    for b in bytes[0..32].iter_mut() {
        *b = 0xff;
    }
    match Ecp2::try_from_bytes(&bytes) {
        Err(bn254_pairing::curves::G2DecodeError::CoordinateOutOfRange) => {}
        other => panic!("expected CoordinateOutOfRange, got {other:?}"),
    }
}
