use bn254_pairing::bigint::Big;
use bn254_pairing::{Ecp, Ecp2, Fp, Fp12, Fp2, Fp4, Gt, Scalar};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_value_types_are_send_and_sync() {
    assert_send_sync::<Big>();
    assert_send_sync::<Fp>();
    assert_send_sync::<Fp2>();
    assert_send_sync::<Fp4>();
    assert_send_sync::<Fp12>();
    assert_send_sync::<Ecp>();
    assert_send_sync::<Ecp2>();
    assert_send_sync::<Gt>();
    assert_send_sync::<Scalar>();
}
