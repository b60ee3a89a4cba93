use bn254_pairing::bigint::Big;
use bn254_pairing::{pairing, Ecp, Ecp2, Gt};
use bn254_pairing::pairing::{ate, ate2, fexp, g1_mul, g2_mul};

fn g1_gen_affine() -> bn254_pairing::G1Affine {
    Ecp::generator().to_affine()
}

fn g2_gen_affine() -> bn254_pairing::G2Affine {
    Ecp2::generator().to_affine()
}

#[test]
fn pairing_is_non_degenerate() {
    let e = pairing(&g2_gen_affine(), &g1_gen_affine());
    assert!(!e.equals(&Gt::one()));
}

#[test]
fn pairing_of_infinity_is_one() {
    let mut inf_g1 = g1_gen_affine();
    inf_g1.infinity = true;
    let e = pairing(&g2_gen_affine(), &inf_g1);
    assert!(e.equals(&Gt::one()));
}

#[test]
fn pairing_is_bilinear_and_matches_gt_pow() {
    let p = Ecp::generator();
    let q = Ecp2::generator();
    let k = Big::from_u32(7);

    let e1 = pairing(&q.to_affine(), &p.to_affine());
    let kp = g1_mul(&p, &k);
    let kq = g2_mul(&q, &k);

    let via_g1 = pairing(&q.to_affine(), &kp.to_affine());
    let via_g2 = pairing(&kq.to_affine(), &p.to_affine());
    let via_gt_pow = e1.pow(&bn254_pairing::Scalar::new(k));

    assert!(via_g1.equals(&via_g2));
    assert!(via_g1.equals(&via_gt_pow));
}

#[test]
fn pairing_is_bilinear_in_first_argument() {
    let p = Ecp::generator();
    let q = Ecp2::generator();
    let a = Big::from_u32(5);

    let ap = g1_mul(&p, &a);
    let lhs = pairing(&q.to_affine(), &ap.to_affine());

    let base = pairing(&q.to_affine(), &p.to_affine());
    let rhs = base.pow(&bn254_pairing::Scalar::new(a));

    assert!(lhs.equals(&rhs));
}

#[test]
fn pairing_is_bilinear_in_second_argument() {
    let p = Ecp::generator();
    let q = Ecp2::generator();
    let b = Big::from_u32(11);

    let bq = g2_mul(&q, &b);
    let lhs = pairing(&bq.to_affine(), &p.to_affine());

    let base = pairing(&q.to_affine(), &p.to_affine());
    let rhs = base.pow(&bn254_pairing::Scalar::new(b));

    assert!(lhs.equals(&rhs));
}

#[test]
fn ate2_of_a_pair_with_itself_is_the_single_pairing_squared() {
    let p = Ecp::generator();
    let q = Ecp2::generator();

    let doubled = fexp(&ate2(&q, &p, &q, &p));
    let single = pairing(&q.to_affine(), &p.to_affine());
    let squared = single.mul(&single);

    assert!(doubled.equals(&squared));
}

#[test]
fn ate2_matches_product_of_two_single_ates() {
    let p = Ecp::generator();
    let q = Ecp2::generator();
    let a = Big::from_u32(3);
    let b = Big::from_u32(4);

    let ap = g1_mul(&p, &a);
    let bq = g2_mul(&q, &b);

    let interleaved = fexp(&ate2(&q, &p, &bq, &ap));
    let separate = fexp(&ate(&q, &p).ssmul(&ate(&bq, &ap)));

    assert!(interleaved.equals(&separate));
}

#[test]
fn multi_pairing_matches_pairwise_product() {
    let p = Ecp::generator();
    let q = Ecp2::generator();
    let a = Big::from_u32(2);
    let ap = g1_mul(&p, &a);

    let g1s = [p.to_affine(), ap.to_affine()];
    let g2s = [q.to_affine(), q.to_affine()];

    let combined = bn254_pairing::multi_pairing(&g1s, &g2s);

    let e1 = pairing(&q.to_affine(), &p.to_affine());
    let e2 = pairing(&q.to_affine(), &ap.to_affine());
    let expected = e1.mul(&e2);

    assert!(combined.equals(&expected));
}
