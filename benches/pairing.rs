use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bn254_pairing::bigint::Big;
use bn254_pairing::pairing::{ate, fexp, g1_mul, g2_mul};
use bn254_pairing::{pairing, Ecp, Ecp2};

fn bench_g1_mul(c: &mut Criterion) {
    let p = Ecp::generator();
    let e = Big::from_u32(123_456_789);
    c.bench_function("g1_mul", |b| b.iter(|| g1_mul(black_box(&p), black_box(&e))));
}

fn bench_g2_mul(c: &mut Criterion) {
    let p = Ecp2::generator();
    let e = Big::from_u32(123_456_789);
    c.bench_function("g2_mul", |b| b.iter(|| g2_mul(black_box(&p), black_box(&e))));
}

fn bench_miller_loop(c: &mut Criterion) {
    let p1 = Ecp::generator();
    let p2 = Ecp2::generator();
    c.bench_function("miller_loop", |b| b.iter(|| ate(black_box(&p2), black_box(&p1))));
}

fn bench_final_exponentiation(c: &mut Criterion) {
    let p1 = Ecp::generator();
    let p2 = Ecp2::generator();
    let m = ate(&p2, &p1);
    c.bench_function("final_exponentiation", |b| b.iter(|| fexp(black_box(&m))));
}

fn bench_pairing(c: &mut Criterion) {
    let p = Ecp::generator().to_affine();
    let q = Ecp2::generator().to_affine();
    c.bench_function("pairing", |b| b.iter(|| pairing(black_box(&q), black_box(&p))));
}

criterion_group!(
    benches,
    bench_g1_mul,
    bench_g2_mul,
    bench_miller_loop,
    bench_final_exponentiation,
    bench_pairing
);
criterion_main!(benches);
