use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dualcurve_algorithms::ec::{curves, CurveGroup};
use num_bigint::BigUint;

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");

    let p256 = curves::nist_p256();
    let k256 = BigUint::parse_bytes(
        b"c51e4753afdec1e6b6c6a5b992f43f8dd0c7a8933072708b6522468b2ffb06fd",
        16,
    )
    .unwrap();
    group.bench_function("p256_base_point", |b| {
        let g = p256.generator();
        b.iter(|| p256.scalar_mul(black_box(&g), black_box(&k256)).unwrap())
    });

    let k163 = curves::nist_k163();
    let k = BigUint::parse_bytes(b"09a4d6792295a7f730fc3f2b49cbc0f62e862272f", 16).unwrap();
    group.bench_function("k163_base_point", |b| {
        let g = k163.generator();
        b.iter(|| k163.scalar_mul(black_box(&g), black_box(&k)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
