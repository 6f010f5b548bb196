//! secp256k1 modular arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use jacobian_k256::{FIELD_MODULUS, Fraction, U256};

fn test_field_element_x() -> U256 {
    U256::from_be_hex("bb48eda3e2ef9e2d0b8c7a6e7db0b8c81bf1bc6f5f2a1d3a8d62e3b7c1d4b9a1")
}

fn test_field_element_y() -> U256 {
    U256::from_be_hex("8ab2e0a74d6a8f6f7f6a3d0e5c8a1e4b2d9f0c3b7a6e5d4c3b2a19080706f5e4")
}

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    let y = test_field_element_y();
    group.bench_function("mul", |b| b.iter(|| FIELD_MODULUS.mul(&x, &y)));
}

fn bench_field_element_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_field_element_x();
    group.bench_function("invert", |b| b.iter(|| FIELD_MODULUS.invert(&x)));
}

fn bench_fraction_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = Fraction::new(test_field_element_x(), test_field_element_y());
    let y = Fraction::new(test_field_element_y(), test_field_element_x());
    group.bench_function("fraction add", |b| b.iter(|| x.add(&y, &FIELD_MODULUS)));
}

fn bench_fraction_reduce<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = Fraction::new(test_field_element_x(), test_field_element_y());
    group.bench_function("fraction reduce", |b| b.iter(|| x.reduce(&FIELD_MODULUS)));
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_mul(&mut group);
    bench_field_element_invert(&mut group);
    bench_fraction_add(&mut group);
    bench_fraction_reduce(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
