use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{BaseField, ScalarField, U256};

fn bench_base_field_mul(c: &mut Criterion) {
    c.bench_function("base_field_mul", |bencher| {
        let a = BaseField::from_u256(&U256::from_hex("79BE667EF9DCBBAC55A06295CE870B07").unwrap());
        let b = BaseField::from_u256(&U256::from_hex("483ADA7726A3C4655DA4FBFC0E1108A8").unwrap());
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_scalar_field_mul(c: &mut Criterion) {
    c.bench_function("scalar_field_mul", |bencher| {
        let a = ScalarField::from_u64(123456789);
        let b = ScalarField::from_u64(987654321);
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_scalar_field_inverse(c: &mut Criterion) {
    c.bench_function("scalar_field_inverse", |bencher| {
        let a = ScalarField::from_u64(987654321);
        bencher.iter(|| black_box(black_box(a).inverse()))
    });
}

criterion_group!(
    benches,
    bench_base_field_mul,
    bench_scalar_field_mul,
    bench_scalar_field_inverse
);
criterion_main!(benches);
