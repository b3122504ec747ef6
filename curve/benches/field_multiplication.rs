use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bn254_curve::{BaseField, Fp2, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_base_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a = BaseField::random(&mut rng);
    let b = BaseField::random(&mut rng);
    c.bench_function("base_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let a = ScalarField::random(&mut rng);
    let b = ScalarField::random(&mut rng);
    c.bench_function("scalar_field_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_fp2_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Fp2::random(&mut rng);
    let b = Fp2::random(&mut rng);
    c.bench_function("fp2_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_base_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let a = BaseField::random_nonzero(&mut rng);
    c.bench_function("base_invert", |bencher| {
        bencher.iter(|| black_box(black_box(a).invert()))
    });
}

criterion_group!(
    benches,
    bench_base_mul,
    bench_scalar_mul,
    bench_fp2_mul,
    bench_base_invert
);
criterion_main!(benches);
