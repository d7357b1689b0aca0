use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fermimer::{FermionAction, FermionOperator, MajoranaAction, MajoranaOperator, OperatorAlgebra};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_fermion_operator(terms: usize, actions_per_term: usize, modes: u32, seed: u64) -> FermionOperator {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..terms)
        .map(|_| {
            let actions = (0..actions_per_term)
                .map(|_| FermionAction { create: rng.gen(), mode: rng.gen_range(0..modes) })
                .collect();
            (actions, Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        })
        .collect()
}

fn random_majorana_operator(terms: usize, actions_per_term: usize, modes: u32, seed: u64) -> MajoranaOperator {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..terms)
        .map(|_| {
            let actions = (0..actions_per_term).map(|_| MajoranaAction(rng.gen_range(0..2 * modes))).collect();
            (actions, Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        })
        .collect()
}

fn normal_order_benchmark(criterion: &mut Criterion) {
    let fermion = random_fermion_operator(1000, 6, 16, 17);
    criterion.bench_function("fermion normal_ordered 1000x6", |bencher| {
        bencher.iter(|| black_box(&fermion).normal_ordered());
    });

    let majorana = random_majorana_operator(1000, 8, 16, 17);
    criterion.bench_function("majorana normal_ordered 1000x8", |bencher| {
        bencher.iter(|| black_box(&majorana).normal_ordered(true));
    });
}

fn simplify_benchmark(criterion: &mut Criterion) {
    let operator = random_fermion_operator(1000, 6, 4, 17).normal_ordered();
    criterion.bench_function("fermion simplify after ordering", |bencher| {
        bencher.iter(|| black_box(&operator).simplify(1e-8));
    });
}

fn compose_benchmark(criterion: &mut Criterion) {
    let left = random_fermion_operator(100, 4, 16, 17);
    let right = random_fermion_operator(100, 4, 16, 23);
    criterion.bench_function("fermion concatenation product 100x100", |bencher| {
        bencher.iter(|| black_box(&left).composed(black_box(&right)));
    });
}

criterion_group!(benches, normal_order_benchmark, simplify_benchmark, compose_benchmark);
criterion_main!(benches);
