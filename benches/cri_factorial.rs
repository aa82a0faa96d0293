use criterion::{criterion_group, criterion_main, Criterion};

use memo_factorial::factorial::{Calculator, Factorial, Memo};

fn criterion_benchmark(c: &mut Criterion) {
    // sanity check
    let mut memo = Memo::<u64>::default();
    let mut calculator = Calculator;
    for n in 0..=21 {
        assert_eq!(Factorial::<u64>::compute(&mut calculator, n), memo.compute(n));
    }

    c.bench_function("cri_factorial_calculator_20", |b| {
        let mut calculator = Calculator;
        b.iter(|| Factorial::<u64>::compute(&mut calculator, 20));
    });

    c.bench_function("cri_factorial_memo_20_warm", |b| {
        let mut memo = Memo::<u64>::default();
        b.iter(|| memo.compute(20));
    });

    c.bench_function("cri_factorial_memo_0..=20_cold", |b| {
        b.iter(|| {
            let mut memo = Memo::<u64>::default();
            for n in 0..=20 {
                memo.compute(n).unwrap();
            }
            memo
        });
    });

    c.bench_function("cri_factorial_calculator_0..=20", |b| {
        let mut calculator = Calculator;
        b.iter(|| {
            for n in 0..=20 {
                Factorial::<u64>::compute(&mut calculator, n).unwrap();
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
