use std::hint::black_box;

use bstack::cases::{CaseGenerator, coverage};
use criterion;

fn bench_case_gen(c: &mut criterion::Criterion) {
    c.bench_function("suite_cap_4096", |b| {
        b.iter(|| black_box(CaseGenerator::new(black_box(4096)).suite()))
    });

    c.bench_function("coverage_cap2_6x6", |b| {
        b.iter(|| black_box(coverage(2, black_box(6), 6)))
    });
}

criterion::criterion_group!(benches, bench_case_gen);
criterion::criterion_main!(benches);
