use std::hint::black_box;

use bstack::BoundedStack;
use criterion;

fn bench_push_pop(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for cap in [16_usize, 1024, 64 * 1024] {
        group.throughput(criterion::Throughput::Elements(2 * cap as u64));
        group.bench_function(format!("round_trip_{}", cap), |b| {
            b.iter(|| {
                let mut stack = BoundedStack::new(cap);
                for i in 0..cap {
                    stack.push(black_box(i)).expect("push failed");
                }
                while let Ok(v) = stack.pop() {
                    black_box(v);
                }
            })
        });
    }

    group.bench_function("overflow_rejection", |b| {
        let mut stack = BoundedStack::new(8).fill_with(|i| i);
        b.iter(|| black_box(stack.push(black_box(0)).is_err()))
    });

    group.finish();
}

criterion::criterion_group!(benches, bench_push_pop);
criterion::criterion_main!(benches);
