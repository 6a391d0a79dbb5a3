use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_core::{planner::RoutePlanner, util::test_graphs::sample_network};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let planner = RoutePlanner::new(sample_network());

    c.bench_function("plan_on_sample_network", |b| {
        b.iter(|| planner.plan(black_box("Warehouse"), black_box("Harbour")))
    });
}
