use criterion::{criterion_group, criterion_main, Criterion};

use traffic_core::scene::SceneParams;
use traffic_core::test_helpers::SceneHarness;

fn bench_tick_loop(c: &mut Criterion) {
    c.bench_function("run_2000_ticks", |b| {
        b.iter(|| {
            let mut harness = SceneHarness::new(
                SceneParams::default()
                    .with_seed(42)
                    .with_spawn_probability(0.5),
            );
            harness.run_events(1 + 2000);
            harness.stats()
        });
    });
}

criterion_group!(benches, bench_tick_loop);
criterion_main!(benches);
