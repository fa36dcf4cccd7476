//! Criterion microbenches for the scatter generator and quickhull.
//!
//! - generation: full scatter + hull + refinement pipeline.
//! - hull: quickhull alone on a fixed seeded scatter.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygen::geom2::rand::{draw_polygon_scatter, ReplayToken, ScatterCfg, VertexCount};
use polygen::geom2::{convex_hull, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_gen_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen2d");
    let cfg = ScatterCfg {
        vertex_count: VertexCount::Uniform { min: 16, max: 32 },
        ..ScatterCfg::default()
    };
    group.bench_function(BenchmarkId::new("draw_polygon_scatter", "16-32"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = draw_polygon_scatter(&cfg, tok);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Point> = (0..256)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..1000.0),
            )
        })
        .collect();
    c.bench_function("quickhull_256", |b| b.iter(|| convex_hull(&points).unwrap()));
}

criterion_group!(benches, bench_gen_2d, bench_hull);
criterion_main!(benches);
