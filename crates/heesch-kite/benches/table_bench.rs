//! Benchmarks for kite neighbour tables
//!
//! Measures performance of:
//! - Deriving the edge and all-neighbour tables
//! - Absolute neighbour lookups across one periodic patch
//! - Rendering the C++ initializers

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use heesch_geom::Point;
use heesch_kite::render::render_cpp;
use heesch_kite::{all_neighbours, all_neighbours_of, edge_neighbours, edge_neighbours_of};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(1));
    group.bench_function("edge_neighbours", |b| b.iter(edge_neighbours));
    group.bench_function("all_neighbours", |b| b.iter(all_neighbours));
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let patch: Vec<Point> = (0..6)
        .flat_map(|p| (0..6).map(move |q| Point::new(q, p)))
        .collect();

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(patch.len() as u64));
    group.bench_function("edge_neighbours_of", |b| {
        b.iter(|| {
            patch
                .iter()
                .filter_map(|&pt| edge_neighbours_of(black_box(pt)))
                .count()
        })
    });
    group.bench_function("all_neighbours_of", |b| {
        b.iter(|| {
            patch
                .iter()
                .filter_map(|&pt| all_neighbours_of(black_box(pt)))
                .count()
        })
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let table = all_neighbours();
    c.bench_function("render_cpp_all", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(2048);
            render_cpp(&mut buf, "all_neighbours", black_box(&table)).map(|_| buf.len())
        })
    });
}

criterion_group!(benches, bench_generate, bench_lookup, bench_render);
criterion_main!(benches);
