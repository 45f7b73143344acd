//! Benchmarks for triangulation and visibility polygons.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use planum::polygon::{
    compute_visibility, triangulate_region, PlanarRegion, Polygon, VisibilityMethod,
};
use planum::Point2;

/// Square room with a grid of small square pillars.
fn pillared_room(pillars: i64) -> PlanarRegion {
    let size = 10 * pillars + 10;
    let mut region = PlanarRegion::new(Polygon::from_coords(&[
        (0, 0),
        (size, 0),
        (size, size),
        (0, size),
    ]))
    .expect("room is simple");
    for i in 0..pillars {
        for j in 0..pillars {
            let (x, y) = (10 * i + 8, 10 * j + 8);
            region = region
                .with_hole(Polygon::from_coords(&[
                    (x, y),
                    (x + 3, y),
                    (x + 3, y + 3),
                    (x, y + 3),
                ]))
                .expect("pillars are disjoint");
        }
    }
    region
}

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_region");

    for pillars in [1, 2, 3, 4] {
        let region = pillared_room(pillars);
        let vertices: usize = region.rings().map(Polygon::len).sum();
        group.throughput(Throughput::Elements(vertices as u64));
        group.bench_with_input(BenchmarkId::new("pillars", pillars * pillars), &region, |b, r| {
            b.iter(|| triangulate_region(black_box(r)))
        });
    }
    group.finish();
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_methods");
    let region = pillared_room(3);
    let query = Point2::from_ints(5, 6);

    for method in VisibilityMethod::ALL {
        group.bench_with_input(BenchmarkId::new("pillars9", method.name()), &method, |b, &m| {
            b.iter(|| compute_visibility(black_box(m), black_box(&query), black_box(&region)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulation, bench_methods);
criterion_main!(benches);
