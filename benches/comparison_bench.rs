use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::{Point, ValueGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use waypoint_pathfinding::{
    compare_default, default_configs, PathingGrid, SearchRequest, WaypointTrail,
};

const N: usize = 64;

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32))
}

fn random_scenarios(rng: &mut StdRng, fill: f64) -> (PathingGrid, Vec<SearchRequest>) {
    let mut pathing_grid = PathingGrid::new(N, N, false);
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            pathing_grid.set(x, y, rng.gen_bool(fill));
        }
    }
    let mut requests = Vec::new();
    for _ in 0..32 {
        let start = random_point(rng);
        let end = random_point(rng);
        // A straight-ish drag from start to end, sampled every cell.
        let mut trail = WaypointTrail::new();
        let steps = start.manhattan_distance(&end).max(1);
        for i in 0..=steps {
            trail.push(Point::new(
                start.x + (end.x - start.x) * i / steps,
                start.y + (end.y - start.y) * i / steps,
            ));
        }
        pathing_grid.set_point(start, false);
        pathing_grid.set_point(end, false);
        requests.push(SearchRequest::new(start, end).with_waypoints(trail.into_vec()));
    }
    pathing_grid.update();
    (pathing_grid, requests)
}

fn config_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for fill in [0.0, 0.2, 0.35] {
        let (pathing_grid, requests) = random_scenarios(&mut rng, fill);
        for config in default_configs() {
            c.bench_function(format!("{N}x{N} fill {fill}, {}", config.label).as_str(), |b| {
                b.iter(|| {
                    for request in &requests {
                        black_box(config.run(&pathing_grid, request).unwrap());
                    }
                })
            });
        }
    }
}

fn comparison_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (pathing_grid, requests) = random_scenarios(&mut rng, 0.2);
    c.bench_function(format!("{N}x{N} fill 0.2, all configurations").as_str(), |b| {
        b.iter(|| {
            for request in &requests {
                black_box(compare_default(&pathing_grid, request).unwrap());
            }
        })
    });
}

criterion_group!(benches, config_bench, comparison_bench);
criterion_main!(benches);
