//! Allocation and ledger benchmarks using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fare_core::allocation::{allocate_leg, CandidateLeg};
use fare_core::ledger::project;
use fare_core::model::{Location, Passenger};
use fare_core::overlap::segment_overlap;
use fare_core::test_helpers::{test_passenger, test_route, test_vehicle};

fn roster(size: usize) -> Vec<Passenger> {
    (0..size)
        .map(|i| {
            let offset = i as f64 * 0.1;
            test_passenger(
                &format!("p{i}"),
                Location::new(format!("pickup {i}"), offset, offset),
                Location::new(format!("drop {i}"), offset + 0.3, offset + 0.4),
                15.0 + i as f64,
                90.0,
            )
        })
        .collect()
}

fn bench_allocation(c: &mut Criterion) {
    let route = test_route();
    let vehicle = test_vehicle();
    let leg = CandidateLeg {
        pickup: Location::new("Harbour", 0.2, 0.25),
        drop: Location::new("Old Town", 0.7, 0.9),
        distance_km: 42.0,
    };

    let mut group = c.benchmark_group("allocate_leg");
    for size in [0, 1, 2] {
        let existing = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &existing, |b, existing| {
            b.iter(|| black_box(allocate_leg(&leg, &route, &vehicle, existing)));
        });
    }
    group.finish();
}

fn bench_ledger(c: &mut Criterion) {
    let route = test_route();
    let vehicle = test_vehicle();
    let existing = roster(3);

    c.bench_function("ledger_project_full_roster", |b| {
        b.iter(|| black_box(project(&route, &vehicle, &existing)));
    });
}

fn bench_overlap(c: &mut Criterion) {
    let a = Location::new("a", 12.90, 77.50).coordinate();
    let b = Location::new("b", 13.05, 77.70).coordinate();
    let x = Location::new("x", 12.95, 77.55).coordinate();
    let y = Location::new("y", 13.10, 77.80).coordinate();

    c.bench_function("segment_overlap", |bench| {
        bench.iter(|| black_box(segment_overlap(a, b, x, y)));
    });
}

criterion_group!(benches, bench_allocation, bench_ledger, bench_overlap);
criterion_main!(benches);
