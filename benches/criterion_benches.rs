//! Wall-time benchmarks using criterion.

#[allow(dead_code)]
mod benchmarks;
#[allow(dead_code)]
mod helpers;

use criterion::criterion_main;

criterion_main! {
    benchmarks::classic::criterion_group,
    benchmarks::erdos_renyi::criterion_group,
}
