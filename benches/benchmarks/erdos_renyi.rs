#![allow(clippy::unit_arg)] // Required for black_box uses

use criterion::{criterion_group, Criterion};
use graphgen::random::{self, ErdosRenyiConfig, RngSource};
use graphgen::DiGraph;

use crate::helpers::*;

/// Expected out-degree of the sampled graphs.
const MEAN_DEGREE: f64 = 10.0;

fn sparse_config(order: usize) -> ErdosRenyiConfig {
    ErdosRenyiConfig::new(order, (MEAN_DEGREE / order as f64).min(1.0))
}

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct NaiveErdosRenyi {
    config: ErdosRenyiConfig,
}
impl SizedBenchmark for NaiveErdosRenyi {
    fn name() -> &'static str {
        "erdos_renyi_naive"
    }

    fn sizes() -> &'static [usize] {
        &[100, 1_000, 3_000]
    }

    fn setup(size: usize) -> Self {
        Self {
            config: sparse_config(size),
        }
    }

    fn run(&self) -> impl Sized {
        random::erdos_renyi::<DiGraph, _>(self.config, RngSource::seeded(1)).unwrap()
    }
}

struct SparseErdosRenyi {
    config: ErdosRenyiConfig,
}
impl SizedBenchmark for SparseErdosRenyi {
    fn name() -> &'static str {
        "erdos_renyi_sparse"
    }

    fn sizes() -> &'static [usize] {
        &[100, 1_000, 3_000]
    }

    fn setup(size: usize) -> Self {
        Self {
            config: sparse_config(size),
        }
    }

    fn run(&self) -> impl Sized {
        random::erdos_renyi_sparse::<DiGraph, _>(self.config, RngSource::seeded(1)).unwrap()
    }
}

#[cfg(feature = "petgraph")]
struct SparseErdosRenyiGraphMap {
    config: ErdosRenyiConfig,
}
#[cfg(feature = "petgraph")]
impl SizedBenchmark for SparseErdosRenyiGraphMap {
    fn name() -> &'static str {
        "erdos_renyi_sparse_graphmap"
    }

    fn setup(size: usize) -> Self {
        Self {
            config: sparse_config(size),
        }
    }

    fn run(&self) -> impl Sized {
        random::erdos_renyi_sparse::<petgraph::graphmap::DiGraphMap<graphgen::NodeIndex, ()>, _>(
            self.config,
            RngSource::seeded(1),
        )
        .unwrap()
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

#[cfg(not(feature = "petgraph"))]
criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        NaiveErdosRenyi::criterion,
        SparseErdosRenyi::criterion,
}

#[cfg(feature = "petgraph")]
criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        NaiveErdosRenyi::criterion,
        SparseErdosRenyi::criterion,
        SparseErdosRenyiGraphMap::criterion,
}
