#![allow(clippy::unit_arg)] // Required for black_box uses

use criterion::{criterion_group, Criterion};
use graphgen::{classic, DiGraph, MixedGraph, UnGraph};

use crate::helpers::*;

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

struct PathGraph {
    order: usize,
}
impl SizedBenchmark for PathGraph {
    fn name() -> &'static str {
        "path_graph"
    }

    fn setup(size: usize) -> Self {
        Self { order: size }
    }

    fn run(&self) -> impl Sized {
        classic::path::<DiGraph>(self.order).unwrap()
    }
}

struct CompleteUndirected {
    order: usize,
}
impl SizedBenchmark for CompleteUndirected {
    fn name() -> &'static str {
        "complete_undirected_graph"
    }

    fn sizes() -> &'static [usize] {
        &[10, 100, 500]
    }

    fn setup(size: usize) -> Self {
        Self { order: size }
    }

    fn run(&self) -> impl Sized {
        classic::complete::<UnGraph>(self.order).unwrap()
    }
}

struct CompleteMixed {
    order: usize,
}
impl SizedBenchmark for CompleteMixed {
    fn name() -> &'static str {
        "complete_mixed_graph"
    }

    fn sizes() -> &'static [usize] {
        &[10, 100, 500]
    }

    fn setup(size: usize) -> Self {
        Self { order: size }
    }

    fn run(&self) -> impl Sized {
        classic::complete::<MixedGraph>(self.order).unwrap()
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        PathGraph::criterion,
        CompleteUndirected::criterion,
        CompleteMixed::criterion,
}
