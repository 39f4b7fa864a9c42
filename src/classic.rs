//! Deterministic topologies: the empty graph, paths and complete graphs.
//!
//! # Example
//!
//! ```
//! # use graphgen::{classic, DiGraph, GraphTarget, MixedGraph};
//! let path: DiGraph = classic::path(4).unwrap();
//! assert_eq!(path.edge_count(), 3);
//!
//! // Mixed graphs hold a full set of edges of each kind.
//! let complete: MixedGraph = classic::complete(4).unwrap();
//! assert_eq!(complete.edge_count(), 6 + 12);
//! ```

use itertools::Itertools;

use crate::generator::{node_range, validate_order, Generator, GeneratorError};
use crate::pairs::Pairs;
use crate::target::{GraphTarget, GraphType};
use crate::NodeIndex;

/// A graph with `order` nodes and no edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Empty {
    /// Number of nodes.
    pub order: usize,
}

impl Empty {
    /// Creates an empty graph generator.
    pub fn new(order: usize) -> Self {
        Self { order }
    }
}

impl Generator for Empty {
    const NAME: &'static str = "empty";

    fn validate(&self) -> Result<(), GeneratorError> {
        validate_order(self.order)
    }

    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        graph.add_nodes(node_range(self.order));
        Ok(())
    }
}

/// A path `0 - 1 - … - (order - 1)`.
///
/// Each consecutive pair is joined by one edge of the target's
/// [default kind](crate::GraphType::default_edge_kind): undirected edges in
/// undirected graphs, and directed edges `i -> i + 1` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Path {
    /// Number of nodes.
    pub order: usize,
}

impl Path {
    /// Creates a path generator.
    pub fn new(order: usize) -> Self {
        Self { order }
    }
}

impl Generator for Path {
    const NAME: &'static str = "path";

    fn validate(&self) -> Result<(), GeneratorError> {
        validate_order(self.order)
    }

    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        let nodes = node_range(self.order);
        graph.add_nodes(nodes.clone());

        let kind = graph.graph_type().default_edge_kind();
        for (a, b) in nodes.tuple_windows() {
            graph.add_edge(kind, a, b)?;
        }
        Ok(())
    }
}

/// The complete graph on `order` nodes.
///
/// Undirected targets receive every edge `i -- j`, directed targets every
/// edge `i -> j` with `i != j`, and mixed targets both sets. Edges are merged,
/// so construction never fails on duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Complete {
    /// Number of nodes.
    pub order: usize,
}

impl Complete {
    /// Creates a complete graph generator.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Number of edges of the complete graph on `order` nodes in a target of
    /// the given type.
    pub fn size(order: usize, graph_type: GraphType) -> usize {
        let pairs = order * order.saturating_sub(1) / 2;
        let mut size = 0;
        if graph_type.has_undirected() {
            size += pairs;
        }
        if graph_type.has_directed() {
            size += 2 * pairs;
        }
        size
    }
}

impl Generator for Complete {
    const NAME: &'static str = "complete";

    fn validate(&self) -> Result<(), GeneratorError> {
        validate_order(self.order)
    }

    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        graph.add_nodes(node_range(self.order));
        if self.order < 2 {
            return Ok(());
        }

        let graph_type = graph.graph_type();
        for (i, j) in Pairs::combinations(self.order) {
            let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
            if graph_type.has_undirected() {
                graph.merge_undirected_edge(a, b)?;
            }
            if graph_type.has_directed() {
                graph.merge_directed_edge(a, b)?;
                graph.merge_directed_edge(b, a)?;
            }
        }
        Ok(())
    }
}

/// Creates a graph with `order` nodes and no edges.
///
/// # Errors
///
/// Returns an error if `order` exceeds the indexable range, or if
/// `G::default()` is not empty.
pub fn empty<G: GraphTarget + Default>(order: usize) -> Result<G, GeneratorError> {
    Empty::new(order).generate()
}

/// Creates a path graph with `order` nodes.
///
/// # Errors
///
/// See [`empty`].
pub fn path<G: GraphTarget + Default>(order: usize) -> Result<G, GeneratorError> {
    Path::new(order).generate()
}

/// Creates a complete graph with `order` nodes.
///
/// # Errors
///
/// See [`empty`].
pub fn complete<G: GraphTarget + Default>(order: usize) -> Result<G, GeneratorError> {
    Complete::new(order).generate()
}
