//! [`GraphTarget`] implementation for petgraph's `GraphMap`.
//!
//! A `GraphMap` keyed by [`NodeIndex`] can be populated directly by any
//! generator. `DiGraphMap`s accept directed edges only, and `UnGraphMap`s
//! undirected edges only.
//!
//! # Example
//!
//! ```
//! # use graphgen::{classic, NodeIndex};
//! use petgraph::graphmap::UnGraphMap;
//!
//! let graph: UnGraphMap<NodeIndex, ()> = classic::complete(4).unwrap();
//! assert_eq!(graph.edge_count(), 6);
//! ```

use std::hash::BuildHasher;

use ::petgraph::graphmap::GraphMap;
use ::petgraph::EdgeType;

use crate::target::{EdgeError, EdgeKind, GraphTarget, GraphType};
use crate::NodeIndex;

impl<Ty, S> GraphTarget for GraphMap<NodeIndex, (), Ty, S>
where
    Ty: EdgeType,
    S: BuildHasher,
{
    fn graph_type(&self) -> GraphType {
        if Ty::is_directed() {
            GraphType::Directed
        } else {
            GraphType::Undirected
        }
    }

    fn node_count(&self) -> usize {
        GraphMap::node_count(self)
    }

    fn edge_count(&self) -> usize {
        GraphMap::edge_count(self)
    }

    fn add_node(&mut self, node: NodeIndex) {
        GraphMap::add_node(self, node);
    }

    fn add_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        check_edge(self, kind, a, b)?;
        if self.contains_edge(a, b) {
            return Err(EdgeError::AlreadyExists { kind, a, b });
        }
        GraphMap::add_edge(self, a, b, ());
        Ok(())
    }

    fn merge_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        check_edge(self, kind, a, b)?;
        GraphMap::add_edge(self, a, b, ());
        Ok(())
    }
}

/// `GraphMap::add_edge` silently inserts missing endpoints, so they are
/// checked beforehand.
fn check_edge<Ty: EdgeType, S: BuildHasher>(
    graph: &GraphMap<NodeIndex, (), Ty, S>,
    kind: EdgeKind,
    a: NodeIndex,
    b: NodeIndex,
) -> Result<(), EdgeError> {
    let graph_type = GraphTarget::graph_type(graph);
    if !graph_type.allows(kind) {
        return Err(EdgeError::UnsupportedKind { kind, graph_type });
    }
    match [a, b].into_iter().find(|&n| !graph.contains_node(n)) {
        Some(node) => Err(EdgeError::UnknownNode { node }),
        None => Ok(()),
    }
}
