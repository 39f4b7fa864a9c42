//! A small ordered graph implementing [`GraphTarget`].
//!
//! [`SimpleGraph`] stores nodes and edges in ordered sets, so iteration is
//! deterministic and independent of insertion order. Its mode is chosen at the
//! type level with one of the markers [`Directed`], [`Undirected`] or
//! [`Mixed`].
//!
//! # Example
//!
//! ```
//! # use graphgen::{GraphTarget, MixedGraph, NodeIndex};
//! let mut graph = MixedGraph::new();
//! let [a, b] = [NodeIndex::new(0), NodeIndex::new(1)];
//! graph.add_nodes([a, b]);
//! graph.add_directed_edge(a, b).unwrap();
//! graph.add_undirected_edge(a, b).unwrap();
//!
//! // Both kinds coexist on the same endpoints.
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.add_undirected_edge(b, a).is_err());
//! assert!(graph.merge_undirected_edge(b, a).is_ok());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use crate::target::{EdgeError, EdgeKind, GraphTarget, GraphType};
use crate::NodeIndex;

/// Type-level selection of a [`GraphType`].
pub trait GraphKind {
    /// The mode of graphs using this marker.
    const TYPE: GraphType;
}

/// Marker for graphs holding only directed edges.
#[derive(Clone, Copy, Debug)]
pub enum Directed {}

/// Marker for graphs holding only undirected edges.
#[derive(Clone, Copy, Debug)]
pub enum Undirected {}

/// Marker for graphs holding both directed and undirected edges.
#[derive(Clone, Copy, Debug)]
pub enum Mixed {}

impl GraphKind for Directed {
    const TYPE: GraphType = GraphType::Directed;
}

impl GraphKind for Undirected {
    const TYPE: GraphType = GraphType::Undirected;
}

impl GraphKind for Mixed {
    const TYPE: GraphType = GraphType::Mixed;
}

/// A [`SimpleGraph`] with directed edges only.
pub type DiGraph = SimpleGraph<Directed>;
/// A [`SimpleGraph`] with undirected edges only.
pub type UnGraph = SimpleGraph<Undirected>;
/// A [`SimpleGraph`] with both edge kinds.
pub type MixedGraph = SimpleGraph<Mixed>;

/// An ordered graph without weights.
///
/// Undirected edges are stored with their smaller endpoint first.
#[derive(Clone)]
pub struct SimpleGraph<K = Mixed> {
    nodes: BTreeSet<NodeIndex>,
    directed: BTreeSet<(NodeIndex, NodeIndex)>,
    undirected: BTreeSet<(NodeIndex, NodeIndex)>,
    kind: PhantomData<K>,
}

impl<K: GraphKind> SimpleGraph<K> {
    /// Create a new empty [`SimpleGraph`].
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            directed: BTreeSet::new(),
            undirected: BTreeSet::new(),
            kind: PhantomData,
        }
    }

    /// Iterates over the nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterates over the directed edges as `(from, to)` pairs.
    pub fn directed_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.directed.iter().copied()
    }

    /// Iterates over the undirected edges as `(a, b)` pairs with `a < b`.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.undirected.iter().copied()
    }

    /// Returns whether the graph contains the `node`.
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns whether the graph contains an edge of the given `kind` between
    /// `a` and `b`.
    pub fn contains_edge(&self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> bool {
        match kind {
            EdgeKind::Directed => self.directed.contains(&(a, b)),
            EdgeKind::Undirected => self.undirected.contains(&Self::undirected_key(a, b)),
        }
    }

    /// Returns whether any edge connects a node to itself.
    pub fn has_self_loops(&self) -> bool {
        self.directed_edges()
            .chain(self.undirected_edges())
            .any(|(a, b)| a == b)
    }

    #[inline]
    fn undirected_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Checks endpoints and kind, and returns the set the edge belongs to
    /// together with its key.
    fn edge_slot(
        &mut self,
        kind: EdgeKind,
        a: NodeIndex,
        b: NodeIndex,
    ) -> Result<(&mut BTreeSet<(NodeIndex, NodeIndex)>, (NodeIndex, NodeIndex)), EdgeError> {
        if !K::TYPE.allows(kind) {
            return Err(EdgeError::UnsupportedKind {
                kind,
                graph_type: K::TYPE,
            });
        }
        if let Some(&node) = [a, b].iter().find(|&&n| !self.nodes.contains(&n)) {
            return Err(EdgeError::UnknownNode { node });
        }
        Ok(match kind {
            EdgeKind::Directed => (&mut self.directed, (a, b)),
            EdgeKind::Undirected => (&mut self.undirected, Self::undirected_key(a, b)),
        })
    }
}

impl<K: GraphKind> Default for SimpleGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PartialEq for SimpleGraph<K> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.directed == other.directed
            && self.undirected == other.undirected
    }
}

impl<K> Eq for SimpleGraph<K> {}

impl<K: GraphKind> fmt::Debug for SimpleGraph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SimpleGraph");
        debug.field("type", &K::TYPE).field("nodes", &self.nodes.len());
        if K::TYPE.has_directed() {
            debug.field("directed", &self.directed);
        }
        if K::TYPE.has_undirected() {
            debug.field("undirected", &self.undirected);
        }
        debug.finish()
    }
}

impl<K: GraphKind> GraphTarget for SimpleGraph<K> {
    #[inline]
    fn graph_type(&self) -> GraphType {
        K::TYPE
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.directed.len() + self.undirected.len()
    }

    #[inline]
    fn add_node(&mut self, node: NodeIndex) {
        self.nodes.insert(node);
    }

    fn add_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        let (edges, key) = self.edge_slot(kind, a, b)?;
        if !edges.insert(key) {
            return Err(EdgeError::AlreadyExists { kind, a, b });
        }
        Ok(())
    }

    fn merge_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        let (edges, key) = self.edge_slot(kind, a, b)?;
        edges.insert(key);
        Ok(())
    }
}
