//! The mutation surface that generators drive.
//!
//! Generators never construct graph data structures themselves. Instead they
//! populate any type implementing [`GraphTarget`], which only needs to add
//! nodes and edges and report its [`GraphType`].

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NodeIndex;

/// The kinds of edges a graph accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GraphType {
    /// Only directed edges.
    Directed,
    /// Only undirected edges.
    Undirected,
    /// Directed and undirected edges, kept as independent edge sets.
    #[default]
    Mixed,
}

impl GraphType {
    /// All graph types.
    pub const ALL: [GraphType; 3] = [
        GraphType::Directed,
        GraphType::Undirected,
        GraphType::Mixed,
    ];

    /// Returns whether the graph accepts edges of the given `kind`.
    #[inline]
    pub fn allows(self, kind: EdgeKind) -> bool {
        match kind {
            EdgeKind::Directed => self != GraphType::Undirected,
            EdgeKind::Undirected => self != GraphType::Directed,
        }
    }

    /// Returns whether the graph accepts directed edges.
    ///
    /// Shorthand for [`GraphType::allows`].
    #[inline]
    pub fn has_directed(self) -> bool {
        self.allows(EdgeKind::Directed)
    }

    /// Returns whether the graph accepts undirected edges.
    ///
    /// Shorthand for [`GraphType::allows`].
    #[inline]
    pub fn has_undirected(self) -> bool {
        self.allows(EdgeKind::Undirected)
    }

    /// The kind of edge added when a topology does not prescribe one.
    ///
    /// Mixed graphs default to directed edges.
    #[inline]
    pub fn default_edge_kind(self) -> EdgeKind {
        match self {
            GraphType::Undirected => EdgeKind::Undirected,
            GraphType::Directed | GraphType::Mixed => EdgeKind::Directed,
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Directed => f.write_str("directed"),
            GraphType::Undirected => f.write_str("undirected"),
            GraphType::Mixed => f.write_str("mixed"),
        }
    }
}

/// Kind of a single edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgeKind {
    /// An ordered edge `from -> to`.
    Directed,
    /// An unordered edge `a -- b`.
    Undirected,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => f.write_str("directed"),
            EdgeKind::Undirected => f.write_str("undirected"),
        }
    }
}

/// Error returned by a [`GraphTarget`] when an edge cannot be inserted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EdgeError {
    /// An endpoint of the edge is not in the graph.
    #[error("node {node} is not in the graph")]
    UnknownNode {
        /// The missing endpoint.
        node: NodeIndex,
    },
    /// The edge already exists.
    #[error("the {kind} edge between {a} and {b} already exists")]
    AlreadyExists {
        /// Kind of the duplicated edge.
        kind: EdgeKind,
        /// First endpoint, the source for directed edges.
        a: NodeIndex,
        /// Second endpoint, the target for directed edges.
        b: NodeIndex,
    },
    /// The graph does not accept edges of this kind.
    #[error("{kind} edges cannot be added to {graph_type} graphs")]
    UnsupportedKind {
        /// Kind of the rejected edge.
        kind: EdgeKind,
        /// Mode of the graph.
        graph_type: GraphType,
    },
}

/// Capabilities a graph must offer to be populated by a generator.
pub trait GraphTarget {
    /// Returns the kinds of edges the graph accepts.
    #[must_use]
    fn graph_type(&self) -> GraphType;

    /// Returns the number of nodes in the graph.
    #[must_use]
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting every edge kind.
    #[must_use]
    fn edge_count(&self) -> usize;

    /// Adds a node to the graph. Does nothing if the node already exists.
    fn add_node(&mut self, node: NodeIndex);

    /// Adds every node in `nodes`, in order.
    fn add_nodes(&mut self, nodes: impl IntoIterator<Item = NodeIndex>) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Adds an edge of the given `kind` between `a` and `b`.
    ///
    /// For directed edges `a` is the source and `b` the target.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is missing, if the graph does not
    /// accept edges of this kind, or if an equivalent edge already exists.
    fn add_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError>;

    /// Adds an edge of the given `kind` between `a` and `b`, doing nothing if
    /// an equivalent edge already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is missing or if the graph does not
    /// accept edges of this kind.
    fn merge_edge(&mut self, kind: EdgeKind, a: NodeIndex, b: NodeIndex)
        -> Result<(), EdgeError>;

    /// Adds the directed edge `from -> to`.
    ///
    /// Shorthand for [`GraphTarget::add_edge`].
    #[inline]
    fn add_directed_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<(), EdgeError> {
        self.add_edge(EdgeKind::Directed, from, to)
    }

    /// Adds the undirected edge `a -- b`.
    ///
    /// Shorthand for [`GraphTarget::add_edge`].
    #[inline]
    fn add_undirected_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        self.add_edge(EdgeKind::Undirected, a, b)
    }

    /// Merges the directed edge `from -> to`.
    ///
    /// Shorthand for [`GraphTarget::merge_edge`].
    #[inline]
    fn merge_directed_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<(), EdgeError> {
        self.merge_edge(EdgeKind::Directed, from, to)
    }

    /// Merges the undirected edge `a -- b`.
    ///
    /// Shorthand for [`GraphTarget::merge_edge`].
    #[inline]
    fn merge_undirected_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<(), EdgeError> {
        self.merge_edge(EdgeKind::Undirected, a, b)
    }

    /// Returns whether the graph has no nodes and no edges.
    #[must_use]
    #[inline]
    fn is_empty(&self) -> bool {
        self.node_count() == 0 && self.edge_count() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GraphType::Directed, true, false, EdgeKind::Directed)]
    #[case(GraphType::Undirected, false, true, EdgeKind::Undirected)]
    #[case(GraphType::Mixed, true, true, EdgeKind::Directed)]
    fn graph_type_capabilities(
        #[case] graph_type: GraphType,
        #[case] directed: bool,
        #[case] undirected: bool,
        #[case] default_kind: EdgeKind,
    ) {
        assert_eq!(graph_type.has_directed(), directed);
        assert_eq!(graph_type.has_undirected(), undirected);
        assert_eq!(graph_type.default_edge_kind(), default_kind);
        assert!(graph_type.allows(default_kind));
    }

    #[test]
    fn error_messages() {
        let err = EdgeError::UnsupportedKind {
            kind: EdgeKind::Directed,
            graph_type: GraphType::Undirected,
        };
        assert_eq!(
            err.to_string(),
            "directed edges cannot be added to undirected graphs"
        );

        let err = EdgeError::AlreadyExists {
            kind: EdgeKind::Undirected,
            a: NodeIndex::new(0),
            b: NodeIndex::new(3),
        };
        assert_eq!(
            err.to_string(),
            "the undirected edge between 0 and 3 already exists"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization() {
        assert_eq!(serde_json::to_string(&GraphType::Mixed).unwrap(), r#""mixed""#);
        assert_eq!(
            serde_json::from_str::<EdgeKind>(r#""undirected""#).unwrap(),
            EdgeKind::Undirected
        );
    }
}
