#![warn(missing_docs)]
//! `graphgen` is a library of graph topology generators.
//!
//! A generator populates a graph supplied by the caller with a given topology:
//! the empty graph, a path, the complete graph, or an Erdős–Rényi random graph.
//! The graph representation is not defined here. Any structure implementing
//! [`GraphTarget`] can be populated, and [`SimpleGraph`] is provided as a small
//! ordered reference implementation.
//!
//! Every generator validates its target and parameters before touching the
//! graph. A rejected call leaves the target unchanged, and an accepted call
//! always runs to completion.
//!
//! Random generators draw from an explicit [`UniformSource`]. Seeding the
//! source makes generation fully reproducible.
//!
//! # Example
//!
//! ```
//! use graphgen::classic;
//! use graphgen::random::{self, Arc4Source, ErdosRenyiConfig};
//! use graphgen::{DiGraph, GraphTarget, UnGraph};
//!
//! let complete: UnGraph = classic::complete(5).unwrap();
//! assert_eq!(complete.node_count(), 5);
//! assert_eq!(complete.edge_count(), 10);
//!
//! let config = ErdosRenyiConfig::new(5, 0.5);
//! let graph: DiGraph = random::erdos_renyi(config, Arc4Source::new("test")).unwrap();
//! assert_eq!(graph.edge_count(), 11);
//! ```
//!
//! # Features
//!
//! - `serde` enables serialization and deserialization of node indices,
//!   graph modes and generator configurations.
//! - `proptest` exposes strategies producing random generator inputs.
//! - `petgraph` implements [`GraphTarget`] for `petgraph`'s `GraphMap`.
//!
use std::num::NonZeroU32;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub mod classic;
pub mod generator;
pub mod graph;
pub mod pairs;
pub mod random;
pub mod target;

#[cfg(feature = "petgraph")]
pub mod petgraph;

#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(inline)]
pub use crate::generator::{Generator, GeneratorError, Parameter};
#[doc(inline)]
pub use crate::graph::{DiGraph, MixedGraph, SimpleGraph, UnGraph};
#[doc(inline)]
pub use crate::pairs::Pairs;
#[doc(inline)]
pub use crate::random::UniformSource;
#[doc(inline)]
pub use crate::target::{EdgeError, EdgeKind, GraphTarget, GraphType};

/// Index of a node within a generated graph.
///
/// Generators assign indices densely from zero, so a graph of order `n` holds
/// exactly the indices `0..n`. Restricted to be at most `2^31 - 2`. This type
/// admits the *null pointer optimization* so that `Option<NodeIndex>` takes as
/// much space as a `NodeIndex` by itself.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(NonZeroU32);

#[cfg(feature = "serde")]
impl Serialize for NodeIndex {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.index().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NodeIndex {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = usize::deserialize(deserializer)?;
        NodeIndex::try_from(index).map_err(de::Error::custom)
    }
}

impl NodeIndex {
    /// Maximum allowed index.
    pub const MAX: usize = (u32::MAX / 2) as usize - 1;

    /// Creates a new node index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index is greater than [`NodeIndex::MAX`].
    #[inline]
    pub fn new(index: usize) -> Self {
        index.try_into().unwrap()
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.into()
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(index: NodeIndex) -> Self {
        u32::from(index.0) as usize - 1
    }
}

impl TryFrom<usize> for NodeIndex {
    type Error = IndexError;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index > Self::MAX {
            Err(IndexError { index })
        } else {
            // SAFETY: The value cannot be zero
            Ok(Self(unsafe { NonZeroU32::new_unchecked(1 + index as u32) }))
        }
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // avoid unnecessary newlines in alternate mode
        write!(f, "NodeIndex({})", self.index())
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Error indicating a `NodeIndex` is too large.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the index {index} is too large.")]
pub struct IndexError {
    index: usize,
}
