//! Random topologies.
//!
//! Random generators take their samples from an explicit [`UniformSource`]
//! rather than a global generator. Use [`RngSource`] to adapt any
//! [`rand::Rng`], [`Arc4Source`] for sequences reproducible from a string
//! seed, or [`default_source`] when reproducibility does not matter.
//!
//! Two Erdős–Rényi generators are provided. [`ErdosRenyi`] runs one trial per
//! candidate edge. [`SparseErdosRenyi`] draws the gaps between edges instead,
//! which is much faster for sparse graphs. Both produce the same distribution.
//!
//! # Example
//!
//! ```
//! use graphgen::random::{self, ErdosRenyiConfig, RngSource};
//! use graphgen::{GraphTarget, MixedGraph};
//!
//! let config = ErdosRenyiConfig::new(100, 0.02);
//! let a: MixedGraph = random::erdos_renyi_sparse(config, RngSource::seeded(1)).unwrap();
//! let b: MixedGraph = random::erdos_renyi_sparse(config, RngSource::seeded(1)).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.node_count(), 100);
//! ```

mod erdos_renyi;
mod seeded;
mod source;
mod sparse;

pub use erdos_renyi::{erdos_renyi, ErdosRenyi, ErdosRenyiConfig};
pub use seeded::Arc4Source;
pub use source::{default_source, RngSource, UniformSource};
pub use sparse::{erdos_renyi_sparse, SparseErdosRenyi};
