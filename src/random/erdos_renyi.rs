//! Binomial random graphs sampled pair by pair.

use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{default_source, RngSource, UniformSource};
use crate::generator::{
    node_range, validate_positive_order, validate_probability, Generator, GeneratorError,
};
use crate::pairs::Pairs;
use crate::target::GraphTarget;
use crate::NodeIndex;

/// Parameters of an Erdős–Rényi graph.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ErdosRenyiConfig {
    /// Number of nodes. Must be positive.
    pub order: usize,
    /// Probability of creating each candidate edge, in `[0, 1]`.
    pub probability: f64,
}

impl ErdosRenyiConfig {
    /// Creates a new configuration.
    pub fn new(order: usize, probability: f64) -> Self {
        Self { order, probability }
    }

    /// Checks both parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidParameter`] if `order` is zero or too
    /// large, or if `probability` is not a number between 0 and 1.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        validate_positive_order(self.order)?;
        validate_probability(self.probability)
    }
}

/// Erdős–Rényi graph sampled by visiting every candidate edge.
///
/// For each pair `i < j`, in lexicographic order, the generator draws one
/// sample for the undirected edge `i -- j` when the target accepts undirected
/// edges, then one sample for `i -> j` and one for `j -> i` when it accepts
/// directed edges. An edge is created when its sample is below the
/// probability.
///
/// This always draws `Θ(order²)` samples. [`SparseErdosRenyi`] draws one
/// sample per created edge instead.
///
/// [`SparseErdosRenyi`]: super::SparseErdosRenyi
#[derive(Clone, Debug)]
pub struct ErdosRenyi<S = RngSource<StdRng>> {
    config: ErdosRenyiConfig,
    source: S,
}

impl ErdosRenyi {
    /// Creates a generator drawing from [`default_source`].
    pub fn new(config: ErdosRenyiConfig) -> Self {
        Self::with_source(config, default_source())
    }
}

impl<S: UniformSource> ErdosRenyi<S> {
    /// Creates a generator drawing from `source`.
    pub fn with_source(config: ErdosRenyiConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the generator's parameters.
    pub fn config(&self) -> &ErdosRenyiConfig {
        &self.config
    }

    /// Returns the source, in its current state.
    pub fn into_source(self) -> S {
        self.source
    }

    #[inline]
    fn trial(&mut self) -> bool {
        self.source.next_f64() < self.config.probability
    }
}

impl<S: UniformSource> Generator for ErdosRenyi<S> {
    const NAME: &'static str = "erdos_renyi";

    fn validate(&self) -> Result<(), GeneratorError> {
        self.config.validate()
    }

    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        let order = self.config.order;
        graph.add_nodes(node_range(order));

        if self.config.probability <= 0.0 || order < 2 {
            return Ok(());
        }

        let graph_type = graph.graph_type();
        for (i, j) in Pairs::combinations(order) {
            let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
            if graph_type.has_undirected() && self.trial() {
                graph.add_undirected_edge(a, b)?;
            }
            if graph_type.has_directed() {
                if self.trial() {
                    graph.add_directed_edge(a, b)?;
                }
                if self.trial() {
                    graph.add_directed_edge(b, a)?;
                }
            }
        }
        Ok(())
    }
}

/// Creates an Erdős–Rényi graph, visiting every candidate edge.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or if `G::default()` is
/// not empty.
pub fn erdos_renyi<G, S>(config: ErdosRenyiConfig, source: S) -> Result<G, GeneratorError>
where
    G: GraphTarget + Default,
    S: UniformSource,
{
    ErdosRenyi::with_source(config, source).generate()
}
