//! The contract shared by every generator.
//!
//! A [`Generator`] validates its parameters and its target before adding a
//! single node. Once validation passes the construction always completes, so
//! callers never observe a partially populated graph.

use std::fmt;

use thiserror::Error;

use crate::target::{EdgeError, GraphTarget};
use crate::NodeIndex;

/// Parameters accepted by the generators in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// The number of nodes to generate.
    Order,
    /// The probability of creating each candidate edge.
    Probability,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Order => f.write_str("order"),
            Parameter::Probability => f.write_str("probability"),
        }
    }
}

/// Error returned when a generator refuses to run.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum GeneratorError {
    /// The target graph cannot receive the generated topology.
    #[error("invalid graph target: expected an empty graph, found {nodes} nodes and {edges} edges")]
    InvalidTarget {
        /// Number of nodes already in the target.
        nodes: usize,
        /// Number of edges already in the target.
        edges: usize,
    },
    /// A generation parameter is out of range.
    #[error("invalid `{parameter}`: {reason}")]
    InvalidParameter {
        /// The offending parameter.
        parameter: Parameter,
        /// Description of the accepted values.
        reason: &'static str,
    },
    /// The target rejected an edge.
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

impl GeneratorError {
    /// Returns the rejected parameter, if any.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            GeneratorError::InvalidParameter { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

/// A topology that can be written into any [`GraphTarget`].
pub trait Generator {
    /// Name of the generator, used in diagnostics.
    const NAME: &'static str;

    /// Checks the generator's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidParameter`] naming the first
    /// parameter out of range.
    fn validate(&self) -> Result<(), GeneratorError>;

    /// Writes the topology into `graph`.
    ///
    /// Called by [`Generator::populate`] on an empty target, after
    /// [`Generator::validate`] succeeded.
    ///
    /// # Errors
    ///
    /// Only propagates errors raised by the target itself.
    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError>;

    /// Validates the target and the parameters, then writes the topology
    /// into `graph`.
    ///
    /// The target must be empty. A rejected call leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidTarget`] if the target is not empty,
    /// and [`GeneratorError::InvalidParameter`] if a parameter is out of
    /// range.
    fn populate<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        let span = tracing::debug_span!(
            "populate",
            generator = Self::NAME,
            graph_type = %graph.graph_type()
        );
        let _entered = span.enter();

        if let Err(err) = validate_target(&*graph).and_then(|()| self.validate()) {
            tracing::debug!(error = %err, "rejected generator call");
            return Err(err);
        }
        self.build(graph)?;

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "populated graph"
        );
        Ok(())
    }

    /// Creates a new graph with [`Default`] and populates it.
    ///
    /// # Errors
    ///
    /// See [`Generator::populate`].
    fn generate<G: GraphTarget + Default>(&mut self) -> Result<G, GeneratorError> {
        let mut graph = G::default();
        self.populate(&mut graph)?;
        Ok(graph)
    }
}

/// Checks that `graph` has no nodes and no edges.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidTarget`] otherwise.
pub fn validate_target<G: GraphTarget + ?Sized>(graph: &G) -> Result<(), GeneratorError> {
    if graph.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::InvalidTarget {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        })
    }
}

/// Checks that `order` nodes can be indexed by [`NodeIndex`].
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidParameter`] for [`Parameter::Order`].
pub fn validate_order(order: usize) -> Result<(), GeneratorError> {
    if order > NodeIndex::MAX + 1 {
        return Err(GeneratorError::InvalidParameter {
            parameter: Parameter::Order,
            reason: "too many nodes to index",
        });
    }
    Ok(())
}

/// Checks that `order` is positive and can be indexed by [`NodeIndex`].
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidParameter`] for [`Parameter::Order`].
pub fn validate_positive_order(order: usize) -> Result<(), GeneratorError> {
    if order == 0 {
        return Err(GeneratorError::InvalidParameter {
            parameter: Parameter::Order,
            reason: "should be a positive number",
        });
    }
    validate_order(order)
}

/// Checks that `probability` is a number between 0 and 1.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidParameter`] for [`Parameter::Probability`].
pub fn validate_probability(probability: f64) -> Result<(), GeneratorError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneratorError::InvalidParameter {
            parameter: Parameter::Probability,
            reason: "should be a number between 0 and 1",
        });
    }
    Ok(())
}

/// The node indices `0..order`.
///
/// `order` must have passed [`validate_order`].
#[inline]
pub(crate) fn node_range(order: usize) -> impl Iterator<Item = NodeIndex> + Clone {
    (0..order).map(NodeIndex::new)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MixedGraph, UnGraph};
    use rstest::rstest;

    /// Adds a fixed number of isolated nodes, counting its builds.
    struct Isolated {
        order: usize,
        builds: usize,
    }

    impl Generator for Isolated {
        const NAME: &'static str = "isolated";

        fn validate(&self) -> Result<(), GeneratorError> {
            validate_positive_order(self.order)
        }

        fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
            self.builds += 1;
            graph.add_nodes(node_range(self.order));
            Ok(())
        }
    }

    #[test]
    fn generate_default_target() {
        let mut generator = Isolated { order: 3, builds: 0 };
        let graph: UnGraph = generator.generate().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(generator.builds, 1);
    }

    #[test]
    fn target_checked_before_parameters() {
        let mut graph = MixedGraph::new();
        graph.add_node(NodeIndex::new(0));

        let mut generator = Isolated { order: 0, builds: 0 };
        assert_eq!(
            generator.populate(&mut graph),
            Err(GeneratorError::InvalidTarget { nodes: 1, edges: 0 })
        );
        assert_eq!(generator.builds, 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn rejected_parameters_leave_target_untouched() {
        let mut graph = MixedGraph::new();
        let mut generator = Isolated { order: 0, builds: 0 };
        let err = generator.populate(&mut graph).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::Order));
        assert_eq!(generator.builds, 0);
        assert!(graph.is_empty());
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, true)]
    #[case(NodeIndex::MAX + 1, true)]
    #[case(NodeIndex::MAX + 2, false)]
    fn order_bounds(#[case] order: usize, #[case] valid: bool) {
        assert_eq!(validate_order(order).is_ok(), valid);
    }

    #[test]
    fn positive_order() {
        assert_eq!(
            validate_positive_order(0).unwrap_err().to_string(),
            "invalid `order`: should be a positive number"
        );
        assert!(validate_positive_order(1).is_ok());
        assert!(validate_positive_order(NodeIndex::MAX + 2).is_err());
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(-0.0, true)]
    #[case(0.5, true)]
    #[case(1.0, true)]
    #[case(-0.1, false)]
    #[case(1.000_001, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn probability_bounds(#[case] probability: f64, #[case] valid: bool) {
        let result = validate_probability(probability);
        assert_eq!(result.is_ok(), valid);
        if let Err(err) = result {
            assert_eq!(err.parameter(), Some(Parameter::Probability));
        }
    }
}
