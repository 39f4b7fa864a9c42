//! Strategies for property testing code built on top of the generators.

use proptest::prelude::*;
use proptest::sample::select;

use crate::graph::{GraphKind, SimpleGraph};
use crate::random::{self, ErdosRenyiConfig, RngSource};
use crate::{Generator, GraphType};

/// A random graph mode.
pub fn arb_graph_type() -> impl Strategy<Value = GraphType> {
    select(GraphType::ALL.to_vec())
}

prop_compose! {
    /// A valid Erdős–Rényi configuration.
    ///
    /// The order lies in `1..=max_order`, and the probability in `[0, 1]`.
    pub fn arb_erdos_renyi_config(max_order: usize)(
        order in 1..=max_order.max(1),
        probability in prop_oneof![
            1 => Just(0.0),
            1 => Just(1.0),
            8 => 0.0..=1.0f64,
        ],
    ) -> ErdosRenyiConfig {
        ErdosRenyiConfig::new(order, probability)
    }
}

/// A random graph sampled from a random Erdős–Rényi configuration.
///
/// The graph has between 1 and `max_order` nodes. Its edges come from the
/// sparse generator seeded by the strategy, so failing cases shrink and replay
/// deterministically.
pub fn gen_seeded_erdos_renyi<K: GraphKind>(
    max_order: usize,
) -> impl Strategy<Value = SimpleGraph<K>> {
    (arb_erdos_renyi_config(max_order), any::<u64>()).prop_map(|(config, seed)| {
        random::SparseErdosRenyi::with_source(config, RngSource::seeded(seed))
            .generate::<SimpleGraph<K>>()
            .unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::Complete;
    use crate::graph::Mixed;
    use crate::GraphTarget;

    proptest! {
        #[test]
        fn configs_are_valid(config in arb_erdos_renyi_config(50)) {
            prop_assert!(config.validate().is_ok());
            prop_assert!(config.order <= 50);
        }

        #[test]
        fn gen_basic_graphs(graph in gen_seeded_erdos_renyi::<Mixed>(30)) {
            prop_assert!(graph.node_count() >= 1);
            prop_assert!(graph.node_count() <= 30);
            let complete = Complete::size(graph.node_count(), GraphType::Mixed);
            prop_assert!(graph.edge_count() <= complete);
            prop_assert!(!graph.has_self_loops());
        }

        #[test]
        fn graph_types_are_known(graph_type in arb_graph_type()) {
            prop_assert!(GraphType::ALL.contains(&graph_type));
        }
    }
}
