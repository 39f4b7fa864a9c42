//! Binomial random graphs sampled by skipping over non-edges.
//!
//! Instead of one trial per candidate edge, each sample is turned into the
//! length of the run of failed trials before the next success, drawn from the
//! geometric distribution. A cursor walks the adjacency matrix row by row and
//! jumps straight to the next edge, so generation visits `O(order + size)`
//! positions.

use rand::rngs::StdRng;

use super::{default_source, ErdosRenyiConfig, RngSource, UniformSource};
use crate::generator::{node_range, Generator, GeneratorError};
use crate::target::GraphTarget;
use crate::NodeIndex;

/// Erdős–Rényi graph sampled with geometric skips.
///
/// The directed edges are sampled first, walking every off-diagonal cell of
/// the `order × order` matrix. The undirected edges follow, walking the cells
/// strictly below the diagonal. Each pass draws one sample per emitted edge
/// plus a final sample that moves the cursor past the last row.
///
/// The resulting distribution matches [`ErdosRenyi`], but the two do not
/// consume samples in the same order, so a given seed produces different
/// graphs.
///
/// [`ErdosRenyi`]: super::ErdosRenyi
#[derive(Clone, Debug)]
pub struct SparseErdosRenyi<S = RngSource<StdRng>> {
    config: ErdosRenyiConfig,
    source: S,
}

impl SparseErdosRenyi {
    /// Creates a generator drawing from [`default_source`].
    pub fn new(config: ErdosRenyiConfig) -> Self {
        Self::with_source(config, default_source())
    }
}

impl<S: UniformSource> SparseErdosRenyi<S> {
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

    /// Draws the number of cells to skip before the next edge.
    ///
    /// `log_q` is `ln(1 - probability)`. The result never exceeds `limit`.
    #[inline]
    fn skip(&mut self, log_q: f64, limit: usize) -> usize {
        let log_u = (-self.source.next_f64()).ln_1p();
        // `as` saturates on overflow and maps NaN to zero.
        ((log_u / log_q).floor() as usize).min(limit)
    }

    /// Emits the directed edges `row -> col` with `row != col`.
    fn directed_pass<G: GraphTarget>(
        &mut self,
        graph: &mut G,
        log_q: f64,
    ) -> Result<(), GeneratorError> {
        let order = self.config.order;
        let limit = order.saturating_mul(order);
        let (mut draws, mut edges) = (0usize, 0usize);

        let mut row = 0;
        let mut next: usize = 0;
        while row < order {
            draws += 1;
            let mut col = next.saturating_add(self.skip(log_q, limit));
            if col == row {
                col += 1;
            }
            while row < order && col >= order {
                col -= order;
                row += 1;
                if col == row {
                    col += 1;
                }
            }
            if row < order {
                graph.add_directed_edge(NodeIndex::new(row), NodeIndex::new(col))?;
                edges += 1;
                next = col + 1;
            }
        }

        tracing::trace!(pass = "directed", draws, edges);
        Ok(())
    }

    /// Emits the undirected edges `row -- col` with `col < row`.
    fn undirected_pass<G: GraphTarget>(
        &mut self,
        graph: &mut G,
        log_q: f64,
    ) -> Result<(), GeneratorError> {
        let order = self.config.order;
        let limit = order.saturating_mul(order);
        let (mut draws, mut edges) = (0usize, 0usize);

        let mut row = 1;
        let mut next: usize = 0;
        while row < order {
            draws += 1;
            let mut col = next.saturating_add(self.skip(log_q, limit));
            while row < order && col >= row {
                col -= row;
                row += 1;
            }
            if row < order {
                graph.add_undirected_edge(NodeIndex::new(row), NodeIndex::new(col))?;
                edges += 1;
                next = col + 1;
            }
        }

        tracing::trace!(pass = "undirected", draws, edges);
        Ok(())
    }
}

impl<S: UniformSource> Generator for SparseErdosRenyi<S> {
    const NAME: &'static str = "erdos_renyi_sparse";

    fn validate(&self) -> Result<(), GeneratorError> {
        self.config.validate()
    }

    fn build<G: GraphTarget>(&mut self, graph: &mut G) -> Result<(), GeneratorError> {
        graph.add_nodes(node_range(self.config.order));

        if self.config.probability <= 0.0 {
            return Ok(());
        }

        // `-inf` when the probability is 1, making every skip zero.
        let log_q = (-self.config.probability).ln_1p();
        let graph_type = graph.graph_type();
        if graph_type.has_directed() {
            self.directed_pass(graph, log_q)?;
        }
        if graph_type.has_undirected() {
            self.undirected_pass(graph, log_q)?;
        }
        Ok(())
    }
}

/// Creates an Erdős–Rényi graph, skipping over non-edges.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or if `G::default()` is
/// not empty.
pub fn erdos_renyi_sparse<G, S>(config: ErdosRenyiConfig, source: S) -> Result<G, GeneratorError>
where
    G: GraphTarget + Default,
    S: UniformSource,
{
    SparseErdosRenyi::with_source(config, source).generate()
}
