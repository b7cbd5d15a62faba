//! Random graph generation.
//!
//! The generator picks sources in random order and, for each source, draws
//! distinct random targets until either the source is saturated or the
//! requested number of edges has been placed. Self-loops are never drawn, so
//! the graph is simple and at most `n * (n - 1)` edges can be requested.

use crate::domain::{Cost, VertexId};
use crate::error::{Error, Result};
use crate::store::GraphStore;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Default inclusive lower bound for generated costs.
pub const DEFAULT_MIN_COST: Cost = 0;

/// Default inclusive upper bound for generated costs.
pub const DEFAULT_MAX_COST: Cost = 999;

/// Parameters for [`random_graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Vertices `0..vertex_count` are created.
    pub vertex_count: VertexId,
    /// Exact number of edges to place.
    pub edge_count: usize,
    /// Inclusive lower bound on edge costs.
    pub min_cost: Cost,
    /// Inclusive upper bound on edge costs.
    pub max_cost: Cost,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Config for `vertex_count` vertices and `edge_count` edges with the
    /// default cost range and a random seed.
    #[must_use]
    pub fn new(vertex_count: VertexId, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count,
            min_cost: DEFAULT_MIN_COST,
            max_cost: DEFAULT_MAX_COST,
            seed: None,
        }
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different inclusive cost range.
    #[must_use]
    pub fn with_cost_range(mut self, min_cost: Cost, max_cost: Cost) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    /// Largest number of edges a simple directed graph on `vertex_count`
    /// vertices can hold.
    #[must_use]
    pub fn max_edges(&self) -> usize {
        let n = self.vertex_count as usize;
        n.saturating_mul(n.saturating_sub(1))
    }

    /// Check the parameters before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if more edges are requested than
    /// fit, or if the cost range is empty.
    pub fn validate(&self) -> Result<()> {
        if self.edge_count > self.max_edges() {
            return Err(Error::InvalidArgument(format!(
                "{} edges requested but a simple graph on {} vertices holds at most {}",
                self.edge_count,
                self.vertex_count,
                self.max_edges()
            )));
        }
        if self.min_cost > self.max_cost {
            return Err(Error::InvalidArgument(format!(
                "minimum cost {} exceeds maximum cost {}",
                self.min_cost, self.max_cost
            )));
        }
        Ok(())
    }
}

/// Build a random simple directed graph.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the config fails
/// [`GeneratorConfig::validate`].
///
/// # Examples
///
/// ```
/// use wgraph::generate::{random_graph, GeneratorConfig};
///
/// let g = random_graph(&GeneratorConfig::new(5, 12).with_seed(7)).unwrap();
/// assert_eq!(g.vertex_count(), 5);
/// assert_eq!(g.edge_count(), 12);
/// ```
pub fn random_graph(config: &GeneratorConfig) -> Result<GraphStore> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphStore::with_vertices(config.vertex_count);
    let mut remaining = config.edge_count;

    let mut sources: Vec<VertexId> = (0..config.vertex_count).collect();
    sources.shuffle(&mut rng);

    for source in sources {
        if remaining == 0 {
            break;
        }
        let mut targets: Vec<VertexId> = (0..config.vertex_count)
            .filter(|&t| t != source)
            .collect();
        targets.shuffle(&mut rng);

        for target in targets.into_iter().take(remaining) {
            let cost = rng.gen_range(config.min_cost..=config.max_cost);
            graph.add_edge(source, target, cost)?;
            remaining -= 1;
        }
    }

    tracing::debug!(
        seed,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Generated random graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn same_seed_same_graph() {
        let config = GeneratorConfig::new(8, 20).with_seed(42);
        let a: Vec<_> = random_graph(&config).unwrap().edges().collect();
        let b: Vec<_> = random_graph(&config).unwrap().edges().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn complete_graph_is_reachable() {
        let g = random_graph(&GeneratorConfig::new(4, 12).with_seed(1)).unwrap();
        assert_eq!(g.edge_count(), 12);
        for v in 0..4 {
            assert_eq!(g.out_degree(v), Ok(3));
            assert_eq!(g.in_degree(v), Ok(3));
        }
    }

    #[rstest]
    #[case::too_many_edges(GeneratorConfig::new(3, 7))]
    #[case::single_vertex_with_edge(GeneratorConfig::new(1, 1))]
    #[case::empty_cost_range(GeneratorConfig::new(3, 1).with_cost_range(5, 4))]
    fn invalid_configs_are_rejected(#[case] config: GeneratorConfig) {
        assert!(matches!(
            random_graph(&config),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_vertices_zero_edges() {
        let g = random_graph(&GeneratorConfig::new(0, 0)).unwrap();
        assert!(g.is_empty());
    }

    proptest! {
        #[test]
        fn generated_graph_meets_request(
            n in 0u32..12,
            fill in 0.0f64..=1.0,
            seed in any::<u64>(),
            min_cost in -100i64..100,
            span in 0i64..500,
        ) {
            let max_edges = (n as usize) * (n as usize).saturating_sub(1);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            let m = (max_edges as f64 * fill) as usize;
            let config = GeneratorConfig::new(n, m)
                .with_cost_range(min_cost, min_cost + span)
                .with_seed(seed);

            let g = random_graph(&config).unwrap();
            prop_assert_eq!(g.vertex_count(), n as usize);
            prop_assert_eq!(g.edge_count(), m);
            prop_assert!(g.edges().all(|e| e.source != e.target));
            prop_assert!(g.edges().all(|e| (min_cost..=min_cost + span).contains(&e.cost)));
            prop_assert_eq!(g.check_invariants(), Ok(()));
        }
    }
}
