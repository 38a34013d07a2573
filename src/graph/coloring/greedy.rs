//! First-fit greedy coloring over a fixed vertex order.

use super::{by_degree, first_free, neighbor_colors, Coloring, ColoringHeuristic};
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Color, Graph};

/// Order in which [`Greedy`] visits the vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexOrder {
    /// Lowest degree first; ties keep graph order.
    AscendingDegree,
    /// Highest degree first; ties keep graph order.
    DescendingDegree,
    /// Uniform shuffle drawn from [`AlgorithmConfig::rng`].
    Random,
}

/// Greedy coloring: each vertex takes the smallest color its colored
/// neighbors leave free, opening a new color only when `1..=max` is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greedy {
    order: VertexOrder,
}

impl Greedy {
    /// Greedy coloring over `order`.
    pub const fn new(order: VertexOrder) -> Self {
        Self { order }
    }

    /// The vertex order.
    pub const fn order(&self) -> VertexOrder {
        self.order
    }
}

impl ColoringHeuristic for Greedy {
    fn name(&self) -> &'static str {
        match self.order {
            VertexOrder::AscendingDegree => "greedy-ascending",
            VertexOrder::DescendingDegree => "greedy-descending",
            VertexOrder::Random => "greedy-random",
        }
    }

    fn color_with<T, U>(&self, graph: &Graph<T, U>, config: &AlgorithmConfig) -> Result<Coloring> {
        let degrees = graph.degrees();
        let order = match self.order {
            VertexOrder::AscendingDegree => by_degree(graph, &degrees, false),
            VertexOrder::DescendingDegree => by_degree(graph, &degrees, true),
            VertexOrder::Random => {
                let mut order = by_degree(graph, &degrees, false);
                order.disarray(&mut config.rng());
                order
            }
        };

        let mut coloring = Coloring::new();
        let mut budget = config.budget();
        let mut max = Color::UNCOLORED;

        for &vertex in &order {
            budget.charge()?;
            let used = neighbor_colors(graph, &coloring, vertex);
            let color = first_free(&used, max);
            coloring.assign(vertex, color);
            max = max.max(color);
        }

        tracing::debug!(
            heuristic = self.name(),
            vertices = graph.vertex_count(),
            colors = coloring.color_count(),
            "coloring complete"
        );
        Ok(coloring)
    }
}
