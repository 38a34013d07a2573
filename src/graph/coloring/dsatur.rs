//! DSATUR coloring.

use super::{by_degree, first_free, neighbor_colors, Coloring, ColoringHeuristic};
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Color, Graph};

/// Saturation-degree coloring.
///
/// Starts from the highest-degree vertex with color `1`. Each later step picks
/// the uncolored vertex with the most distinct colors among its neighbors,
/// breaking ties by degree and then by the descending-degree order, and gives
/// it the smallest color none of its neighbors hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dsatur;

impl ColoringHeuristic for Dsatur {
    fn name(&self) -> &'static str {
        "dsatur"
    }

    fn color_with<T, U>(&self, graph: &Graph<T, U>, config: &AlgorithmConfig) -> Result<Coloring> {
        let degrees = graph.degrees();
        let mut remaining = by_degree(graph, &degrees, true);
        let mut coloring = Coloring::new();
        let mut budget = config.budget();

        if remaining.is_empty() {
            return Ok(coloring);
        }
        let first = remaining.remove(0)?;
        coloring.assign(first, Color::FIRST);
        let mut max = Color::FIRST;

        while !remaining.is_empty() {
            budget.charge()?;

            let mut best = 0;
            let mut best_key = (0, 0);
            for (slot, &vertex) in remaining.iter().enumerate() {
                let key = (neighbor_colors(graph, &coloring, vertex).len(), degrees[&vertex]);
                if slot == 0 || key > best_key {
                    best = slot;
                    best_key = key;
                }
            }

            let vertex = remaining.remove(best)?;
            let color = first_free(&neighbor_colors(graph, &coloring, vertex), max);
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
