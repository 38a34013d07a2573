//! Welsh-Powell coloring: one independent color class per pass.

use super::{by_degree, Coloring, ColoringHeuristic};
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Color, Graph, VertexId};

/// Welsh-Powell coloring.
///
/// Vertices are sorted by descending degree. Each pass takes the first
/// remaining vertex, gives it a fresh color `k`, then walks the rest of the
/// list and gives `k` to every vertex with no neighbor already holding `k`.
/// Colored vertices leave the list; the next pass opens color `k + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WelshPowell;

impl WelshPowell {
    fn blocked<T, U>(graph: &Graph<T, U>, coloring: &Coloring, vertex: VertexId, color: Color) -> bool {
        graph
            .neighbors(vertex)
            .iter()
            .any(|&neighbor| neighbor != vertex && coloring.get(neighbor) == color)
    }
}

impl ColoringHeuristic for WelshPowell {
    fn name(&self) -> &'static str {
        "welsh-powell"
    }

    fn color_with<T, U>(&self, graph: &Graph<T, U>, config: &AlgorithmConfig) -> Result<Coloring> {
        let degrees = graph.degrees();
        let mut remaining = by_degree(graph, &degrees, true);
        let mut coloring = Coloring::new();
        let mut budget = config.budget();
        let mut color = Color::FIRST;

        while !remaining.is_empty() {
            budget.charge()?;

            let head = remaining.remove(0)?;
            coloring.assign(head, color);

            let mut slot = 0;
            while slot < remaining.len() {
                let candidate = remaining[slot];
                if Self::blocked(graph, &coloring, candidate, color) {
                    slot += 1;
                } else {
                    coloring.assign(candidate, color);
                    remaining.remove(slot)?;
                }
            }
            tracing::trace!(%color, colored = coloring.len(), "color class closed");
            color = color.next();
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
