//! Vertex-coloring heuristics.
//!
//! Every heuristic reads the graph topology and returns a [`Coloring`]; the
//! graph itself is never modified. Colors are numbered from `1`. For every
//! edge `(u, v)` with `u != v` the result gives `u` and `v` different colors;
//! self-loops are exempt.
//!
//! Heuristics:
//! - [`Greedy`]: first-fit over a fixed vertex order (ascending degree,
//!   descending degree, or a uniform shuffle);
//! - [`WelshPowell`]: builds one color class per pass over the vertices sorted
//!   by descending degree;
//! - [`Dsatur`]: repeatedly colors the vertex with the most distinctly colored
//!   neighbors, breaking ties by degree.

mod dsatur;
mod greedy;
mod welsh_powell;

pub use dsatur::Dsatur;
pub use greedy::{Greedy, VertexOrder};
pub use welsh_powell::WelshPowell;

use crate::collections::{Sequence, SequencePolicy};
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Color, EdgeId, Graph, VertexId};
use std::collections::{BTreeMap, HashMap};

/// A vertex-coloring algorithm.
pub trait ColoringHeuristic {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Colors `graph` under `config`.
    ///
    /// # Errors
    /// [`GraphError::IterationLimitExceeded`](crate::GraphError::IterationLimitExceeded)
    /// when the configured budget runs out.
    fn color_with<T, U>(&self, graph: &Graph<T, U>, config: &AlgorithmConfig) -> Result<Coloring>;

    /// Colors `graph` with the default configuration.
    ///
    /// # Errors
    /// See [`ColoringHeuristic::color_with`].
    fn color<T, U>(&self, graph: &Graph<T, U>) -> Result<Coloring> {
        self.color_with(graph, &AlgorithmConfig::default())
    }
}

/// Runtime choice among the built-in heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// [`Greedy`] with the given vertex order.
    Greedy(VertexOrder),
    /// [`WelshPowell`].
    WelshPowell,
    /// [`Dsatur`].
    Dsatur,
}

impl Heuristic {
    /// Every built-in heuristic.
    pub const ALL: [Self; 5] = [
        Self::Greedy(VertexOrder::AscendingDegree),
        Self::Greedy(VertexOrder::DescendingDegree),
        Self::Greedy(VertexOrder::Random),
        Self::WelshPowell,
        Self::Dsatur,
    ];
}

impl ColoringHeuristic for Heuristic {
    fn name(&self) -> &'static str {
        match self {
            Self::Greedy(order) => Greedy::new(*order).name(),
            Self::WelshPowell => WelshPowell.name(),
            Self::Dsatur => Dsatur.name(),
        }
    }

    fn color_with<T, U>(&self, graph: &Graph<T, U>, config: &AlgorithmConfig) -> Result<Coloring> {
        match self {
            Self::Greedy(order) => Greedy::new(*order).color_with(graph, config),
            Self::WelshPowell => WelshPowell.color_with(graph, config),
            Self::Dsatur => Dsatur.color_with(graph, config),
        }
    }
}

/// Colors `graph` with `heuristic` under the default configuration.
///
/// # Errors
/// See [`ColoringHeuristic::color_with`].
pub fn color<T, U>(graph: &Graph<T, U>, heuristic: Heuristic) -> Result<Coloring> {
    heuristic.color(graph)
}

/// Assignment of colors to vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: BTreeMap<VertexId, Color>,
}

impl Coloring {
    /// An empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of `vertex`, [`Color::UNCOLORED`] if none was assigned.
    pub fn get(&self, vertex: VertexId) -> Color {
        self.colors.get(&vertex).copied().unwrap_or(Color::UNCOLORED)
    }

    /// Assigns `color` to `vertex`, returning the previous color.
    pub fn assign(&mut self, vertex: VertexId, color: Color) -> Color {
        self.colors.insert(vertex, color).unwrap_or(Color::UNCOLORED)
    }

    /// `true` if `vertex` holds a proper color.
    pub fn is_colored(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_colored()
    }

    /// Number of vertices with an entry.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex has an entry.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(vertex, color)` pairs in vertex-id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.colors.iter().map(|(&vertex, &color)| (vertex, color))
    }

    /// Number of distinct proper colors in use.
    pub fn color_count(&self) -> usize {
        self.classes().len()
    }

    /// Highest color number in use, [`Color::UNCOLORED`] if none.
    pub fn max_color(&self) -> Color {
        self.colors
            .values()
            .copied()
            .max()
            .unwrap_or(Color::UNCOLORED)
    }

    /// Vertices grouped by color; uncolored vertices are left out.
    pub fn classes(&self) -> BTreeMap<Color, Vec<VertexId>> {
        let mut classes: BTreeMap<Color, Vec<VertexId>> = BTreeMap::new();
        for (vertex, color) in self.iter().filter(|(_, color)| color.is_colored()) {
            classes.entry(color).or_default().push(vertex);
        }
        classes
    }

    /// Non-loop edges whose endpoints share a color or are left uncolored.
    pub fn conflicts<T, U>(&self, graph: &Graph<T, U>) -> Vec<EdgeId> {
        graph
            .edges()
            .iter()
            .filter(|edge| !edge.is_loop())
            .filter(|edge| {
                let (x, y) = (self.get(edge.x()), self.get(edge.y()));
                !x.is_colored() || !y.is_colored() || x == y
            })
            .map(|edge| edge.id())
            .collect()
    }

    /// `true` if every vertex is colored and no conflict exists.
    pub fn is_proper<T, U>(&self, graph: &Graph<T, U>) -> bool {
        graph.vertex_ids().all(|vertex| self.is_colored(vertex)) && self.conflicts(graph).is_empty()
    }

    /// Marks edges inside a color class with that class's color.
    ///
    /// Edges whose endpoints share a color receive it; every other edge is set
    /// to [`Color::UNCOLORED`]. Under a proper coloring only self-loops keep a
    /// color. Returns the number of edges that received a proper color.
    ///
    /// # Errors
    /// Propagates container failures from [`Graph::set_edge_color`].
    pub fn apply_to_edges<T, U>(&self, graph: &mut Graph<T, U>) -> Result<usize>
    where
        T: PartialEq,
        U: Clone + PartialEq,
    {
        let updates: Vec<(EdgeId, Color)> = graph
            .edges()
            .iter()
            .map(|edge| {
                let (x, y) = (self.get(edge.x()), self.get(edge.y()));
                let color = if x.is_colored() && x == y { x } else { Color::UNCOLORED };
                (edge.id(), color)
            })
            .collect();

        let mut colored = 0;
        for (edge, color) in updates {
            colored += usize::from(color.is_colored());
            graph.set_edge_color(edge, Some(color))?;
        }
        Ok(colored)
    }
}

/// Degree-ordered working list shared by the heuristics.
///
/// Uses a stable sort, so equal degrees keep graph order.
pub(crate) fn by_degree<T, U>(
    graph: &Graph<T, U>,
    degrees: &HashMap<VertexId, usize>,
    descending: bool,
) -> Sequence<VertexId> {
    let mut order: Sequence<VertexId> = graph.vertex_ids().collect();
    if descending {
        order.sort_by(|a, b| degrees[b].cmp(&degrees[a]));
    } else {
        order.sort_by_key(|v| degrees[v]);
    }
    order
}

/// Distinct colors held by the colored neighbors of `vertex`, excluding itself.
pub(crate) fn neighbor_colors<T, U>(
    graph: &Graph<T, U>,
    coloring: &Coloring,
    vertex: VertexId,
) -> Sequence<Color> {
    let mut used = Sequence::with_policy(SequencePolicy::SET);
    for &neighbor in &graph.neighbors(vertex) {
        if neighbor != vertex && coloring.is_colored(neighbor) {
            used.add(coloring.get(neighbor));
        }
    }
    used
}

/// Smallest color in `1..=max` missing from `used`, or `max + 1` if all are taken.
pub(crate) fn first_free(used: &Sequence<Color>, max: Color) -> Color {
    let mut candidate = Color::FIRST;
    while candidate <= max {
        if !used.contains(&candidate) {
            return candidate;
        }
        candidate = candidate.next();
    }
    if max < Color::FIRST {
        Color::FIRST
    } else {
        max.next()
    }
}

#[cfg(test)]
mod tests;
