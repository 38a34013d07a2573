//! Single-source shortest paths (Dijkstra).
//!
//! The unvisited set is a [`Sequence`] of vertex ids scanned linearly for its
//! minimum; ties go to the vertex that comes first in graph order. Neighbors
//! are the successors of the selected vertex, which in an undirected graph
//! already include its predecessors.
//!
//! Weights come from a pluggable distance function over adjacent vertex pairs
//! and must be non-negative. [`Graph::dijkstra`] uses unit weights, so its
//! distances count edges.

use crate::collections::Sequence;
use crate::config::AlgorithmConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use num_traits::Zero;
use std::collections::HashMap;

/// Distance from the source: finite or unreachable.
///
/// Orders every finite distance before [`Distance::Infinite`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Distance<W> {
    /// Reachable at this cost.
    Finite(W),
    /// Not reachable.
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// The cost, if reachable.
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// `true` unless [`Distance::Infinite`].
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

/// Distances and predecessors computed from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: VertexId,
    distances: HashMap<VertexId, Distance<W>>,
    predecessors: HashMap<VertexId, VertexId>,
}

impl<W: Copy> ShortestPaths<W> {
    /// The source vertex.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance to `vertex`; `None` if it is not in the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<Distance<W>> {
        self.distances.get(&vertex).copied()
    }

    /// Previous vertex on a shortest path to `vertex`.
    ///
    /// `None` for the source, for unreachable vertices, and for unknown ids.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    /// The distance map.
    pub fn distances(&self) -> &HashMap<VertexId, Distance<W>> {
        &self.distances
    }

    /// The predecessor map; the source and unreachable vertices have no entry.
    pub fn predecessors(&self) -> &HashMap<VertexId, VertexId> {
        &self.predecessors
    }

    /// Vertices from the source to `destination`, both included.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `destination` was not part of the
    /// graph; [`GraphError::Unreachable`] if no path leads there.
    pub fn path_to(&self, destination: VertexId) -> Result<Sequence<VertexId>> {
        let distance = self
            .distance(destination)
            .ok_or(GraphError::VertexNotFound(destination))?;
        let unreachable = GraphError::Unreachable {
            start: self.source,
            destination,
        };
        if !distance.is_finite() {
            return Err(unreachable);
        }

        let mut path = Sequence::new();
        let mut current = destination;
        path.add(current);
        while current != self.source {
            current = self.predecessor(current).ok_or_else(|| unreachable.clone())?;
            path.add(current);
        }
        path.reverse();
        Ok(path)
    }
}

impl<T, U> Graph<T, U> {
    /// Shortest paths from `source` with unit edge weights.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn dijkstra(&self, source: VertexId) -> Result<ShortestPaths<u64>> {
        self.dijkstra_with(source, |_, _| 1u64, &AlgorithmConfig::default())
    }

    /// Shortest paths from `source` using `weight(u, v)` for every adjacent pair.
    ///
    /// One iteration of the budget is charged per selected vertex.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for an unknown `source`;
    /// [`GraphError::NegativeWeight`] if `weight` returns a value below zero;
    /// [`GraphError::IterationLimitExceeded`] when the budget runs out.
    pub fn dijkstra_with<W, F>(
        &self,
        source: VertexId,
        mut weight: F,
        config: &AlgorithmConfig,
    ) -> Result<ShortestPaths<W>>
    where
        W: Copy + PartialOrd + Zero,
        F: FnMut(VertexId, VertexId) -> W,
    {
        self.require_vertex(source)?;

        let mut distances: HashMap<VertexId, Distance<W>> = self
            .vertex_ids()
            .map(|id| (id, Distance::Infinite))
            .collect();
        distances.insert(source, Distance::Finite(W::zero()));
        let mut predecessors = HashMap::new();

        let mut unvisited: Sequence<VertexId> = self.vertex_ids().collect();
        let mut budget = config.budget();

        while !unvisited.is_empty() {
            budget.charge()?;

            let mut best = 0;
            for slot in 1..unvisited.len() {
                if distances[&unvisited[slot]] < distances[&unvisited[best]] {
                    best = slot;
                }
            }
            let u = unvisited.remove(best)?;
            let Distance::Finite(base) = distances[&u] else {
                continue;
            };

            for &v in &self.successors(u) {
                let w = weight(u, v);
                if w < W::zero() {
                    return Err(GraphError::NegativeWeight { from: u, to: v });
                }
                let candidate = Distance::Finite(base + w);
                if distances.get(&v).is_some_and(|current| candidate < *current) {
                    distances.insert(v, candidate);
                    predecessors.insert(v, u);
                }
            }
        }

        tracing::debug!(
            %source,
            vertices = self.vertex_count(),
            iterations = budget.spent(),
            "dijkstra complete"
        );

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }

    /// Vertices on a unit-weight shortest path from `source` to `destination`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing;
    /// [`GraphError::Unreachable`] if `destination` cannot be reached.
    pub fn path(&self, source: VertexId, destination: VertexId) -> Result<Sequence<VertexId>> {
        self.require_vertex(destination)?;
        self.dijkstra(source)?.path_to(destination)
    }
}
