//! Breadth-first and depth-first traversal.
//!
//! Both searches share one frontier loop over a [`Sequence`] of vertex ids:
//! - BFS takes the earliest-added vertex (FIFO);
//! - DFS takes the most recently added vertex (LIFO).
//!
//! A vertex is *finalized* when it leaves the frontier for the first time; it
//! then receives the next 1-based rank and the visit callback runs. Vertices
//! the search never reaches keep rank `0`.

use crate::collections::Sequence;
use crate::config::AlgorithmConfig;
use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId};

/// Frontier discipline of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// First in, first out.
    BreadthFirst,
    /// Last in, first out.
    DepthFirst,
}

/// Visitation ranks of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    ranks: Vec<(VertexId, usize)>,
    order: Vec<VertexId>,
}

impl Ranking {
    /// Rank of `vertex`: `Some(0)` if unreached, `None` if not in the graph.
    pub fn rank(&self, vertex: VertexId) -> Option<usize> {
        self.ranks
            .iter()
            .find_map(|&(id, rank)| (id == vertex).then_some(rank))
    }

    /// `true` if the traversal finalized `vertex`.
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.rank(vertex).is_some_and(|rank| rank > 0)
    }

    /// Finalized vertices, by rank.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Number of finalized vertices.
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// `(vertex, rank)` for every vertex of the graph, in graph order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.ranks.iter().copied()
    }
}

impl<T, U> Graph<T, U> {
    /// Breadth-first search from `start`, calling `visit(vertex, rank)` as each
    /// vertex is finalized.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `start` is not in the graph.
    pub fn breadth_first_search<F>(&self, start: VertexId, visit: F) -> Result<Ranking>
    where
        F: FnMut(&Vertex<T>, usize),
    {
        self.traverse(start, TraversalOrder::BreadthFirst, &AlgorithmConfig::default(), visit)
    }

    /// Depth-first search from `start`; see [`Graph::breadth_first_search`].
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `start` is not in the graph.
    pub fn depth_first_search<F>(&self, start: VertexId, visit: F) -> Result<Ranking>
    where
        F: FnMut(&Vertex<T>, usize),
    {
        self.traverse(start, TraversalOrder::DepthFirst, &AlgorithmConfig::default(), visit)
    }

    /// Traversal with an explicit frontier discipline and configuration.
    ///
    /// Every frontier pop charges one unit of the configured iteration budget.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) for an
    /// unknown `start`;
    /// [`GraphError::IterationLimitExceeded`](crate::GraphError::IterationLimitExceeded)
    /// when the budget runs out.
    pub fn traverse<F>(
        &self,
        start: VertexId,
        order: TraversalOrder,
        config: &AlgorithmConfig,
        mut visit: F,
    ) -> Result<Ranking>
    where
        F: FnMut(&Vertex<T>, usize),
    {
        self.require_vertex(start)?;

        let slots = self.slots();
        let mut ranks = vec![0usize; self.vertex_count()];
        let mut visited = Vec::new();
        let mut budget = config.budget();

        let mut frontier = Sequence::new();
        frontier.add(start);

        loop {
            let next = match order {
                TraversalOrder::BreadthFirst if !frontier.is_empty() => frontier.remove(0).ok(),
                TraversalOrder::BreadthFirst => None,
                TraversalOrder::DepthFirst => frontier.pop(),
            };
            let Some(current) = next else { break };
            budget.charge()?;

            let Some(&slot) = slots.get(&current) else {
                continue;
            };
            if ranks[slot] != 0 {
                continue;
            }
            visited.push(current);
            ranks[slot] = visited.len();
            visit(&self.vertices()[slot], visited.len());

            for successor in &self.successors(current) {
                if slots.get(successor).is_some_and(|&s| ranks[s] == 0) {
                    frontier.add(*successor);
                }
            }
        }

        tracing::debug!(?order, %start, reached = visited.len(), "traversal complete");

        Ok(Ranking {
            ranks: self.vertex_ids().zip(ranks).collect(),
            order: visited,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlgorithmConfig;
    use crate::error::GraphError;

    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3, 3 -> 4; 5 isolated.
    fn diamond() -> (Graph<()>, Vec<VertexId>) {
        let mut graph = Graph::oriented();
        let v: Vec<_> = (0..6).map(|_| graph.add_vertex(None)).collect();
        for (x, y) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_edge(v[x], v[y]).unwrap();
        }
        (graph, v)
    }

    #[test]
    fn bfs_visits_by_layer() {
        let (graph, v) = diamond();
        let mut seen = Vec::new();
        let ranking = graph
            .breadth_first_search(v[0], |vertex, rank| seen.push((vertex.id(), rank)))
            .unwrap();
        assert_eq!(ranking.order(), &[v[0], v[1], v[2], v[3], v[4]]);
        assert_eq!(seen[3], (v[3], 4));
        assert_eq!(ranking.rank(v[5]), Some(0));
        assert!(!ranking.is_reached(v[5]));
        assert_eq!(ranking.rank(VertexId::new(99)), None);
    }

    #[test]
    fn dfs_follows_latest_discovery() {
        let (graph, v) = diamond();
        let ranking = graph.depth_first_search(v[0], |_, _| {}).unwrap();
        // 2 was pushed after 1, so it is explored first.
        assert_eq!(ranking.order(), &[v[0], v[2], v[3], v[4], v[1]]);
        assert_eq!(ranking.reached_count(), 5);
    }

    #[test]
    fn cycles_finalize_each_vertex_once() {
        let mut graph: Graph<()> = Graph::undirected();
        let v: Vec<_> = (0..3).map(|_| graph.add_vertex(None)).collect();
        graph.add_edge(v[0], v[1]).unwrap();
        graph.add_edge(v[1], v[2]).unwrap();
        graph.add_edge(v[2], v[0]).unwrap();
        graph.add_edge(v[1], v[1]).unwrap();

        let mut calls = 0;
        let ranking = graph.breadth_first_search(v[1], |_, _| calls += 1).unwrap();
        assert_eq!(calls, 3);
        assert_eq!(ranking.iter().map(|(_, r)| r).sum::<usize>(), 6);
    }

    #[test]
    fn unknown_start_is_rejected() {
        let (graph, _) = diamond();
        let missing = VertexId::new(40);
        assert_eq!(
            graph.breadth_first_search(missing, |_, _| {}),
            Err(GraphError::VertexNotFound(missing))
        );
    }

    #[test]
    fn budget_caps_frontier_pops() {
        let (graph, v) = diamond();
        let config = AlgorithmConfig::new().with_iteration_limit(2);
        assert_eq!(
            graph.traverse(v[0], TraversalOrder::BreadthFirst, &config, |_, _| {}),
            Err(GraphError::IterationLimitExceeded { limit: 2 })
        );
    }
}
