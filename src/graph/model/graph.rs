//! `Graph`: vertices and edges kept in two [`Sequence`]s.
//!
//! Adjacency is never cached: every neighborhood query scans the edge
//! sequence, so the edges are the single source of truth.
//!
//! Conventions for self-loops and parallel edges:
//! - `in_degree`/`out_degree` count edges with multiplicity; a self-loop counts
//!   once toward each.
//! - `degree` is `in_degree + out_degree` in an oriented graph, and the number
//!   of edge endpoints equal to the vertex in an undirected one (a self-loop
//!   counts twice in both cases).
//! - neighbor queries (`successors`, `predecessors`, `neighbors`) return
//!   distinct vertices in first-encountered edge order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add_vertex` | \(O(1)\) amortized |
//! | `add_edge` | \(O(n)\) endpoint lookup |
//! | `successors` / `predecessors` / degrees | \(O(m)\) |
//! | `remove_vertex` | \(O(n + m)\) |

use super::{Color, Edge, EdgeId, Vertex, VertexId};
use crate::collections::{Sequence, SequencePolicy};
use crate::error::{GraphError, Result};
use std::collections::HashMap;

/// A graph whose edges are either all oriented or all undirected.
#[derive(Debug, Clone)]
pub struct Graph<T, U = ()> {
    oriented: bool,
    vertices: Sequence<Vertex<T>>,
    edges: Sequence<Edge<U>>,
    next_vertex: usize,
    next_edge: usize,
}

impl<T, U> Graph<T, U> {
    /// Creates an empty graph.
    pub const fn new(oriented: bool) -> Self {
        Self {
            oriented,
            vertices: Sequence::with_policy(SequencePolicy::SET),
            edges: Sequence::with_policy(SequencePolicy::SET),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Creates an empty graph whose edges run tail to head.
    pub const fn oriented() -> Self {
        Self::new(true)
    }

    /// Creates an empty graph whose edges run both ways.
    pub const fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges have a direction.
    #[inline]
    pub fn is_oriented(&self) -> bool {
        self.oriented
    }

    /// The vertex container.
    #[inline]
    pub fn vertices(&self) -> &Sequence<Vertex<T>> {
        &self.vertices
    }

    /// The edge container.
    #[inline]
    pub fn edges(&self) -> &Sequence<Edge<U>> {
        &self.edges
    }

    /// Vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|vertex| vertex.id() == id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<U>> {
        self.edges.iter().find(|edge| edge.id() == id)
    }

    /// Returns `true` if `id` names a vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Returns `true` if `id` names an edge of this graph.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_some()
    }

    pub(crate) fn require_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }

    /// Maps every vertex id to its slot in [`Graph::vertices`].
    pub(crate) fn slots(&self) -> HashMap<VertexId, usize> {
        self.vertex_ids().enumerate().map(|(slot, id)| (id, slot)).collect()
    }

    /// Edges touching `vertex`, in edge order.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge<U>> + '_ {
        self.edges.iter().filter(move |edge| edge.touches(vertex))
    }

    /// Edges connecting `a` and `b` in either direction.
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> impl Iterator<Item = &Edge<U>> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.endpoints() == (a, b) || edge.endpoints() == (b, a))
    }

    fn collect_distinct<I>(ids: I) -> Sequence<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut seq = Sequence::with_policy(SequencePolicy::SET);
        seq.add_all(ids);
        seq
    }

    /// Heads of the edges whose tail is `vertex`.
    ///
    /// In an undirected graph this is every vertex sharing an edge with
    /// `vertex`, and equals [`Graph::predecessors`].
    pub fn successors(&self, vertex: VertexId) -> Sequence<VertexId> {
        if self.oriented {
            Self::collect_distinct(
                self.edges
                    .iter()
                    .filter(|edge| edge.x() == vertex)
                    .map(Edge::y),
            )
        } else {
            self.neighbors(vertex)
        }
    }

    /// Tails of the edges whose head is `vertex`.
    pub fn predecessors(&self, vertex: VertexId) -> Sequence<VertexId> {
        if self.oriented {
            Self::collect_distinct(
                self.edges
                    .iter()
                    .filter(|edge| edge.y() == vertex)
                    .map(Edge::x),
            )
        } else {
            self.neighbors(vertex)
        }
    }

    /// Every vertex sharing an edge with `vertex`, regardless of direction.
    ///
    /// Contains `vertex` itself when it carries a self-loop.
    pub fn neighbors(&self, vertex: VertexId) -> Sequence<VertexId> {
        Self::collect_distinct(
            self.edges
                .iter()
                .filter_map(|edge| edge.opposite(vertex)),
        )
    }

    /// Vertices without predecessors.
    pub fn sources(&self) -> Sequence<VertexId> {
        Self::collect_distinct(self.vertex_ids().filter(|&id| self.in_degree(id) == 0))
    }

    /// Vertices without successors.
    pub fn sinks(&self) -> Sequence<VertexId> {
        Self::collect_distinct(self.vertex_ids().filter(|&id| self.out_degree(id) == 0))
    }

    /// Number of edges entering `vertex`, with multiplicity.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        if self.oriented {
            self.edges.iter().filter(|edge| edge.y() == vertex).count()
        } else {
            self.incident_edges(vertex).count()
        }
    }

    /// Number of edges leaving `vertex`, with multiplicity.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        if self.oriented {
            self.edges.iter().filter(|edge| edge.x() == vertex).count()
        } else {
            self.incident_edges(vertex).count()
        }
    }

    /// Number of edge endpoints at `vertex`; a self-loop counts twice.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges
            .iter()
            .map(|edge| usize::from(edge.x() == vertex) + usize::from(edge.y() == vertex))
            .sum()
    }

    /// Degree of every vertex, computed in one pass over the edges.
    pub fn degrees(&self) -> HashMap<VertexId, usize> {
        let mut degrees: HashMap<VertexId, usize> = self.vertex_ids().map(|id| (id, 0)).collect();
        for edge in &self.edges {
            *degrees.entry(edge.x()).or_default() += 1;
            *degrees.entry(edge.y()).or_default() += 1;
        }
        degrees
    }

    /// Largest vertex degree, `0` for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.degrees().into_values().max().unwrap_or(0)
    }

    /// `true` if some edge joins `a` and `b` in either direction.
    ///
    /// A vertex with a self-loop is adjacent to itself.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.edges_between(a, b).next().is_some()
    }

    /// `true` if the two edges share an endpoint; an edge is adjacent to itself.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if either id is unknown.
    pub fn are_edges_adjacent(&self, a: EdgeId, b: EdgeId) -> Result<bool> {
        let first = self.edge(a).ok_or(GraphError::EdgeNotFound(a))?;
        let second = self.edge(b).ok_or(GraphError::EdgeNotFound(b))?;
        Ok(first.shares_endpoint(second))
    }
}

impl<T: PartialEq, U: PartialEq> Graph<T, U> {
    fn allocate_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex);
        self.next_vertex += 1;
        id
    }

    /// Adds a vertex labelled with its id.
    pub fn add_vertex(&mut self, data: impl Into<Option<T>>) -> VertexId {
        let id = self.allocate_vertex();
        self.vertices.add(Vertex::new(id, data.into()));
        id
    }

    /// Adds a vertex with an explicit label.
    pub fn add_labeled_vertex(&mut self, label: impl Into<String>, data: impl Into<Option<T>>) -> VertexId {
        let id = self.allocate_vertex();
        self.vertices.add(Vertex::with_label(id, label, data.into()));
        id
    }

    /// Adds a caller-built vertex. Returns `false` if its id is taken.
    pub fn insert_vertex(&mut self, vertex: Vertex<T>) -> bool {
        let id = vertex.id();
        if self.contains_vertex(id) {
            return false;
        }
        self.next_vertex = self.next_vertex.max(id.index().saturating_add(1));
        self.vertices.add(vertex)
    }

    /// Adds an edge without payload from `x` to `y`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId) -> Result<EdgeId> {
        self.push_edge(x, y, None)
    }

    /// Adds an edge carrying `data` from `x` to `y`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge_with(&mut self, x: VertexId, y: VertexId, data: U) -> Result<EdgeId> {
        self.push_edge(x, y, Some(data))
    }

    fn push_edge(&mut self, x: VertexId, y: VertexId, data: Option<U>) -> Result<EdgeId> {
        self.require_vertex(x)?;
        self.require_vertex(y)?;
        let id = EdgeId::new(self.next_edge);
        self.next_edge += 1;
        let edge = Edge::new(id, x, y);
        self.edges.add(match data {
            Some(data) => edge.with_data(data),
            None => edge,
        });
        Ok(id)
    }

    /// Adds a caller-built edge. Returns `Ok(false)` if its id is taken.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn insert_edge(&mut self, edge: Edge<U>) -> Result<bool> {
        self.require_vertex(edge.x())?;
        self.require_vertex(edge.y())?;
        if self.contains_edge(edge.id()) {
            return Ok(false);
        }
        self.next_edge = self.next_edge.max(edge.id().index().saturating_add(1));
        Ok(self.edges.add(edge))
    }

    /// Removes a vertex and every edge touching it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is unknown.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<T>> {
        let slot = self
            .vertices
            .iter()
            .position(|vertex| vertex.id() == id)
            .ok_or(GraphError::VertexNotFound(id))?;
        let removed_edges = self.edges.retain(|edge| !edge.touches(id));
        tracing::trace!(vertex = %id, removed_edges, "removed vertex");
        Ok(self.vertices.remove(slot)?)
    }

    /// Removes an edge.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if `id` is unknown.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge<U>> {
        let slot = self
            .edges
            .iter()
            .position(|edge| edge.id() == id)
            .ok_or(GraphError::EdgeNotFound(id))?;
        Ok(self.edges.remove(slot)?)
    }
}

impl<T: PartialEq, U: Clone + PartialEq> Graph<T, U> {
    /// Assigns or clears the color of an edge.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if `id` is unknown.
    pub fn set_edge_color(&mut self, id: EdgeId, color: Option<Color>) -> Result<()> {
        let slot = self
            .edges
            .iter()
            .position(|edge| edge.id() == id)
            .ok_or(GraphError::EdgeNotFound(id))?;
        let mut edge = self.edges.get(slot)?.clone();
        edge.set_color(color);
        self.edges.set(slot, edge)?;
        Ok(())
    }
}

impl<T, U> Default for Graph<T, U> {
    fn default() -> Self {
        Self::oriented()
    }
}
