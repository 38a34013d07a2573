//! Edges and their identifiers.

use super::{Color, VertexId};
use crate::collections::Nullable;
use core::fmt;

/// Identity of an edge, independent of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps a raw identifier.
    #[inline]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl Nullable for EdgeId {}

/// An edge between `x` and `y`.
///
/// In an oriented graph `x` is the tail and `y` the head. Two edges are
/// *equal* when every field matches including the id, and *equivalent*
/// (see [`Edge::is_equivalent`]) when everything but the id matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<U> {
    id: EdgeId,
    x: VertexId,
    y: VertexId,
    data: Option<U>,
    color: Option<Color>,
}

impl<U> Edge<U> {
    /// Creates an uncolored edge without payload.
    pub const fn new(id: EdgeId, x: VertexId, y: VertexId) -> Self {
        Self {
            id,
            x,
            y,
            data: None,
            color: None,
        }
    }

    /// Attaches a payload.
    #[must_use]
    pub fn with_data(mut self, data: U) -> Self {
        self.data = Some(data);
        self
    }

    /// Attaches a color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The edge id.
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint (tail).
    #[inline]
    pub fn x(&self) -> VertexId {
        self.x
    }

    /// Second endpoint (head).
    #[inline]
    pub fn y(&self) -> VertexId {
        self.y
    }

    /// `(x, y)`.
    #[inline]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.x, self.y)
    }

    /// The payload, if any.
    #[inline]
    pub fn data(&self) -> Option<&U> {
        self.data.as_ref()
    }

    /// The color, if one was assigned.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Assigns or clears the color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// `true` when both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.x == self.y
    }

    /// `true` when `vertex` is one of the endpoints.
    #[inline]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.x == vertex || self.y == vertex
    }

    /// The endpoint across from `vertex`, or `None` if the edge does not touch it.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.x == vertex {
            Some(self.y)
        } else if self.y == vertex {
            Some(self.x)
        } else {
            None
        }
    }

    /// `true` when the edges share at least one endpoint. An edge shares
    /// endpoints with itself.
    pub fn shares_endpoint(&self, other: &Self) -> bool {
        self.touches(other.x) || self.touches(other.y)
    }
}

impl<U: Clone> Edge<U> {
    /// The same edge with endpoints swapped; id, payload, and color are kept.
    #[must_use]
    pub fn symmetric(&self) -> Self {
        Self {
            id: self.id,
            x: self.y,
            y: self.x,
            data: self.data.clone(),
            color: self.color,
        }
    }
}

impl<U: PartialEq> Edge<U> {
    /// Endpoints, payload, and color match; the id is ignored.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.data == other.data && self.color == other.color
    }
}

impl<U> fmt::Display for Edge<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} -> {})", self.id, self.x, self.y)
    }
}

impl<U> Nullable for Edge<U> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: usize) -> VertexId {
        VertexId::new(raw)
    }

    #[test]
    fn symmetric_copy_keeps_identity() {
        let edge = Edge::new(EdgeId::new(3), v(1), v(2))
            .with_data("w")
            .with_color(Color::FIRST);
        let flipped = edge.symmetric();
        assert_eq!(flipped.endpoints(), (v(2), v(1)));
        assert_eq!(flipped.id(), edge.id());
        assert_eq!(flipped.data(), Some(&"w"));
        assert_eq!(flipped.color(), Some(Color::FIRST));
        assert_ne!(flipped, edge);
        assert_eq!(flipped.symmetric(), edge);
    }

    #[test]
    fn equivalence_ignores_id() {
        let a: Edge<u8> = Edge::new(EdgeId::new(0), v(1), v(2));
        let b = Edge::new(EdgeId::new(9), v(1), v(2));
        assert!(a.is_equivalent(&b));
        assert_ne!(a, b);
        assert!(!a.is_equivalent(&b.clone().with_color(Color::FIRST)));
    }

    #[test]
    fn endpoint_queries() {
        let edge: Edge<()> = Edge::new(EdgeId::new(0), v(1), v(2));
        let other: Edge<()> = Edge::new(EdgeId::new(1), v(2), v(5));
        let apart: Edge<()> = Edge::new(EdgeId::new(2), v(7), v(8));
        assert_eq!(edge.opposite(v(1)), Some(v(2)));
        assert_eq!(edge.opposite(v(4)), None);
        assert!(edge.shares_endpoint(&other));
        assert!(edge.shares_endpoint(&edge));
        assert!(!edge.shares_endpoint(&apart));
        assert!(Edge::<()>::new(EdgeId::new(3), v(4), v(4)).is_loop());
    }
}
