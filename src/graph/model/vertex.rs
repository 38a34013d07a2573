//! Vertices and their identifiers.

use crate::collections::Nullable;
use core::fmt;

/// Identity of a vertex within one [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
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

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl Nullable for VertexId {}

/// A vertex: identity, display label, and optional payload.
///
/// Adjacency is not stored here; it is derived from the owning graph's edges.
/// Equality is structural and includes the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex<T> {
    id: VertexId,
    label: String,
    data: Option<T>,
}

impl<T> Vertex<T> {
    /// Creates a vertex labelled with its raw id.
    pub fn new(id: VertexId, data: Option<T>) -> Self {
        Self {
            id,
            label: id.index().to_string(),
            data,
        }
    }

    /// Creates a vertex with an explicit label.
    pub fn with_label(id: VertexId, label: impl Into<String>, data: Option<T>) -> Self {
        Self {
            id,
            label: label.into(),
            data,
        }
    }

    /// The vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The payload, if any.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to the payload.
    #[inline]
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }
}

impl<T> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl<T> Nullable for Vertex<T> {}
