//! Graph entities: identifiers, colors, vertices, edges, and the graph itself.

mod color;
mod edge;
mod graph;
mod vertex;


pub use color::Color;
pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
