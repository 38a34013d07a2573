//! Graph model and algorithms.
//!
//! The module is organized into:
//! - `model`: vertices, edges, colors and the [`Graph`] container itself
//! - `traversal`: breadth-first and depth-first search with visitation ranks
//! - `shortest_path`: Dijkstra's algorithm and path reconstruction
//! - `coloring`: greedy, Welsh-Powell and DSATUR vertex coloring

pub mod coloring;
pub mod model;
pub mod shortest_path;
pub mod traversal;

pub use coloring::{
    color, Coloring, ColoringHeuristic, Dsatur, Greedy, Heuristic, VertexOrder, WelshPowell,
};
pub use model::{Color, Edge, EdgeId, Graph, Vertex, VertexId};
pub use shortest_path::{Distance, ShortestPaths};
pub use traversal::{Ranking, TraversalOrder};
