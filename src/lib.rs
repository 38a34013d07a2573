//! # `chromagraph` - Graph Modeling and Coloring Toolkit
//!
//! A small toolkit for building directed and undirected graphs, walking them,
//! computing shortest paths, and coloring their vertices with classic
//! heuristics. Every structure is built on one policy-checked list type,
//! [`Sequence`].
//!
//! ## Guarantees
//!
//! ### Container
//! - **Contiguous indexing**: a [`Sequence`] of length `n` is addressed by
//!   `0..n`; removal shifts the tail left.
//! - **Acceptance policies**: a sequence can refuse duplicates, null values, or
//!   both. Rejections are reported as `false`/`None`, never as errors.
//! - **Observable mutation**: listeners registered on a sequence see every add,
//!   read, replace, remove and swap in the order it happened.
//! - **Explicit sharing**: [`Sequence`] relies on `&mut self`;
//!   [`SyncSequence`] puts one lock around every operation.
//!
//! ### Graph
//! - **Endpoint integrity**: an edge can only be added between vertices that
//!   are already in the graph, and removing a vertex removes its edges.
//! - **Identity**: vertex and edge ids are assigned once and never reused.
//! - **Read-only algorithms**: traversal, shortest paths and coloring never
//!   modify the graph they run on.
//!
//! ## Architecture
//!
//! 1. **Collections** (`collections`): [`Sequence`], [`SequencePolicy`],
//!    listener events and the [`Nullable`] trait.
//! 2. **Model** (`graph::model`): [`Vertex`], [`Edge`], [`Color`] and
//!    [`Graph`].
//! 3. **Algorithms** (`graph::traversal`, `graph::shortest_path`,
//!    `graph::coloring`): BFS/DFS ranking, Dijkstra, greedy, Welsh-Powell and
//!    DSATUR coloring.
//! 4. **Configuration** (`config`): seeds and iteration limits shared by the
//!    algorithms.
//!
//! ## Example
//!
//! ```rust
//! use chromagraph::{color, Graph, Heuristic};
//!
//! let mut graph: Graph<&str> = Graph::undirected();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//! graph.add_edge(c, a).unwrap();
//!
//! let coloring = color(&graph, Heuristic::Dsatur).unwrap();
//! assert!(coloring.is_proper(&graph));
//! assert_eq!(coloring.color_count(), 3);
//!
//! let path = graph.path(a, c).unwrap();
//! assert_eq!(path.as_slice(), &[a, c]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use collections::{ListenerId, Nullable, Sequence, SequenceEvent, SequencePolicy, SyncSequence};
pub use config::{AlgorithmConfig, IterationBudget};
pub use error::{GraphError, Result, SequenceError};
pub use graph::{
    color, Color, Coloring, ColoringHeuristic, Distance, Dsatur, Edge, EdgeId, Graph, Greedy,
    Heuristic, Ranking, ShortestPaths, TraversalOrder, Vertex, VertexId, VertexOrder, WelshPowell,
};

// Compile-time assertions for identifier layout
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Color>() == mem::size_of::<i64>());
};
