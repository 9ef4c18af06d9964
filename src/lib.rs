//! Route search over named, weighted, directed graphs.
//!
//! The graph owns vertices (optionally carrying geographic coordinates) and
//! directed, weighted edges. Three interchangeable search algorithms share
//! one engine and the [`PathSearch`] contract: [`Dijkstra`] (uniform-cost,
//! optimal), [`GreedyBestFirst`] (heuristic-only ordering), and [`AStar`]
//! (heuristic-guided, optimal under an admissible heuristic). Every search
//! reports the path plus effort metrics in an [`AlgorithmResult`].
//!
//! ```
//! use wayfinder::{Dijkstra, Edge, Graph, PathSearch, Vertex};
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(Vertex::new("A"));
//! graph.add_vertex(Vertex::new("B"));
//! graph.add_edge(Edge::new("A", "B", 2.0))?;
//!
//! let result = Dijkstra.find_path(&graph, "A", "B");
//! assert!(result.path_found);
//! assert_eq!(result.directions, "A -> B");
//! assert_eq!(result.total_distance, 2.0);
//! # Ok::<(), wayfinder::GraphError>(())
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod loader;
pub mod search;

pub use errors::{GraphError, LoadError};
pub use graph::{Edge, Graph, Vertex};
pub use search::{AStar, AlgorithmResult, Dijkstra, GreedyBestFirst, PathSearch};
