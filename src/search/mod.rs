pub mod a_star;
pub mod dijkstra;
pub mod greedy_best_first;
mod engine;

use std::time::Duration;

use crate::graph::Graph;

pub use a_star::AStar;
pub use dijkstra::Dijkstra;
pub use greedy_best_first::GreedyBestFirst;


/// Common contract for the search algorithm variants.
/// Each call is a single, self-contained, synchronous computation; all
/// frontier and cost-tracking state is scoped to the call, so independent
/// searches may run against the same graph as long as it is not mutated.
pub trait PathSearch {
    /// Human-readable algorithm name for the presentation layer
    fn name(&self) -> &'static str;

    /// Search for a route between two named vertices.
    /// A missing start or goal, or an unreachable goal, is a normal
    /// outcome reported through the result, never a panic or error.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> AlgorithmResult;
}


/// Outcome and effort metrics of a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    /// Path joined with `" -> "` on success, or the failure message
    pub directions: String,
    /// Ordered vertex names from start to goal, empty on failure
    pub path: Vec<String>,
    /// Accumulated weight along the path - miles when the graph carries
    /// road distances, plain edge-weight units otherwise
    pub total_distance: f64,
    /// Vertices dequeued from the frontier
    pub vertices_explored: usize,
    /// Outgoing edges examined, whether or not they improved anything
    pub edges_evaluated: usize,
    pub execution_time: Duration,
    pub path_found: bool,
}

impl AlgorithmResult {
    pub(crate) fn found(
        path: Vec<String>,
        total_distance: f64,
        vertices_explored: usize,
        edges_evaluated: usize,
        execution_time: Duration,
    ) -> Self {
        Self {
            directions: path.join(" -> "),
            path,
            total_distance,
            vertices_explored,
            edges_evaluated,
            execution_time,
            path_found: true,
        }
    }

    pub(crate) fn not_found(
        message: &str,
        vertices_explored: usize,
        edges_evaluated: usize,
        execution_time: Duration,
    ) -> Self {
        Self {
            directions: message.to_string(),
            path: Vec::new(),
            total_distance: 0.0,
            vertices_explored,
            edges_evaluated,
            execution_time,
            path_found: false,
        }
    }

    /// Path joined with an arbitrary separator, e.g. `" → "`
    pub fn directions_with(&self, separator: &str) -> String {
        if self.path_found {
            self.path.join(separator)
        } else {
            self.directions.clone()
        }
    }
}
