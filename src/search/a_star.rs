use super::engine::{run_search, Variant};
use super::{AlgorithmResult, PathSearch};
use crate::graph::Graph;


/// A* Search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Orders the frontier by f = g + h where h is the straight-line distance
/// to the goal (0 when coordinates are absent). With an admissible
/// heuristic the reported total matches Dijkstra's.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl PathSearch for AStar {
    fn name(&self) -> &'static str {
        "A* Search Algorithm"
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> AlgorithmResult {
        run_search(graph, start, goal, Variant::AStar)
    }
}
