use super::engine::{run_search, Variant};
use super::{AlgorithmResult, PathSearch};
use crate::graph::Graph;


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search
/// Always expands the vertex that currently looks geometrically closest to
/// the goal. Accumulated cost is tracked for reporting only, so the path
/// found is not guaranteed to be the cheapest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirst;

impl PathSearch for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "Greedy Best-First Search Algorithm"
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> AlgorithmResult {
        run_search(graph, start, goal, Variant::GreedyBestFirst)
    }
}
