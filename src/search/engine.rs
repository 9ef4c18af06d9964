use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::trace;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashSet;

use super::AlgorithmResult;
use crate::collections::FxIndexMap;
use crate::graph::Graph;

const MISSING_ENDPOINT: &str = "Start/destination vertex not found.";
const NO_PATH: &str = "No path found.";


/// Frontier ordering and finalization policy of a search variant.
/// The three variants share one engine and differ only in how frontier keys
/// are computed and when a vertex may be relaxed or re-expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    /// Key = accumulated cost from start; optimal under non-negative
    /// weights. Stale frontier entries are discarded at pop time.
    UniformCost,
    /// Key = heuristic distance to goal only; a vertex is enqueued once, on
    /// first discovery, and later cheaper arrivals are not re-evaluated.
    GreedyBestFirst,
    /// Key = g + h (h treated as 0 when undefined). Finalization is not
    /// binding: a finalized vertex is relaxed again when a strictly better
    /// g is found, and stale entries are not filtered at pop time, so every
    /// pop counts as explored.
    AStar,
}

/// Entry on the frontier heap.
/// Min-ordered by key, then by push sequence so that equal-key entries pop
/// in push order - a deterministic total order even though vertices
/// themselves are not comparable.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry<'a> {
    key: OrderedFloat<f64>,
    seq: u64,
    vertex: &'a str,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/// Run a search between two named vertices under the given variant policy.
/// Owns all transient state (frontier, explored set, cost and predecessor
/// maps); the graph is read-only for the duration of the call.
pub(crate) fn run_search(
    graph: &Graph,
    start: &str,
    goal: &str,
    variant: Variant,
) -> AlgorithmResult {
    let started = Instant::now();
    let mut vertices_explored = 0usize;
    let mut edges_evaluated = 0usize;

    let (start_vertex, goal_vertex) = match (graph.vertex(start), graph.vertex(goal)) {
        (Some(s), Some(g)) => (s, g),
        _ => return AlgorithmResult::not_found(MISSING_ENDPOINT, 0, 0, started.elapsed()),
    };

    // Straight-line miles to the goal; None when either endpoint lacks
    // coordinates or the name dangles
    let heuristic = |name: &str| -> Option<f64> {
        graph
            .vertex(name)
            .and_then(|v| v.straight_line_distance(goal_vertex))
    };

    let mut frontier: BinaryHeap<FrontierEntry<'_>> = BinaryHeap::new();
    let mut seq = 0u64;
    let mut came_from: FxIndexMap<&str, Option<&str>> = FxIndexMap::default();
    let mut g_scores: FxIndexMap<&str, f64> = FxIndexMap::default();
    let mut explored: FxHashSet<&str> = FxHashSet::default();

    let start_name = start_vertex.name();
    let start_key = match variant {
        Variant::UniformCost => 0.0,
        Variant::GreedyBestFirst | Variant::AStar => heuristic(start_name).unwrap_or(0.0),
    };
    frontier.push(FrontierEntry {
        key: OrderedFloat(start_key),
        seq,
        vertex: start_name,
    });
    seq += 1;
    came_from.insert(start_name, None);
    g_scores.insert(start_name, 0.0);

    while let Some(FrontierEntry { key, vertex: name, .. }) = frontier.pop() {
        // Lazy deletion: UniformCost and GreedyBestFirst discard stale
        // entries for finalized vertices uncounted; AStar re-expands them
        if variant != Variant::AStar && explored.contains(name) {
            continue;
        }
        vertices_explored += 1;
        trace!("expanding {name} (key {key})");

        if name == goal_vertex.name() {
            let path = reconstruct_path(&came_from, name);
            let total = g_scores.get(name).copied().unwrap_or(0.0);
            return AlgorithmResult::found(
                path,
                total,
                vertices_explored,
                edges_evaluated,
                started.elapsed(),
            );
        }
        explored.insert(name);

        // A dangling destination has no vertex entry and therefore no
        // outgoing edges
        let Some(vertex) = graph.vertex(name) else {
            continue;
        };
        let current_g = g_scores.get(name).copied().unwrap_or(f64::INFINITY);

        for edge in vertex.edges() {
            edges_evaluated += 1;
            let neighbor = edge.destination();
            let tentative_g = current_g + edge.weight();
            let best_g = g_scores.get(neighbor).copied().unwrap_or(f64::INFINITY);

            match variant {
                Variant::UniformCost => {
                    if !explored.contains(neighbor) && tentative_g < best_g {
                        g_scores.insert(neighbor, tentative_g);
                        came_from.insert(neighbor, Some(name));
                        frontier.push(FrontierEntry {
                            key: OrderedFloat(tentative_g),
                            seq,
                            vertex: neighbor,
                        });
                        seq += 1;
                    }
                }
                Variant::GreedyBestFirst => {
                    if !explored.contains(neighbor) && !came_from.contains_key(neighbor) {
                        g_scores.insert(neighbor, tentative_g);
                        came_from.insert(neighbor, Some(name));
                        frontier.push(FrontierEntry {
                            key: OrderedFloat(heuristic(neighbor).unwrap_or(0.0)),
                            seq,
                            vertex: neighbor,
                        });
                        seq += 1;
                    }
                }
                Variant::AStar => {
                    // No explored check: a strictly better g reopens even a
                    // finalized vertex
                    if tentative_g < best_g {
                        g_scores.insert(neighbor, tentative_g);
                        came_from.insert(neighbor, Some(name));
                        frontier.push(FrontierEntry {
                            key: OrderedFloat(tentative_g + heuristic(neighbor).unwrap_or(0.0)),
                            seq,
                            vertex: neighbor,
                        });
                        seq += 1;
                    }
                }
            }
        }
    }

    AlgorithmResult::not_found(NO_PATH, vertices_explored, edges_evaluated, started.elapsed())
}


/// Walk predecessor links from the goal back to the start and reverse
fn reconstruct_path(came_from: &FxIndexMap<&str, Option<&str>>, goal: &str) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(name) = current {
        path.push(name.to_string());
        current = came_from.get(name).copied().flatten();
    }

    path.reverse();
    path
}
