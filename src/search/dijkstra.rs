use super::engine::{run_search, Variant};
use super::{AlgorithmResult, PathSearch};
use crate::graph::Graph;


/// Dijkstra's Algorithm - uniform-cost search
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Expands the frontier in order of accumulated cost from the start, so the
/// reported total is the true minimum under non-negative weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra's Algorithm"
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> AlgorithmResult {
        run_search(graph, start, goal, Variant::UniformCost)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Vertex};

    fn graph_from(edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for &(source, destination, _) in edges {
            if !graph.contains_vertex(source) {
                graph.add_vertex(Vertex::new(source));
            }
            if !graph.contains_vertex(destination) {
                graph.add_vertex(Vertex::new(destination));
            }
        }
        for &(source, destination, weight) in edges {
            graph.add_edge(Edge::new(source, destination, weight)).unwrap();
        }
        graph
    }

    /// Exhaustive all-simple-paths reference for small graphs
    fn brute_force_minimum(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
        fn walk(
            graph: &Graph,
            current: &str,
            goal: &str,
            cost: f64,
            visited: &mut Vec<String>,
            best: &mut Option<f64>,
        ) {
            if current == goal {
                *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
                return;
            }
            let Some(vertex) = graph.vertex(current) else {
                return;
            };
            for edge in vertex.edges() {
                if visited.iter().any(|v| v == edge.destination()) {
                    continue;
                }
                visited.push(edge.destination().to_string());
                walk(graph, edge.destination(), goal, cost + edge.weight(), visited, best);
                visited.pop();
            }
        }

        let mut best = None;
        let mut visited = vec![start.to_string()];
        walk(graph, start, goal, 0.0, &mut visited, &mut best);
        best
    }

    #[test]
    fn test_dijkstra_matches_brute_force_on_small_graphs() {
        let graphs = [
            graph_from(&[
                ("A", "B", 4.0),
                ("A", "C", 1.0),
                ("C", "B", 1.0),
                ("B", "D", 5.0),
                ("C", "D", 8.0),
            ]),
            graph_from(&[
                ("A", "B", 4.0),
                ("A", "C", 2.0),
                ("B", "C", 1.0),
                ("B", "D", 5.0),
                ("C", "D", 8.0),
                ("C", "E", 10.0),
                ("D", "E", 2.0),
                ("D", "F", 6.0),
                ("E", "F", 3.0),
            ]),
            graph_from(&[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "A", 1.0),
                ("C", "D", 2.0),
            ]),
        ];

        for graph in &graphs {
            for goal in ["D", "E", "F"] {
                if !graph.contains_vertex(goal) {
                    continue;
                }
                let expected = brute_force_minimum(graph, "A", goal).unwrap();
                let result = Dijkstra.find_path(graph, "A", goal);
                assert!(result.path_found);
                assert_eq!(result.total_distance, expected, "goal {goal}");
            }
        }
    }

    #[test]
    fn test_dijkstra_rejects_costlier_direct_edges() {
        let graph = graph_from(&[
            ("A", "B", 4.0),
            ("A", "C", 1.0),
            ("C", "B", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
        ]);
        let result = Dijkstra.find_path(&graph, "A", "D");
        assert_eq!(result.path, ["A", "C", "B", "D"]);
        assert_eq!(result.total_distance, 7.0);
    }

    #[test]
    fn test_name() {
        assert_eq!(Dijkstra.name(), "Dijkstra's Algorithm");
    }
}
