use std::fs::File;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::collections::FxIndexMap;
use crate::errors::LoadError;
use crate::graph::{Edge, Graph, Vertex};


/// Row of the vertex-coordinates file: `vertex,latitude,longitude`
#[derive(Debug, Deserialize)]
struct VertexRecord {
    vertex: String,
    latitude: f64,
    longitude: f64,
}

/// Row of the graph-edges file: `source,destination,highway,distance`
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    destination: String,
    highway: String,
    distance: f64,
}

/// Populate a graph from two CSV files: a directed edge list and a vertex
/// coordinate registry.
///
/// Vertices are created on first reference; a vertex missing from the
/// registry is created without coordinates, which leaves the heuristic
/// undefined at that vertex. A negative distance fails the load.
pub fn read_graph(edges_path: &Path, vertices_path: &Path) -> Result<Graph, LoadError> {
    let coords = read_coordinates(vertices_path)?;

    let file = File::open(edges_path).map_err(|source| LoadError::Io {
        path: edges_path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut graph = Graph::new();
    for record in reader.deserialize() {
        let record: EdgeRecord = record?;
        debug!(
            "edge {}->{} via {} ({} miles)",
            record.source, record.destination, record.highway, record.distance
        );
        ensure_vertex(&mut graph, &record.source, &coords);
        ensure_vertex(&mut graph, &record.destination, &coords);
        graph.add_edge(Edge::new(record.source, record.destination, record.distance))?;
    }

    info!(
        "loaded graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn read_coordinates(path: &Path) -> Result<FxIndexMap<String, (f64, f64)>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut coords = FxIndexMap::default();
    for record in reader.deserialize() {
        let record: VertexRecord = record?;
        coords.insert(record.vertex, (record.latitude, record.longitude));
    }
    Ok(coords)
}

fn ensure_vertex(graph: &mut Graph, name: &str, coords: &FxIndexMap<String, (f64, f64)>) {
    if graph.contains_vertex(name) {
        return;
    }
    match coords.get(name) {
        Some(&(latitude, longitude)) => {
            graph.add_vertex(Vertex::with_coordinates(name, latitude, longitude))
        }
        None => graph.add_vertex(Vertex::new(name)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const VERTICES: &str = "\
vertex,latitude,longitude
Portland,45.5152,-122.6784
Salem,44.9429,-123.0351
Eugene,44.0521,-123.0868
";

    #[test]
    fn test_read_graph_builds_vertices_and_edges() {
        let vertices = write_file(VERTICES);
        let edges = write_file(
            "\
source,destination,highway,distance
Portland,Salem,I-5,47.0
Salem,Eugene,I-5,66.0
",
        );

        let graph = read_graph(edges.path(), vertices.path()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let portland = graph.vertex("Portland").unwrap();
        assert_eq!(portland.coordinates(), Some((45.5152, -122.6784)));
        assert_eq!(portland.edge("Portland->Salem").unwrap().weight(), 47.0);
    }

    #[test]
    fn test_vertex_missing_from_registry_gets_no_coordinates() {
        let vertices = write_file(VERTICES);
        let edges = write_file(
            "\
source,destination,highway,distance
Portland,Boring,OR-212,22.0
",
        );

        let graph = read_graph(edges.path(), vertices.path()).unwrap();
        assert!(graph.vertex("Boring").unwrap().coordinates().is_none());
    }

    #[test]
    fn test_negative_distance_fails_the_load() {
        let vertices = write_file(VERTICES);
        let edges = write_file(
            "\
source,destination,highway,distance
Portland,Salem,I-5,-47.0
",
        );

        let result = read_graph(edges.path(), vertices.path());
        assert!(matches!(result, Err(LoadError::Graph(_))));
    }

    #[test]
    fn test_nan_distance_fails_the_load() {
        // "NaN" parses as a valid f64, so it has to be rejected as a
        // weight rather than as a malformed record
        let vertices = write_file(VERTICES);
        let edges = write_file(
            "\
source,destination,highway,distance
Portland,Salem,I-5,NaN
",
        );

        let result = read_graph(edges.path(), vertices.path());
        assert!(matches!(result, Err(LoadError::Graph(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let vertices = write_file(VERTICES);
        let result = read_graph(Path::new("/nonexistent/graph.txt"), vertices.path());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_malformed_record_is_a_csv_error() {
        let vertices = write_file(VERTICES);
        let edges = write_file(
            "\
source,destination,highway,distance
Portland,Salem,I-5,not-a-number
",
        );

        let result = read_graph(edges.path(), vertices.path());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }
}
