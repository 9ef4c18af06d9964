use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::haversine_miles;


/// Named node with optional geographic coordinates.
/// Owns the edges that originate at it, keyed by edge name.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    coordinates: Option<(f64, f64)>,
    edges: FxIndexMap<String, Edge>,
}

impl Vertex {

    /// Create a vertex without coordinates
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates: None,
            edges: FxIndexMap::default(),
        }
    }

    /// Create a vertex with a (latitude, longitude) pair in degrees
    pub fn with_coordinates(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinates: Some((latitude, longitude)),
            edges: FxIndexMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both coordinates are present or both are absent - a partial pair is
    /// not representable
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }

    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.coordinates = Some((latitude, longitude));
    }

    /// Outgoing edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.get(name)
    }

    /// Haversine distance in miles to another vertex
    /// Returns None when either vertex lacks coordinates - absent guidance,
    /// never zero
    pub fn straight_line_distance(&self, other: &Vertex) -> Option<f64> {
        let (lat1, lon1) = self.coordinates?;
        let (lat2, lon2) = other.coordinates?;
        Some(haversine_miles(lat1, lon1, lat2, lon2))
    }

    fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.name.clone(), edge);
    }

    fn remove_edge(&mut self, name: &str) {
        self.edges.shift_remove(name);
    }
}


/// Directed, weighted connection between two named vertices.
/// The source is an explicit field; the conventional edge name
/// `"<source>-><destination>"` is derived from it, never parsed.
/// The destination is referenced by name and is not owned by the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    name: String,
    source: String,
    destination: String,
    weight: f64,
}

impl Edge {

    /// Create a directed edge with the given weight
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        let source = source.into();
        let destination = destination.into();
        Self {
            name: format!("{source}->{destination}"),
            source,
            destination,
            weight,
        }
    }

    /// Create a directed edge with the default weight of 1.0
    pub fn unweighted(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(source, destination, 1.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}


/// Adjacency-list graph owning all vertices and an edge-name index.
///
/// Each edge value lives in its origin vertex's local map; the graph-level
/// index maps edge name to origin name, so every indexed edge is present in
/// its origin's local map by construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxIndexMap<String, Vertex>,
    edge_index: FxIndexMap<String, String>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, replacing any vertex with the same name.
    /// Replacing drops the old vertex's outgoing edges from the edge index.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        if let Some(old) = self.vertices.get(vertex.name()) {
            let stale: Vec<String> = old.edges.keys().cloned().collect();
            for name in stale {
                self.edge_index.shift_remove(&name);
            }
        }
        self.vertices.insert(vertex.name.clone(), vertex);
    }

    /// Remove a vertex and every edge originating at it.
    /// Edges terminating at the removed vertex but originating elsewhere are
    /// left dangling; a search treats a dangling destination as a vertex
    /// with no outgoing edges.
    pub fn remove_vertex(&mut self, name: &str) {
        if let Some(vertex) = self.vertices.shift_remove(name) {
            for edge_name in vertex.edges.keys() {
                self.edge_index.shift_remove(edge_name);
            }
        }
    }

    /// Add an edge, failing loudly when the origin vertex is unknown or the
    /// weight is negative
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        // NaN fails a plain `< 0.0` check and would poison frontier keys
        if edge.weight.is_nan() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                edge: edge.name,
                weight: edge.weight,
            });
        }
        let Some(origin) = self.vertices.get_mut(&edge.source) else {
            return Err(GraphError::UnknownSourceVertex {
                edge: edge.name,
                origin: edge.source,
            });
        };
        self.edge_index.insert(edge.name.clone(), edge.source.clone());
        origin.add_edge(edge);
        Ok(())
    }

    /// Remove an edge from both the graph-level index and its origin
    /// vertex's local map
    pub fn remove_edge(&mut self, name: &str) {
        if let Some(origin) = self.edge_index.shift_remove(name) {
            if let Some(vertex) = self.vertices.get_mut(&origin) {
                vertex.remove_edge(name);
            }
        }
    }

    /// Update an edge's weight in place
    pub fn set_edge_weight(&mut self, name: &str, weight: f64) -> Result<(), GraphError> {
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                edge: name.to_string(),
                weight,
            });
        }
        let edge = self
            .edge_index
            .get(name)
            .and_then(|origin| self.vertices.get_mut(origin))
            .and_then(|vertex| vertex.edges.get_mut(name))
            .ok_or_else(|| GraphError::UnknownEdge(name.to_string()))?;
        edge.weight = weight;
        Ok(())
    }

    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_index
            .iter()
            .filter_map(|(name, origin)| self.vertices.get(origin).and_then(|v| v.edge(name)))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }
}
