use std::path::PathBuf;
use thiserror::Error;


/// Errors raised by graph mutation.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge referenced an origin vertex that is not in the graph.
    /// Edge insertion fails loudly rather than dropping the edge, since a
    /// silent no-op hides data-loading bugs.
    #[error("edge `{edge}` references unknown source vertex `{origin}`")]
    UnknownSourceVertex { edge: String, origin: String },

    /// No edge with the given name exists in the graph.
    #[error("no edge named `{0}` in the graph")]
    UnknownEdge(String),

    /// Edge weights must be non-negative and not NaN.
    #[error("edge `{edge}` has invalid weight {weight}")]
    InvalidWeight { edge: String, weight: f64 },
}

/// Errors raised while loading a graph from delimited text files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
