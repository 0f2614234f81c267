use thiserror::Error;

/// result of an instance construction (reading or building a graph)
pub type InputResult<T> = Result<T, MalformedInputError>;

/** errors raised while reading or building a coloring instance.
Line numbers are 1-based, vertex ids are the ones found in the file (1-based).
*/
#[derive(Error, Debug)]
pub enum MalformedInputError {
    /// the instance file could not be read
    #[error("unable to read {path}: {source}")]
    Io {
        /// file name
        path: String,
        /// underlying error
        source: std::io::Error,
    },

    /// no `p edge N M` line was found
    #[error("missing problem line (expected 'p edge <n> <m>')")]
    MissingHeader,

    /// the problem line is incomplete or not numeric
    #[error("line {line}: truncated problem line '{content}'")]
    TruncatedHeader {
        /// line number
        line: usize,
        /// raw line
        content: String,
    },

    /// the declared number of vertices cannot be allocated
    #[error("line {line}: too many vertices ({nb_vertices}, at most {max})")]
    TooManyVertices {
        /// line number (0 if the graph was not read from a file)
        line: usize,
        /// declared number of vertices
        nb_vertices: usize,
        /// largest accepted number of vertices
        max: usize,
    },

    /// a line that is neither a comment, a header nor an edge
    #[error("line {line}: unable to parse '{content}'")]
    InvalidLine {
        /// line number
        line: usize,
        /// raw line
        content: String,
    },

    /// an edge endpoint is outside [1, n]
    #[error("line {line}: vertex {vertex} out of range [1, {nb_vertices}]")]
    VertexOutOfRange {
        /// line number (0 if the edge was not read from a file)
        line: usize,
        /// offending vertex (1-based)
        vertex: usize,
        /// declared number of vertices
        nb_vertices: usize,
    },

    /// an edge from a vertex to itself
    #[error("line {line}: self-loop on vertex {vertex}")]
    SelfLoop {
        /// line number (0 if the edge was not read from a file)
        line: usize,
        /// offending vertex (1-based)
        vertex: usize,
    },
}


/** errors of a solver executable: reading the instance or writing the results */
#[derive(Error, Debug)]
pub enum RunError {
    /// the instance could not be read
    #[error(transparent)]
    Input(#[from] MalformedInputError),

    /// results could not be written
    #[error("unable to write results: {0}")]
    Io(#[from] std::io::Error),

    /// the perf file could not be serialized
    #[error("unable to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
}
