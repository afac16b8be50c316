use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum Error {
    #[error("{line:?} not properly formatted")]
    MalformedHeader { line: String },
    #[error(
        "attempting to insert an edge between {from} and {to} in a graph with {vertices} vertices"
    )]
    VertexOutOfRange {
        from: usize,
        to: usize,
        vertices: usize,
    },
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can not serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

////////////////////////////////////////////////////////////////////////////////

pub type Result<T> = std::result::Result<T, Error>;
