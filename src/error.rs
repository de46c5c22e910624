//! Crate-level error type and `Result` alias.
//! Every per-file failure a handler can observe (opening the output, writing
//! through a sink, reading or rendering the input) maps onto one variant here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: read failed: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: cannot open for writing: {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: write failed: {source}")]
    Sink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {message}")]
    Decode { path: String, message: String },
}
