use thiserror::Error;

/// Argument list that does not form a dump command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("invalid command line: {0:?}")]
    Parse(clap::error::ErrorKind),

    #[error("--path given without input files")]
    NoInputFiles,
}

impl From<clap::Error> for UsageError {
    fn from(e: clap::Error) -> Self {
        UsageError::Parse(e.kind())
    }
}
