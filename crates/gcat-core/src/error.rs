// crates/gcat-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatError>;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("invalid option -- '{0}'")]
    InvalidOption(char),

    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    #[error("{0}: No such file or directory")]
    PathNotFound(String),

    #[error("{0}: Is not a regular file")]
    NotARegularFile(String),

    #[error("{name}: {source}")]
    ReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write error: {0}")]
    WriteFailure(#[source] std::io::Error),
}

impl CatError {
    /// Option errors get the "Try --help" hint on the command line.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CatError::InvalidOption(_) | CatError::UnrecognizedOption(_)
        )
    }
}
