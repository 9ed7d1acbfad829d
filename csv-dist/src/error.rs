//! Error types for distribution file handlers.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by distribution sources and sinks.
#[derive(Error, Debug)]
pub enum Error {
    /// Operation invoked while the handler is not in the required state.
    #[error("{0}")]
    State(&'static str),

    /// Caller asked for a variant that is not implemented.
    #[error("{0}")]
    Unsupported(&'static str),

    /// File content or caller input violates the two-column contract.
    #[error("format error: {0}")]
    Format(String),

    /// Backing file could not be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handler metadata could not be encoded or decoded.
    #[error("persistence error: {0}")]
    Persist(#[from] bincode::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn inactive() -> Self {
        Error::State("handler must be active")
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classify a csv-crate error: I/O failures stay I/O, the rest is bad content.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Error::io(path, source),
            _ => Error::Format(format!("{}: {}", path.display(), msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_message() {
        assert_eq!(Error::inactive().to_string(), "handler must be active");
    }

    #[test]
    fn csv_io_error_is_classified_as_io() {
        let err = csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let classified = Error::from_csv(Path::new("dist.csv"), err);
        assert!(matches!(classified, Error::Io { .. }));
    }
}
