use std::io;

use thiserror::Error;

/// Library-wide error type for composegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// A build-args region line is not a KEY=value declaration.
    #[error("Malformed build argument line in '{file}': '{line}' (expected KEY=value)")]
    MalformedBuildArg { file: String, line: String },

    /// The service has no volumes sequence where one is required.
    ///
    /// Volume-editing generators run after the default volume set has been
    /// written; hitting this indicates a broken pipeline order.
    #[error("Service '{service}' has no volumes list in the compose document")]
    MissingVolumes { service: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ParseError { .. }
            | AppError::MalformedBuildArg { .. }
            | AppError::MissingVolumes { .. } => io::ErrorKind::InvalidData,
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}
