use std::io;
use std::path::Path;

use thiserror::Error;

/// Library-wide error type for jks2bks operations.
///
/// Expected conversion failures (a failed build or a failed convert run) are
/// reported through `ConversionOutcome`, not through this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An external tool could not be executed at all.
    #[error("Failed to execute {tool}: {error}")]
    ExternalTool { tool: String, error: String },

    /// Reading, writing, or removing a file in the working directory failed.
    #[error("Failed to {action} {path}: {source}")]
    FileOperation { action: &'static str, path: String, source: io::Error },
}

impl AppError {
    pub fn external_tool<T: Into<String>, E: ToString>(tool: T, error: E) -> Self {
        AppError::ExternalTool { tool: tool.into(), error: error.to_string() }
    }

    pub fn file_operation(action: &'static str, path: &Path, source: io::Error) -> Self {
        AppError::FileOperation { action, path: path.display().to_string(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ExternalTool { .. } => io::ErrorKind::Other,
            AppError::FileOperation { source, .. } => source.kind(),
        }
    }
}
