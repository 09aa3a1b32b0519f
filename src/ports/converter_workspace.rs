use std::path::Path;

use crate::domain::AppError;

/// Working directory the converter is generated, compiled, and run in.
///
/// All paths are relative to `root()`.
pub trait ConverterWorkspace {
    fn root(&self) -> &Path;

    /// Write `content`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
