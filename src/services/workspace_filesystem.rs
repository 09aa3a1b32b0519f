use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConverterWorkspace;

/// Filesystem-backed converter workspace.
#[derive(Debug, Clone)]
pub struct FilesystemConverterWorkspace {
    root: PathBuf,
}

impl FilesystemConverterWorkspace {
    /// Create a workspace for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a workspace for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl ConverterWorkspace for FilesystemConverterWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.root.join(path), content)
            .map_err(|e| AppError::file_operation("write", path, e))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(self.root.join(path))
            .map_err(|e| AppError::file_operation("remove", path, e))
    }
}
