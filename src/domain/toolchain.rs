use std::path::{Path, PathBuf};

/// Locations of the Java compiler and launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    pub javac: PathBuf,
    pub java: PathBuf,
}

impl Default for ToolchainConfig {
    /// Resolve both tools through `PATH`.
    fn default() -> Self {
        Self { javac: PathBuf::from("javac"), java: PathBuf::from("java") }
    }
}

impl ToolchainConfig {
    /// Use the tools under `<java_home>/bin`.
    pub fn from_java_home(java_home: &Path) -> Self {
        let bin = java_home.join("bin");
        Self { javac: bin.join("javac"), java: bin.join("java") }
    }
}
