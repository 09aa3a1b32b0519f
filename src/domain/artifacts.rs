use std::path::PathBuf;

/// Class name of the generated converter program.
pub const CONVERTER_CLASS: &str = "ConvertKeystore";

/// Transient files produced by one run: the generated source and the class
/// file the compiler emits next to it. Both live in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterArtifacts {
    class_name: String,
}

impl Default for ConverterArtifacts {
    fn default() -> Self {
        Self::new(CONVERTER_CLASS)
    }
}

impl ConverterArtifacts {
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self { class_name: class_name.into() }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn source_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.java", self.class_name))
    }

    pub fn class_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.class", self.class_name))
    }

    /// Everything removed after a successful run, in removal order.
    pub fn transient_files(&self) -> [PathBuf; 2] {
        [self.source_file(), self.class_file()]
    }
}
