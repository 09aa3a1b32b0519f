use crate::domain::{CommandSpec, ConversionRequest, ConverterArtifacts, ToolchainConfig};

/// Classpath for both steps: the working directory, where the Bouncy Castle
/// classes are expected to be already extracted.
const CLASSPATH: &str = ".";

/// Builds the compile and run command lines for the converter.
#[derive(Debug, Clone)]
pub struct JavaToolchain {
    config: ToolchainConfig,
}

impl JavaToolchain {
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    /// `javac -cp . <Class>.java`
    pub fn compile_command(&self, artifacts: &ConverterArtifacts) -> CommandSpec {
        CommandSpec::new(&self.config.javac)
            .args(["-cp", CLASSPATH])
            .arg(artifacts.source_file().to_string_lossy())
    }

    /// `java -cp . <Class> <input> <output> <password> <alias>`
    pub fn run_command(
        &self,
        artifacts: &ConverterArtifacts,
        request: &ConversionRequest,
    ) -> CommandSpec {
        CommandSpec::new(&self.config.java)
            .args(["-cp", CLASSPATH, artifacts.class_name()])
            .args(request.positional_args())
    }
}

impl Default for JavaToolchain {
    fn default() -> Self {
        Self::new(ToolchainConfig::default())
    }
}
