use crate::ports::{CommandRunner, ConverterWorkspace};
use crate::services::{EmbeddedConverterSource, JavaToolchain};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: ConverterWorkspace, R: CommandRunner> {
    workspace: W,
    runner: R,
    toolchain: JavaToolchain,
    source: EmbeddedConverterSource,
}

impl<W: ConverterWorkspace, R: CommandRunner> AppContext<W, R> {
    /// Create a new application context.
    pub fn new(workspace: W, runner: R, toolchain: JavaToolchain) -> Self {
        Self { workspace, runner, toolchain, source: EmbeddedConverterSource::new() }
    }

    /// Get a reference to the converter workspace.
    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the Java toolchain command builder.
    pub fn toolchain(&self) -> &JavaToolchain {
        &self.toolchain
    }

    /// Get a reference to the embedded converter source.
    pub fn source(&self) -> &EmbeddedConverterSource {
        &self.source
    }
}
