use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, CommandSpec, ProcessOutput};
use crate::ports::CommandRunner;

/// Runs commands as blocking child processes with captured output.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<ProcessOutput, AppError> {
        debug!(command = %spec, cwd = %cwd.display(), "spawning");

        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        command.current_dir(cwd);

        let output =
            command.output().map_err(|e| AppError::external_tool(spec.tool_name(), e))?;

        let result = ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(command = %spec, status = ?result.status, "finished");
        Ok(result)
    }
}
