use std::path::Path;

use crate::domain::{AppError, CommandSpec, ProcessOutput};

/// Spawns external commands and waits for them to finish.
pub trait CommandRunner {
    /// Run `command` in `cwd`, capturing stdout and stderr.
    ///
    /// A non-zero exit status is a successful call returning a failed
    /// `ProcessOutput`. `Err` means the command could not be spawned.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<ProcessOutput, AppError>;
}
