use super::ProcessOutput;

/// How a conversion run ended.
///
/// Each variant carries the captured output of the step that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Both steps succeeded and the transient artifacts were removed.
    Converted { output: ProcessOutput },
    /// The compiler rejected the generated source. Nothing was cleaned up.
    BuildFailed { output: ProcessOutput },
    /// The converter ran and exited non-zero. Nothing was cleaned up.
    ConvertFailed { output: ProcessOutput },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// Process exit status for the orchestrator: failures collapse to `1`.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn output(&self) -> &ProcessOutput {
        match self {
            ConversionOutcome::Converted { output }
            | ConversionOutcome::BuildFailed { output }
            | ConversionOutcome::ConvertFailed { output } => output,
        }
    }
}
