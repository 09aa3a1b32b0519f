mod command_runner;
mod converter_workspace;

pub use command_runner::CommandRunner;
pub use converter_workspace::ConverterWorkspace;
