pub mod adapters;
mod converter_source;
mod java_toolchain;
mod workspace_filesystem;

pub use adapters::process_command::ProcessCommandRunner;
pub use converter_source::{CONVERTER_SOURCE, EmbeddedConverterSource};
pub use java_toolchain::JavaToolchain;
pub use workspace_filesystem::FilesystemConverterWorkspace;
