//! jks2bks: Convert a Java KeyStore into a Bouncy Castle keystore by generating,
//! compiling, and running a small Java converter.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::{AppContext, commands::convert};
use services::{FilesystemConverterWorkspace, JavaToolchain, ProcessCommandRunner};

pub use domain::{AppError, ConversionOutcome, ConversionRequest, ProcessOutput};

/// Convert `assets/keystore` to `assets/keystore.bks` in the current directory.
///
/// The Bouncy Castle classes must already be present in the current directory.
pub fn convert() -> Result<ConversionOutcome, AppError> {
    let workspace = FilesystemConverterWorkspace::current()?;
    let toolchain = JavaToolchain::new(app::config::load_toolchain_config());
    let ctx = AppContext::new(workspace, ProcessCommandRunner::new(), toolchain);

    convert::execute(&ctx, &ConversionRequest::default())
}
