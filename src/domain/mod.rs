pub mod artifacts;
pub mod conversion;
pub mod error;
pub mod outcome;
pub mod process;
pub mod toolchain;

pub use artifacts::{CONVERTER_CLASS, ConverterArtifacts};
pub use conversion::{
    ConversionRequest, INPUT_KEYSTORE, KEY_ALIAS, KEYSTORE_PASSWORD, OUTPUT_KEYSTORE,
};
pub use error::AppError;
pub use outcome::ConversionOutcome;
pub use process::{CommandSpec, ProcessOutput};
pub use toolchain::ToolchainConfig;
