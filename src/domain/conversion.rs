//! The fixed conversion request handed to the compiled converter.

/// Input keystore, relative to the working directory.
pub const INPUT_KEYSTORE: &str = "assets/keystore";

/// Output keystore written by the converter.
pub const OUTPUT_KEYSTORE: &str = "assets/keystore.bks";

/// Store and key password shared by both keystores.
pub const KEYSTORE_PASSWORD: &str = "123456";

/// Alias of the key entry that gets copied.
pub const KEY_ALIAS: &str = "key0";

/// Parameters of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: String,
    pub output: String,
    pub password: String,
    pub alias: String,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            input: INPUT_KEYSTORE.to_string(),
            output: OUTPUT_KEYSTORE.to_string(),
            password: KEYSTORE_PASSWORD.to_string(),
            alias: KEY_ALIAS.to_string(),
        }
    }
}

impl ConversionRequest {
    /// Positional arguments in the order the converter expects them:
    /// input, output, password, alias.
    pub fn positional_args(&self) -> [&str; 4] {
        [self.input.as_str(), self.output.as_str(), self.password.as_str(), self.alias.as_str()]
    }
}
