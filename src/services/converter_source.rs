//! Java source of the converter program, embedded at compile time.

use crate::domain::CONVERTER_CLASS;

/// Converter that re-encrypts one JKS key entry into a BKS keystore.
///
/// Invoked as `ConvertKeystore <input.jks> <output.bks> <password> <alias>`.
pub static CONVERTER_SOURCE: &str = include_str!("../assets/converter/ConvertKeystore.java");

/// Embedded source for the converter class.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedConverterSource;

impl EmbeddedConverterSource {
    pub fn new() -> Self {
        Self
    }

    pub fn class_name(&self) -> &'static str {
        CONVERTER_CLASS
    }

    pub fn source(&self) -> &'static str {
        CONVERTER_SOURCE
    }
}
