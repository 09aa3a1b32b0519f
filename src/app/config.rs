//! Toolchain configuration loading from the environment.

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::domain::ToolchainConfig;

/// Environment variable naming the JDK installation to use.
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";

/// Load the toolchain configuration for this process.
pub fn load_toolchain_config() -> ToolchainConfig {
    let config = toolchain_config_from(std::env::var_os(JAVA_HOME_ENV));
    debug!(javac = %config.javac.display(), java = %config.java.display(), "resolved toolchain");
    config
}

/// Resolve the toolchain from an optional `JAVA_HOME` value.
///
/// Unset or empty falls back to `PATH` lookup.
pub fn toolchain_config_from(java_home: Option<OsString>) -> ToolchainConfig {
    match java_home {
        Some(home) if !home.is_empty() => ToolchainConfig::from_java_home(Path::new(&home)),
        _ => ToolchainConfig::default(),
    }
}
