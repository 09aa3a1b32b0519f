//! Shared testing harness for `jks2bks` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_java::{FakeJdk, PROVIDER_CLASS};

/// Testing harness providing an isolated working directory and a fake JDK.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    jdk: FakeJdk,
}

impl TestContext {
    /// Create a new isolated environment with the provider library present.
    pub(crate) fn new() -> Self {
        let ctx = Self::without_provider();
        ctx.install_provider();
        ctx
    }

    /// Create a new isolated environment with no Bouncy Castle classes.
    pub(crate) fn without_provider() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("assets")).expect("Failed to create test work directory");
        let jdk = FakeJdk::install(&root.path().join("jdk"));

        Self { root, work_dir, jdk }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn jdk(&self) -> &FakeJdk {
        &self.jdk
    }

    /// Build a command for invoking the compiled `jks2bks` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("jks2bks").expect("Failed to locate jks2bks binary");
        cmd.current_dir(&self.work_dir).env("JAVA_HOME", &self.jdk.home).env_remove("RUST_LOG");
        cmd
    }

    /// Build a command whose `JAVA_HOME` points at a directory with no tools.
    pub(crate) fn cli_without_toolchain(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("JAVA_HOME", self.root.path().join("missing-jdk"));
        cmd
    }

    /// Drop the provider marker class into the working directory.
    pub(crate) fn install_provider(&self) {
        self.write(PROVIDER_CLASS, "provider");
    }

    /// Write an input keystore holding `alias` under the fixed password.
    pub(crate) fn write_keystore(&self, alias: &str) {
        self.write_keystore_with_password("123456", alias);
    }

    /// Write an input keystore that only opens with `password`.
    pub(crate) fn write_keystore_with_password(&self, password: &str, alias: &str) {
        self.write("assets/keystore", &format!("password={}\nalias={}\n", password, alias));
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Assert that `relative` exists in the working directory.
    pub(crate) fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{} should exist", relative);
    }

    /// Assert that `relative` does not exist in the working directory.
    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{} should not exist", relative);
    }
}
