use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Class file whose presence in the working directory stands in for the
/// extracted Bouncy Castle library.
pub(crate) const PROVIDER_CLASS: &str = "org/bouncycastle/jce/provider/BouncyCastleProvider.class";

const FAKE_JAVAC: &str = r#"#!/bin/sh
echo "$@" >> "__LOG__"

if [ ! -f org/bouncycastle/jce/provider/BouncyCastleProvider.class ]; then
    echo "ConvertKeystore.java:8: error: package org.bouncycastle.jce.provider does not exist" >&2
    exit 1
fi

src="$3"
if ! grep -q "public class ConvertKeystore " "$src"; then
    echo "$src: error: class ConvertKeystore is public, should be declared in a file named ConvertKeystore.java" >&2
    exit 1
fi

printf 'compiled' > "${src%.java}.class"
exit 0
"#;

const FAKE_JAVA: &str = r#"#!/bin/sh
echo "$@" >> "__LOG__"

if [ ! -f "$3.class" ]; then
    echo "Error: Could not find or load main class $3" >&2
    exit 1
fi

input="$4"
output="$5"
password="$6"
alias="$7"

if [ ! -f "$input" ]; then
    echo "Failed to convert $input: java.io.FileNotFoundException: $input (No such file or directory)" >&2
    exit 1
fi
if ! grep -qx "password=$password" "$input"; then
    echo "Failed to convert $input: java.io.IOException: Keystore was tampered with, or password was incorrect" >&2
    exit 1
fi
if ! grep -qx "alias=$alias" "$input"; then
    echo "Key not found: $alias" >&2
    exit 1
fi

printf 'BKS %s\n' "$alias" > "$output"
echo "Successfully converted $input to $output"
exit 0
"#;

/// A fake JDK: `bin/javac` and `bin/java` shell scripts that emulate the
/// converter's observable behavior and log their arguments.
pub(crate) struct FakeJdk {
    pub home: PathBuf,
    pub javac_log: PathBuf,
    pub java_log: PathBuf,
}

impl FakeJdk {
    pub(crate) fn install(home: &Path) -> Self {
        let bin_dir = home.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake JDK bin dir");

        let javac_log = home.join("javac.log");
        let java_log = home.join("java.log");
        write_script(&bin_dir.join("javac"), FAKE_JAVAC, &javac_log);
        write_script(&bin_dir.join("java"), FAKE_JAVA, &java_log);

        Self { home: home.to_path_buf(), javac_log, java_log }
    }

    /// Swap `bin/java` for `script`; `__LOG__` expands to the java log path.
    pub(crate) fn replace_java(&self, script: &str) {
        write_script(&self.home.join("bin").join("java"), script, &self.java_log);
    }

    /// Logged argument lines for `javac`, one per invocation.
    pub(crate) fn javac_calls(&self) -> Vec<String> {
        read_log(&self.javac_log)
    }

    /// Logged argument lines for `java`, one per invocation.
    pub(crate) fn java_calls(&self) -> Vec<String> {
        read_log(&self.java_log)
    }
}

fn write_script(path: &Path, template: &str, log_file: &Path) {
    let script = template.replace("__LOG__", &log_file.to_string_lossy());
    fs::write(path, script).expect("Failed to write fake tool script");
    let mut perms = fs::metadata(path).expect("Failed to stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to mark fake tool executable");
}

fn read_log(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
