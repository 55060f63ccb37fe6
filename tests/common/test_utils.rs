#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

use super::test_prelude::Command;

/// A scratch directory holding test sources and a fake `zebu` compiler.
pub struct CheckProject {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// Where the test sources live; the checker runs from here.
    pub root: PathBuf,
    /// Holds the fake compiler; put it on PATH to exercise discovery.
    pub bin: PathBuf,
}

impl CheckProject {
    pub fn new() -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join("tests");
        let bin = temp_dir.path().join("bin");
        fs::create_dir_all(&root)?;
        fs::create_dir_all(&bin)?;
        Ok(CheckProject {
            temp_dir,
            root,
            bin,
        })
    }

    /// Returns a reference to the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a test source file named `name` under the project root.
    pub fn source(&self, name: &str, contents: &str) -> IoResult<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Installs a fake compiler that prints `output` on stdout and exits with `code`.
    pub fn compiler(&self, output: &str, code: i32) -> IoResult<PathBuf> {
        let canned = self.bin.join("zebu.out");
        fs::write(&canned, output)?;
        let script = self.bin.join("zebu");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\ncat '{}'\nexit {}\n",
                canned.display(),
                code
            ),
        )?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    /// A checker command running from the project root with logging off.
    pub fn checker(&self) -> Command {
        let mut cmd = Command::cargo_bin("zebu-check").expect("zebu-check binary is built");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    /// Checks `test` against the fake compiler passed via `--compiler`.
    pub fn check(&self, test: &str) -> Command {
        let mut cmd = self.checker();
        cmd.arg("--compiler").arg(self.bin.join("zebu")).arg(test);
        cmd
    }

    /// PATH with the fake compiler's directory first.
    pub fn path_with_bin(&self) -> String {
        let inherited = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin.display(), inherited)
    }
}
