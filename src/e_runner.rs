use crate::prelude::*;
use crate::CheckConfig;
use std::process::ExitStatus;

/// What the compiler printed on stdout and how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerRun {
    pub output: String,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CompilerRun {
    pub fn from_status(stdout: &[u8], status: ExitStatus) -> Self {
        CompilerRun {
            output: String::from_utf8_lossy(stdout).into_owned(),
            code: status.code(),
        }
    }

    /// A run is clean when the compiler had nothing to say and exited 0.
    pub fn is_clean(&self) -> bool {
        self.output.is_empty() && self.code == Some(0)
    }
}

/// Runs `<compiler> <test>` and waits for it to finish.
///
/// Only stdout is captured; stderr passes straight through to the terminal.
pub fn compile_file(config: &CheckConfig, test: &Path) -> Result<CompilerRun> {
    let mut cmd = Command::new(&config.compiler);
    cmd.arg(test)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    if log_enabled!(Level::Debug) {
        let full_command = format!(
            "{} {}",
            cmd.get_program().to_string_lossy(),
            cmd.get_args()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        debug!("Running: {}", full_command);
    }

    let output = cmd
        .output()
        .with_context(|| format!("failed to run {}", config.compiler.display()))?;
    let run = CompilerRun::from_status(&output.stdout, output.status);
    debug!(
        "compiler exited with {:?}, {} bytes of output",
        run.code,
        run.output.len()
    );
    Ok(run)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("zebu");
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = script(dir.path(), "echo \"$1:3:5: undefined: y\"\nexit 2\n");
        let config = CheckConfig::new(compiler);
        let run = compile_file(&config, Path::new("t1.zb")).unwrap();
        assert_eq!(run.output, "t1.zb:3:5: undefined: y\n");
        assert_eq!(run.code, Some(2));
        assert!(!run.is_clean());
    }

    #[test]
    fn silent_zero_exit_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = script(dir.path(), "exit 0\n");
        let run = compile_file(&CheckConfig::new(compiler), Path::new("ok.zb")).unwrap();
        assert!(run.is_clean());
    }

    #[test]
    fn stderr_is_not_captured() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = script(dir.path(), "echo noise >&2\nexit 0\n");
        let run = compile_file(&CheckConfig::new(compiler), Path::new("ok.zb")).unwrap();
        assert_eq!(run.output, "");
        assert!(run.is_clean());
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let config = CheckConfig::new("/no/such/dir/zebu");
        let err = compile_file(&config, Path::new("t1.zb")).unwrap_err();
        assert!(err.to_string().contains("failed to run /no/such/dir/zebu"));
    }
}
