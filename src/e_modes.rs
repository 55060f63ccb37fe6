use crate::prelude::*;
use crate::{compile_file, match_annotations, CheckConfig, CompilerRun, Discrepancy, TestFile, TestMode};

/// The outcome of checking one test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// A `// compile` test where the compiler printed something or exited non-zero.
    CompileFailure { name: String, run: CompilerRun },
    /// A `// error` test whose annotations and diagnostics disagree.
    Unmatched {
        name: String,
        discrepancies: Vec<Discrepancy>,
    },
    /// `// run` tests are not supported.
    RunUnsupported,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Reads the header of `test` and runs the matching checker.
pub fn dispatch(config: &CheckConfig, test: &TestFile) -> Result<Verdict> {
    let mode = test.mode()?;
    info!("{}: {} test", test.name, mode);
    match mode {
        TestMode::Compile => {
            let run = compile_file(config, Path::new(&test.name))?;
            Ok(check_compile(test, run))
        }
        TestMode::Error => {
            let run = compile_file(config, Path::new(&test.name))?;
            Ok(check_error(test, &run))
        }
        TestMode::Run => Ok(check_run(test)),
    }
}

pub fn check_compile(test: &TestFile, run: CompilerRun) -> Verdict {
    if run.is_clean() {
        Verdict::Pass
    } else {
        Verdict::CompileFailure {
            name: test.name.clone(),
            run,
        }
    }
}

/// The exit status is not consulted here; only the annotations decide.
pub fn check_error(test: &TestFile, run: &CompilerRun) -> Verdict {
    let discrepancies = match_annotations(test, &run.output);
    if discrepancies.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Unmatched {
            name: test.name.clone(),
            discrepancies,
        }
    }
}

pub fn check_run(test: &TestFile) -> Verdict {
    debug!("{}: run mode requested", test.name);
    Verdict::RunUnsupported
}
