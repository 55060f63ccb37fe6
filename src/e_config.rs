use crate::prelude::*;
use crate::Cli;
use which::which;

/// Name of the compiler executable looked up on PATH.
pub const COMPILER_NAME: &str = "zebu";

/// Settings for one checker run. Built once in `main` and passed down by reference.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Absolute (or caller supplied) path of the compiler under test.
    pub compiler: PathBuf,
    pub verbose: bool,
}

impl CheckConfig {
    pub fn new(compiler: impl Into<PathBuf>) -> Self {
        CheckConfig {
            compiler: compiler.into(),
            verbose: false,
        }
    }

    /// Resolves the compiler either from `--compiler` or by searching PATH.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let compiler = match &cli.compiler {
            Some(path) => {
                if !path.is_file() {
                    bail!("{} not found", path.display());
                }
                path.clone()
            }
            None => locate_compiler(COMPILER_NAME)?,
        };
        debug!("using compiler {}", compiler.display());
        Ok(CheckConfig {
            compiler,
            verbose: cli.verbose,
        })
    }
}

/// Searches the executable search path for `name`.
pub fn locate_compiler(name: &str) -> Result<PathBuf> {
    which(name).map_err(|err| {
        debug!("which({}) failed: {}", name, err);
        anyhow!("{} not found", name)
    })
}
