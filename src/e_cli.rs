use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "zebu-check runs the zebu compiler against an annotated test file.",
    long_about = None
)]
pub struct Cli {
    #[arg(long, short = 'v', help = "Run verbosely (debug logging on stderr).")]
    pub verbose: bool,

    /// Use this compiler instead of searching PATH for `zebu`.
    #[arg(
        long,
        value_name = "PATH",
        help = "Path to the compiler under test (default: zebu found on PATH)."
    )]
    pub compiler: Option<PathBuf>,

    #[arg(help = "The test file to check.")]
    pub test: Option<PathBuf>,
}
