//! # zebu-check
//!
//! `zebu-check` runs the `zebu` compiler against one annotated test file and
//! exits 0 when the compiler behaved as the file says it should.
//!
//! ## Quick Start
//! ```sh
//! zebu-check tests/undefined_var.zb
//! RUST_LOG=debug zebu-check --compiler ./target/zebu tests/undefined_var.zb
//! ```

use clap::{CommandFactory, Parser};
use std::process::exit;
use zebu_check::prelude::*;
use zebu_check::{dispatch, e_reports, CheckConfig, Cli, TestFile, Verdict};

pub fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let Some(test) = cli.test.clone() else {
        // No test file is not an error, just show how to use the tool.
        let _ = Cli::command().print_help();
        println!();
        exit(0);
    };

    match check(&cli, &test) {
        Ok(verdict) => {
            print!("{}", e_reports::render(&verdict));
            if !verdict.is_pass() {
                exit(1);
            }
        }
        Err(err) => {
            println!("error: {:#}", err);
            exit(1);
        }
    }
}

fn check(cli: &Cli, test: &Path) -> Result<Verdict> {
    let config = CheckConfig::from_cli(cli)?;
    let file = TestFile::open(test)?;
    let verdict = dispatch(&config, &file)?;
    debug!("{}: {:?}", file.name, verdict);
    Ok(verdict)
}
