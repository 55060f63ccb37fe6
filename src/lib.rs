#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::fs;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::Command;
    pub use std::process::Stdio;

    pub use anyhow::{anyhow, bail, Context, Result};
    pub use log::{debug, info, log_enabled, warn, Level};
}

pub mod e_cli;
pub use e_cli::Cli;
pub mod e_config;
pub use e_config::{CheckConfig, COMPILER_NAME};
pub mod e_target;
pub use e_target::{TestFile, TestMode};
pub mod e_runner;
pub use e_runner::{compile_file, CompilerRun};
pub mod e_parser;
pub use e_parser::{Annotation, Diagnostic, DiagnosticIndex, Expectation};
pub mod e_matcher;
pub use e_matcher::{match_annotations, Discrepancy};
pub mod e_modes;
pub use e_modes::{dispatch, Verdict};
pub mod e_reports;
