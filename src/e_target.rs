// src/e_target.rs
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// The test mode declared on the first line of a test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestMode {
    /// The compiler must print nothing and exit 0.
    Compile,
    /// The compiler's diagnostics must match the `//ERROR` annotations.
    Error,
    /// Declared but not supported yet.
    Run,
}

impl TestMode {
    pub const ALL: [TestMode; 3] = [TestMode::Compile, TestMode::Error, TestMode::Run];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestMode::Compile => "compile",
            TestMode::Error => "error",
            TestMode::Run => "run",
        }
    }

    /// Parses a header line of the shape `// <mode>`.
    ///
    /// The line is split on whitespace; the first token must be exactly `//`
    /// and the second must name a mode. Anything after that is ignored.
    pub fn from_header(line: &str) -> Result<TestMode> {
        let mut toks = line.split_whitespace();
        let marker = toks.next();
        let command = toks.next().unwrap_or("");
        if marker != Some("//") {
            bail!("unexpected command {}", command);
        }
        command.parse()
    }
}

impl FromStr for TestMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        TestMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| anyhow!("unexpected command {}", s))
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test source file, split into its header and the remaining lines.
#[derive(Debug, Clone)]
pub struct TestFile {
    /// The path exactly as given on the command line. Diagnostics are anchored to it.
    pub name: String,
    pub header: String,
    /// Every line after the header. `body[0]` is source line 2.
    pub body: Vec<String>,
}

impl TestFile {
    pub fn open(path: &Path) -> Result<TestFile> {
        if !path.is_file() {
            bail!("file not found: {}", path.display());
        }
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(TestFile::from_source(
            &path.to_string_lossy(),
            &String::from_utf8_lossy(&bytes),
        ))
    }

    pub fn from_source(name: &str, source: &str) -> TestFile {
        let mut lines = source.lines();
        let header = lines.next().unwrap_or_default().to_string();
        TestFile {
            name: name.to_string(),
            header,
            body: lines.map(str::to_string).collect(),
        }
    }

    pub fn mode(&self) -> Result<TestMode> {
        TestMode::from_header(&self.header)
    }

    /// Source lines after the header, paired with their 1-based line numbers.
    pub fn numbered_body(&self) -> impl Iterator<Item = (usize, &str)> {
        self.body
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 2, line.as_str()))
    }
}
