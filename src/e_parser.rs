use crate::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// One line of compiler output, `<file>:<line>:<column>:<message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The whole line, trailing whitespace removed.
    pub text: String,
    pub file: String,
    /// `None` when the second field does not start with a decimal number.
    pub line: Option<usize>,
    pub column: String,
    pub message: String,
}

impl Diagnostic {
    /// Splits a line of compiler output into its colon separated fields.
    ///
    /// Missing fields are left empty; only the line number is interpreted.
    ///
    /// # Example
    /// ```
    /// use zebu_check::e_parser::Diagnostic;
    ///
    /// let diag = Diagnostic::parse("t1.zb:3:5: undefined: y\n");
    /// assert_eq!(diag.file, "t1.zb");
    /// assert_eq!(diag.line, Some(3));
    /// assert_eq!(diag.column, "5");
    /// assert_eq!(diag.message, " undefined: y");
    /// assert_eq!(diag.text, "t1.zb:3:5: undefined: y");
    /// ```
    pub fn parse(raw: &str) -> Diagnostic {
        let text = raw.trim_end().to_string();
        let mut fields = text.splitn(4, ':');
        let file = fields.next().unwrap_or_default().to_string();
        let line = fields.next().and_then(leading_number);
        let column = fields.next().unwrap_or_default().to_string();
        let message = fields.next().unwrap_or_default().to_string();
        Diagnostic {
            text,
            file,
            line,
            column,
            message,
        }
    }
}

/// Reads the decimal number at the start of `field`, ignoring leading
/// whitespace and anything after the digits.
fn leading_number(field: &str) -> Option<usize> {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}

/// Diagnostics grouped by the source line they were reported on.
///
/// Lines whose line number cannot be read are kept under key 0. No test file
/// has an annotation on line 0, so they never take part in matching.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticIndex {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl DiagnosticIndex {
    pub const UNKEYED: usize = 0;

    pub fn from_output(output: &str) -> Self {
        let mut index = DiagnosticIndex::default();
        for raw in output.lines() {
            if raw.trim().is_empty() {
                continue;
            }
            let diag = Diagnostic::parse(raw);
            let key = match diag.line {
                Some(line) => line,
                None => {
                    warn!("no line number in compiler output: {:?}", diag.text);
                    Self::UNKEYED
                }
            };
            index.buckets.entry(key).or_default().push(diag.text);
        }
        debug!(
            "indexed {} diagnostics over {} lines",
            index.buckets.values().map(Vec::len).sum::<usize>(),
            index.buckets.len()
        );
        index
    }

    /// Diagnostics reported for `line`, in output order.
    pub fn get(&self, line: usize) -> Option<&[String]> {
        self.buckets.get(&line).map(Vec::as_slice)
    }

    pub fn unkeyed(&self) -> &[String] {
        self.get(Self::UNKEYED).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// An `//ERROR <text>` comment found on a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub line: usize,
    /// The text the diagnostic message must contain. May be empty.
    pub expected: String,
}

impl Annotation {
    /// Looks for an annotation on source line `line`.
    ///
    /// The comment starts at the first `//` on the line and must be exactly two
    /// slashes long. The expected text is whatever follows the last `ERROR`.
    pub fn scan(line: usize, source: &str) -> Option<Annotation> {
        let start = source.find("//")?;
        let comment = &source[start..];
        let slashes = comment.len() - comment.trim_start_matches('/').len();
        let after_slashes = &comment[slashes..];
        let at = after_slashes.rfind("ERROR")?;
        if slashes != 2 {
            return None;
        }
        Some(Annotation {
            line,
            expected: after_slashes[at + "ERROR".len()..].trim().to_string(),
        })
    }

    pub fn expectation(&self, file: &str) -> Expectation {
        Expectation {
            file: file.to_string(),
            line: self.line,
            text: self.expected.clone(),
        }
    }
}

/// A diagnostic the compiler must emit: anchored to `file` and `line`, with a
/// message containing `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl Expectation {
    /// True when any line of `output` carries `<file>:<line>:`, a non-empty
    /// column field and then a message containing the expected text.
    pub fn is_satisfied_by(&self, output: &str) -> bool {
        let anchor = format!("{}:{}:", self.file, self.line);
        output.lines().any(|line| {
            line.match_indices(&anchor).any(|(at, _)| {
                let rest = &line[at + anchor.len()..];
                let mut chars = rest.char_indices();
                if chars.next().is_none() {
                    return false;
                }
                chars
                    .find(|&(_, c)| c == ':')
                    .map_or(false, |(colon, _)| rest[colon + 1..].contains(&self.text))
            })
        })
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:.+:.*{}", self.file, self.line, self.text)
    }
}
