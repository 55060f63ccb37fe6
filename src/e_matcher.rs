//! Reconciles `//ERROR` annotations with the diagnostics the compiler printed.
//!
//! Every source line after the header is visited once. A line without an
//! annotation must have no diagnostics. A line with an annotation must have at
//! least one diagnostic, and the compiler output as a whole must contain a
//! diagnostic anchored to that line whose message holds the expected text.

use crate::prelude::*;
use crate::{Annotation, DiagnosticIndex, Expectation, TestFile};
use std::fmt;

/// A single mismatch between the annotations and the compiler output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// A diagnostic on a line that carries no annotation.
    Unexpected { actual: String },
    /// An annotated line the compiler said nothing about.
    Missing { expected: Expectation },
    /// The compiler reported the annotated line, but no message in the output
    /// contains the expected text.
    Mismatched {
        actual: String,
        expected: Expectation,
    },
}

impl Discrepancy {
    /// The diagnostic text, or `""` when there is none.
    pub fn actual(&self) -> &str {
        match self {
            Discrepancy::Unexpected { actual } | Discrepancy::Mismatched { actual, .. } => {
                actual.as_str()
            }
            Discrepancy::Missing { .. } => "",
        }
    }

    /// The rendered anchor pattern, or `""` when nothing was expected.
    pub fn pattern(&self) -> String {
        match self {
            Discrepancy::Unexpected { .. } => String::new(),
            Discrepancy::Missing { expected } | Discrepancy::Mismatched { expected, .. } => {
                expected.to_string()
            }
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.actual(), self.pattern())
    }
}

/// Matches the annotations in `test` against `output`, returning every
/// discrepancy in source order. An empty result means the test passed.
pub fn match_annotations(test: &TestFile, output: &str) -> Vec<Discrepancy> {
    let index = DiagnosticIndex::from_output(output);
    let mut found = Vec::new();

    for (ln, source) in test.numbered_body() {
        let bucket = index.get(ln).unwrap_or_default();

        let Some(annotation) = Annotation::scan(ln, source) else {
            found.extend(bucket.iter().map(|actual| Discrepancy::Unexpected {
                actual: actual.clone(),
            }));
            continue;
        };

        let expected = annotation.expectation(&test.name);
        if bucket.is_empty() {
            debug!("line {}: nothing reported for {}", ln, expected);
            found.push(Discrepancy::Missing { expected });
            continue;
        }

        // The whole output is searched, not just this line's bucket.
        if expected.is_satisfied_by(output) {
            debug!("line {}: satisfied {}", ln, expected);
            continue;
        }
        debug!("line {}: {} reported, none match {}", ln, bucket.len(), expected);
        found.extend(bucket.iter().map(|actual| Discrepancy::Mismatched {
            actual: actual.clone(),
            expected: expected.clone(),
        }));
    }

    found
}
