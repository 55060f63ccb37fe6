use crate::{Discrepancy, Verdict};
use std::fmt::Write;

/// Horizontal rule framing every failure block.
pub const RULE: &str = "----------------------------------------------------------------------";

fn block(title: &str, body: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

/// The block printed when a `// compile` test produced output or a bad exit code.
pub fn compile_failure(name: &str, output: &str) -> String {
    block(&format!("BUG: {} failed to compile", name), output)
}

/// The block printed when an `// error` test left discrepancies behind.
pub fn unmatched_errors(name: &str, discrepancies: &[Discrepancy]) -> String {
    let body: String = discrepancies.iter().map(|d| format!("{}\n", d)).collect();
    block(&format!("BUG: {} unmatched errors ", name), &body)
}

/// Text shown for a verdict; empty when the test passed.
pub fn render(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Pass => String::new(),
        Verdict::CompileFailure { name, run } => compile_failure(name, &run.output),
        Verdict::Unmatched {
            name,
            discrepancies,
        } => unmatched_errors(name, discrepancies),
        Verdict::RunUnsupported => "error: run not yet implemented\n".to_string(),
    }
}
