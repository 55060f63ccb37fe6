// common/test_prelude.rs

// Everything an integration test needs to drive the zebu-check binary.
pub use super::test_utils::CheckProject;
pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use predicates::str::contains;
