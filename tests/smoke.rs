//! CLI smoke tests against the built binary.

mod common;

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
