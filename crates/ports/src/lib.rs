//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: reading a log file's full text
//! - [`progress`]: per-file notifications for the presentation layer
//!
//! These ports keep the use cases independent of the filesystem and of how
//! warnings reach the user.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod progress;
pub mod source;

pub use progress::{NullProgress, ProgressSink};
pub use source::LogSource;
