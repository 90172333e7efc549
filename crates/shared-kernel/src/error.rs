// crates/shared-kernel/src/error.rs
use std::{fmt, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LogTallyError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LogTallyError>,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, LogTallyError>;

/// Rejection reasons produced by the line parser.
///
/// Both variants are recovered locally: the caller drops the line and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed line: {reason}")]
    MalformedLine { reason: &'static str },

    #[error("invalid line number '{raw}': {source}")]
    InvalidLineNumber {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    pub const fn malformed(reason: &'static str) -> Self {
        Self::MalformedLine { reason }
    }
}

/// Which end of a summary's time span a timestamp was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryBound {
    Start,
    End,
}

impl fmt::Display for SummaryBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Domain-layer errors. Both are fatal for the run.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No summaries to reduce: at least one log file is required")]
    EmptyBatch,

    #[error("Unable to parse {bound} time '{timestamp}': {source}")]
    TimestampFormat {
        bound: SummaryBound,
        timestamp: String,
        #[source]
        source: TimestampError,
    },
}

/// Why a timestamp did not match `YYYY-MM-DD HH:MM:SS[.fff]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected layout YYYY-MM-DD HH:MM:SS.fff")]
    Layout,

    #[error(transparent)]
    Value(#[from] chrono::ParseError),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render {format} output: {details}")]
    Render { format: String, details: String },

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Write(err)
    }
}

impl From<std::io::Error> for LogTallyError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for LogTallyError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LogTallyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LogTallyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LogTallyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
