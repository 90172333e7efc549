use std::{
    fmt,
    ops::{Add, AddAssign},
};

use log_tally_shared_kernel::Frequency;
use serde::Serialize;

/// The four tallied severities. Any other token is kept on the record but not counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Case-sensitive exact match against the recognised tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-severity record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityFrequency {
    pub debug: Frequency,
    pub info: Frequency,
    pub warning: Frequency,
    pub error: Frequency,
}

impl SeverityFrequency {
    /// Count one record with the given token. Returns `false` when the token is not tallied.
    pub fn record(&mut self, token: &str) -> bool {
        match Severity::from_token(token) {
            Some(severity) => {
                self.slot_mut(severity).increment();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, severity: Severity) -> Frequency {
        match severity {
            Severity::Debug => self.debug,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// `(severity, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, Frequency)> + '_ {
        Severity::ALL.into_iter().map(|severity| (severity, self.get(severity)))
    }

    pub fn total(&self) -> Frequency {
        self.iter().map(|(_, count)| count).sum()
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut Frequency {
        match severity {
            Severity::Debug => &mut self.debug,
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
        }
    }
}

impl Add for SeverityFrequency {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for SeverityFrequency {
    fn add_assign(&mut self, rhs: Self) {
        self.debug += rhs.debug;
        self.info += rhs.info;
        self.warning += rhs.warning;
        self.error += rhs.error;
    }
}
