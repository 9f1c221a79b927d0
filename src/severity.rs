//! The ordered set of log severities.
//!
//! See [`Severity`] for more details.

use crate::cfg_json;
use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::Level;

/// How important a log record is.
///
/// Severities are totally ordered, from least to most severe:
/// ```txt
/// Debug < Info < Warning < Error < Critical
/// ```
/// A [`Logger`] writes a record only if its severity is at least the
/// logger's minimum severity.
///
/// # Examples
///
/// ```
/// use metalog::Severity;
///
/// assert!(Severity::Debug < Severity::Critical);
/// assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
/// assert_eq!(Severity::Error.to_string(), "ERROR");
/// ```
///
/// [`Logger`]: crate::Logger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The message is for debugging.
    Debug,
    /// The message is some kind of information or progress update.
    Info,
    /// The message is an ignorable warning or a usual error.
    Warning,
    /// The message is a runtime-affecting error or an unexpected failure.
    Error,
    /// The message is an unexpected failure which may prevent the
    /// application from continuing.
    Critical,
}

impl Severity {
    /// Every severity, from least to most severe.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Returns the position of this severity in the total order.
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
            Severity::Critical => 4,
        }
    }

    /// Returns the name written into log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" | "fatal" => Ok(Severity::Critical),
            _ => Err(Error::invalid_argument(
                "severity",
                format!("unknown severity `{}`", s),
            )),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE | Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

cfg_json! {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::{Serialize, Serializer};

    impl Serialize for Severity {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Severity {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = String::deserialize(deserializer)?;
            name.parse().map_err(de::Error::custom)
        }
    }
}
