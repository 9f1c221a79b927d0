//! Build a [`Logger`] with custom configuration values.
//!
//! To start, call [`builder`] to create a [`LoggerBuilder`], which configures
//! the [`Logger`] by chaining methods. Finish with [`build`].
//!
//! Configuration can also come from a [`LoggerConfig`], which can be
//! deserialized from JSON when the `json` feature is enabled.
//!
//! # Examples
//!
//! Writing warnings and above through a held stream:
//! ```
//! use metalog::{Log, Severity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! let logger = metalog::builder()
//!     .file(dir.path().join("bears.log"))
//!     .minimum_severity(Severity::Warning)
//!     .use_stream(true)
//!     .build()?;
//!
//! logger.info("if it's brown get down")?;
//! logger.warning("if it's black fight back")?;
//! logger.error("if it's white good night")?;
//! # Ok(())
//! # }
//! ```
//! ```log
//! 2022-03-24T16:08:17.761149+01:00 WARNING  if it's black fight back
//! 2022-03-24T16:08:17.761302+01:00 ERROR    if it's white good night
//! ```
//!
//! [`build`]: LoggerBuilder::build
use crate::cfg_json;
use crate::error::Result;
use crate::logger::Logger;
use crate::paths::default_log_file;
use crate::severity::Severity;
use std::path::PathBuf;

/// Creates a new [`LoggerBuilder`] with default settings.
///
/// See the [module level documentation][self] for details on using
/// [`builder`].
pub fn builder() -> LoggerBuilder {
    LoggerBuilder::default()
}

/// A type for configuring [`Logger`]s.
///
/// Defaults: the [default log file][crate::paths::default_log_file],
/// [`Severity::Info`], no held stream, lazy opening.
#[derive(Clone, Debug)]
pub struct LoggerBuilder {
    file: PathBuf,
    minimum_severity: Severity,
    use_stream: bool,
    eager: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        LoggerBuilder {
            file: default_log_file(),
            minimum_severity: Severity::default(),
            use_stream: false,
            eager: false,
        }
    }
}

impl LoggerBuilder {
    /// Sets the log file.
    pub fn file(self, file: impl Into<PathBuf>) -> Self {
        LoggerBuilder {
            file: file.into(),
            ..self
        }
    }

    /// Sets the least severe records that will be written.
    pub fn minimum_severity(self, minimum_severity: Severity) -> Self {
        LoggerBuilder {
            minimum_severity,
            ..self
        }
    }

    /// Keeps a single, exclusively locked stream open until the logger is
    /// disposed.
    pub fn use_stream(self, use_stream: bool) -> Self {
        LoggerBuilder { use_stream, ..self }
    }

    /// Opens the held stream in [`build`] rather than on the first write, so
    /// that lock contention is reported up front.
    ///
    /// Has no effect without [`use_stream`].
    ///
    /// [`build`]: LoggerBuilder::build
    /// [`use_stream`]: LoggerBuilder::use_stream
    pub fn eager(self, eager: bool) -> Self {
        LoggerBuilder { eager, ..self }
    }

    /// Applies every setting present in `config`.
    pub fn config(self, config: LoggerConfig) -> Self {
        LoggerBuilder {
            file: config.file.unwrap_or(self.file),
            minimum_severity: config.minimum_severity,
            use_stream: config.use_stream,
            eager: self.eager,
        }
    }

    /// Builds the [`Logger`].
    ///
    /// # Errors
    ///
    /// Only eager loggers can fail here, with the errors of
    /// [`Logger::open`].
    pub fn build(self) -> Result<Logger> {
        if self.eager {
            Logger::open(self.file, self.minimum_severity, self.use_stream)
        } else {
            Ok(Logger::new(self.file, self.minimum_severity, self.use_stream))
        }
    }
}

/// Serializable logger settings.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "json")]
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use metalog::builder::LoggerConfig;
/// use metalog::Severity;
///
/// let config = LoggerConfig::from_json(
///     r#"{ "file": "app.log", "minimum_severity": "warning", "use_stream": true }"#,
/// )?;
///
/// assert_eq!(config.minimum_severity, Severity::Warning);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "json"))]
/// # fn main() {}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct LoggerConfig {
    /// The log file; the default log file if `None`.
    pub file: Option<PathBuf>,
    /// The least severe records that will be written.
    pub minimum_severity: Severity,
    /// Whether to hold a single locked stream open.
    pub use_stream: bool,
}

cfg_json! {
    impl LoggerConfig {
        /// Parses a configuration from a JSON string.
        ///
        /// # Errors
        ///
        /// Returns the parse error if `json` is not a valid configuration.
        pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
            serde_json::from_str(json)
        }
    }
}
