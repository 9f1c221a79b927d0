//! Write severity-tagged messages and error chains to a single log file.
//!
//! # Overview
//!
//! `metalog` is a small, synchronous, line-oriented logger. A [`Logger`] owns
//! a log file path, a minimum [`Severity`], and optionally a held-open file
//! stream. Every call to [`Log::log`] either returns immediately because the
//! record was filtered, or appends exactly one line to the file and flushes it
//! before returning.
//!
//! There is no rotation, batching, background thread, or remote sink. If you
//! need those, this is not the crate for you.
//!
//! # Getting started
//!
//! ```
//! use metalog::{Log, Logger, Severity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! let logger = Logger::new(dir.path().join("app.log"), Severity::Info, false);
//!
//! logger.info("Hello, world!")?;
//! # Ok(())
//! # }
//! ```
//! ```log
//! 2022-03-24T16:08:17.761149+01:00 INFO     Hello, world!
//! ```
//! For more configuration options, see the
//! [`builder` module documentation][mod@crate::builder].
//!
//! # Logging error chains
//!
//! [`Log::log_error`] walks an error and its [`source`]s, and writes the
//! messages as a single record.
//! ```
//! # use metalog::{Log, Logger, Severity};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let logger = Logger::new(dir.path().join("app.log"), Severity::Info, false);
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "the db has been breached");
//! logger.log_error(Severity::Critical, &error)?;
//! # Ok(())
//! # }
//! ```
//! ```log
//! 2022-03-24T16:08:17.761149+01:00 CRITICAL the db has been breached
//! ```
//! Chains longer than [`MAX_CAUSE_DEPTH`] are treated as cyclic and rejected
//! with [`Error::InvalidChain`].
//!
//! # Held streams and file locking
//!
//! By default every record opens, writes, and closes the log file. With
//! `use_stream` set, the first record opens the file and keeps it
//! exclusively locked until [`Logger::dispose`] is called or the logger is
//! dropped. A second logger writing to the same file in the meantime fails
//! with [`Error::FileLocked`] instead of blocking.
//!
//! # Rendering trees
//!
//! The [`formatter`] module also exposes the helpers used to build log text:
//! ```
//! use metalog::formatter::{censor, render_lines};
//!
//! assert_eq!(
//!     render_lines(&["request", "auth", "db"], false, true),
//!     "┌ request\n├ auth\n└ db",
//! );
//! assert_eq!(censor("s3cr3t-t0k3n"), "s3cr••••••••");
//! ```
//!
//! # Bridging `tracing`
//!
//! [`MetaLayer`] is a [`tracing_subscriber::Layer`] that forwards every
//! `tracing` event to a [`Log`] implementation.
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `json`: Enables `serde` support for [`Severity`] and
//! [`LoggerConfig`], and [`LoggerConfig::from_json`].
//!
//! [`source`]: std::error::Error::source
//! [`MAX_CAUSE_DEPTH`]: crate::formatter::cause::MAX_CAUSE_DEPTH
//! [`LoggerConfig`]: crate::builder::LoggerConfig
//! [`LoggerConfig::from_json`]: crate::builder::LoggerConfig::from_json

pub mod builder;
pub mod error;
pub mod formatter;
pub mod layer;
pub mod logger;
pub mod paths;
pub mod severity;
#[doc(hidden)]
#[macro_use]
mod cfg;

pub use crate::builder::builder;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::layer::MetaLayer;
pub use crate::logger::{Log, Logger};
pub use crate::severity::Severity;
