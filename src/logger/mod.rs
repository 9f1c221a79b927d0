//! The file-backed [`Logger`] and the [`Log`] interface it implements.
//!
//! # Write paths
//!
//! A logger writes in one of two modes, chosen at construction:
//!
//! * **Per write** (`use_stream = false`): every call opens the file for
//!   appending, takes a shared lock, writes, flushes, and closes it. Any
//!   number of per-write loggers can append to the same file at once, and
//!   nobody is locked out between calls.
//! * **Held stream** (`use_stream = true`): the file is opened on the first
//!   qualifying call and kept open, exclusively locked, until the logger is
//!   disposed. Any other logger that tries to write to the same path while the
//!   stream is held fails with [`Error::FileLocked`].
//!
//! # Lifecycle
//!
//! A logger is ready as soon as it is constructed, and no I/O happens until
//! the first record passes the severity filter. [`Logger::dispose`] releases
//! the held stream exactly once; after that, every call to [`Log::log`] fails
//! with [`Error::LoggerDisposed`]. Dropping a logger disposes it.
//!
//! Disposal must not race with an in-flight write on another thread; callers
//! are expected to join their writers first.

use crate::error::{Error, Result};
use crate::formatter::cause::flatten_cause_chain;
use crate::formatter::record::Record;
use crate::severity::Severity;
use parking_lot::Mutex;
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

mod sink;
use sink::Sink;

/// A type that writes severity-tagged messages to a log file.
///
/// Only [`log`], and the three accessors, are required; everything else is
/// built on top of them.
///
/// [`log`]: Log::log
pub trait Log {
    /// The log file this logger writes to.
    fn log_file(&self) -> &Path;

    /// Whether this logger keeps a single, exclusively locked stream open
    /// instead of opening the file for every record.
    fn use_stream(&self) -> bool;

    /// The least severe records this logger writes.
    fn minimum_severity(&self) -> Severity;

    /// Appends `message` to the log file as a single line, unless `severity`
    /// is below [`minimum_severity`].
    ///
    /// Filtered records are silent successes.
    ///
    /// # Errors
    ///
    /// * [`Error::LoggerDisposed`] if the logger was disposed.
    /// * [`Error::FileLocked`] if another writer holds the file.
    /// * [`Error::LogWrite`] if the file could not be opened or written.
    ///
    /// [`minimum_severity`]: Log::minimum_severity
    fn log(&self, severity: Severity, message: &str) -> Result<()>;

    /// Returns `true` if records at `severity` pass this logger's filter.
    fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.minimum_severity()
    }

    /// Logs `error` and every error in its [`source`] chain as one line.
    ///
    /// The chain is only walked if `severity` passes the filter.
    ///
    /// # Errors
    ///
    /// The same as [`log`], plus [`Error::InvalidChain`] if the cause chain
    /// is cyclic.
    ///
    /// [`source`]: std::error::Error::source
    /// [`log`]: Log::log
    fn log_error(&self, severity: Severity, error: &(dyn StdError + 'static)) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let message = flatten_cause_chain(error)?;
        self.log(severity, &message)
    }

    /// Logs `message` at [`Severity::Debug`].
    fn debug(&self, message: &str) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    /// Logs `message` at [`Severity::Info`].
    fn info(&self, message: &str) -> Result<()> {
        self.log(Severity::Info, message)
    }

    /// Logs `message` at [`Severity::Warning`].
    fn warning(&self, message: &str) -> Result<()> {
        self.log(Severity::Warning, message)
    }

    /// Logs `message` at [`Severity::Error`].
    fn error(&self, message: &str) -> Result<()> {
        self.log(Severity::Error, message)
    }

    /// Logs `message` at [`Severity::Critical`].
    fn critical(&self, message: &str) -> Result<()> {
        self.log(Severity::Critical, message)
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn log_file(&self) -> &Path {
        (**self).log_file()
    }

    fn use_stream(&self) -> bool {
        (**self).use_stream()
    }

    fn minimum_severity(&self) -> Severity {
        (**self).minimum_severity()
    }

    fn log(&self, severity: Severity, message: &str) -> Result<()> {
        (**self).log(severity, message)
    }

    fn log_error(&self, severity: Severity, error: &(dyn StdError + 'static)) -> Result<()> {
        (**self).log_error(severity, error)
    }
}

enum State {
    Ready(Sink),
    Disposed,
}

/// A synchronous, single-file [`Log`] implementation.
///
/// See the [module level documentation][self] for the two write paths and
/// the disposal rules.
///
/// # Examples
///
/// ```
/// use metalog::{Log, Logger, Severity};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let logger = Logger::new(dir.path().join("app.log"), Severity::Info, false);
///
/// logger.debug("filtered out")?;
/// logger.info("service started")?;
/// logger.dispose()?;
///
/// let contents = std::fs::read_to_string(logger.log_file())?;
/// assert_eq!(contents.lines().count(), 1);
/// assert!(contents.contains("INFO     service started"));
/// # Ok(())
/// # }
/// ```
pub struct Logger {
    log_file: PathBuf,
    minimum_severity: Severity,
    use_stream: bool,
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger that writes to `log_file`.
    ///
    /// No I/O is performed until the first record passes the filter.
    pub fn new(log_file: impl Into<PathBuf>, minimum_severity: Severity, use_stream: bool) -> Self {
        Logger {
            log_file: log_file.into(),
            minimum_severity,
            use_stream,
            state: Mutex::new(State::Ready(Sink::new(use_stream))),
        }
    }

    /// Creates a logger and, if it uses a held stream, opens and locks the
    /// file immediately.
    ///
    /// # Errors
    ///
    /// [`Error::FileLocked`] or [`Error::LogWrite`] if the stream could not
    /// be opened.
    pub fn open(
        log_file: impl Into<PathBuf>,
        minimum_severity: Severity,
        use_stream: bool,
    ) -> Result<Self> {
        let logger = Logger::new(log_file, minimum_severity, use_stream);
        {
            let mut state = logger.state.lock();
            if let State::Ready(sink) = &mut *state {
                sink.open_eagerly(&logger.log_file)?;
            }
        }
        Ok(logger)
    }

    /// Flushes and closes the held stream, if one is open, and marks the
    /// logger as disposed.
    ///
    /// Calling this more than once is a no-op that returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// [`Error::LogWrite`] if the final flush or unlock fails. The logger is
    /// disposed either way.
    pub fn dispose(&self) -> Result<()> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, State::Disposed) {
            State::Ready(mut sink) => sink.close(&self.log_file),
            State::Disposed => Ok(()),
        }
    }

    /// Returns `true` once [`dispose`] has been called.
    ///
    /// [`dispose`]: Logger::dispose
    pub fn is_disposed(&self) -> bool {
        matches!(*self.state.lock(), State::Disposed)
    }
}

impl Log for Logger {
    fn log_file(&self) -> &Path {
        &self.log_file
    }

    fn use_stream(&self) -> bool {
        self.use_stream
    }

    fn minimum_severity(&self) -> Severity {
        self.minimum_severity
    }

    fn log(&self, severity: Severity, message: &str) -> Result<()> {
        let mut state = self.state.lock();

        let sink = match &mut *state {
            State::Ready(sink) => sink,
            State::Disposed => {
                return Err(Error::LoggerDisposed {
                    path: self.log_file.clone(),
                })
            }
        };

        if !self.is_enabled(severity) {
            drop(state);
            trace!(%severity, minimum = %self.minimum_severity, "record filtered");
            return Ok(());
        }

        let line = Record::now(severity, message).to_line();
        sink.write(&self.log_file, &line)
    }

    // Disposal is checked before the filter, as in `log`, and both before
    // the chain is walked.
    fn log_error(&self, severity: Severity, error: &(dyn StdError + 'static)) -> Result<()> {
        if matches!(*self.state.lock(), State::Disposed) {
            return Err(Error::LoggerDisposed {
                path: self.log_file.clone(),
            });
        }
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let message = flatten_cause_chain(error)?;
        self.log(severity, &message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_file", &self.log_file)
            .field("minimum_severity", &self.minimum_severity)
            .field("use_stream", &self.use_stream)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.dispose();
    }
}
