//! Errors returned by loggers and formatters.
//!
//! Every failure is distinguishable by its [`ErrorKind`], so callers can
//! decide whether to retry, escalate, or ignore.
use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Shorthand for results returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned by [`Logger`][crate::Logger] operations and by the
/// [`formatter`][crate::formatter] helpers.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An argument was outside of its accepted range.
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// A cause chain was cyclic or deeper than
    /// [`MAX_CAUSE_DEPTH`][crate::formatter::cause::MAX_CAUSE_DEPTH].
    InvalidChain {
        /// The number of causes walked before giving up.
        depth: usize,
    },
    /// The log file is exclusively held by another writer.
    FileLocked {
        /// The contended log file.
        path: PathBuf,
    },
    /// Opening, writing, or flushing the log file failed.
    LogWrite {
        /// The log file being written.
        path: PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
    /// The logger was used after it was disposed.
    LoggerDisposed {
        /// The log file of the disposed logger.
        path: PathBuf,
    },
}

/// The kind of an [`Error`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidArgument,
    InvalidChain,
    FileLocked,
    LogWrite,
    LoggerDisposed,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::InvalidChain { .. } => ErrorKind::InvalidChain,
            Error::FileLocked { .. } => ErrorKind::FileLocked,
            Error::LogWrite { .. } => ErrorKind::LogWrite,
            Error::LoggerDisposed { .. } => ErrorKind::LoggerDisposed,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn log_write(path: &Path, source: io::Error) -> Self {
        Error::LogWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{}`: {}", name, reason)
            }
            Error::InvalidChain { depth } => {
                write!(f, "cause chain is cyclic or deeper than {} errors", depth)
            }
            Error::FileLocked { path } => {
                write!(f, "log file {} is locked by another writer", path.display())
            }
            Error::LogWrite { path, source } => {
                write!(f, "failed to write log file {}: {}", path.display(), source)
            }
            Error::LoggerDisposed { path } => {
                write!(f, "logger for {} has been disposed", path.display())
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::LogWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidChain => "invalid cause chain",
            ErrorKind::FileLocked => "file locked",
            ErrorKind::LogWrite => "log write failed",
            ErrorKind::LoggerDisposed => "logger disposed",
        })
    }
}
