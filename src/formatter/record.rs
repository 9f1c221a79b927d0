//! The textual projection of a single log record.

use crate::severity::Severity;
use chrono::{DateTime, Local};
use std::fmt;

/// The platform newline written after every record.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// The platform newline written after every record.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A log record, alive only long enough to be rendered into a line.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    /// The severity the record was logged at.
    pub severity: Severity,
    /// When the record was created.
    pub timestamp: DateTime<Local>,
    /// The message to write.
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Creates a record timestamped with the current local time.
    pub fn now(severity: Severity, message: &'a str) -> Self {
        Record {
            severity,
            timestamp: Local::now(),
            message,
        }
    }

    /// Renders the record as one line, including the trailing
    /// [`LINE_ENDING`].
    ///
    /// # Examples
    ///
    /// ```
    /// use metalog::formatter::record::Record;
    /// use metalog::Severity;
    ///
    /// let line = Record::now(Severity::Warning, "low disk\nspace").to_line();
    ///
    /// assert!(line.contains("WARNING  low disk space"));
    /// assert_eq!(line.lines().count(), 1);
    /// ```
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(48 + self.message.len());
        // Writing into a `String` cannot fail.
        let _ = fmt::Write::write_fmt(&mut line, format_args!("{}", self));
        line.push_str(LINE_ENDING);
        line
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<32} ", self.timestamp.to_rfc3339())?;
        write!(f, "{:<8} ", self.severity)?;

        for (i, part) in self.message.lines().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
        }

        Ok(())
    }
}
