//! Turn messages, error chains, and line lists into log text.
//!
//! * [`tree`] renders lines with box-drawing connectors.
//! * [`cause`] flattens an error and its sources into one message.
//! * [`censor`] masks the tail of sensitive text.
//! * [`record`] renders a single record into a log line.
//!
//! None of these functions retain or mutate their inputs; each returns a
//! newly owned `String`.

pub mod cause;
pub mod censor;
pub mod record;
pub mod tree;

pub use cause::{flatten_cause_chain, CauseChain};
pub use censor::{censor, censor_with};
pub use record::Record;
pub use tree::{render_lines, render_text};
