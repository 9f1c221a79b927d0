//! Walk and flatten chains of causally linked errors.
//!
//! See [`flatten_cause_chain`] for more details.

use crate::error::{Error, Result};
use std::error::Error as StdError;
use std::fmt::Write;

/// The deepest cause chain that will be walked before it is treated as
/// cyclic.
pub const MAX_CAUSE_DEPTH: usize = 64;

/// Indentation added for every level of the chain.
pub const INDENT_STEP: usize = 4;

/// One error in a cause chain.
#[derive(Clone, Copy, Debug)]
pub struct Cause<'a> {
    /// How many `source()` hops separate this error from the root.
    pub depth: usize,
    /// The logical indentation of this error: the base indent plus
    /// [`INDENT_STEP`] for every level.
    pub indent: usize,
    /// The error itself.
    pub error: &'a (dyn StdError + 'static),
}

/// An iterator over an error and its transitive [`source`]s.
///
/// The iterator yields `Err` once, and then stops, if the chain is longer
/// than [`MAX_CAUSE_DEPTH`].
///
/// # Examples
///
/// ```
/// use metalog::formatter::cause::CauseChain;
/// use std::io;
///
/// let error = io::Error::new(io::ErrorKind::Other, "disk on fire");
/// let depths: Vec<usize> = CauseChain::new(&error)
///     .map(|cause| cause.map(|c| c.depth))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(depths, [0]);
/// ```
///
/// [`source`]: std::error::Error::source
#[derive(Clone, Debug)]
pub struct CauseChain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    depth: usize,
    base_indent: usize,
}

impl<'a> CauseChain<'a> {
    /// Starts walking at `root`.
    pub fn new(root: &'a (dyn StdError + 'static)) -> Self {
        CauseChain {
            next: Some(root),
            depth: 0,
            base_indent: 0,
        }
    }

    /// Sets the indentation reported for the root error.
    pub fn with_indent(self, base_indent: usize) -> Self {
        CauseChain {
            base_indent,
            ..self
        }
    }
}

impl<'a> Iterator for CauseChain<'a> {
    type Item = Result<Cause<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let error = self.next.take()?;

        if self.depth >= MAX_CAUSE_DEPTH {
            return Some(Err(Error::InvalidChain { depth: self.depth }));
        }

        let cause = Cause {
            depth: self.depth,
            indent: self.base_indent + INDENT_STEP * self.depth,
            error,
        };

        self.next = error.source();
        self.depth += 1;

        Some(Ok(cause))
    }
}

/// Flattens `error` and all of its causes into a single string.
///
/// The messages are concatenated in order, from the outermost error to the
/// innermost cause, until an error with no [`source`] is reached.
///
/// # Errors
///
/// Returns [`Error::InvalidChain`] if the chain is longer than
/// [`MAX_CAUSE_DEPTH`], which is how cyclic chains present.
///
/// # Examples
///
/// ```
/// use metalog::formatter::cause::flatten_cause_chain;
/// use std::{error::Error, fmt, io};
///
/// #[derive(Debug)]
/// struct LoadConfig(io::Error);
///
/// impl fmt::Display for LoadConfig {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("failed to load config: ")
///     }
/// }
///
/// impl Error for LoadConfig {
///     fn source(&self) -> Option<&(dyn Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// let error = LoadConfig(io::Error::new(io::ErrorKind::NotFound, "no such file"));
///
/// assert_eq!(
///     flatten_cause_chain(&error).unwrap(),
///     "failed to load config: no such file",
/// );
/// ```
///
/// [`source`]: std::error::Error::source
pub fn flatten_cause_chain(error: &(dyn StdError + 'static)) -> Result<String> {
    flatten_cause_chain_indented(error, 0)
}

/// Same as [`flatten_cause_chain`], starting the logical indentation at
/// `base_indent`.
///
/// The indentation is tracked per cause (see [`Cause::indent`]) but is not
/// written into the flattened string.
pub fn flatten_cause_chain_indented(
    error: &(dyn StdError + 'static),
    base_indent: usize,
) -> Result<String> {
    let mut message = String::new();

    for cause in CauseChain::new(error).with_indent(base_indent) {
        let cause = cause?;
        // Writing into a `String` cannot fail.
        let _ = write!(message, "{}", cause.error);
    }

    Ok(message)
}
