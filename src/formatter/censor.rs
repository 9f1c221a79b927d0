//! Mask the tail of sensitive text before it reaches a log file.

use crate::error::{Error, Result};

/// The fraction of characters [`censor`] leaves readable.
pub const DEFAULT_CENSOR_FRACTION: f64 = 0.4;

/// The character [`censor`] masks with.
pub const DEFAULT_CENSOR_CHAR: char = '•';

/// Censors `text` with [`DEFAULT_CENSOR_FRACTION`] and
/// [`DEFAULT_CENSOR_CHAR`].
///
/// # Examples
///
/// ```
/// assert_eq!(metalog::formatter::censor::censor("abcdefghij"), "abcd••••••");
/// ```
pub fn censor(text: &str) -> String {
    let mut censored = String::with_capacity(text.len());
    push_censored(&mut censored, text, DEFAULT_CENSOR_FRACTION, DEFAULT_CENSOR_CHAR);
    censored
}

/// Keeps the leading `fraction` of the characters in `text` and replaces the
/// rest with `censor_char`.
///
/// Characters are counted as Unicode scalar values, and the number kept is
/// rounded down.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `fraction` is not within `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use metalog::formatter::censor::censor_with;
///
/// assert_eq!(censor_with("hunter2", 0.5, '*').unwrap(), "hun****");
/// assert_eq!(censor_with("", 0.4, '*').unwrap(), "");
/// assert!(censor_with("hunter2", 1.5, '*').is_err());
/// ```
pub fn censor_with(text: &str, fraction: f64, censor_char: char) -> Result<String> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::invalid_argument(
            "fraction",
            format!("expected a value between 0 and 1, found {}", fraction),
        ));
    }

    let mut censored = String::with_capacity(text.len());
    push_censored(&mut censored, text, fraction, censor_char);
    Ok(censored)
}

fn push_censored(writer: &mut String, text: &str, fraction: f64, censor_char: char) {
    let length = text.chars().count();
    let keep = (length as f64 * fraction).floor() as usize;

    writer.extend(text.chars().take(keep));
    writer.extend(std::iter::repeat(censor_char).take(length - keep));
}
