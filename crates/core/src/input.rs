//! Admission policy for typed numeric input.
//!
//! Every text field in the app feeds through one of these helpers before a
//! value reaches the engines. Anything that normalizes to an empty string is
//! treated as "no input" and never as zero.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("input contains no digits")]
    Empty,

    #[error("input is out of range: {raw}")]
    Overflow { raw: String },

    #[error("input is not a number: {raw}")]
    Malformed { raw: String },
}

/// Strips every non-digit character. Returns `None` when nothing is left.
#[must_use]
pub fn digits_only(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// Parses a non-negative whole number such as a problem count or grid bound.
///
/// # Errors
///
/// Returns `InputError::Empty` if no digits remain after stripping and
/// `InputError::Overflow` if the digits do not fit in a `u64`.
pub fn parse_whole(raw: &str) -> Result<u64, InputError> {
    let digits = digits_only(raw).ok_or(InputError::Empty)?;
    digits.parse::<u64>().map_err(|_| InputError::Overflow {
        raw: raw.to_string(),
    })
}

/// Parses a signed range bound. A leading `-` (after whitespace) is kept;
/// every other non-digit character is dropped.
///
/// # Errors
///
/// Returns `InputError::Empty` if no digits remain and
/// `InputError::Overflow` if the value does not fit in an `i64`.
pub fn parse_bound(raw: &str) -> Result<i64, InputError> {
    let negative = raw.trim_start().starts_with('-');
    let digits = digits_only(raw).ok_or(InputError::Empty)?;
    let text = if negative {
        format!("-{digits}")
    } else {
        digits
    };
    text.parse::<i64>().map_err(|_| InputError::Overflow {
        raw: raw.to_string(),
    })
}

/// Parses a typed answer. Digits and a single decimal point survive so that
/// division results such as `1.03` can be entered.
///
/// # Errors
///
/// Returns `InputError::Empty` if no digits remain and
/// `InputError::Malformed` if more than one decimal point was typed.
pub fn parse_answer(raw: &str) -> Result<f64, InputError> {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if !kept.chars().any(|ch| ch.is_ascii_digit()) {
        return Err(InputError::Empty);
    }
    if kept.matches('.').count() > 1 {
        return Err(InputError::Malformed {
            raw: raw.to_string(),
        });
    }
    kept.parse::<f64>().map_err(|_| InputError::Malformed {
        raw: raw.to_string(),
    })
}
