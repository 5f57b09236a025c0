//! Integer parsing for date components given as text.
//!
//! Two contracts are offered. [`parse_lenient`] follows C `atoi`: leading
//! whitespace, an optional sign, then as many digits as are present; text
//! without digits is `0`. [`parse_strict`] accepts only a complete integer.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::error::WetonError;

/// Position of a component in `DAY MONTH YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgPosition {
    /// First positional argument.
    Day,
    /// Second positional argument.
    Month,
    /// Third positional argument.
    Year,
}

impl Display for ArgPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Month => f.write_str("month"),
            Self::Year => f.write_str("year"),
        }
    }
}

/// How date components are converted from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// `atoi` semantics: malformed text becomes `0`, never fails.
    #[default]
    Lenient,
    /// Reject anything that is not a whole `i32`.
    Strict,
}

/// Parse `text` with `atoi` semantics.
///
/// Magnitudes beyond `i32` saturate at `i32::MIN` / `i32::MAX`.
pub fn parse_lenient(text: &str) -> i32 {
    // C isspace: space and \t \n \v \f \r
    let s = text.trim_start_matches(|c: char| matches!(c, ' ' | '\t'..='\r'));
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value * 10 + i64::from(b - b'0');
        if value > limit {
            break;
        }
    }

    let signed = if negative { -value } else { value };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse `text` as a whole `i32`, ignoring surrounding whitespace.
pub fn parse_strict(text: &str, position: ArgPosition) -> Result<i32, WetonError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| WetonError::MalformedArgument {
            position,
            text: text.to_string(),
        })
}

/// Lenient value of `text`, and whether it differs from a whole-integer read.
fn coerce_lenient(text: &str) -> (i32, bool) {
    let value = parse_lenient(text);
    let coerced = text.trim().parse::<i32>().is_err();
    (value, coerced)
}

/// Parse one component according to `mode`.
pub fn parse_component(
    text: &str,
    position: ArgPosition,
    mode: ParseMode,
) -> Result<i32, WetonError> {
    match mode {
        ParseMode::Lenient => {
            let (value, coerced) = coerce_lenient(text);
            if coerced {
                debug!(%position, text, value, "lenient coercion");
            }
            Ok(value)
        }
        ParseMode::Strict => parse_strict(text, position),
    }
}
