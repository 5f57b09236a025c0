//! Error types for weton argument handling.

use crate::args::ArgPosition;

/// Errors from turning command-line text into a calendar date.
///
/// The congruence itself is total; only strict argument parsing can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum WetonError {
    /// A date component was not an optional sign followed by digits within `i32`.
    #[error("malformed {position} argument: {text:?}")]
    MalformedArgument {
        /// Which component was being parsed.
        position: ArgPosition,
        /// The text as supplied.
        text: String,
    },
}
