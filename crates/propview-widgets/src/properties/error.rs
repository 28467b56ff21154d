#![forbid(unsafe_code)]

//! Errors returned by the property-store mutation API.
//!
//! Render-time problems are not errors in this sense: they are reported as
//! [`Diagnostic`](super::Diagnostic)s and the frame still draws.

use std::fmt;

use super::format::FormatError;

/// Failure of an `add_*`/`set_*` call on a [`PropertyStore`](super::PropertyStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The store already holds `capacity` entries. Retry after `clear()`.
    CapacityExceeded { capacity: usize },
    /// A linked value's format template was rejected.
    InvalidFormat(FormatError),
    /// No entry at `index`.
    IndexOutOfRange { index: usize, len: usize },
    /// The entry at `index` is not a header, so it cannot collapse.
    NotAHeader { index: usize },
    /// The entry at `index` is not a value, so it has no literal to replace.
    NotAValue { index: usize },
    /// The entry at `index` is a closer, which has no name.
    Unnamed { index: usize },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "property store is full ({capacity} entries)")
            }
            Self::InvalidFormat(err) => write!(f, "invalid value format: {err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "property index {index} out of range (len {len})")
            }
            Self::NotAHeader { index } => write!(f, "property {index} is not a header"),
            Self::NotAValue { index } => write!(f, "property {index} is not a value"),
            Self::Unnamed { index } => write!(f, "property {index} is a closer and has no name"),
        }
    }
}

impl std::error::Error for PropertyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for PropertyError {
    fn from(err: FormatError) -> Self {
        Self::InvalidFormat(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_mentions_capacity() {
        let err = PropertyError::CapacityExceeded { capacity: 4 };
        assert_eq!(err.to_string(), "property store is full (4 entries)");
    }

    #[test]
    fn format_error_is_the_source() {
        let err = PropertyError::from(FormatError::MissingPlaceholder);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid value format"));
    }

    #[test]
    fn index_errors_have_no_source() {
        assert!(PropertyError::NotAHeader { index: 2 }.source().is_none());
    }
}
