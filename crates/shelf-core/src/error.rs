//! Error types shared by all list implementations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during list operations.
///
/// Both variants are reported synchronously to the caller; nothing is
/// retried or recovered internally. Allocation failure during growth is
/// not represented here — it aborts, like any other Rust allocation
/// failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index argument fell outside the valid range for the
    /// operation. Access-type operations (`get`, `set`, `remove`)
    /// admit `0..size`; insertion admits `0..=size`.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The list's size at the time of the call.
        size: usize,
    },
    /// Value-based removal found no matching element.
    ValueNotFound {
        /// The searched-for value, rendered with `Debug`.
        value: String,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "index {index} is out of bounds for size {size}")
            }
            Self::ValueNotFound { value } => {
                write!(f, "no element matching {value}")
            }
        }
    }
}

impl Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_display_names_index_and_size() {
        let err = ListError::IndexOutOfBounds { index: 3, size: 3 };
        assert_eq!(err.to_string(), "index 3 is out of bounds for size 3");
    }

    #[test]
    fn value_error_display_names_value() {
        let err = ListError::ValueNotFound {
            value: "99".to_string(),
        };
        assert_eq!(err.to_string(), "no element matching 99");
    }
}
