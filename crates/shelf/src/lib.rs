//! Shelf: growable array-backed list containers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Shelf sub-crates. For most users, adding `shelf` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use shelf::prelude::*;
//!
//! let mut list = ArrayList::new();
//! list.push(1);
//! list.push(3);
//! list.insert(1, 2).unwrap();
//! assert_eq!(list.len(), 3);
//!
//! // Replacement returns the previous value.
//! assert_eq!(list.set(2, 4), Ok(3));
//!
//! // Removal by value takes the first match.
//! assert_eq!(list.remove_value(&2), Ok(2));
//! assert_eq!(list.get(1), Ok(&4));
//!
//! // Out-of-range indices carry diagnostics.
//! assert_eq!(
//!     list.get(2),
//!     Err(ListError::IndexOutOfBounds { index: 2, size: 2 })
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`contract`] | `shelf-core` | [`contract::List`] / [`contract::ListView`] traits, [`contract::ListError`] |
//! | [`array`] | `shelf-array` | [`array::ArrayList`], the contiguous-buffer container |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Contract traits and error types (`shelf-core`).
///
/// The [`contract::List`] trait is the full mutating contract;
/// [`contract::ListView`] is the read-only half that bulk append
/// accepts as a source.
pub use shelf_core as contract;

/// Contiguous-buffer containers (`shelf-array`).
///
/// Most users only need [`array::ArrayList`] from this module — it is
/// also available in the [`prelude`].
pub use shelf_array as array;

/// Common imports for typical Shelf usage.
///
/// ```rust
/// use shelf::prelude::*;
/// ```
///
/// This imports the container, the contract traits, and the error
/// type.
pub mod prelude {
    pub use shelf_array::ArrayList;
    pub use shelf_core::{List, ListError, ListView};
}
