//! Core traits and error types for the Shelf list containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the list contract ([`List`] and its read-only half [`ListView`])
//! and the error type shared by every implementation ([`ListError`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Public re-exports for the primary API surface.
pub use error::ListError;
pub use traits::{List, ListView};
