//! Benchmark utilities for the Shelf list containers.
//!
//! Provides pre-built list profiles shared by the bench targets:
//!
//! - [`filled_list`]: an `ArrayList` holding `0..n` in order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use shelf_array::ArrayList;
use shelf_core::List;

/// Build an `ArrayList` holding `0..n` in insertion order.
///
/// Built through `push`, so the list has gone through the same growth
/// sequence a real append workload would.
pub fn filled_list(n: usize) -> ArrayList<usize> {
    let mut list = ArrayList::new();
    for v in 0..n {
        list.push(v);
    }
    list
}
