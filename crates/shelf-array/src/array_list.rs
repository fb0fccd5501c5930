//! A growable list backed by one contiguous buffer.

use shelf_core::{List, ListError, ListView};
use std::fmt;

/// Index validation mode.
///
/// Access and insertion admit different ranges, so the checker takes
/// an explicit mode rather than a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IndexMode {
    /// Valid indices are `0..len`: the slot must hold a live element.
    Access,
    /// Valid indices are `0..=len`: `len` means "append at the end".
    Insert,
}

/// A growable list stored in one contiguous buffer.
///
/// Appends are amortized O(1): when the tracked capacity is exhausted
/// the buffer grows by 3/2 (truncating) and every live element moves
/// into the new buffer in order. Indexed access is O(1); positional
/// insertion and removal shift the suffix and are O(n). Capacity never
/// shrinks.
///
/// # Examples
///
/// ```
/// use shelf_array::ArrayList;
/// use shelf_core::{List, ListView};
///
/// let mut list = ArrayList::new();
/// list.push("a");
/// list.insert(0, "b").unwrap();
/// assert_eq!(list.get(0), Ok(&"b"));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.remove(1), Ok("a"));
/// ```
pub struct ArrayList<T> {
    /// Live elements. `items.len()` is the logical size.
    items: Vec<T>,
    /// Tracked capacity under the 3/2 growth policy.
    ///
    /// Invariant: `items.len() <= capacity <= items.capacity()`. All
    /// growth decisions consult this value, never `Vec`'s own
    /// capacity, so reallocation timing is deterministic regardless of
    /// how the allocator rounds requests.
    capacity: usize,
}

impl<T> ArrayList<T> {
    /// Initial tracked capacity of a list built with [`ArrayList::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty list with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty list with the given tracked capacity.
    ///
    /// A capacity of 0 allocates nothing; the first append grows the
    /// buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Current tracked capacity.
    ///
    /// Grows monotonically over the list's lifetime; removal never
    /// releases storage.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grow the buffer until the tracked capacity is at least
    /// `min_capacity`.
    ///
    /// No-op when the current capacity already suffices. Otherwise the
    /// capacity is stepped by 3/2 (truncating integer arithmetic,
    /// saturating at `usize::MAX`) until it reaches `min_capacity`,
    /// one new buffer of the final size is allocated, and all live
    /// elements move across in order. The `max(1)` floor keeps each
    /// step strictly increasing at capacities 0 and 1, where truncated
    /// 3/2 growth stalls.
    fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity {
            return;
        }
        let mut new_capacity = self.capacity;
        while new_capacity < min_capacity {
            new_capacity = new_capacity.saturating_add((new_capacity / 2).max(1));
        }
        let mut bigger = Vec::with_capacity(new_capacity);
        bigger.extend(std::mem::take(&mut self.items));
        self.items = bigger;
        self.capacity = new_capacity;
    }

    /// Validate `index` against the range admitted by `mode`.
    fn check_index(&self, index: usize, mode: IndexMode) -> Result<(), ListError> {
        let valid = match mode {
            IndexMode::Access => index < self.items.len(),
            IndexMode::Insert => index <= self.items.len(),
        };
        if valid {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                size: self.items.len(),
            })
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Not derived: `Vec::clone` sizes its allocation to the element
// count, which can fall below the tracked capacity.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

// Equality compares logical contents only; capacity is ignored.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> ListView<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index, IndexMode::Access)?;
        Ok(&self.items[index])
    }
}

impl<T> List<T> for ArrayList<T> {
    fn push(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_index(index, IndexMode::Insert)?;
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(index, value);
        Ok(())
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.check_index(index, IndexMode::Access)?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index, IndexMode::Access)?;
        Ok(self.items.remove(index))
    }

    fn remove_value(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq + fmt::Debug,
    {
        match self.items.iter().position(|element| element == value) {
            Some(index) => self.remove(index),
            None => Err(ListError::ValueNotFound {
                value: format!("{value:?}"),
            }),
        }
    }

    fn add_all(&mut self, source: Option<&dyn ListView<T>>)
    where
        T: Clone,
    {
        let Some(source) = source else { return };
        if source.is_empty() {
            return;
        }
        let incoming = source.len();
        // One up-front growth for the whole batch.
        self.ensure_capacity(self.items.len() + incoming);
        for index in 0..incoming {
            let element = source
                .get(index)
                .expect("source indices below source.len() are present");
            self.items.push(element.clone());
        }
    }
}
