//! An indexed min-priority queue.
//!
//! [`IndexedMinHeap`] stores unique integer elements with non-negative integer
//! priorities. Besides the usual insert / extract-min it can look up and
//! re-prioritize any element in O(log n), because every element's slot in the
//! binary heap is tracked in a reverse index.
//!
//! ```
//! use indexed_pq::{IndexedMinHeap, PriorityQueue};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(5, 1).unwrap();
//! heap.insert(3, 2).unwrap();
//! heap.update_priority(1, 1).unwrap();
//! assert_eq!(heap.extract_min(), Ok((1, 1)));
//! ```

mod error;
mod indexed_min_heap;
mod queue;
mod shared;

pub use error::{HeapError, InvalidArgument, Result};
pub use indexed_min_heap::IndexedMinHeap;
pub use queue::PriorityQueue;
pub use shared::SharedHeap;

/// Heap ordering key. Smaller is extracted first; must be non-negative.
pub type Priority = i64;

/// Identity of a queued item. Unique within a heap.
pub type Element = i64;
