//! Priority queues built on explicitly linked tree nodes.
//!
//! This crate provides a binary min-heap whose complete-tree shape is kept
//! with parent/child links and per-node subtree counts instead of an array,
//! plus the structures that fall out of it for free:
//!
//! - **[`MinHeap`]**: O(log n) insert and delete-min, O(1) peek and len,
//!   O(n) bulk construction from a vector
//! - **[`MaxHeap`]**: the same engine with the ordering relation inverted;
//!   no second heap algorithm is implemented
//! - **[`SortedIter`]**: a lazy ascending traversal that drains a private
//!   frontier heap of node references without touching the source tree
//!
//! Ordering is supplied as a [`compare::Compare`] value, defaulting to the
//! natural order of `T: Ord`. Closures `Fn(&T, &T) -> Ordering` work too.
//!
//! # Example
//!
//! ```rust
//! use linked_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.add_all([5, 3, 8, 1]);
//! assert_eq!(heap.min(), Some(&1));
//! assert_eq!(heap.remove_min(), Some(1));
//! assert_eq!(heap.len(), 3);
//!
//! let ascending: Vec<i32> = heap.sorted().copied().collect();
//! assert_eq!(ascending, vec![3, 5, 8]);
//! assert_eq!(heap.len(), 3); // traversal does not mutate the heap
//! ```

pub mod max_heap;
pub mod min_heap;
pub mod sorted;
pub mod traits;

pub use max_heap::MaxHeap;
pub use min_heap::MinHeap;
pub use sorted::SortedIter;
pub use traits::PriorityQueue;
