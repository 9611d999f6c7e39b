//! Common trait for priority-queue structures
//!
//! [`PriorityQueue`] is the operation contract shared by [`MinHeap`] and
//! [`MaxHeap`]: "top" means the minimum for the former and the maximum for
//! the latter. The trait deliberately excludes construction: heaps are
//! built with an ordering relation (and optionally a seed vector) through
//! their inherent constructors.
//!
//! [`MinHeap`]: crate::MinHeap
//! [`MaxHeap`]: crate::MaxHeap

/// Contract shared by both heap flavors
///
/// An empty heap is not an error state: `top` and `remove_top` signal it
/// with `None` rather than panicking.
///
/// # Example
///
/// ```rust
/// use linked_heap::{MinHeap, PriorityQueue};
///
/// let mut heap = MinHeap::new();
/// heap.add(3);
/// heap.add(1);
/// heap.add(2);
///
/// assert_eq!(heap.top(), Some(&1));
/// assert_eq!(heap.remove_top(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<T> {
    /// Inserts an element
    ///
    /// Always returns `true`: every insertion modifies the heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn add(&mut self, item: T) -> bool;

    /// Inserts every element of `items` in the order the iterator yields them
    ///
    /// Returns `true` iff at least one element was inserted.
    fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>;

    /// Removes and returns the top element, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_top(&mut self) -> Option<T>;

    /// Returns the top element without removing it, or `None` if the heap
    /// is empty
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Option<&T>;

    /// Removes every element
    fn clear(&mut self);

    /// Returns the number of elements in the heap
    ///
    /// # Time Complexity
    /// O(1), read off the root's subtree count
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
