//! Max-heap adapter
//!
//! [`MaxHeap`] demonstrates heap duality: it owns a [`MinHeap`] built with
//! the caller's ordering relation reversed and forwards every operation to
//! it. No max-heap algorithm exists anywhere in this crate: correctness
//! follows from the min-heap's invariants applied to the inverted relation.
//!
//! # Example
//!
//! ```rust
//! use linked_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.add_all([5, 3, 8, 1]);
//! assert_eq!(heap.max(), Some(&8));
//! assert_eq!(heap.remove_max(), Some(8));
//! assert_eq!(heap.remove_max(), Some(5));
//! ```

use std::fmt;

use compare::{natural, Compare, Natural, Rev};

use crate::min_heap::MinHeap;
use crate::sorted::SortedIter;
use crate::traits::PriorityQueue;

/// A binary max-heap, realized as an order-inverted [`MinHeap`]
pub struct MaxHeap<T, C: Compare<T> = Natural<T>> {
    pub(crate) inner: MinHeap<T, Rev<C>>,
}

impl<T: Ord> MaxHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its
    /// items.
    pub fn new() -> MaxHeap<T> {
        Self::with_comparator(natural())
    }

    /// Returns a heap containing all the items of the given vector, ordered
    /// according to the natural order of its items. Runs in O(n).
    pub fn from_vec(vec: Vec<T>) -> MaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MaxHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator,
    /// with the greatest element under that comparator at the top.
    pub fn with_comparator(cmp: C) -> MaxHeap<T, C> {
        MaxHeap {
            inner: MinHeap::with_comparator(cmp.rev()),
        }
    }

    /// Returns a heap containing all the items of the given vector, ordered
    /// according to the given comparator.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> MaxHeap<T, C> {
        MaxHeap {
            inner: MinHeap::from_vec_and_comparator(vec, cmp.rev()),
        }
    }

    /// Inserts an element. Always returns `true`.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.add(item)
    }

    /// Inserts every element of `items`, in iteration order.
    ///
    /// Returns `true` iff at least one element was inserted.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.add_all(items)
    }

    /// Returns the maximum element, or `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        self.inner.min()
    }

    /// Removes and returns the maximum element, or `None` if the heap is
    /// empty.
    pub fn remove_max(&mut self) -> Option<T> {
        self.inner.remove_min()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a lazy traversal over the heap's current contents in the
    /// adapter's own top-first order: non-increasing under the caller's
    /// relation (ascending under the inverted one).
    pub fn sorted(&self) -> SortedIter<'_, T, Rev<C>> {
        self.inner.sorted()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for MaxHeap<T, C> {
    fn add(&mut self, item: T) -> bool {
        MaxHeap::add(self, item)
    }

    fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        MaxHeap::add_all(self, items)
    }

    fn remove_top(&mut self) -> Option<T> {
        self.remove_max()
    }

    fn top(&self) -> Option<&T> {
        self.max()
    }

    fn clear(&mut self) {
        MaxHeap::clear(self)
    }

    fn len(&self) -> usize {
        MaxHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        MaxHeap::is_empty(self)
    }
}

impl<T, C: Compare<T> + Default> Default for MaxHeap<T, C> {
    fn default() -> MaxHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(vec: Vec<T>) -> MaxHeap<T> {
        Self::from_vec(vec)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MaxHeap<T, C> {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T: fmt::Display, C: Compare<T>> fmt::Display for MaxHeap<T, C> {
    /// Renders `{}` for an empty heap, `{e1, e2, …}` in traversal
    /// (descending) order otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
