//! Linked-node binary min-heap
//!
//! A min-heap kept as a complete binary tree of individually allocated
//! nodes. There is no array backing: each node carries its parent/child
//! links and the size of its subtree, and the position bookkeeping that an
//! array heap gets from index arithmetic is recovered from those counts
//! with power-of-two tests.
//!
//! Payloads move between nodes during percolation; node identities never
//! do. The last level of the tree fills strictly left to right, so the
//! structure stays balanced regardless of the insertion order.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `add`          | O(log n)   |
//! | `remove_min`   | O(log n)   |
//! | `min`          | O(1)       |
//! | `len`          | O(1)       |
//! | `from_vec`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use linked_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![9, 1, 7, 3]);
//! assert_eq!(heap.remove_min(), Some(1));
//! assert_eq!(heap.remove_min(), Some(3));
//! assert_eq!(heap.len(), 2);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use compare::{natural, Compare, Natural};

use crate::sorted::SortedIter;
use crate::traits::PriorityQueue;

pub(crate) struct Node<T> {
    pub(crate) item: T,
    /// Non-owning back-reference, used to walk upward for count maintenance
    /// and percolation. The root's is `None`.
    pub(crate) parent: Option<NonNull<Node<T>>>,
    pub(crate) left: Option<NonNull<Node<T>>>,
    pub(crate) right: Option<NonNull<Node<T>>>,
    /// Number of nodes in the subtree rooted here, self included.
    pub(crate) count: usize,
}

/// A subtree of `count` nodes has every level full iff `count + 1` has a
/// single set bit.
fn perfect(count: usize) -> bool {
    (count + 1).is_power_of_two()
}

enum Side {
    Left,
    Right,
}

/// Locates the parent of the first empty slot in level order.
///
/// Descends toward whichever subtree still has room on the filling level:
/// the left unless it is already perfect while the right is still catching
/// up. O(log n), no backtracking.
unsafe fn open_slot<T>(root: NonNull<Node<T>>) -> (NonNull<Node<T>>, Side) {
    let mut node = root;
    loop {
        let (left, right) = {
            let n = node.as_ref();
            (n.left, n.right)
        };
        match (left, right) {
            (None, _) => return (node, Side::Left),
            (_, None) => return (node, Side::Right),
            (Some(l), Some(r)) => {
                let lc = l.as_ref().count;
                let rc = r.as_ref().count;
                node = if lc == rc || !perfect(lc) { l } else { r };
            }
        }
    }
}

/// Locates the last node in level order, the one removal detaches.
unsafe fn last_node<T>(root: NonNull<Node<T>>) -> NonNull<Node<T>> {
    let mut node = root;
    loop {
        let (left, right) = {
            let n = node.as_ref();
            (n.left, n.right)
        };
        match (left, right) {
            (None, None) => return node,
            (Some(l), None) => return l,
            (Some(l), Some(r)) => {
                let lc = l.as_ref().count;
                let rc = r.as_ref().count;
                node = if lc != rc && (!perfect(lc) || perfect(rc)) {
                    l
                } else {
                    r
                };
            }
            (None, Some(_)) => unreachable!("complete tree: right child without left"),
        }
    }
}

/// Bumps `count` on every node from `start` up to the root.
unsafe fn grow_counts<T>(start: NonNull<Node<T>>) {
    let mut node = Some(start);
    while let Some(n) = node {
        (*n.as_ptr()).count += 1;
        node = n.as_ref().parent;
    }
}

unsafe fn shrink_counts<T>(start: NonNull<Node<T>>) {
    let mut node = Some(start);
    while let Some(n) = node {
        (*n.as_ptr()).count -= 1;
        node = n.as_ref().parent;
    }
}

/// A binary min-heap on linked nodes
///
/// The ordering relation is supplied at construction and stored by value;
/// it defaults to the natural order of `T: Ord`. Any
/// `Fn(&T, &T) -> Ordering` closure is accepted as a comparator.
///
/// # Example
///
/// ```rust
/// use linked_heap::MinHeap;
///
/// // order pairs by their second component
/// let mut heap = MinHeap::with_comparator(|a: &(u32, u32), b: &(u32, u32)| a.1.cmp(&b.1));
/// heap.add((1, 30));
/// heap.add((2, 10));
/// assert_eq!(heap.min(), Some(&(2, 10)));
/// ```
pub struct MinHeap<T, C: Compare<T> = Natural<T>> {
    pub(crate) root: Option<NonNull<Node<T>>>,
    pub(crate) cmp: C,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T: Ord> MinHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its
    /// items.
    pub fn new() -> MinHeap<T> {
        Self::with_comparator(natural())
    }

    /// Returns a heap containing all the items of the given vector, ordered
    /// according to the natural order of its items. Runs in O(n).
    pub fn from_vec(vec: Vec<T>) -> MinHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> MinHeap<T, C> {
        MinHeap {
            root: None,
            cmp,
            _marker: PhantomData,
        }
    }

    /// Returns a heap containing all the items of the given vector, ordered
    /// according to the given comparator.
    ///
    /// The tree is laid out breadth-first, which satisfies the shape
    /// invariant without a single comparison, and heap order is then
    /// restored bottom-up with one percolate-down per node: O(n) in total
    /// rather than the O(n log n) of repeated insertion.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> MinHeap<T, C> {
        let mut heap = MinHeap {
            root: None,
            cmp,
            _marker: PhantomData,
        };
        let mut items = vec.into_iter();
        let root = match items.next() {
            Some(item) => Self::alloc(item),
            None => return heap,
        };
        heap.root = Some(root);

        // The queue front is always the shallowest, leftmost node with an
        // open child slot.
        let mut open = VecDeque::new();
        open.push_back(root);
        for item in items {
            let node = Self::alloc(item);
            unsafe {
                let parent = *open.front().unwrap();
                (*node.as_ptr()).parent = Some(parent);
                if (*parent.as_ptr()).left.is_none() {
                    (*parent.as_ptr()).left = Some(node);
                } else {
                    (*parent.as_ptr()).right = Some(node);
                    open.pop_front();
                }
            }
            open.push_back(node);
        }

        // Post-order pass: both subtrees of a node are valid sub-heaps with
        // correct counts by the time the node itself is processed.
        let mut stack = vec![(root, false)];
        while let Some((node, children_done)) = stack.pop() {
            unsafe {
                if children_done {
                    let n = node.as_ptr();
                    (*n).count = 1
                        + (*n).left.map_or(0, |l| l.as_ref().count)
                        + (*n).right.map_or(0, |r| r.as_ref().count);
                    heap.percolate_down(node);
                } else {
                    stack.push((node, true));
                    if let Some(l) = node.as_ref().left {
                        stack.push((l, false));
                    }
                    if let Some(r) = node.as_ref().right {
                        stack.push((r, false));
                    }
                }
            }
        }
        heap
    }

    /// Inserts an element. Always returns `true`.
    ///
    /// The new node lands on the first empty slot in level order, every
    /// ancestor's count is bumped, and the payload percolates up until its
    /// parent no longer follows it.
    pub fn add(&mut self, item: T) -> bool {
        let node = Self::alloc(item);
        match self.root {
            None => self.root = Some(node),
            Some(root) => unsafe {
                let (parent, side) = open_slot(root);
                (*node.as_ptr()).parent = Some(parent);
                match side {
                    Side::Left => (*parent.as_ptr()).left = Some(node),
                    Side::Right => (*parent.as_ptr()).right = Some(node),
                }
                grow_counts(parent);
                self.percolate_up(node);
            },
        }
        true
    }

    /// Inserts every element of `items`, in iteration order.
    ///
    /// Returns `true` iff at least one element was inserted.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = false;
        for item in items {
            self.add(item);
            added = true;
        }
        added
    }

    /// Returns the minimum element, or `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    /// Removes and returns the minimum element, or `None` if the heap is
    /// empty.
    ///
    /// The last node in level order donates its payload to the root and is
    /// detached, keeping the tree complete; the displaced payload then
    /// percolates down from the root.
    pub fn remove_min(&mut self) -> Option<T> {
        let root = self.root?;
        unsafe {
            let last = last_node(root);
            if last == root {
                self.root = None;
                return Some(Box::from_raw(root.as_ptr()).item);
            }

            mem::swap(&mut (*root.as_ptr()).item, &mut (*last.as_ptr()).item);

            // last != root, so it has a parent to detach from
            let parent = (*last.as_ptr()).parent.unwrap();
            if (*parent.as_ptr()).right == Some(last) {
                (*parent.as_ptr()).right = None;
            } else {
                (*parent.as_ptr()).left = None;
            }
            shrink_counts(parent);

            let item = Box::from_raw(last.as_ptr()).item;
            self.percolate_down(root);
            Some(item)
        }
    }

    /// Removes every element, releasing the whole tree.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(node) = pending.pop() {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            if let Some(l) = node.left {
                pending.push(l);
            }
            if let Some(r) = node.right {
                pending.push(r);
            }
        }
    }

    /// Returns the number of elements in the heap, read off the root's
    /// subtree count.
    pub fn len(&self) -> usize {
        self.root.map_or(0, |root| unsafe { root.as_ref().count })
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a lazy ascending traversal over the heap's current contents.
    ///
    /// Each call builds an independent iterator; the heap itself is not
    /// mutated. The heap stays borrowed for the iterator's lifetime, so
    /// mutating it mid-traversal is a compile error.
    pub fn sorted(&self) -> SortedIter<'_, T, C> {
        SortedIter::new(self)
    }

    fn alloc(item: T) -> NonNull<Node<T>> {
        let node = Box::into_raw(Box::new(Node {
            item,
            parent: None,
            left: None,
            right: None,
            count: 1,
        }));
        unsafe { NonNull::new_unchecked(node) }
    }

    /// Swaps the payload upward until its parent precedes or ties it.
    unsafe fn percolate_up(&self, start: NonNull<Node<T>>) {
        let mut node = start;
        while let Some(parent) = node.as_ref().parent {
            if !self
                .cmp
                .compares_lt(&node.as_ref().item, &parent.as_ref().item)
            {
                break;
            }
            mem::swap(&mut (*node.as_ptr()).item, &mut (*parent.as_ptr()).item);
            node = parent;
        }
    }

    /// Swaps the payload downward until both children follow or tie it.
    ///
    /// When the two children compare equal the right one is chosen as the
    /// descent branch. Either branch would preserve the invariants; the
    /// policy is fixed so that extraction sequences are reproducible.
    pub(crate) unsafe fn percolate_down(&self, start: NonNull<Node<T>>) {
        let mut node = start;
        loop {
            let (left, right) = {
                let n = node.as_ref();
                (n.left, n.right)
            };
            let child = match (left, right) {
                // no left child means no children at all
                (None, _) => break,
                (Some(l), None) => l,
                (Some(l), Some(r)) => {
                    if self
                        .cmp
                        .compares_lt(&l.as_ref().item, &r.as_ref().item)
                    {
                        l
                    } else {
                        r
                    }
                }
            };
            if !self
                .cmp
                .compares_lt(&child.as_ref().item, &node.as_ref().item)
            {
                break;
            }
            mem::swap(&mut (*node.as_ptr()).item, &mut (*child.as_ptr()).item);
            node = child;
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for MinHeap<T, C> {
    fn add(&mut self, item: T) -> bool {
        MinHeap::add(self, item)
    }

    fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        MinHeap::add_all(self, items)
    }

    fn remove_top(&mut self) -> Option<T> {
        self.remove_min()
    }

    fn top(&self) -> Option<&T> {
        self.min()
    }

    fn clear(&mut self) {
        MinHeap::clear(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }
}

impl<T, C: Compare<T>> Drop for MinHeap<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> MinHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> MinHeap<T> {
        Self::from_vec(vec)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T, C> {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: fmt::Display, C: Compare<T>> fmt::Display for MinHeap<T, C> {
    /// Renders `{}` for an empty heap, `{e1, e2, …}` in ascending order
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.sorted().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sorted()).finish()
    }
}
