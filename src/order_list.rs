//! Doubly-linked list of keys tracking insertion order.
//!
//! The list is backed by an arena: nodes live in a dense `Vec` and link to
//! each other through [`Ptr`] handles rather than raw pointers, so splicing
//! a node out is O(1) without any unsafe code. Freed slots are threaded onto
//! an intrusive free list and recycled by later appends.
//!
//! [`OrderList`] does not deduplicate on its own; the owning map removes a
//! key before re-appending it so the list never holds the same key twice.

use alloc::vec::Vec;
use core::num::NonZeroU32;

use hashbrown::Equivalent;

#[cold]
#[inline(never)]
fn bad_slot() -> ! {
    panic!("Order list slot in unexpected state");
}

/// Handle to a node slot, stored one-past-index so `Option<Ptr>` is
/// pointer-sized.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}

#[derive(Debug, Clone)]
struct Node<K> {
    prev: Option<Ptr>,
    next: Option<Ptr>,
    key: K,
}

#[derive(Debug, Clone)]
enum Slot<K> {
    Free { next_free: Option<Ptr> },
    Occupied(Node<K>),
}

/// A doubly-linked list of keys with O(1) append, O(1) head/tail access, and
/// O(1) unlinking once a node has been located.
///
/// Removal by key is a head-to-tail scan: the list keeps no index from key to
/// node, since its owner always pairs removal with a hash-index lookup of its
/// own.
///
/// # Examples
///
/// ```
/// use twoway_map::OrderList;
///
/// let mut list = OrderList::new();
/// list.push_back("a");
/// list.push_back("b");
/// list.push_back("c");
///
/// assert_eq!(list.first(), Some(&"a"));
/// assert_eq!(list.last(), Some(&"c"));
///
/// list.remove(&"b");
/// assert_eq!(list.to_vec(), ["a", "c"]);
/// ```
#[derive(Clone)]
pub struct OrderList<K> {
    slots: Vec<Slot<K>>,
    free_head: Option<Ptr>,
    head: Option<Ptr>,
    tail: Option<Ptr>,
    len: usize,
}

impl<K> Default for OrderList<K> {
    fn default() -> Self {
        OrderList::new()
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for OrderList<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K> OrderList<K> {
    /// Creates a new, empty order list.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::OrderList;
    ///
    /// let list: OrderList<u32> = OrderList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        OrderList {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a new order list with room for at least `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderList {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn node(&self, ptr: Ptr) -> &Node<K> {
        match &self.slots[ptr.unchecked_get()] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => bad_slot(),
        }
    }

    fn node_mut(&mut self, ptr: Ptr) -> &mut Node<K> {
        match &mut self.slots[ptr.unchecked_get()] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => bad_slot(),
        }
    }

    fn alloc(&mut self, key: K, prev: Option<Ptr>, next: Option<Ptr>) -> Ptr {
        let node = Node { prev, next, key };
        match self.free_head {
            Some(ptr) => {
                let next_free = match self.slots[ptr.unchecked_get()] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => bad_slot(),
                };
                self.slots[ptr.unchecked_get()] = Slot::Occupied(node);
                self.free_head = next_free;
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                ptr
            }
        }
    }

    /// Splices the node at `ptr` out of the list, recycles its slot, and
    /// returns its key. Resets head/tail when a boundary node goes away.
    fn unlink(&mut self, ptr: Ptr) -> K {
        let slot = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        let node = match slot {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => bad_slot(),
        };
        self.free_head = Some(ptr);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.key
    }

    /// Appends `key` at the tail unconditionally.
    ///
    /// The list does not check for duplicates; callers remove an existing
    /// occurrence first if the key must stay unique.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::OrderList;
    ///
    /// let mut list = OrderList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn push_back(&mut self, key: K) {
        let ptr = self.alloc(key, self.tail, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.tail = Some(ptr);
        self.len += 1;
    }

    /// Removes the first node equal to `key`, scanning from the head.
    ///
    /// Returns `true` if a node was removed, `false` (and no change) if the
    /// key is absent. O(n) worst case; the unlink itself is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::OrderList;
    ///
    /// let mut list = OrderList::new();
    /// list.push_back("a");
    /// list.push_back("b");
    ///
    /// assert!(list.remove(&"a"));
    /// assert!(!list.remove(&"a"));
    /// assert_eq!(list.first(), Some(&"b"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: Equivalent<K> + ?Sized,
    {
        let mut cursor = self.head;
        while let Some(ptr) = cursor {
            let node = self.node(ptr);
            if key.equivalent(&node.key) {
                self.unlink(ptr);
                return true;
            }
            cursor = node.next;
        }
        false
    }

    /// Removes and returns the key at the head, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<K> {
        let ptr = self.head?;
        Some(self.unlink(ptr))
    }

    /// Removes and returns the key at the tail, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<K> {
        let ptr = self.tail?;
        Some(self.unlink(ptr))
    }

    /// Returns the key at the head, or `None` if the list is empty. O(1).
    pub fn first(&self) -> Option<&K> {
        self.head.map(|ptr| &self.node(ptr).key)
    }

    /// Returns the key at the tail, or `None` if the list is empty. O(1).
    pub fn last(&self) -> Option<&K> {
        self.tail.map(|ptr| &self.node(ptr).key)
    }

    /// Returns an iterator over the keys, head to tail.
    ///
    /// The iterator is double-ended and exact-size.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::OrderList;
    ///
    /// let mut list = OrderList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// let keys: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            list: self,
        }
    }

    /// Materializes the keys into a fresh `Vec`, head to tail.
    ///
    /// The returned vector shares no storage with the list.
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Resets the list to empty, dropping all nodes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns the number of keys in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// An iterator over the keys of an [`OrderList`], head to tail.
///
/// Created by [`OrderList::iter`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    front: Option<Ptr>,
    back: Option<Ptr>,
    remaining: usize,
    list: &'a OrderList<K>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            list: self.list,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> core::iter::FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a OrderList<K> {
    type IntoIter = Iter<'a, K>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::assert_eq;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let list: OrderList<i32> = OrderList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_with_capacity() {
        let list: OrderList<i32> = OrderList::with_capacity(10);
        assert!(list.is_empty());
        assert!(list.slots.capacity() >= 10);
    }

    #[test]
    fn test_push_back_order() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_head() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert!(list.remove(&1));
        assert_eq!(list.first(), Some(&2));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_remove_tail() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert!(list.remove(&3));
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&2));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert!(list.remove(&2));
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_remove_only_node_resets_both_ends() {
        let mut list = OrderList::new();
        list.push_back(42);

        assert!(list.remove(&42));
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert!(list.head.is_none());
        assert!(list.tail.is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);

        assert!(!list.remove(&99));
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_slot_reuse_after_remove() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.slots.len(), 3);

        assert!(list.remove(&2));
        assert!(list.free_head.is_some());

        list.push_back(4);
        // The freed slot is recycled rather than growing the arena.
        assert_eq!(list.slots.len(), 3);
        assert!(list.free_head.is_none());
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn test_pop_front_and_back() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.to_vec(), vec![2]);
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert!(list.free_head.is_none());

        list.push_back(3);
        assert_eq!(list.to_vec(), vec![3]);
    }

    #[test]
    fn test_iter_double_ended() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        let forward: Vec<_> = list.iter().copied().collect();
        assert_eq!(forward, vec![1, 2, 3]);

        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_remove_with_borrowed_key() {
        let mut list: OrderList<alloc::string::String> = OrderList::new();
        list.push_back("one".into());
        list.push_back("two".into());

        assert!(list.remove("one"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_debug_lists_keys_in_order() {
        let mut list = OrderList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn test_ptr_debug() {
        let ptr = Ptr::unchecked_from(42);
        assert_eq!(format!("{ptr:?}"), "Ptr(42)");
        assert_eq!(ptr.unchecked_get(), 42);
    }

    #[test]
    fn test_niche_optimization() {
        use core::mem::size_of;
        assert_eq!(size_of::<Option<Ptr>>(), size_of::<Ptr>());
    }
}
