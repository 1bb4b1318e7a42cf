//! Insertion-ordered bidirectional map implementation.
//!
//! This module provides the core [`TwoWayMap`] type: a bijective mapping
//! between keys and values where both directions are O(1) hash lookups and
//! iteration follows the order in which keys were set. The map owns a
//! forward index (key → value), a reverse index (value → key), and an
//! [`OrderList`] of keys, and keeps the three consistent under every
//! mutation.
//!
//! # Examples
//!
//! ```
//! use twoway_map::two_way_map::TwoWayMap;
//!
//! let mut map = TwoWayMap::new();
//! map.set("first", 1);
//! map.set("second", 2);
//!
//! assert_eq!(map.get(&"first"), Some(&1));
//! assert_eq!(map.get_by_value(&2), Some(&"second"));
//! ```

use core::hash::BuildHasher;
use core::hash::Hash;

use hashbrown::Equivalent;
use hashbrown::HashMap;

use crate::RandomState;
use crate::order_list::OrderList;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

#[cold]
#[inline(never)]
pub(crate) fn missing_forward_entry() -> ! {
    panic!("Key present in the order list but missing from the forward index");
}

/// A bijective map between keys and values with O(1) lookups in both
/// directions and insertion-ordered iteration.
///
/// Every live key maps to exactly one live value and vice versa. `set`
/// enforces the bijection on both sides: re-setting a key replaces its value
/// and moves the key to the tail of the order, and binding an already-used
/// value to a new key evicts the old key entirely.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq` (plus `Clone` for mutation)
/// - `V`: Value type, must implement `Hash + Eq` (plus `Clone` for mutation)
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// Absence is always communicated through `Option`; no operation panics for
/// missing keys or values.
///
/// # Examples
///
/// ```
/// use twoway_map::TwoWayMap;
///
/// let mut map = TwoWayMap::new();
/// map.set("apple", 5);
/// map.set("banana", 3);
/// map.set("cherry", 8);
///
/// // Iterate in insertion order
/// for (key, value) in map.iter() {
///     println!("{}: {}", key, value);
/// }
/// // Prints: apple: 5, banana: 3, cherry: 8
///
/// assert_eq!(map.get_by_value(&3), Some(&"banana"));
/// ```
pub struct TwoWayMap<K, V, S = RandomState> {
    forward: HashMap<K, V, S>,
    reverse: HashMap<V, K, S>,
    order: OrderList<K>,
}

impl<K, V> TwoWayMap<K, V> {
    /// Creates a new, empty map.
    ///
    /// The map does not allocate until the first entry is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map: TwoWayMap<&str, i32> = TwoWayMap::new();
    /// assert!(map.is_empty());
    /// map.set("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new map with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let map: TwoWayMap<&str, i32> = TwoWayMap::with_capacity(10);
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S: BuildHasher + Default> Default for TwoWayMap<K, V, S> {
    fn default() -> Self {
        TwoWayMap {
            forward: HashMap::with_hasher(S::default()),
            reverse: HashMap::with_hasher(S::default()),
            order: OrderList::new(),
        }
    }
}

impl<K, V, S> TwoWayMap<K, V, S> {
    /// Creates a new map with the specified capacity and hasher.
    ///
    /// Both hash indices are seeded from clones of the given hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use twoway_map::two_way_map::TwoWayMap;
    ///
    /// let hasher = RandomState::default();
    /// let mut map: TwoWayMap<&str, i32, _> = TwoWayMap::with_capacity_and_hasher(10, hasher);
    /// map.set("key", 42);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self
    where
        S: Clone,
    {
        TwoWayMap {
            forward: HashMap::with_capacity_and_hasher(capacity, hasher.clone()),
            reverse: HashMap::with_capacity_and_hasher(capacity, hasher),
            order: OrderList::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut a = TwoWayMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.set(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut a = TwoWayMap::new();
    /// assert!(a.is_empty());
    /// a.set(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all entries from all three internal
    /// structures.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut a = TwoWayMap::new();
    /// a.set(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
        self.order.clear();
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    ///
    /// The iterator element type is `(&'a K, &'a V)`. It is double-ended and
    /// exact-size.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&"a", &1), (&"b", &2), (&"c", &3)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            order: self.order.iter(),
            forward: &self.forward,
        }
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let keys: Vec<_> = map.keys().collect();
    /// assert_eq!(keys, [&"a", &"b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.order.iter(),
        }
    }

    /// Returns an iterator over the values of the map, in the insertion
    /// order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(values, [&1, &2]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }
}

impl<K, V, S> TwoWayMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    /// Returns a reference to the value mapped to `key`, or `None` if the
    /// key is absent. O(1), no mutation.
    ///
    /// The key may be any borrowed form of the map's key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set(String::from("one"), 1);
    ///
    /// assert_eq!(map.get("one"), Some(&1));
    /// assert_eq!(map.get("two"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.forward.get(key)
    }

    /// Returns a reference to the key mapped to `value`, or `None` if the
    /// value is absent. O(1), no mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("one", 1);
    ///
    /// assert_eq!(map.get_by_value(&1), Some(&"one"));
    /// assert_eq!(map.get_by_value(&2), None);
    /// ```
    pub fn get_by_value<Q>(&self, value: &Q) -> Option<&K>
    where
        Q: Hash + Equivalent<V> + ?Sized,
    {
        self.reverse.get(value)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.forward.contains_key(key)
    }

    /// Returns `true` if the map contains `value`.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        Q: Hash + Equivalent<V> + ?Sized,
    {
        self.reverse.contains_key(value)
    }

    /// Removes `key` and its value from the map.
    ///
    /// Returns `true` if the key was present. Returns `false` and performs
    /// no mutation if it was not. After a successful removal the key is gone
    /// from the forward index, its value from the reverse index, and the key
    /// from the order list.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("one", 1);
    ///
    /// assert!(map.remove(&"one"));
    /// assert!(!map.remove(&"one"));
    /// assert_eq!(map.get_by_value(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.pop(key).is_some()
    }

    /// Removes `key` from the map, returning its value.
    ///
    /// Returns `None` and performs no mutation if the key is absent. Use
    /// `map.pop(&k).unwrap_or(default)` when a fallback value is wanted.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("one", 1);
    ///
    /// assert_eq!(map.pop(&"one"), Some(1));
    /// assert_eq!(map.pop(&"one"), None);
    /// assert_eq!(map.pop(&"one").unwrap_or(42), 42);
    /// ```
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        let value = self.forward.remove(key)?;
        self.reverse.remove(&value);
        self.order.remove(key);
        Some(value)
    }

    /// Removes and returns the most recently set entry, or `None` if the map
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// assert_eq!(map.pop_last(), Some(("b", 2)));
    /// assert_eq!(map.pop_last(), Some(("a", 1)));
    /// assert_eq!(map.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_back()?;
        let Some(value) = self.forward.remove(&key) else {
            missing_forward_entry()
        };
        self.reverse.remove(&value);
        Some((key, value))
    }

    /// Removes and returns the oldest entry, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// assert_eq!(map.pop_first(), Some(("a", 1)));
    /// assert_eq!(map.pop_first(), Some(("b", 2)));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let Some(value) = self.forward.remove(&key) else {
            missing_forward_entry()
        };
        self.reverse.remove(&value);
        Some((key, value))
    }
}

impl<K, V, S> TwoWayMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Establishes the mapping `key ↔ value`, appending `key` at the tail of
    /// the order.
    ///
    /// The bijection is reconciled on both sides before the new entry goes
    /// in:
    ///
    /// - If `key` is already present, its old value is dropped from the
    ///   reverse index and the key is unlinked from the order list, so the
    ///   final append moves it to the tail (most-recently-set last).
    /// - If `value` is already bound to a different key, that key is evicted
    ///   from the forward index and the order list. No ghost keys remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use twoway_map::TwoWayMap;
    ///
    /// let mut map = TwoWayMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// // Re-setting an existing key moves it to the tail.
    /// map.set("a", 10);
    /// let keys: Vec<_> = map.keys().collect();
    /// assert_eq!(keys, [&"b", &"a"]);
    /// assert_eq!(map.get_by_value(&1), None);
    /// ```
    pub fn set(&mut self, key: K, value: V) {
        if let Some(old_value) = self.forward.remove(&key) {
            self.reverse.remove(&old_value);
            self.order.remove(&key);
        }
        if let Some(old_key) = self.reverse.remove(&value) {
            // The first branch already cleared any reverse entry for `key`.
            debug_assert!(old_key != key);
            self.forward.remove(&old_key);
            self.order.remove(&old_key);
        }

        self.forward.insert(key.clone(), value.clone());
        self.reverse.insert(value, key.clone());
        self.order.push_back(key);
    }
}

impl<K, V, S> Clone for TwoWayMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Produces an independent map with the same entries in the same order,
    /// by replaying `set` for every entry. No internal state is shared with
    /// the original.
    fn clone(&self) -> Self {
        let mut new_map =
            TwoWayMap::with_capacity_and_hasher(self.len(), self.forward.hasher().clone());
        for (key, value) in self.iter() {
            new_map.set(key.clone(), value.clone());
        }
        new_map
    }
}

impl<K, V, S> core::fmt::Debug for TwoWayMap<K, V, S>
where
    K: Hash + Eq + core::fmt::Debug,
    V: core::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for TwoWayMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V, S> Eq for TwoWayMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> FromIterator<(K, V)> for TwoWayMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for TwoWayMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for TwoWayMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.clone(), value.clone());
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a TwoWayMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, K, V, S>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for TwoWayMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = IntoIter<K, V, S>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { map: self }
    }
}

#[cfg(test)]
impl<K, V, S> TwoWayMap<K, V, S>
where
    K: Hash + Eq + core::fmt::Debug,
    V: Hash + Eq + core::fmt::Debug,
    S: BuildHasher,
{
    #[track_caller]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.forward.len(), self.reverse.len());
        assert_eq!(self.forward.len(), self.order.len());

        for (k, v) in &self.forward {
            assert_eq!(
                self.reverse.get(v),
                Some(k),
                "reverse index disagrees with forward index for key {k:?}"
            );
        }
        for (v, k) in &self.reverse {
            assert_eq!(
                self.forward.get(k),
                Some(v),
                "forward index disagrees with reverse index for value {v:?}"
            );
        }
        for key in self.order.iter() {
            assert!(
                self.forward.contains_key(key),
                "order list key {key:?} missing from forward index"
            );
            assert_eq!(
                self.order.iter().filter(|k| *k == key).count(),
                1,
                "order list holds duplicate key {key:?}"
            );
        }
    }
}
