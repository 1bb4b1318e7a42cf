use core::hash::BuildHasher;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::order_list;

use super::TwoWayMap;
use super::missing_forward_entry;

/// An iterator over the entries of a `TwoWayMap`, in insertion order.
///
/// This struct is created by the [`iter`] method on [`TwoWayMap`]. See its
/// documentation for more.
///
/// [`iter`]: TwoWayMap::iter
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
/// for (key, value) in map.iter() {
///     println!("{}: {}", key, value);
/// }
/// ```
#[derive(Debug)]
pub struct Iter<'a, K, V, S> {
    pub(crate) order: order_list::Iter<'a, K>,
    pub(crate) forward: &'a HashMap<K, V, S>,
}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            order: self.order.clone(),
            forward: self.forward,
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        match self.forward.get(key) {
            Some(value) => Some((key, value)),
            None => missing_forward_entry(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.order.next_back()?;
        match self.forward.get(key) {
            Some(value) => Some((key, value)),
            None => missing_forward_entry(),
        }
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> core::iter::FusedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

/// An iterator over the keys of a `TwoWayMap`, in insertion order.
///
/// This struct is created by the [`keys`] method on [`TwoWayMap`]. See its
/// documentation for more.
///
/// [`keys`]: TwoWayMap::keys
#[derive(Debug)]
pub struct Keys<'a, K> {
    pub(crate) inner: order_list::Iter<'a, K>,
}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> core::iter::FusedIterator for Keys<'_, K> {}

/// An iterator over the values of a `TwoWayMap`, in the insertion order of
/// their keys.
///
/// This struct is created by the [`values`] method on [`TwoWayMap`]. See its
/// documentation for more.
///
/// [`values`]: TwoWayMap::values
#[derive(Debug)]
pub struct Values<'a, K, V, S> {
    pub(crate) inner: Iter<'a, K, V, S>,
}

impl<K, V, S> Clone for Values<'_, K, V, S> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, S> ExactSizeIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> core::iter::FusedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

/// An owning iterator over the entries of a `TwoWayMap`, in insertion order.
///
/// This struct is created by the [`into_iter`] method on [`TwoWayMap`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// Entries are drained from the front of the order (or the back, when
/// iterating in reverse), keeping the map's invariants intact throughout.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
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
/// for (key, value) in map {
///     println!("{}: {}", key, value);
/// }
/// ```
pub struct IntoIter<K, V, S> {
    pub(crate) map: TwoWayMap<K, V, S>,
}

impl<K, V, S> core::fmt::Debug for IntoIter<K, V, S>
where
    K: Hash + Eq + core::fmt::Debug,
    V: core::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoIter").field("map", &self.map).finish()
    }
}

impl<K, V, S> Iterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.map.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len(), Some(self.map.len()))
    }
}

impl<K, V, S> DoubleEndedIterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map.pop_last()
    }
}

impl<K, V, S> ExactSizeIterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> core::iter::FusedIterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
}
