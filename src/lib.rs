#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod order_list;
pub mod two_way_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// An insertion-ordered bidirectional map: key → value and value → key
/// lookups are both O(1), and iteration follows the order in which keys were
/// set.
///
/// This is the main type alias using the default hasher. For custom hashers,
/// use [`two_way_map::TwoWayMap`] directly.
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
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.get_by_value(&2), Some(&"b"));
///
/// // Iteration preserves insertion order
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type TwoWayMap<K, V> = crate::two_way_map::TwoWayMap<K, V, RandomState>;

pub use hashbrown::Equivalent;
pub use order_list::OrderList;
pub use two_way_map::IntoIter;
pub use two_way_map::Iter;
pub use two_way_map::Keys;
pub use two_way_map::Values;
