//! Sequence iterators over maps.
//!
//! A map is seen as a sequence of [`MapElem`] entries, in whatever order the
//! map itself iterates.
//!
//! # Examples
//!
//! ```
//! use sentinel_list::{iters, maps};
//! use std::collections::BTreeMap;
//!
//! let mut prices = BTreeMap::new();
//! prices.insert("apple", 3);
//! prices.insert("pear", 5);
//!
//! let total = iters::fold(maps::iter(&prices), 0, |acc, e| acc + e.value);
//! assert_eq!(total, 8);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::Peekable;

use crate::iters::{take_next, MapElem, SeqIter};

/// A sequence iterator over the entries of a map.
///
/// This `struct` is created by [`iter`].
pub struct Iter<I: Iterator> {
    entries: Peekable<I>,
}

impl<I> fmt::Debug for Iter<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.entries).finish()
    }
}

impl<I, K, V> SeqIter for Iter<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = MapElem<K, V>;

    #[inline]
    fn has_next(&mut self) -> bool {
        self.entries.peek().is_some()
    }

    fn next(&mut self) -> MapElem<K, V> {
        take_next(self.entries.next()).into()
    }
}

/// Iterates the entries of `map`.
///
/// Anything yielding `(key, value)` pairs is accepted: `&HashMap`,
/// `&BTreeMap`, `&mut HashMap`, or an owned map.
///
/// # Examples
///
/// ```
/// use sentinel_list::iters::{MapElem, SeqIter};
/// use sentinel_list::maps;
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert('a', 1);
///
/// let mut it = maps::iter(&map);
/// assert_eq!(it.next(), MapElem { key: &'a', value: &1 });
/// assert!(!it.has_next());
/// ```
pub fn iter<M, K, V>(map: M) -> Iter<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    Iter {
        entries: map.into_iter().peekable(),
    }
}

/// Collects the remaining entries of a sequence iterator into a `HashMap`.
///
/// Later entries overwrite earlier ones with an equal key.
///
/// # Examples
///
/// ```
/// use sentinel_list::iters::{self, MapElem};
/// use sentinel_list::{list, maps};
///
/// let words = list!["one", "three"];
/// let lengths = maps::from_seq(iters::map(words.iter(), |w| MapElem {
///     key: *w,
///     value: w.len(),
/// }));
/// assert_eq!(lengths["three"], 5);
/// ```
pub fn from_seq<I, K, V>(mut it: I) -> HashMap<K, V>
where
    I: SeqIter<Item = MapElem<K, V>>,
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    while it.has_next() {
        let MapElem { key, value } = it.next();
        map.insert(key, value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iters;
    use std::collections::BTreeMap;

    #[test]
    fn test_iter_in_map_order() {
        let map: BTreeMap<i32, char> = vec![(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
        let keys: Vec<i32> = iters::into_std(iters::map(iter(&map), |e| *e.key)).collect();
        assert_eq!(keys, [1, 2, 3]);
    }

    #[test]
    fn test_empty_map() {
        let map: HashMap<u8, u8> = HashMap::new();
        let mut it = iter(&map);
        assert!(!it.has_next());
        assert!(!it.has_next());
        assert!(from_seq(iters::map(it, |e| MapElem::from((*e.key, *e.value)))).is_empty());
    }

    #[test]
    fn test_round_trip_through_map() {
        let mut map = HashMap::new();
        map.insert("x", 1);
        map.insert("y", 2);

        let doubled = from_seq(iters::map(iter(&map), |e| MapElem {
            key: *e.key,
            value: e.value * 2,
        }));
        assert_eq!(doubled.len(), 2);
        assert_eq!(doubled["x"], 2);
        assert_eq!(doubled["y"], 4);
    }

    #[test]
    fn test_later_entries_win() {
        let entries = vec![MapElem::from((1, "old")), MapElem::from((1, "new"))];
        let map = from_seq(iters::from_std(entries));
        assert_eq!(map[&1], "new");
    }

    #[test]
    fn test_mutable_entries() {
        let mut map: BTreeMap<&str, i32> = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        iters::for_each(iter(&mut map), |e| *e.value += 10);
        assert_eq!(map["a"], 11);
        assert_eq!(map["b"], 12);
    }
}
