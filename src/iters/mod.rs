//! The sequence iterator protocol and the algorithms built on top of it.
//!
//! A [`SeqIter`] is a cursor-like iterator with an explicit
//! exhaustion test. Every algorithm in this module only talks to that
//! protocol, so the same functions drive list cursors, slice iterators, map
//! iterators, and the lazy adapters returned by [`map`], [`filter`] and
//! [`zip`].
//!
//! # Examples
//!
//! ```
//! use sentinel_list::{iters, list};
//!
//! let list = list![1, 2, 7, -9];
//! let doubled = iters::map(list.iter(), |x| x * 2);
//! let evens = iters::filter(doubled, |x| *x > 0);
//! assert_eq!(iters::sum(evens), 20);
//! ```

use crate::error::{exhausted, ListError};

mod adapters;
mod ops;

pub use adapters::{Cloned, Filter, FromStd, IntoStd, Map, Zip};
pub use ops::{
    advance, cloned, compare, compare_by, equal, equal_by, filter, find, fold, for_each,
    from_std, into_std, map, max, max_by, min, min_by, reduce, reverse, sum, zip,
};

/// The capability set shared by every sequence iterator.
///
/// A fresh iterator rests *before* its first element. [`next`] advances it
/// and returns the newly visited element.
///
/// `has_next` takes `&mut self` so that adapters may buffer one look-ahead
/// element, but it must be observationally pure: repeated calls without an
/// intervening `next` return the same answer and never drop an element.
///
/// [`next`]: SeqIter::next
pub trait SeqIter {
    /// The type of the elements yielded by the iterator.
    type Item;

    /// Tests whether the iterator can advance.
    fn has_next(&mut self) -> bool;

    /// Advances the iterator and returns the element it lands on.
    ///
    /// # Panics
    ///
    /// Panics with [`ListError::ExhaustedIterator`] if `has_next` is `false`.
    fn next(&mut self) -> Self::Item;

    /// Like [`SeqIter::next`], but reports exhaustion as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::iters::SeqIter;
    /// use sentinel_list::{list, ListError};
    ///
    /// let list = list![1];
    /// let mut it = list.iter();
    /// assert_eq!(it.try_next(), Ok(&1));
    /// assert_eq!(it.try_next(), Err(ListError::ExhaustedIterator));
    /// ```
    fn try_next(&mut self) -> Result<Self::Item, ListError> {
        if self.has_next() {
            Ok(self.next())
        } else {
            Err(ListError::ExhaustedIterator)
        }
    }

    /// Advances the iterator `n` steps, stopping early at the end.
    ///
    /// Returns the number of steps actually taken.
    fn advance(&mut self, n: usize) -> usize {
        let mut steps = 0;
        while steps < n && self.has_next() {
            self.next();
            steps += 1;
        }
        steps
    }
}

/// A sequence iterator that can overwrite the element it has visited last.
pub trait SeqIterMut: SeqIter {
    /// The type of the stored elements.
    type Value;

    /// Overwrites the element at the current position.
    ///
    /// Fails with [`ListError::InvalidIterator`] if the iterator has not
    /// visited any element yet (or rests on a boundary position).
    fn set(&mut self, value: Self::Value) -> Result<(), ListError>;
}

impl<I: SeqIter + ?Sized> SeqIter for &mut I {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Self::Item {
        (**self).next()
    }
}

impl<I: SeqIter + ?Sized> SeqIter for Box<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Self::Item {
        (**self).next()
    }
}

/// Numeric element types accepted by [`sum`].
///
/// The zero value is `Default::default()`.
pub trait Number: Copy + Default + std::ops::Add<Output = Self> {}

macro_rules! impl_number {
    ($($TY:ty),*) => {
        $(impl Number for $TY {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A pair of values produced by [`zip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Zipped<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> From<Zipped<A, B>> for (A, B) {
    fn from(zipped: Zipped<A, B>) -> Self {
        (zipped.first, zipped.second)
    }
}

impl<A, B> From<(A, B)> for Zipped<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Zipped { first, second }
    }
}

/// A key-value entry of a map, yielded by [`maps::iter`](crate::maps::iter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MapElem<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> From<MapElem<K, V>> for (K, V) {
    fn from(elem: MapElem<K, V>) -> Self {
        (elem.key, elem.value)
    }
}

impl<K, V> From<(K, V)> for MapElem<K, V> {
    fn from((key, value): (K, V)) -> Self {
        MapElem { key, value }
    }
}

#[inline]
pub(crate) fn take_next<T>(item: Option<T>) -> T {
    match item {
        Some(item) => item,
        None => exhausted(),
    }
}
