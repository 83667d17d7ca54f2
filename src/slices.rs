//! Sequence iterators over slices.
//!
//! These adapters let the [`iters`](crate::iters) algorithms run over plain
//! arrays and vectors exactly as they run over a [`List`](crate::List).
//!
//! # Examples
//!
//! ```
//! use sentinel_list::{iters, slices};
//!
//! let v = [3, 1, 4, 1, 5];
//! assert_eq!(iters::max(slices::iter(&v)), Some(&5));
//! assert_eq!(iters::find(slices::riter(&v), |x| **x < 4), Some(&1));
//! ```

use std::fmt;

use crate::error::exhausted;
use crate::iters::{self, SeqIter};
use crate::list::cursor::Direction;

/// A sequence iterator over the elements of a slice.
///
/// This `struct` is created by [`iter`] and [`riter`].
pub struct Iter<'a, T: 'a> {
    rest: &'a [T],
    direction: Direction,
}

impl<'a, T: 'a> Iter<'a, T> {
    /// Returns the elements not visited yet, in slice order.
    pub fn as_slice(&self) -> &'a [T] {
        self.rest
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest,
            direction: self.direction,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("rest", &self.rest)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<'a, T: 'a> SeqIter for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.rest.is_empty()
    }

    fn next(&mut self) -> &'a T {
        let split = match self.direction {
            Direction::Forward => self.rest.split_first(),
            Direction::Reverse => self.rest.split_last(),
        };
        match split {
            Some((elt, rest)) => {
                self.rest = rest;
                elt
            }
            None => exhausted(),
        }
    }
}

/// A sequence iterator over mutable references to the elements of a slice.
///
/// This `struct` is created by [`iter_mut`] and [`riter_mut`].
pub struct IterMut<'a, T: 'a> {
    rest: &'a mut [T],
    direction: Direction,
}

impl<'a, T: 'a> IterMut<'a, T> {
    /// Returns the elements not visited yet, in slice order.
    pub fn into_slice(self) -> &'a mut [T] {
        self.rest
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("rest", &self.rest)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<'a, T: 'a> SeqIter for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn has_next(&mut self) -> bool {
        !self.rest.is_empty()
    }

    fn next(&mut self) -> &'a mut T {
        let rest = std::mem::take(&mut self.rest);
        let split = match self.direction {
            Direction::Forward => rest.split_first_mut(),
            Direction::Reverse => rest.split_last_mut(),
        };
        match split {
            Some((elt, rest)) => {
                self.rest = rest;
                elt
            }
            None => exhausted(),
        }
    }
}

/// Iterates `slice` front to back.
#[inline]
pub fn iter<T>(slice: &[T]) -> Iter<'_, T> {
    Iter {
        rest: slice,
        direction: Direction::Forward,
    }
}

/// Iterates `slice` back to front.
#[inline]
pub fn riter<T>(slice: &[T]) -> Iter<'_, T> {
    Iter {
        rest: slice,
        direction: Direction::Reverse,
    }
}

/// Iterates `slice` front to back, yielding mutable references.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, slices};
///
/// let mut v = [1, 2, 3];
/// iters::for_each(slices::iter_mut(&mut v), |x| *x *= 3);
/// assert_eq!(v, [3, 6, 9]);
/// ```
#[inline]
pub fn iter_mut<T>(slice: &mut [T]) -> IterMut<'_, T> {
    IterMut {
        rest: slice,
        direction: Direction::Forward,
    }
}

/// Iterates `slice` back to front, yielding mutable references.
#[inline]
pub fn riter_mut<T>(slice: &mut [T]) -> IterMut<'_, T> {
    IterMut {
        rest: slice,
        direction: Direction::Reverse,
    }
}

/// Collects the remaining elements of a sequence iterator into a `Vec`.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list, slices};
///
/// let list = list![1, 2, 3];
/// assert_eq!(slices::from_seq(iters::map(list.riter(), |x| x + 1)), [4, 3, 2]);
/// ```
pub fn from_seq<I: SeqIter>(it: I) -> Vec<I::Item> {
    iters::into_std(it).collect()
}

/// Reverses `slice` in place with the shared [`iters::reverse`] walk.
///
/// # Examples
///
/// ```
/// use sentinel_list::slices;
///
/// let mut v = vec![1, 2, 3, 4];
/// slices::reverse(&mut v);
/// assert_eq!(v, [4, 3, 2, 1]);
/// ```
pub fn reverse<T>(slice: &mut [T]) {
    let len = slice.len();
    let (front, back) = slice.split_at_mut(len / 2);
    iters::reverse(iter_mut(front), riter_mut(back), len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iters::SeqIter;

    #[test]
    fn test_iter_both_directions() {
        let v = [1, 2, 3];
        assert_eq!(from_seq(iter(&v)), [&1, &2, &3]);
        assert_eq!(from_seq(riter(&v)), [&3, &2, &1]);

        let mut it = iter(&v);
        assert!(it.has_next());
        it.next();
        assert_eq!(it.as_slice(), &[2, 3]);

        let empty: [i32; 0] = [];
        assert!(!iter(&empty).has_next());
        assert!(!riter(&empty).has_next());
    }

    #[test]
    #[should_panic(expected = "iterator must have next")]
    fn test_next_past_end() {
        let v = [1];
        let mut it = riter(&v);
        it.next();
        it.next();
    }

    #[test]
    fn test_iter_mut() {
        let mut v = vec![1, 2, 3, 4];
        let mut it = riter_mut(&mut v);
        *it.next() = 40;
        *it.next() = 30;
        assert_eq!(it.into_slice(), &mut [1, 2]);
        assert_eq!(v, [1, 2, 30, 40]);
    }

    #[test]
    fn test_reverse() {
        for len in 0..7 {
            let mut v: Vec<usize> = (0..len).collect();
            reverse(&mut v);
            assert_eq!(v, (0..len).rev().collect::<Vec<_>>());
            reverse(&mut v);
            assert_eq!(v, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_algorithms_on_slices() {
        let v = [2, 7, 1, 8, 2, 8];
        assert_eq!(iters::sum(iters::cloned(iter(&v))), 28);
        assert_eq!(iters::min(iter(&v)), Some(&1));
        assert_eq!(
            from_seq(iters::filter(iters::cloned(iter(&v)), |x| x % 2 == 0)),
            [2, 8, 2, 8]
        );
    }
}
