use std::cmp::Ordering;

use log::trace;

use crate::iters::{Cloned, Filter, FromStd, IntoStd, Map, Number, SeqIter, Zip};

/// Drives `it` to exhaustion, calling `f` once per element.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list};
///
/// let list = list![1, 2, 3];
/// let mut seen = Vec::new();
/// iters::for_each(list.iter(), |x| seen.push(*x));
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub fn for_each<I, F>(mut it: I, mut f: F)
where
    I: SeqIter,
    F: FnMut(I::Item),
{
    while it.has_next() {
        f(it.next());
    }
}

/// Wraps `it` in a lazy iterator applying `f` to each element.
///
/// Nothing is pulled from `it` until the result is advanced.
pub fn map<I, F, V>(it: I, f: F) -> Map<I, F>
where
    I: SeqIter,
    F: FnMut(I::Item) -> V,
{
    Map::new(it, f)
}

/// Wraps `it` in a lazy iterator over the elements accepted by `pred`.
///
/// # Examples
///
/// ```
/// use sentinel_list::iters::{self, SeqIter};
/// use sentinel_list::list;
///
/// let list = list![1, -2, 3, -4];
/// let mut positive = iters::filter(list.iter(), |x| **x > 0);
/// assert!(positive.has_next());
/// assert!(positive.has_next());
/// assert_eq!(positive.next(), &1);
/// assert_eq!(positive.next(), &3);
/// assert!(!positive.has_next());
/// ```
pub fn filter<I, P>(it: I, pred: P) -> Filter<I, P>
where
    I: SeqIter,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(it, pred)
}

/// Wraps an iterator over references in one yielding clones.
pub fn cloned<'a, I, T>(it: I) -> Cloned<I>
where
    I: SeqIter<Item = &'a T>,
    T: Clone + 'a,
{
    Cloned::new(it)
}

/// Lazily pairs the elements of `a` and `b`.
///
/// # Examples
///
/// ```
/// use sentinel_list::iters::{self, SeqIter, Zipped};
/// use sentinel_list::list;
///
/// let nums = list![1, 2, 3];
/// let names = list!["one", "two"];
/// let mut zipped = iters::zip(nums.iter(), names.iter());
/// assert_eq!(zipped.next(), Zipped { first: &1, second: &"one" });
/// assert_eq!(zipped.next(), Zipped { first: &2, second: &"two" });
/// assert!(!zipped.has_next());
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: SeqIter,
    B: SeqIter,
{
    Zip::new(a, b)
}

/// Adapts a standard iterator to the sequence protocol.
pub fn from_std<I: IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd::new(iter.into_iter())
}

/// Adapts a sequence iterator to [`std::iter::Iterator`].
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list};
///
/// let list = list![1, 2, 7, -9];
/// let doubled: Vec<_> = iters::into_std(iters::map(list.iter(), |x| x * 2)).collect();
/// assert_eq!(doubled, [2, 4, 14, -18]);
/// ```
pub fn into_std<I: SeqIter>(it: I) -> IntoStd<I> {
    IntoStd::new(it)
}

/// Advances `it` by up to `n` elements and returns how many were skipped.
pub fn advance<I: SeqIter>(mut it: I, n: usize) -> usize {
    it.advance(n)
}

/// Folds every element into an accumulator seeded with `init`.
///
/// Returns `init` untouched on an exhausted iterator.
pub fn fold<I, V, F>(mut it: I, init: V, mut f: F) -> V
where
    I: SeqIter,
    F: FnMut(V, I::Item) -> V,
{
    let mut acc = init;
    while it.has_next() {
        acc = f(acc, it.next());
    }
    acc
}

/// Folds the elements of `it` using the first one as the seed.
///
/// Returns `T::default()` if `it` is already exhausted.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list, List};
///
/// let list = list![3, 4, 5];
/// assert_eq!(iters::reduce(iters::cloned(list.iter()), |a, b| a * b), 60);
///
/// let empty: List<i32> = List::new();
/// assert_eq!(iters::reduce(iters::cloned(empty.iter()), |a, b| a * b), 0);
/// ```
pub fn reduce<I, T, F>(mut it: I, f: F) -> T
where
    I: SeqIter<Item = T>,
    T: Default,
    F: FnMut(T, T) -> T,
{
    if !it.has_next() {
        return T::default();
    }
    let first = it.next();
    fold(it, first, f)
}

/// Returns the first element accepted by `pred`.
///
/// `it` is advanced up to and including the match, or to exhaustion.
pub fn find<I, P>(mut it: I, mut pred: P) -> Option<I::Item>
where
    I: SeqIter,
    P: FnMut(&I::Item) -> bool,
{
    while it.has_next() {
        let item = it.next();
        if pred(&item) {
            return Some(item);
        }
    }
    None
}

fn extremum_by<I, F>(mut it: I, mut replaces: F) -> Option<I::Item>
where
    I: SeqIter,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    if !it.has_next() {
        return None;
    }
    let mut best = it.next();
    while it.has_next() {
        let item = it.next();
        if replaces(&item, &best) {
            best = item;
        }
    }
    Some(best)
}

/// Returns the greatest element, or `None` on an exhausted iterator.
///
/// Of several equally great elements the first one wins.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list};
///
/// let list = list![3, 9, 1, 9];
/// assert_eq!(iters::max(list.iter()), Some(&9));
/// assert_eq!(iters::min(list.iter()), Some(&1));
/// ```
pub fn max<I>(it: I) -> Option<I::Item>
where
    I: SeqIter,
    I::Item: Ord,
{
    max_by(it, Ord::cmp)
}

/// Returns the greatest element with respect to `cmp`.
pub fn max_by<I, F>(it: I, mut cmp: F) -> Option<I::Item>
where
    I: SeqIter,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum_by(it, |item, best| cmp(item, best) == Ordering::Greater)
}

/// Returns the least element, or `None` on an exhausted iterator.
///
/// Of several equally small elements the first one wins.
pub fn min<I>(it: I) -> Option<I::Item>
where
    I: SeqIter,
    I::Item: Ord,
{
    min_by(it, Ord::cmp)
}

/// Returns the least element with respect to `cmp`.
pub fn min_by<I, F>(it: I, mut cmp: F) -> Option<I::Item>
where
    I: SeqIter,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum_by(it, |item, best| cmp(item, best) == Ordering::Less)
}

/// Adds up every element, starting from zero.
pub fn sum<I>(it: I) -> I::Item
where
    I: SeqIter,
    I::Item: Number,
{
    fold(it, Default::default(), |acc, x| acc + x)
}

/// Tests two iterators for element-wise equality.
///
/// Sequences of different lengths are unequal.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, list, List};
///
/// let empty: List<i32> = List::new();
/// assert!(iters::equal(empty.iter(), empty.iter()));
///
/// let (a, b) = (list![1, 2, 3], list![1, 2, 3, 4]);
/// assert!(!iters::equal(a.iter(), b.iter()));
/// ```
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: SeqIter,
    B: SeqIter,
    A::Item: PartialEq<B::Item>,
{
    equal_by(a, b, |x, y| x == y)
}

/// Tests two iterators for element-wise equality with respect to `eq`.
pub fn equal_by<A, B, F>(mut a: A, mut b: B, mut eq: F) -> bool
where
    A: SeqIter,
    B: SeqIter,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    loop {
        match (a.has_next(), b.has_next()) {
            (false, false) => return true,
            (true, true) => {
                if !eq(&a.next(), &b.next()) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Compares two iterators lexicographically.
///
/// A proper prefix compares less than the longer sequence.
pub fn compare<A, B>(a: A, b: B) -> Ordering
where
    A: SeqIter<Item = B::Item>,
    B: SeqIter,
    A::Item: Ord,
{
    compare_by(a, b, |x, y| x.cmp(y))
}

/// Compares two iterators lexicographically with respect to `cmp`.
pub fn compare_by<A, B, F>(mut a: A, mut b: B, mut cmp: F) -> Ordering
where
    A: SeqIter,
    B: SeqIter,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    loop {
        match (a.has_next(), b.has_next()) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => match cmp(&a.next(), &b.next()) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            },
        }
    }
}

/// Reverses a sequence of `length` elements in place, given a forward and
/// a backward iterator over it.
///
/// Both iterators walk inwards, swapping elements for `length / 2` steps.
///
/// # Panics
///
/// Panics if either iterator runs dry before the two meet, which means
/// `length` does not describe the sequence they traverse.
///
/// # Examples
///
/// ```
/// use sentinel_list::{iters, slices};
///
/// let mut v = [1, 2, 3, 4, 5];
/// let (front, back) = v.split_at_mut(2);
/// let back_len = back.len();
/// iters::reverse(slices::iter_mut(front), slices::riter_mut(&mut back[back_len - 2..]), 5);
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<'a, T, F, B>(mut front: F, mut back: B, length: usize)
where
    T: 'a,
    F: SeqIter<Item = &'a mut T>,
    B: SeqIter<Item = &'a mut T>,
{
    trace!("reversing {} elements", length);
    for _ in 0..length / 2 {
        if !front.has_next() || !back.has_next() {
            panic!("reverse: iterators exhausted before {} swaps", length / 2);
        }
        std::mem::swap(front.next(), back.next());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, slices, List};

    #[test]
    fn test_for_each_visits_in_order() {
        let list = list![5, 6, 7];
        let mut it = list.iter();
        let mut seen = Vec::new();
        for_each(&mut it, |x| seen.push(*x));
        assert_eq!(seen, [5, 6, 7]);
        assert!(!it.has_next());
    }

    #[test]
    fn test_map_is_lazy() {
        let list = list![1, 2, 3];
        let mut calls = 0;
        let mut it = map(list.iter(), |x| {
            calls += 1;
            x * 10
        });
        assert!(it.has_next());
        assert_eq!(it.next(), 10);
        drop(it);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_exhausts_source() {
        let list = list![1, 2, 7, -9];
        let mut src = list.iter();
        let doubled: List<i32> = List::from_seq(map(&mut src, |x| x * 2));
        assert_eq!(doubled, list![2, 4, 14, -18]);
        assert!(!src.has_next());
    }

    #[test]
    fn test_filter_buffers_one() {
        let list = list![1, 2, 3, 4, 5, 6];
        let mut pulled = 0;
        let mut it = filter(map(list.iter(), |x| {
            pulled += 1;
            *x
        }), |x| x % 3 == 0);
        assert!(it.has_next());
        assert!(it.has_next());
        assert_eq!(it.next(), 3);
        assert_eq!(it.next(), 6);
        assert!(!it.has_next());
        assert!(!it.has_next());
        drop(it);
        assert_eq!(pulled, 6);
    }

    #[test]
    #[should_panic(expected = "iterator must have next")]
    fn test_filter_next_past_end() {
        let list = list![1, 3];
        let mut it = filter(list.iter(), |x| **x % 2 == 0);
        it.next();
    }

    #[test]
    fn test_fold_and_reduce() {
        let list = list![1, 2, 3, 4];
        assert_eq!(fold(list.iter(), String::new(), |s, x| s + &x.to_string()), "1234");
        assert_eq!(reduce(cloned(list.iter()), |a, b| a - b), 1 - 2 - 3 - 4);

        let empty: List<i64> = List::new();
        assert_eq!(fold(empty.iter(), 42, |acc, x| acc + x), 42);
        assert_eq!(reduce(cloned(empty.iter()), |a, b| a + b), 0);
    }

    #[test]
    fn test_find_stops_at_match() {
        let list = list![1, 4, 9, 16];
        let mut it = list.iter();
        assert_eq!(find(&mut it, |x| **x > 3), Some(&4));
        assert_eq!(it.next(), &9);
        assert_eq!(find(&mut it, |x| **x > 100), None);
        assert!(!it.has_next());
    }

    #[test]
    fn test_extremum_ties() {
        let list = list![(1, 'a'), (3, 'b'), (3, 'c'), (0, 'd'), (0, 'e')];
        let by_key = |a: &&(i32, char), b: &&(i32, char)| a.0.cmp(&b.0);
        assert_eq!(max_by(list.iter(), by_key), Some(&(3, 'b')));
        assert_eq!(min_by(list.iter(), by_key), Some(&(0, 'd')));

        let empty: List<i32> = List::new();
        assert_eq!(max(empty.iter()), None);
        assert_eq!(min(empty.iter()), None);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(cloned(list![1.5, 2.5].iter())), 4.0);
        assert_eq!(sum(from_std(vec![1u8, 2, 3])), 6);
        assert_eq!(sum(from_std(Vec::<i32>::new())), 0);
    }

    #[test]
    fn test_equal() {
        let a = list![1, 2, 3];
        assert!(equal(a.iter(), a.iter()));
        assert!(equal(a.iter(), slices::iter(&[1, 2, 3])));
        assert!(!equal(a.iter(), slices::iter(&[1, 2])));
        assert!(!equal(a.iter(), slices::iter(&[1, 2, 4])));
        assert!(equal_by(a.iter(), a.riter(), |_, _| true));
    }

    #[test]
    fn test_compare() {
        let a = list![1, 2, 3];
        let b = list![1, 2, 3, 4];
        let c = list![1, 3];
        assert_eq!(compare(a.iter(), a.iter()), Ordering::Equal);
        assert_eq!(compare(a.iter(), b.iter()), Ordering::Less);
        assert_eq!(compare(b.iter(), a.iter()), Ordering::Greater);
        assert_eq!(compare(c.iter(), b.iter()), Ordering::Greater);
        assert_eq!(
            compare_by(a.iter(), b.iter(), |x, y| y.cmp(x)),
            Ordering::Less
        );
    }

    #[test]
    fn test_zip_leaves_surplus() {
        let a = list![1, 2, 3];
        let b = list!['x'];
        let mut long = a.iter();
        let pairs: Vec<(&i32, &char)> = into_std(zip(&mut long, b.iter()))
            .map(Into::into)
            .collect();
        assert_eq!(pairs, [(&1, &'x')]);
        // The long side was peeked at but not advanced past its first surplus.
        assert_eq!(long.next(), &2);
    }

    #[test]
    fn test_advance() {
        let list = list![1, 2, 3];
        let mut it = list.iter();
        assert_eq!(advance(&mut it, 2), 2);
        assert_eq!(it.next(), &3);
        assert_eq!(advance(&mut it, 5), 0);
    }

    #[test]
    fn test_reverse_primitive() {
        for len in 0..8 {
            let mut v: Vec<usize> = (0..len).collect();
            let (front, back) = v.split_at_mut(len / 2);
            reverse(slices::iter_mut(front), slices::riter_mut(back), len);
            let expected: Vec<usize> = (0..len).rev().collect();
            assert_eq!(v, expected);
        }
    }

    #[test]
    #[should_panic(expected = "reverse")]
    fn test_reverse_bad_length() {
        let mut v = [1, 2, 3];
        let (front, back) = v.split_at_mut(1);
        reverse(slices::iter_mut(front), slices::riter_mut(back), 6);
    }
}
