use crate::list::{List, Node, TAIL};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A standard iterator over the elements of a `List`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::list;
///
/// let mut list = list![1, 2, 3];
/// let mut values = list.values();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", values.next());
/// ```
pub struct Values<'a, T: 'a> {
    list: &'a List<T>,
    start: usize,
    end: usize,
    len: usize,
}

impl<'a, T: 'a> Values<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            start: list.front_key(),
            end: TAIL,
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Values<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Values<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.start;
        self.start = self.list.next_key(current);
        self.len -= 1;
        Some(self.list.value(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Values<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.end = self.list.prev_key(self.end);
        self.len -= 1;
        Some(self.list.value(self.end))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Values<'a, T> {}

impl<'a, T: 'a> FusedIterator for Values<'a, T> {}

/// A standard iterator over mutable references to the elements of a `List`.
///
/// Like [`Values`], it walks the half-open range `start..end` along the
/// links of the list.
///
/// Though the `ValuesMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable while a `ValuesMut` is alive.
/// ```compile_fail
/// use sentinel_list::list;
///
/// let mut list = list![1, 2, 3];
/// let mut values = list.values_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", values.next());
/// ```
pub struct ValuesMut<'a, T: 'a> {
    nodes: NonNull<Node<T>>,
    start: usize,
    end: usize,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> ValuesMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let (start, len) = (list.front_key(), list.len());
        Self {
            nodes: NonNull::from(list.nodes.as_mut_slice()).cast(),
            start,
            end: TAIL,
            len,
            _marker: PhantomData,
        }
    }

    fn next_key(&self, key: usize) -> usize {
        // SAFETY: `key` is a slot of the borrowed arena. Only the link field
        // is read, so no reference to an element handed out is created.
        unsafe { (*self.nodes.as_ptr().add(key)).next }
    }

    fn prev_key(&self, key: usize) -> usize {
        // SAFETY: as in `next_key`.
        unsafe { (*self.nodes.as_ptr().add(key)).prev }
    }

    /// Hand out the element of `key`, which must lie in `start..end` and
    /// have been dropped from the range before the call.
    fn element(&mut self, key: usize) -> &'a mut T {
        // SAFETY: every key of `start..end` is a distinct real node of the
        // arena borrowed for `'a`, and each one leaves the range before its
        // element is handed out, so the element is never aliased.
        let element = unsafe { &mut (*self.nodes.as_ptr().add(key)).element };
        match element {
            Some(element) => element,
            None => unreachable!("node {} holds no element", key),
        }
    }

    /// Split the remaining elements into `[0, mid)` and `[mid, len)`.
    ///
    /// This operation should compute in *O*(*mid*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![1, 2, 3, 4, 5];
    /// let (front, back) = list.values_mut().split_at(2);
    /// front.for_each(|x| *x = 0);
    /// back.rev().take(1).for_each(|x| *x = 9);
    /// assert_eq!(list, list![0, 0, 3, 4, 9]);
    /// ```
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let mid = mid.min(self.len);
        let mut split = self.start;
        for _ in 0..mid {
            split = self.next_key(split);
        }
        (
            Self {
                nodes: self.nodes,
                start: self.start,
                end: split,
                len: mid,
                _marker: PhantomData,
            },
            Self {
                nodes: self.nodes,
                start: split,
                end: self.end,
                len: self.len - mid,
                _marker: PhantomData,
            },
        )
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for ValuesMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("ValuesMut");
        let mut key = self.start;
        for _ in 0..self.len {
            // SAFETY: the elements of `start..end` are not handed out yet.
            let element = unsafe { &(*self.nodes.as_ptr().add(key)).element };
            f.field(element);
            key = self.next_key(key);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for ValuesMut<'a, T> {
    type Item = &'a mut T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.start;
        self.start = self.next_key(current);
        self.len -= 1;
        Some(self.element(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for ValuesMut<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.end = self.prev_key(self.end);
        self.len -= 1;
        Some(self.element(self.end))
    }
}

impl<'a, T: 'a> ExactSizeIterator for ValuesMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for ValuesMut<'a, T> {}

unsafe impl<T: Send> Send for ValuesMut<'_, T> {}

unsafe impl<T: Sync> Sync for ValuesMut<'_, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = ValuesMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.riter_mut().insert(iter);
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(list: List<T>) -> Self {
        list.into_vec()
    }
}

impl<T> List<T> {
    /// Copy the elements into a `Vec`, in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Move the elements into a `Vec`, in list order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}
