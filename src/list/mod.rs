use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::error::ListError;
use crate::iters::SeqIter;
use crate::list::cursor::Direction;
use crate::{Iter, IterMut, Position, Values, ValuesMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
#[cfg(feature = "serde")]
mod serde_impl;

/// Arena slot of the sentinel before the first element.
pub(crate) const HEAD: usize = 0;
/// Arena slot of the sentinel after the last element.
pub(crate) const TAIL: usize = 1;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// The `List` is a doubly-linked list bounded by two sentinel nodes.
/// It allows inserting, removing elements at any cursor position in constant
/// time. In compromise, accessing or mutating elements at any position take
/// *O*(*n*) time.
///
/// The nodes live in an arena owned by the `List` and refer to their
/// neighbors by slot index:
/// - slot `0` is the `head` sentinel, slot `1` is the `tail` sentinel, both
///   created with the list and never freed;
/// - vacated slots are kept in a free list and reused by later inserts;
/// - a length field `len` is maintained on every insert and remove.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `key`: the arena slot of a node.
pub struct List<T> {
    pub(crate) nodes: Vec<Node<T>>,
    free: Vec<usize>,
    /// the length of the list
    pub(crate) len: usize,
    id: u64,
    stamp: u64,
}

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    /// Insertion stamp, `0` for sentinels and vacated slots.
    pub(crate) stamp: u64,
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    fn sentinel(next: usize, prev: usize) -> Self {
        Self {
            next,
            prev,
            stamp: 0,
            element: None,
        }
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn front_key(&self) -> usize {
        self.nodes[HEAD].next
    }

    pub(crate) fn back_key(&self) -> usize {
        self.nodes[TAIL].prev
    }

    pub(crate) fn next_key(&self, key: usize) -> usize {
        self.nodes[key].next
    }

    pub(crate) fn prev_key(&self, key: usize) -> usize {
        self.nodes[key].prev
    }

    /// The element of a real node.
    ///
    /// Panics if `key` names a sentinel.
    pub(crate) fn value(&self, key: usize) -> &T {
        match self.nodes[key].element {
            Some(ref element) => element,
            None => unreachable!("node {} holds no element", key),
        }
    }

    pub(crate) fn value_mut(&mut self, key: usize) -> &mut T {
        match self.nodes[key].element {
            Some(ref mut element) => element,
            None => unreachable!("node {} holds no element", key),
        }
    }

    /// Move the element out of a real node, leaving the node linked but
    /// vacant until it is refilled.
    pub(crate) fn take(&mut self, key: usize) -> T {
        match self.nodes[key].element.take() {
            Some(element) => element,
            None => unreachable!("node {} holds no element", key),
        }
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Store `element` in a fresh or recycled slot, returning its key.
    ///
    /// The node is unlinked until passed to [`List::insert_between`].
    pub(crate) fn alloc(&mut self, element: T) -> usize {
        self.stamp += 1;
        let node = Node {
            next: TAIL,
            prev: HEAD,
            stamp: self.stamp,
            element: Some(element),
        };
        match self.free.pop() {
            Some(key) => {
                self.nodes[key] = node;
                key
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Splice the node `key` between the adjacent nodes `prev` and `next`.
    ///
    /// This is the only place where a node joins the chain.
    pub(crate) fn insert_between(&mut self, key: usize, prev: usize, next: usize) {
        debug_assert!(key > TAIL, "sentinels cannot be inserted");
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, key);
        self.connect(key, next);
        self.len += 1;
    }

    /// Unlink the real node `key` and free its slot, returning its element.
    pub(crate) fn detach(&mut self, key: usize) -> T {
        debug_assert!(key > TAIL, "sentinels cannot be detached");
        let (prev, next) = (self.nodes[key].prev, self.nodes[key].next);
        self.connect(prev, next);
        match self.release(key) {
            Some(element) => element,
            None => unreachable!("node {} holds no element", key),
        }
    }

    /// Free every node after `key`, making `key` the last node.
    pub(crate) fn truncate_after(&mut self, key: usize) {
        let mut cur = self.nodes[key].next;
        while cur != TAIL {
            let next = self.nodes[cur].next;
            self.release(cur);
            cur = next;
        }
        self.connect(key, TAIL);
    }

    fn release(&mut self, key: usize) -> Option<T> {
        let node = &mut self.nodes[key];
        node.stamp = 0;
        let element = node.element.take();
        self.free.push(key);
        self.len -= 1;
        element
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }

    /// Check that `pos` still names a usable node of this list.
    pub(crate) fn validate(&self, pos: &Position) -> Result<(), ListError> {
        let valid = pos.list == self.id
            && match (pos.key, pos.direction) {
                (HEAD, Direction::Forward) | (TAIL, Direction::Reverse) => true,
                (HEAD, _) | (TAIL, _) => false,
                (key, _) => self
                    .nodes
                    .get(key)
                    .map_or(false, |node| node.stamp == pos.stamp),
            };
        if valid {
            Ok(())
        } else {
            debug!("rejecting stale or foreign position {:?}", pos);
            Err(ListError::InvalidIterator)
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel(TAIL, HEAD), Node::sentinel(TAIL, HEAD)],
            free: Vec::new(),
            len: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            stamp: 0,
        }
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// arena reallocates.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let mut list = List::with_capacity(8);
    /// list.push_back('a');
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self::new();
        list.nodes.reserve(capacity);
        list
    }

    /// Build a list from the remaining elements of a sequence iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{iters, list, List};
    ///
    /// let source = list![1, 2, 3];
    /// let squares = List::from_seq(iters::map(source.iter(), |x| x * x));
    /// assert_eq!(squares, list![1, 4, 9]);
    /// ```
    pub fn from_seq<I>(mut it: I) -> Self
    where
        I: SeqIter<Item = T>,
    {
        let mut list = List::new();
        while it.has_next() {
            list.push_back(it.next());
        }
        list
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// Positions taken before the call are invalidated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{list, ListError};
    ///
    /// let mut list = list![1, 2];
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), Err(ListError::EmptyCollection));
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing list of {} elements", self.len);
        self.nodes.truncate(2);
        self.free.clear();
        self.connect(HEAD, TAIL);
        self.len = 0;
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(ListError::EmptyCollection));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        Ok(self.value(self.front_key()))
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![1];
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        let key = self.front_key();
        Ok(self.value_mut(key))
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(ListError::EmptyCollection));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        Ok(self.value(self.back_key()))
    }

    /// Provides a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        let key = self.back_key();
        Ok(self.value_mut(key))
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.iter_mut().insert(Some(elt));
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyCollection));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyCollection));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        let mut cursor = self.iter_mut();
        cursor.move_next()?;
        cursor.remove().map(|(_, elt)| elt)
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.riter_mut().insert(Some(elt));
    }

    /// Removes the last element from a list and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyCollection));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        let mut cursor = self.riter_mut();
        cursor.move_next()?;
        cursor.remove().map(|(_, elt)| elt)
    }

    /// Provides a forward cursor resting before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::iters::SeqIter;
    /// use sentinel_list::list;
    ///
    /// let list = list![0, 1, 2];
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), &0);
    /// assert_eq!(iter.next(), &1);
    /// assert_eq!(iter.next(), &2);
    /// assert!(!iter.has_next());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, HEAD, Direction::Forward)
    }

    /// Provides a reverse cursor resting after the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::iters::SeqIter;
    /// use sentinel_list::list;
    ///
    /// let list = list![0, 1, 2];
    ///
    /// let mut iter = list.riter();
    /// assert_eq!(iter.next(), &2);
    /// assert_eq!(iter.next(), &1);
    /// assert_eq!(iter.next(), &0);
    /// assert!(!iter.has_next());
    /// ```
    #[inline]
    pub fn riter(&self) -> Iter<'_, T> {
        Iter::new(self, TAIL, Direction::Reverse)
    }

    /// Provides a forward cursor with editing operations, resting before the
    /// first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![0, 1, 2];
    ///
    /// let mut cursor = list.iter_mut();
    /// while let Some(element) = cursor.next_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, list![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self, HEAD, Direction::Forward)
    }

    /// Provides a reverse cursor with editing operations, resting after the
    /// last element.
    #[inline]
    pub fn riter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self, TAIL, Direction::Reverse)
    }

    /// Provides a cursor at a position taken earlier from a cursor over this
    /// list.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::InvalidIterator`] if `pos` comes from another
    /// list, or names a node that has been removed since.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::iters::SeqIter;
    /// use sentinel_list::{list, ListError};
    ///
    /// let mut list = list![1, 2, 3];
    /// let mut it = list.iter();
    /// it.next();
    /// let pos = it.position();
    ///
    /// assert_eq!(list.iter_at(pos).map(|mut it| *it.next()), Ok(2));
    ///
    /// list.pop_front().unwrap();
    /// assert_eq!(list.iter_at(pos).err(), Some(ListError::InvalidIterator));
    /// ```
    pub fn iter_at(&self, pos: Position) -> Result<Iter<'_, T>, ListError> {
        self.validate(&pos)?;
        Ok(Iter::new(self, pos.key, pos.direction))
    }

    /// Like [`List::iter_at`], but provides a cursor with editing operations.
    pub fn iter_mut_at(&mut self, pos: Position) -> Result<IterMut<'_, T>, ListError> {
        self.validate(&pos)?;
        Ok(IterMut::new(self, pos.key, pos.direction))
    }

    /// Provides a standard double-ended iterator over the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let list = list![0, 1, 2];
    /// assert_eq!(list.values().rev().collect::<Vec<_>>(), [&2, &1, &0]);
    /// ```
    #[inline]
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self)
    }

    /// Provides a standard double-ended iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![0, 1, 2];
    /// for element in list.values_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, list![10, 11, 12]);
    /// ```
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, T> {
        ValuesMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Renders the elements separated by spaces, as in `[1 2 3]`.
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut values = self.values();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for elt in values {
                write!(f, " {}", elt)?;
            }
        }
        f.write_str("]")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'i, 'a>(x: Values<'i, &'static str>) -> Values<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::iters::SeqIter;
    use crate::{list, List, ListError};
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        assert!(list.pop_front().is_ok());
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        // The recycled slot is dropped with the rest.
        list.push_back(DropChecker::new(4, &dropped));
        drop(list);
        let mut dropped = dropped.into_inner();
        dropped.sort_unstable();
        assert_eq!(dropped, [1, 2, 3, 4]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::EmptyCollection));
        assert_eq!(list.back(), Err(ListError::EmptyCollection));
        assert_eq!(list.pop_front(), Err(ListError::EmptyCollection));
        assert_eq!(list.pop_back(), Err(ListError::EmptyCollection));
        assert_eq!(list.front_mut(), Err(ListError::EmptyCollection));
        assert_eq!(list.back_mut(), Err(ListError::EmptyCollection));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::EmptyCollection));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(ListError::EmptyCollection));
        assert_eq!(list.back(), Err(ListError::EmptyCollection));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_slots_are_reused() {
        let mut list: List<i32> = (0..4).collect();
        assert_eq!(list.nodes.len(), 6);
        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_back(), Ok(3));
        list.push_back(7);
        list.push_front(8);
        assert_eq!(list.nodes.len(), 6);
        assert_eq!(list, list![8, 1, 2, 7]);
    }

    #[test]
    fn list_links_are_consistent() {
        fn check<T>(list: &List<T>) {
            let mut count = 0;
            let mut key = super::HEAD;
            while key != super::TAIL {
                let next = list.next_key(key);
                assert_eq!(list.prev_key(next), key);
                key = next;
                count += 1;
            }
            assert_eq!(count - 1, list.len());
            assert_eq!(list.prev_key(super::HEAD), super::HEAD);
            assert_eq!(list.next_key(super::TAIL), super::TAIL);
        }
        let mut list: List<i32> = List::new();
        check(&list);
        list.extend(0..10);
        check(&list);
        let mut cursor = list.iter_mut();
        cursor.advance(4);
        let cursor = cursor.delete().unwrap();
        let (mut cursor, _) = cursor.remove().unwrap();
        cursor.insert(vec![20, 21, 22]);
        check(&list);
        list.compact_by(|a, b| (a - b).abs() == 1);
        check(&list);
        list.clear();
        check(&list);
    }

    #[test]
    fn list_len() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front().unwrap();
        assert_eq!(list.len(), 0);

        list.extend(0..5);
        assert_eq!(list.len(), 5);

        let mut cursor = list.iter_mut();
        cursor.advance(3);
        cursor.insert(5..7);
        assert_eq!(list.len(), 7);

        list.compact_by(|_, _| true);
        assert_eq!(list.len(), 1);

        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_display_and_debug() {
        assert_eq!(list![1, 2, 3].to_string(), "[1 2 3]");
        assert_eq!(List::<i32>::new().to_string(), "[]");
        assert_eq!(list!["a"].to_string(), "[a]");
        assert_eq!(format!("{:?}", list![1, 2]), "[1, 2]");
    }

    #[test]
    fn list_from_seq() {
        let source = list![3, 1, 2];
        let mut it = source.riter();
        it.next();
        let tail: List<i32> = List::from_seq(crate::iters::cloned(it));
        assert_eq!(tail, list![1, 3]);
    }
}
