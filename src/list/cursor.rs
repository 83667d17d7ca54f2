use crate::error::{exhausted, ListError};
use crate::iters::{SeqIter, SeqIterMut};
use crate::list::{List, HEAD, TAIL};
use log::debug;
use std::fmt;

/// The traversal direction of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Front to back, following `next` links.
    Forward,
    /// Back to front, following `prev` links.
    Reverse,
}

/// A detached cursor position.
///
/// A `Position` does not borrow the list it was taken from, so it survives
/// mutations of that list. It is checked again by [`List::iter_at`] and
/// [`List::iter_mut_at`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) list: u64,
    pub(crate) key: usize,
    pub(crate) stamp: u64,
    pub(crate) direction: Direction,
}

impl Position {
    /// The direction of the cursor this position was taken from.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// A cursor over a `List`.
///
/// An `Iter` rests either on an element or on one of the two sentinels.
/// A forward cursor starts on the `head` sentinel (before the first
/// element) and is exhausted once the next node would be the `tail`
/// sentinel; a reverse cursor mirrors this.
///
/// # Examples
///
/// ```
/// use sentinel_list::iters::SeqIter;
/// use sentinel_list::list;
///
/// // Create a list: [# A B C #]
/// let list = list!['A', 'B', 'C'];
///
/// // A forward cursor: [#|A B C #]
/// let mut it = list.iter();
/// assert_eq!(it.current(), None);
/// assert_eq!(it.next(), &'A');
/// assert_eq!(it.current(), Some(&'A'));
///
/// // A reverse cursor: [# A B C|#]
/// let mut it = list.riter();
/// assert_eq!(it.next(), &'C');
/// assert_eq!(it.next(), &'B');
/// assert_eq!(it.peek(), Some(&'A'));
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    key: usize,
    direction: Direction,
}

/// A cursor over a `List` with editing operations.
///
/// Besides overwriting elements, an `IterMut` can insert elements after its
/// position and remove the element it rests on. Removal consumes the cursor
/// and hands back a fresh one, so a cursor can never observe the node it
/// removed.
///
/// # Examples
///
/// ```
/// use sentinel_list::list;
///
/// let mut list = list![1, 2, 7, 3];
/// let mut cursor = list.iter_mut();
/// cursor.advance(3);
///
/// // Remove 7, the cursor moves back onto 2.
/// let mut cursor = cursor.delete().unwrap();
/// assert_eq!(cursor.current(), Some(&2));
/// assert_eq!(cursor.next_mut(), Some(&mut 3));
///
/// assert_eq!(list, list![1, 2, 3]);
/// ```
pub struct IterMut<'a, T: 'a> {
    list: &'a mut List<T>,
    key: usize,
    direction: Direction,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The node a call to `next` would land on.
            fn peek_key(&self) -> usize {
                match self.direction {
                    Direction::Forward => self.list.next_key(self.key),
                    Direction::Reverse => self.list.prev_key(self.key),
                }
            }

            /// The sentinel that ends the traversal.
            fn end_key(&self) -> usize {
                match self.direction {
                    Direction::Forward => TAIL,
                    Direction::Reverse => HEAD,
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The traversal direction of the cursor.
            pub fn direction(&self) -> Direction {
                self.direction
            }

            /// Returns `true` if the cursor rests on a sentinel instead of an
            /// element.
            pub fn is_boundary(&self) -> bool {
                self.key == HEAD || self.key == TAIL
            }

            /// Returns `true` if the cursor can advance.
            pub fn has_next(&self) -> bool {
                self.peek_key() != self.end_key()
            }

            /// Move the cursor one node further, or fail with
            /// [`ListError::ExhaustedIterator`] at the end of the list.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) -> Result<(), ListError> {
                if !self.has_next() {
                    return Err(ListError::ExhaustedIterator);
                }
                self.key = self.peek_key();
                Ok(())
            }

            /// Move the cursor `steps` nodes further, stopping at the end of
            /// the list. Returns the number of steps actually taken.
            pub fn advance(&mut self, steps: usize) -> usize {
                let mut taken = 0;
                while taken < steps && self.move_next().is_ok() {
                    taken += 1;
                }
                taken
            }

            /// Detach the position of the cursor from the borrow of the list.
            ///
            /// See [`List::iter_at`].
            pub fn position(&self) -> Position {
                Position {
                    list: self.list.id(),
                    key: self.key,
                    stamp: self.list.nodes[self.key].stamp,
                    direction: self.direction,
                }
            }
        }
    };
}

impl_cursor!(Iter);
impl_cursor!(IterMut);

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>, key: usize, direction: Direction) -> Self {
        Self {
            list,
            key,
            direction,
        }
    }

    /// Return a reference of the element the cursor rests on, or `None`
    /// on a sentinel.
    pub fn current(&self) -> Option<&'a T> {
        if self.is_boundary() {
            return None;
        }
        Some(self.list.value(self.key))
    }

    /// Return a reference of the element a call to `next` would yield,
    /// without moving the cursor.
    pub fn peek(&self) -> Option<&'a T> {
        if !self.has_next() {
            return None;
        }
        Some(self.list.value(self.peek_key()))
    }

    /// The list the cursor walks.
    pub fn view(&self) -> &'a List<T> {
        self.list
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.list, self.key, self.direction)
    }
}

/// Compare cursors by their position.
///
/// Only cursors over the same list, resting on the same node and walking in
/// the same direction are considered equal.
///
/// # Examples
/// ```
/// use sentinel_list::iters::SeqIter;
/// use sentinel_list::list;
///
/// let list = list![1, 2, 3];
/// let it1 = list.iter();
/// let mut it2 = it1.clone();
/// assert!(it1 == it2);
///
/// it2.next();
/// assert!(it1 != it2);
///
/// let other = list.clone();
/// assert!(it1 != other.iter());
/// ```
impl<'a, T: 'a> PartialEq for Iter<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
            && self.key == other.key
            && self.direction == other.direction
    }
}

impl<'a, T: 'a> Eq for Iter<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("direction", &self.direction)
            .field("current", &self.current())
            .finish()
    }
}

impl<'a, T: 'a> SeqIter for Iter<'a, T> {
    type Item = &'a T;

    fn has_next(&mut self) -> bool {
        self.peek_key() != self.end_key()
    }

    fn next(&mut self) -> &'a T {
        if self.move_next().is_err() {
            exhausted();
        }
        self.list.value(self.key)
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, key: usize, direction: Direction) -> Self {
        Self {
            list,
            key,
            direction,
        }
    }

    /// Return a reference of the element the cursor rests on, or `None`
    /// on a sentinel.
    pub fn current(&self) -> Option<&T> {
        if self.is_boundary() {
            return None;
        }
        Some(self.list.value(self.key))
    }

    /// Return a mutable reference of the element the cursor rests on, or
    /// `None` on a sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![1, 2, 3];
    /// let mut cursor = list.riter_mut();
    /// assert!(cursor.current_mut().is_none());
    ///
    /// cursor.advance(1);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(list, list![1, 2, 15]);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_boundary() {
            return None;
        }
        Some(self.list.value_mut(self.key))
    }

    /// Advance the cursor and return a mutable reference of the element it
    /// lands on, or `None` (without moving) at the end of the list.
    pub fn next_mut(&mut self) -> Option<&mut T> {
        self.move_next().ok()?;
        Some(self.list.value_mut(self.key))
    }

    /// Overwrite the element the cursor rests on.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::InvalidIterator`] if the cursor rests on a
    /// sentinel, i.e. it has not visited any element yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{list, ListError};
    ///
    /// let mut list = list![1, 2];
    /// let mut cursor = list.iter_mut();
    /// assert_eq!(cursor.set(0), Err(ListError::InvalidIterator));
    ///
    /// cursor.advance(2);
    /// assert_eq!(cursor.set(0), Ok(()));
    /// assert_eq!(list, list![1, 0]);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), ListError> {
        if self.is_boundary() {
            return Err(ListError::InvalidIterator);
        }
        // A vacated payload is refilled here while the list sorts itself.
        self.list.nodes[self.key].element = Some(value);
        Ok(())
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_iter(&self) -> Iter<'_, T> {
        Iter::new(self.list, self.key, self.direction)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn downgrade(self) -> Iter<'a, T> {
        Iter::new(self.list, self.key, self.direction)
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that change the linking structure of the list.
impl<'a, T: 'a> IterMut<'a, T> {
    /// Insert `elems` right after the cursor, in its direction of travel.
    ///
    /// The elements keep their order when the list is read front to back,
    /// and the cursor does not move. The following calls to `next` visit the
    /// new elements first: in the given order on a forward cursor, and in
    /// reverse order on a reverse cursor.
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// number of inserted elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    /// use sentinel_list::iters::SeqIter;
    ///
    /// let mut list = list![1, 2, 5, 6];
    /// let mut cursor = list.iter_mut();
    /// cursor.advance(2);
    /// cursor.insert(vec![3, 4]);
    /// assert_eq!(cursor.next(), 3);
    /// assert_eq!(list, list![1, 2, 3, 4, 5, 6]);
    ///
    /// let mut cursor = list.riter_mut();
    /// cursor.insert(vec![7, 8]);
    /// assert_eq!(list, list![1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn insert<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut anchor = self.key;
        for elem in elems {
            let key = self.list.alloc(elem);
            match self.direction {
                Direction::Forward => {
                    let next = self.list.next_key(anchor);
                    self.list.insert_between(key, anchor, next);
                    anchor = key;
                }
                Direction::Reverse => {
                    let prev = self.list.prev_key(anchor);
                    self.list.insert_between(key, prev, anchor);
                }
            }
        }
    }

    /// Remove the element the cursor rests on and return it together with a
    /// fresh cursor.
    ///
    /// The fresh cursor rests on the neighbor the removed node was reached
    /// from, so its `next` is what `next` would have returned before.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Fails with [`ListError::InvalidIterator`] if the cursor rests on a
    /// sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{list, ListError};
    ///
    /// let mut list = list![1, 2, 3, 4];
    /// let mut cursor = list.riter_mut();
    /// cursor.advance(1);
    /// let (mut cursor, removed) = cursor.remove().unwrap();
    /// assert_eq!(removed, 4);
    /// assert_eq!(cursor.next_mut(), Some(&mut 3));
    ///
    /// assert_eq!(list.iter_mut().remove().err(), Some(ListError::InvalidIterator));
    /// ```
    pub fn remove(self) -> Result<(IterMut<'a, T>, T), ListError> {
        if self.is_boundary() {
            debug!("refusing to remove a sentinel node");
            return Err(ListError::InvalidIterator);
        }
        let back = match self.direction {
            Direction::Forward => self.list.prev_key(self.key),
            Direction::Reverse => self.list.next_key(self.key),
        };
        let element = self.list.detach(self.key);
        Ok((IterMut::new(self.list, back, self.direction), element))
    }

    /// Like [`IterMut::remove`], but drops the removed element.
    pub fn delete(self) -> Result<IterMut<'a, T>, ListError> {
        self.remove().map(|(cursor, _)| cursor)
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("direction", &self.direction)
            .field("current", &self.current())
            .finish()
    }
}

/// A mutable cursor yields copies, since the elements it visits stay
/// reachable for later edits.
impl<'a, T: Clone + 'a> SeqIter for IterMut<'a, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.peek_key() != self.end_key()
    }

    fn next(&mut self) -> T {
        if self.move_next().is_err() {
            exhausted();
        }
        self.list.value(self.key).clone()
    }
}

impl<'a, T: Clone + 'a> SeqIterMut for IterMut<'a, T> {
    type Value = T;

    fn set(&mut self, value: T) -> Result<(), ListError> {
        IterMut::set(self, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::iters::{self, SeqIter, SeqIterMut};
    use crate::{list, List, ListError};

    #[test]
    fn test_cursor_states() {
        let list = list![1, 2];
        let mut it = list.iter();
        assert!(it.is_boundary());
        assert_eq!(it.current(), None);
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.next(), &1);
        assert!(!it.is_boundary());
        assert_eq!(it.next(), &2);
        assert!(!it.has_next());
        assert_eq!(it.peek(), None);
        assert_eq!(it.move_next(), Err(ListError::ExhaustedIterator));
        assert_eq!(it.current(), Some(&2));
        assert_eq!(it.try_next(), Err(ListError::ExhaustedIterator));

        let empty: List<i32> = List::new();
        assert!(!empty.iter().has_next());
        assert!(!empty.riter().has_next());
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let list = list![1];
        let mut it = list.riter();
        assert!(it.has_next());
        assert!(it.has_next());
        assert_eq!(it.next(), &1);
        assert!(!it.has_next());
        assert!(!it.has_next());
    }

    #[test]
    #[should_panic(expected = "iterator must have next")]
    fn test_next_past_end() {
        let list = list![1];
        let mut it = list.iter();
        it.next();
        it.next();
    }

    #[test]
    fn test_insert() {
        fn check(input: &[i32], reverse: bool, steps: usize, elems: &[i32], expected: &[i32]) {
            let mut list: List<i32> = input.iter().copied().collect();
            let mut cursor = if reverse {
                list.riter_mut()
            } else {
                list.iter_mut()
            };
            assert_eq!(cursor.advance(steps), steps);
            cursor.insert(elems.iter().copied());
            let mut seen = elems.to_vec();
            if reverse {
                seen.reverse();
            }
            for mut elem in seen {
                assert_eq!(cursor.next_mut(), Some(&mut elem));
            }
            assert_eq!(list.to_vec(), expected);
            assert_eq!(list.len(), expected.len());
        }
        check(&[1, 3], false, 1, &[2], &[1, 2, 3]);
        check(&[1, 2, 5, 6], false, 2, &[3, 4], &[1, 2, 3, 4, 5, 6]);
        check(&[1, 2, 5, 6], true, 2, &[3, 4], &[1, 2, 3, 4, 5, 6]);
        check(&[], false, 0, &[1, 2], &[1, 2]);
        check(&[], true, 0, &[1, 2], &[1, 2]);
        check(&[1], false, 1, &[], &[1]);
        check(&[1, 2], true, 2, &[0], &[0, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut list = list![1, 2, 7, 3];
        let mut cursor = list.iter_mut();
        cursor.advance(3);
        let (mut cursor, removed) = cursor.remove().unwrap();
        assert_eq!(removed, 7);
        assert!(cursor.has_next());
        assert_eq!(cursor.next_mut(), Some(&mut 3));
        assert_eq!(list, list![1, 2, 3]);

        let mut list = list![1, 2, 3, 4];
        let mut cursor = list.riter_mut();
        cursor.advance(1);
        let mut cursor = cursor.delete().unwrap();
        assert!(cursor.is_boundary());
        assert_eq!(cursor.next_mut(), Some(&mut 3));
        assert_eq!(list, list![1, 2, 3]);

        // Removing the first element leaves a forward cursor on `head`.
        let mut list = list![1, 2];
        let mut cursor = list.iter_mut();
        cursor.advance(1);
        let cursor = cursor.delete().unwrap();
        assert!(cursor.is_boundary());
        assert_eq!(cursor.delete().err(), Some(ListError::InvalidIterator));
        assert_eq!(list, list![2]);
    }

    #[test]
    fn test_remove_sentinel() {
        let mut list = list![1, 2];
        assert_eq!(list.iter_mut().delete().err(), Some(ListError::InvalidIterator));
        assert_eq!(list.riter_mut().delete().err(), Some(ListError::InvalidIterator));
        let mut cursor = list.iter_mut();
        cursor.advance(5);
        // Resting on the last element, not past it.
        assert_eq!(cursor.remove().map(|(_, elt)| elt), Ok(2));
        assert_eq!(list, list![1]);
    }

    #[test]
    fn test_insert_then_delete_round_trip() {
        let original = list![1, 2, 3, 4, 5];
        for steps in 1..original.len() {
            let mut list = original.clone();
            let mut cursor = list.iter_mut();
            cursor.advance(steps);
            cursor.insert(Some(99));
            cursor.advance(1);
            let cursor = cursor.delete().unwrap();
            let mut expected = original.iter();
            expected.advance(steps);
            assert_eq!(cursor.current(), expected.current());
            assert_eq!(list, original);
        }
    }

    #[test]
    fn test_set() {
        let mut list = list![1, 2, 3];
        let mut cursor = list.riter_mut();
        assert_eq!(SeqIterMut::set(&mut cursor, 0), Err(ListError::InvalidIterator));
        while cursor.has_next() {
            let value = SeqIter::next(&mut cursor);
            SeqIterMut::set(&mut cursor, value * 10).unwrap();
        }
        assert_eq!(list, list![10, 20, 30]);
    }

    #[test]
    fn test_mutable_cursor_in_algorithms() {
        let mut list = list![3, 1, 2];
        let cursor = list.iter_mut();
        assert_eq!(iters::sum(cursor), 6);
        let cursor = list.riter_mut();
        assert_eq!(iters::max(cursor), Some(3));
    }

    #[test]
    fn test_position() {
        let mut list = list![1, 2, 3];
        let mut it = list.iter();
        it.next();
        let first = it.position();
        it.next();
        let second = it.position();
        let start = list.iter().position();
        let end = list.riter().position();

        let mut cursor = list.iter_mut_at(first).unwrap();
        cursor.advance(1);
        let cursor = cursor.delete().unwrap();
        assert_eq!(cursor.position(), first);

        assert_eq!(list.iter_at(second).err(), Some(ListError::InvalidIterator));
        assert_eq!(list.iter_at(first).unwrap().current(), Some(&1));
        assert!(list.iter_at(start).is_ok());
        assert!(list.iter_at(end).is_ok());

        // A recycled slot does not revive a stale position.
        list.push_back(4);
        assert_eq!(list.iter_at(second).err(), Some(ListError::InvalidIterator));

        let other = list.clone();
        assert_eq!(other.iter_at(first).err(), Some(ListError::InvalidIterator));
        assert_eq!(other.iter_at(start).err(), Some(ListError::InvalidIterator));
    }

    #[test]
    fn test_downgrade() {
        let mut list = list![1, 2];
        let mut cursor = list.iter_mut();
        cursor.advance(1);
        assert_eq!(cursor.as_iter().peek(), Some(&2));
        assert_eq!(cursor.view().len(), 2);
        let mut it = cursor.downgrade();
        assert_eq!(it.next(), &2);
    }
}
