use crate::iters;
use crate::list::{List, HEAD, TAIL};
use crate::Iter;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod compact;
mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && iters::equal(self.iter(), other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        iters::compare(self.iter(), other.iter())
    }
}

impl<T: Clone> Clone for List<T> {
    /// The clone owns fresh nodes, so positions taken from `self` are not
    /// valid on it.
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut source = other.values();
        let mut key = HEAD;
        loop {
            let next = self.next_key(key);
            if next == TAIL {
                break;
            }
            match source.next() {
                Some(elem) => self.value_mut(next).clone_from(elem),
                None => break,
            }
            key = next;
        }
        self.truncate_after(key);
        self.extend(source.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let list = list![0, 1, 2];
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.pos(x).is_some()
    }

    /// Returns the index of the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let list = list![1, 2, 3, 4];
    /// assert_eq!(list.index(&3), Some(2));
    /// assert_eq!(list.index(&10), None);
    /// ```
    pub fn index(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.index_by(|e| e == x)
    }

    /// Returns the index of the first element satisfying `pred`.
    pub fn index_by<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut index = 0;
        let found = iters::find(self.iter(), |e| {
            let hit = pred(e);
            if !hit {
                index += 1;
            }
            hit
        });
        found.map(|_| index)
    }

    /// Returns a cursor resting on the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::iters::SeqIter;
    /// use sentinel_list::list;
    ///
    /// let list = list![1, 2, 3, 4];
    /// let mut it = list.pos(&2).unwrap();
    /// assert_eq!(it.current(), Some(&2));
    /// assert_eq!(it.next(), &3);
    ///
    /// assert!(list.pos(&5).is_none());
    /// ```
    pub fn pos(&self, x: &T) -> Option<Iter<'_, T>>
    where
        T: PartialEq<T>,
    {
        self.pos_by(|e| e == x)
    }

    /// Returns a cursor resting on the first element satisfying `pred`.
    pub fn pos_by<P>(&self, mut pred: P) -> Option<Iter<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut it = self.iter();
        iters::find(&mut it, |e| pred(e))?;
        Some(it)
    }

    /// Tests whether the two lists have the same length and pairwise equal
    /// elements with respect to `eq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let upper = list!["A", "B", "C"];
    /// let lower = list!["a", "b", "c"];
    /// assert!(upper.equal_by(&lower, |a, b| a.eq_ignore_ascii_case(b)));
    /// assert!(!upper.equal_by(&list!["a"], |a, b| a.eq_ignore_ascii_case(b)));
    /// ```
    pub fn equal_by<U, F>(&self, other: &List<U>, mut eq: F) -> bool
    where
        F: FnMut(&T, &U) -> bool,
    {
        self.len() == other.len() && iters::equal_by(self.iter(), other.iter(), |a, b| eq(a, b))
    }

    /// Compares the two lists lexicographically with respect to `cmp`.
    ///
    /// If one list is a prefix of the other, the shorter one is less.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    /// use std::cmp::Ordering;
    ///
    /// let a = list![1, 2, 3];
    /// let b = list![1.0, 2.0, 3.0, 4.0];
    /// let cmp = |x: &i32, y: &f64| f64::from(*x).partial_cmp(y).unwrap();
    /// assert_eq!(a.compare_by(&b, cmp), Ordering::Less);
    /// ```
    pub fn compare_by<U, F>(&self, other: &List<U>, mut cmp: F) -> Ordering
    where
        F: FnMut(&T, &U) -> Ordering,
    {
        iters::compare_by(self.iter(), other.iter(), |a, b| cmp(a, b))
    }

    /// Reverses the order of the elements in place.
    ///
    /// Only the elements move; every node stays where it is.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list![1, 2, 1, 3];
    /// list.reverse();
    /// assert_eq!(list, list![3, 1, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let len = self.len();
        let (front, back) = self.values_mut().split_at(len / 2);
        iters::reverse(iters::from_std(front), iters::from_std(back.rev()), len);
    }

    /// Returns `true` if the elements are sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// assert!(list![1, 2, 2, 9].is_sorted());
    /// assert!(!list![1, 3, 2].is_sorted());
    /// ```
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.is_sorted_by(|a, b| a.partial_cmp(b))
    }

    /// Returns `true` if the elements are sorted with respect to `compare`.
    ///
    /// Every pair of neighbors must compare as `Less` or `Equal`; `None`
    /// counts as unsorted.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Option<Ordering>,
    {
        let mut values = self.values();
        let mut prev = match values.next() {
            Some(first) => first,
            None => return true,
        };
        for elt in values {
            match compare(prev, elt) {
                Some(Ordering::Less) | Some(Ordering::Equal) => prev = elt,
                _ => return false,
            }
        }
        true
    }
}
