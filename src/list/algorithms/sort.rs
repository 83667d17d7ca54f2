use crate::list::{List, TAIL};
use log::trace;
use std::cmp::Ordering;

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(*n*)
    /// memory.
    ///
    /// # Current Implementation
    ///
    /// The node keys are gathered in list order and sorted by the elements
    /// they hold. The elements are then moved out in sorted order and
    /// written back front to back by a forward cursor, so every node keeps
    /// its place in the chain and only the elements move.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort_values(self, T::cmp);
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn’t implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn’t contain a `NaN`.
    /// ```
    /// use sentinel_list::List;
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort_values(self, compare);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort_values(self, |a, b| f(a).cmp(&f(b)));
    }
}

fn sort_values<T, F>(list: &mut List<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return;
    }
    trace!("sorting {} elements", list.len());

    let mut keys = Vec::with_capacity(list.len());
    let mut key = list.front_key();
    while key != TAIL {
        keys.push(key);
        key = list.next_key(key);
    }
    // A panicking comparator leaves the list untouched.
    keys.sort_by(|&a, &b| compare(list.value(a), list.value(b)));

    let sorted: Vec<T> = keys.into_iter().map(|key| list.take(key)).collect();
    let mut cursor = list.iter_mut();
    for value in sorted {
        let written = cursor.move_next().and_then(|()| cursor.set(value));
        debug_assert!(written.is_ok(), "more sorted values than nodes");
    }
}
