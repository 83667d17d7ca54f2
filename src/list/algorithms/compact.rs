use crate::list::{List, TAIL};
use log::debug;

impl<T> List<T> {
    /// Replace every run of consecutive equal elements with a single copy,
    /// like the Unix `uniq` command.
    ///
    /// Equal elements that are not next to each other are all kept.
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
    /// let mut list = list![1, 1, 1, 2, 2, 3, 1];
    /// list.compact();
    /// assert_eq!(list, list![1, 2, 3, 1]);
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn compact(&mut self)
    where
        T: PartialEq,
    {
        self.compact_by(|a, b| a == b)
    }

    /// Like [`List::compact`], but uses `same` to tell the elements apart.
    ///
    /// `same` receives the last kept element and the candidate after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::list;
    ///
    /// let mut list = list!["a", "A", "b", "B", "a"];
    /// list.compact_by(|a, b| a.eq_ignore_ascii_case(b));
    /// assert_eq!(list, list!["a", "b", "a"]);
    /// ```
    pub fn compact_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len() < 2 {
            return;
        }
        let before = self.len();
        // Decide which nodes to keep before any element moves, so a
        // panicking `same` leaves the list untouched.
        let mut kept = Vec::new();
        let mut last = self.front_key();
        let mut read = self.next_key(last);
        while read != TAIL {
            if !same(self.value(last), self.value(read)) {
                kept.push(read);
                last = read;
            }
            read = self.next_key(read);
        }
        // `write` rests on the last packed element.
        let mut write = self.front_key();
        for key in kept {
            write = self.next_key(write);
            if write != key {
                let value = self.take(key);
                self.nodes[write].element = Some(value);
            }
        }
        self.truncate_after(write);
        debug!("compacted {} elements into {}", before, self.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::{list, List};

    #[test]
    fn test_compact() {
        let cases: &[(&[i32], &[i32])] = &[
            (&[], &[]),
            (&[1], &[1]),
            (&[1, 1, 1, 2], &[1, 2]),
            (&[1, 1, 1, 2, 2, 3], &[1, 2, 3]),
            (&[1, 2, 3], &[1, 2, 3]),
            (&[1, 2, 2, 3, 3, 4], &[1, 2, 3, 4]),
            (&[5, 5, 5, 5], &[5]),
            (&[1, 2, 1, 2], &[1, 2, 1, 2]),
        ];
        for (input, expected) in cases {
            let mut list: List<i32> = input.iter().copied().collect();
            list.compact();
            assert_eq!(list.to_vec(), *expected);
            assert_eq!(list.len(), expected.len());
            assert_eq!(list.values().count(), expected.len());
        }
    }

    #[test]
    fn test_compact_then_grow() {
        let mut list = list![1, 1, 2, 2, 2];
        list.compact();
        list.push_back(3);
        list.push_front(0);
        assert_eq!(list, list![0, 1, 2, 3]);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.values().rev().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);
    }

    #[test]
    fn test_compact_by_panic_leaves_list_intact() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut list = list![1, 1, 2, 3, 3];
        let mut calls = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            list.compact_by(|a, b| {
                calls += 1;
                if calls == 3 {
                    panic!("comparison failed");
                }
                a == b
            })
        }));
        assert!(result.is_err());
        assert_eq!(list.len(), 5);
        assert_eq!(list.to_vec(), [1, 1, 2, 3, 3]);

        list.compact();
        assert_eq!(list, list![1, 2, 3]);
    }

    #[test]
    fn test_compact_by() {
        let mut list = list![1, 2, 4, 5, 7];
        list.compact_by(|kept, next| next - kept == 1);
        assert_eq!(list, list![1, 4, 7]);
    }
}
