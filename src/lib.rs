//! This crate provides a doubly-linked list bounded by two sentinel nodes,
//! together with a small sequence-iterator protocol and a set of generic
//! algorithms written against it.
//!
//! The [`List`] allows inserting, removing elements at any cursor position in
//! constant time. In compromise, accessing or mutating elements at any position
//! take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::list;
//!
//! let mut list = list![1, 2, 7];
//! list.push_front(-9);
//!
//! let mut cursor = list.iter_mut();
//! cursor.insert(vec![11, 12]); // insert at the beginning of the list
//! assert_eq!(cursor.view(), &list![11, 12, -9, 1, 2, 7]);
//!
//! let mut cursor = list.riter_mut();
//! cursor.insert(vec![13, 14]); // insert at the end of the list
//! assert_eq!(cursor.view(), &list![11, 12, -9, 1, 2, 7, 13, 14]);
//!
//! let mut it = list.iter();
//! it.advance(3);
//! assert_eq!(it.current(), Some(&-9));
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a list live in an arena owned by the list and refer to their
//! neighbors by slot:
//! ```text
//!   slot 0                                                          slot 1
//! ╔═══════════╗    ┌───────────┐    ┌───────────┐    ┌───────────┐    ╔═══════════╗
//! ║   next    ║ ─→ │   next    │ ─→ │   next    │ ─→ │   next    │ ─→ ║   next    ║
//! ╟───────────╢    ├───────────┤    ├───────────┤    ├───────────┤    ╟───────────╢
//! ║   prev    ║ ←─ │   prev    │ ←─ │   prev    │ ←─ │   prev    │ ←─ ║   prev    ║
//! ╟───────────╢    ├───────────┤    ├───────────┤    ├───────────┤    ╟───────────╢
//! ┊No payload ┊    │ payload T │    │ payload T │    │ payload T │    ┊No payload ┊
//! ╚═══════════╝    └───────────┘    └───────────┘    └───────────┘    ╚═══════════╝
//!     head             front            ...               back             tail
//! ```
//! The `List` contains:
//! - the arena of nodes, of which slot 0 is the `head` sentinel and slot 1 is
//!   the `tail` sentinel. Both exist as long as the list, and hold no payload;
//! - a free list of vacated slots, reused by later inserts;
//! - a length field `len`, maintained on every insert and remove.
//!
//! Initially, `head.next` is `tail` and `tail.prev` is `head`.
//!
//! As elements are inserted into the list, `head.next` points to the first
//! element, and `tail.prev` points to the last element of the list.
//!
//! # Cursors
//!
//! Cursors ([`Iter`] and [`IterMut`]) rest either on an element or on a
//! sentinel. A forward cursor starts on `head` and is exhausted once its next
//! node would be `tail`; a reverse cursor starts on `tail` and walks the
//! `prev` links towards `head`.
//!
//! Cursors implement the [`SeqIter`] protocol, which has an explicit
//! [`has_next`] test and a [`next`] that panics past the end.
//!
//! A cursor borrows its list. To keep a position across mutations, take a
//! [`Position`] and turn it back into a cursor with [`List::iter_at`]; a
//! position naming a node removed since is rejected with
//! [`ListError::InvalidIterator`].
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::iters::SeqIter;
//! use sentinel_list::{list, ListError};
//!
//! let mut list = list![1, 2, 3];
//! let mut it = list.iter();
//! assert!(it.has_next());
//! assert_eq!(it.next(), &1);
//! assert_eq!(it.next(), &2);
//! assert_eq!(it.next(), &3);
//! assert!(!it.has_next());
//! assert_eq!(it.try_next(), Err(ListError::ExhaustedIterator));
//!
//! let pos = list.iter().position();
//! list.push_front(0);
//! assert!(list.iter_at(pos).is_ok()); // the head sentinel never goes away
//! ```
//!
//! # Cursor Mutations
//!
//! [`IterMut`] provides ways to mutate the list at the cursor.
//! - [`insert`]: insert elements next to the cursor, keeping their order;
//! - [`remove`]: remove the element at the cursor, getting back a cursor on the
//!   neighbor the removed element was reached from;
//! - [`set`]: overwrite the element at the cursor.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::list;
//!
//! let mut list = list![1, 2, 3, 4];
//!
//! let mut cursor = list.iter_mut();
//! cursor.advance(3);
//! let (cursor, removed) = cursor.remove().unwrap(); // becomes [1, 2, 4], rests on 2
//! assert_eq!(removed, 3);
//! assert_eq!(cursor.current(), Some(&2));
//!
//! assert_eq!(list, list![1, 2, 4]);
//! ```
//!
//! # Algorithms
//!
//! The [`iters`] module holds the algorithms (`map`, `filter`, `fold`, `find`,
//! `compare`, ...). They only talk to the [`SeqIter`] protocol, so they run
//! over lists, over [`slices`] and over [`maps`] alike. The list itself offers
//! in-place [`sort`], [`compact`] and [`reverse`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Position`]: crate::Position
//! [`SeqIter`]: crate::iters::SeqIter
//! [`has_next`]: crate::iters::SeqIter::has_next
//! [`next`]: crate::iters::SeqIter::next
//! [`insert`]: crate::IterMut::insert
//! [`remove`]: crate::IterMut::remove
//! [`set`]: crate::IterMut::set
//! [`sort`]: crate::List::sort
//! [`compact`]: crate::List::compact
//! [`reverse`]: crate::List::reverse

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::cursor::{Direction, Iter, IterMut, Position};
#[doc(inline)]
pub use list::iterator::{IntoIter, Values, ValuesMut};
#[doc(inline)]
pub use list::List;

mod error;
pub mod iters;
pub mod list;
pub mod maps;
pub mod slices;

/// Creates a [`List`] containing the arguments, front to back.
///
/// # Examples
///
/// ```
/// use sentinel_list::{list, List};
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.to_vec(), [1, 2, 3]);
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($elt:expr),+ $(,)?) => {
        $crate::List::from([$($elt),+])
    };
}
