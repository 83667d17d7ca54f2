use std::fmt;
use std::iter::Peekable;

use crate::iters::{take_next, SeqIter, Zipped};

/// A lazy iterator that applies a function to each element of another one.
///
/// This `struct` is created by [`map`](crate::iters::map).
#[derive(Clone)]
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, F, V> SeqIter for Map<I, F>
where
    I: SeqIter,
    F: FnMut(I::Item) -> V,
{
    type Item = V;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> V {
        (self.f)(self.inner.next())
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

/// A lazy iterator over the elements of another one that satisfy a
/// predicate.
///
/// At most one matching element is buffered, so that `has_next` can look
/// ahead without advancing the wrapped iterator twice.
///
/// This `struct` is created by [`filter`](crate::iters::filter).
pub struct Filter<I: SeqIter, P> {
    inner: I,
    pred: P,
    pending: Lookahead<I::Item>,
}

#[derive(Clone, Debug)]
enum Lookahead<T> {
    Unknown,
    Ready(T),
    Done,
}

impl<I: SeqIter, P> Filter<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(inner: I, pred: P) -> Self {
        Self {
            inner,
            pred,
            pending: Lookahead::Unknown,
        }
    }

    fn find_next(&mut self) {
        while self.inner.has_next() {
            let item = self.inner.next();
            if (self.pred)(&item) {
                self.pending = Lookahead::Ready(item);
                return;
            }
        }
        self.pending = Lookahead::Done;
    }
}

impl<I: SeqIter, P> SeqIter for Filter<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if let Lookahead::Unknown = self.pending {
            self.find_next();
        }
        matches!(self.pending, Lookahead::Ready(_))
    }

    fn next(&mut self) -> I::Item {
        if let Lookahead::Unknown = self.pending {
            self.find_next();
        }
        match std::mem::replace(&mut self.pending, Lookahead::Unknown) {
            Lookahead::Ready(item) => item,
            _ => {
                self.pending = Lookahead::Done;
                take_next(None)
            }
        }
    }
}

impl<I, P> Clone for Filter<I, P>
where
    I: SeqIter + Clone,
    I::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            pred: self.pred.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<I, P> fmt::Debug for Filter<I, P>
where
    I: SeqIter + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("pending", &self.pending)
            .finish()
    }
}

/// A lazy iterator that pairs up the elements of two others.
///
/// It is exhausted as soon as either side is; the surplus of the longer
/// side is left unconsumed in it.
///
/// This `struct` is created by [`zip`](crate::iters::zip).
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Returns both wrapped iterators.
    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: SeqIter, B: SeqIter> SeqIter for Zip<A, B> {
    type Item = Zipped<A::Item, B::Item>;

    fn has_next(&mut self) -> bool {
        self.a.has_next() && self.b.has_next()
    }

    fn next(&mut self) -> Self::Item {
        if !self.has_next() {
            return take_next(None);
        }
        Zipped {
            first: self.a.next(),
            second: self.b.next(),
        }
    }
}

/// An iterator that clones the referenced elements of another one.
///
/// This `struct` is created by [`cloned`](crate::iters::cloned).
#[derive(Clone, Debug)]
pub struct Cloned<I> {
    inner: I,
}

impl<I> Cloned<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, I, T> SeqIter for Cloned<I>
where
    I: SeqIter<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> T {
        self.inner.next().clone()
    }
}

/// A sequence iterator over the items of a standard iterator.
///
/// This `struct` is created by [`from_std`](crate::iters::from_std).
pub struct FromStd<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> FromStd<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }
}

impl<I: Iterator> SeqIter for FromStd<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    fn next(&mut self) -> I::Item {
        take_next(self.inner.next())
    }
}

impl<I> fmt::Debug for FromStd<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FromStd").field(&self.inner).finish()
    }
}

/// A standard iterator draining a sequence iterator.
///
/// This `struct` is created by [`into_std`](crate::iters::into_std).
#[derive(Clone, Debug)]
pub struct IntoStd<I> {
    inner: I,
}

impl<I> IntoStd<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sequence iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: SeqIter> Iterator for IntoStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.has_next() {
            Some(self.inner.next())
        } else {
            None
        }
    }
}
