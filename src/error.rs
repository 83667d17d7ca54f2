use std::fmt;

/// Errors that can occur when operating on a [`List`](crate::List) or on a
/// sequence iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The operation needs at least one element, but the list is empty.
    EmptyCollection,

    /// The cursor or position is not usable here: it belongs to another list,
    /// it names a node removed by a previous delete, or it rests on a sentinel
    /// where a real node is required.
    InvalidIterator,

    /// `next` was requested from an iterator whose `has_next` is `false`.
    ExhaustedIterator,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyCollection => f.write_str("list cannot be empty"),
            ListError::InvalidIterator => f.write_str("iterator must be valid"),
            ListError::ExhaustedIterator => f.write_str("iterator must have next"),
        }
    }
}

impl std::error::Error for ListError {}

/// Abort on a `next` call past the end of an iterator.
#[cold]
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("{}", ListError::ExhaustedIterator)
}
