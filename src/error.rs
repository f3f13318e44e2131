use crate::list::Node;
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Errors reported by fallible [`List`](crate::List) and
/// [`Cursor`](crate::list::cursor::Cursor) operations.
///
/// Every operation returning an `Error` leaves the list exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("node belongs to another list")]
    ForeignNode,
    #[error("node is no longer linked into the list")]
    StaleNode,
    #[error("cursor is exhausted")]
    CursorExhausted,
    #[error("failed to allocate node storage: {0}")]
    Alloc(#[from] TryReserveError),
}

/// A failed insertion.
///
/// The rejected node is handed back, so no payload is lost when an
/// insertion fails. Besides an out-of-range [`List::insert`], this is how
/// resource exhaustion surfaces: if the slot storage cannot grow, the
/// insertion fails with [`Error::Alloc`] and the list is left untouched.
///
/// [`List::insert`]: crate::List::insert
#[derive(Error)]
#[error("{error}")]
pub struct InsertError<T> {
    node: Node<T>,
    #[source]
    error: Error,
}

impl<T> InsertError<T> {
    pub(crate) fn new(node: Node<T>, error: Error) -> Self {
        Self { node, error }
    }

    /// The reason of the failure.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Takes back the node that was not inserted.
    pub fn into_node(self) -> Node<T> {
        self.node
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> From<InsertError<T>> for Error {
    fn from(err: InsertError<T>) -> Self {
        err.error
    }
}
