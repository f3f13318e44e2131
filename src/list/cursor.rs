use crate::error::Error;
use crate::list::{List, NodeRef};
use std::iter::FusedIterator;

/// The direction a [`Cursor`] moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the head towards the tail.
    Forward,
    /// From the tail towards the head.
    Backward,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A detached cursor over the nodes of a `List`.
///
/// A `Cursor` is only a position and a direction: it does not borrow the list
/// and is passed the list on every move. It is *active* while it has a node
/// to yield, and *exhausted* once it walked past an end of the list.
///
/// Mutating the list does not invalidate a cursor silently: if the node it
/// is about to yield has left the list, [`Cursor::next`] fails with
/// [`Error::StaleNode`].
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use chain_list::list::cursor::Direction;
/// use chain_list::Error;
/// use std::iter::FromIterator;
///
/// // Create a list: [A B C D]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at the node with index 2, moving backward
/// let mut cursor = list.cursor_at(2, Direction::Backward).unwrap();
/// let c = cursor.next(&list).unwrap();
/// assert_eq!(list.get(c), Ok(&'C'));
/// let b = cursor.next(&list).unwrap();
/// assert_eq!(list.get(b), Ok(&'B'));
/// let a = cursor.next(&list).unwrap();
/// assert_eq!(list.get(a), Ok(&'A'));
///
/// // The cursor is exhausted now
/// assert!(cursor.is_exhausted());
/// assert_eq!(cursor.next(&list), Err(Error::CursorExhausted));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    next: Option<NodeRef>,
    direction: Direction,
}

impl Cursor {
    pub(crate) fn new(next: Option<NodeRef>, direction: Direction) -> Self {
        Self { next, direction }
    }

    /// Provides an active cursor starting at `node`.
    ///
    /// The handle is only checked against a list when the cursor moves.
    pub fn from_node(node: NodeRef, direction: Direction) -> Self {
        Self::new(Some(node), direction)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if there is no node left to yield.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// The node the next call to [`Cursor::next`] would yield.
    #[inline]
    pub fn peek(&self) -> Option<NodeRef> {
        self.next
    }

    /// Turn the cursor around; the node to yield next stays the same.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reverse();
    }

    /// Yields the current node and moves the cursor to its neighbor in
    /// the moving direction.
    ///
    /// Fails with [`Error::CursorExhausted`] if the cursor is exhausted, and
    /// with [`Error::StaleNode`] or [`Error::ForeignNode`] if the current node
    /// is not linked into `list`. On failure the cursor stays put.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn next<T>(&mut self, list: &List<T>) -> Result<NodeRef, Error> {
        let current = self.next.ok_or(Error::CursorExhausted)?;
        self.next = match self.direction {
            Direction::Forward => list.next_of(current)?,
            Direction::Backward => list.prev_of(current)?,
        };
        Ok(current)
    }

    /// Convert the cursor to an iterator over `(handle, payload)` pairs of
    /// `list`, which ends when the cursor is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use chain_list::list::cursor::Direction;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let payloads: Vec<_> = list
    ///     .cursor(Direction::Backward)
    ///     .walk(&list)
    ///     .map(|(_, payload)| *payload)
    ///     .collect();
    /// assert_eq!(payloads, vec![3, 2, 1]);
    /// ```
    pub fn walk<T>(self, list: &List<T>) -> CursorIter<'_, T> {
        CursorIter { cursor: self, list }
    }
}

/// An iterator walking a [`Cursor`] over a borrowed list.
///
/// It stops at the end of the list, or at the first node that does not
/// belong to the list.
#[derive(Debug)]
pub struct CursorIter<'a, T: 'a> {
    cursor: Cursor,
    list: &'a List<T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    /// The cursor at the current position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = (NodeRef, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let list: &'a List<T> = self.list;
        let node = self.cursor.next(list).ok()?;
        let payload = list.get(node).ok()?;
        Some((node, payload))
    }
}

impl<'a, T: 'a> FusedIterator for CursorIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::{Cursor, Direction};
    use crate::error::Error;
    use crate::list::{List, Node};
    use std::iter::FromIterator;

    fn collect<T: Copy>(list: &List<T>, cursor: Cursor) -> Vec<T> {
        cursor.walk(list).map(|(_, payload)| *payload).collect()
    }

    #[test]
    fn cursor_from_ends() {
        let list = List::from_iter(1..=4);
        assert_eq!(collect(&list, list.cursor(Direction::Forward)), [1, 2, 3, 4]);
        assert_eq!(collect(&list, list.cursor(Direction::Backward)), [4, 3, 2, 1]);

        let empty = List::<i32>::new();
        let mut cursor = empty.cursor(Direction::Forward);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(&empty), Err(Error::CursorExhausted));
    }

    #[test]
    fn cursor_from_node() {
        let mut list = List::new();
        list.push_back(Node::new('a')).unwrap();
        let b = list.push_back(Node::new('b')).unwrap();
        list.push_back(Node::new('c')).unwrap();

        let forward = Cursor::from_node(b, Direction::Forward);
        assert_eq!(forward.peek(), Some(b));
        assert_eq!(collect(&list, forward), ['b', 'c']);
        assert_eq!(collect(&list, Cursor::from_node(b, Direction::Backward)), ['b', 'a']);
    }

    #[test]
    fn cursor_from_index() {
        let list = List::from_iter(0..5);
        for at in 0..5 {
            let forward = list.cursor_at(at, Direction::Forward).unwrap();
            assert_eq!(collect(&list, forward), Vec::from_iter(at as i32..5));
            let backward = list.cursor_at(at, Direction::Backward).unwrap();
            assert_eq!(collect(&list, backward), Vec::from_iter((0..=at as i32).rev()));
        }
        assert!(list.cursor_at(5, Direction::Forward).is_none());
    }

    #[test]
    fn cursor_exhausted_stays_exhausted() {
        let list = List::from_iter([7]);
        let mut cursor = list.cursor(Direction::Forward);
        let seven = cursor.next(&list).unwrap();
        assert_eq!(list.get(seven), Ok(&7));
        for _ in 0..3 {
            assert_eq!(cursor.next(&list), Err(Error::CursorExhausted));
        }
    }

    #[test]
    fn cursor_reverse() {
        let list = List::from_iter(0..4);
        let mut cursor = list.cursor_at(2, Direction::Forward).unwrap();
        cursor.next(&list).unwrap();
        cursor.reverse();
        assert_eq!(cursor.direction(), Direction::Backward);
        assert_eq!(collect(&list, cursor), [3, 2, 1, 0]);
    }

    #[test]
    fn cursor_does_not_own_the_list() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor(Direction::Forward);
        cursor.next(&list).unwrap();

        // the node the cursor is about to yield leaves the list
        let two = cursor.peek().unwrap();
        list.delete(two).unwrap();
        assert_eq!(cursor.next(&list), Err(Error::StaleNode));
        assert_eq!(cursor.peek(), Some(two));

        let other = List::from_iter([1, 2, 3]);
        let mut cursor = other.cursor(Direction::Forward);
        assert_eq!(cursor.next(&list), Err(Error::ForeignNode));
        assert_eq!(collect(&list, cursor), Vec::<i32>::new());
        assert_eq!(list.len(), 2);
    }
}
