use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, InsertError};
use crate::list::cursor::{Cursor, Direction};
use crate::list::slots::Slots;
use crate::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod slots;

/// The `List` is a doubly-linked list of owned, detachable nodes.
///
/// Nodes are created detached by [`Node::new`], moved into the list by one of
/// the insertion methods, and addressed afterwards by the [`NodeRef`] handle
/// the insertion returns. Inserting or removing at either end takes *O*(1)
/// time; addressing a node by index takes *O*(*n*) time.
///
/// A list may be bound to a destructor ([`List::with_destructor`]). The
/// destructor receives every payload that the list itself disposes of, that
/// is, on [`delete`], [`delete_at`], [`clear`] and when the list is dropped.
/// Payloads handed back to the caller ([`pop_front`], [`pop_back`],
/// [`remove`], [`into_iter`]) never reach the destructor.
///
/// # Naming Conventions
///
/// - `head`, `tail`: handles of the first and the last node;
/// - `front`, `back`: payloads of the first and the last node.
///
/// [`delete`]: List::delete
/// [`delete_at`]: List::delete_at
/// [`clear`]: List::clear
/// [`pop_front`]: List::pop_front
/// [`pop_back`]: List::pop_back
/// [`remove`]: List::remove
/// [`into_iter`]: IntoIterator::into_iter
pub struct List<T> {
    slots: Slots<T>,
    head: Option<usize>,
    tail: Option<usize>,
    /// the length of the list
    len: usize,
    id: u64,
    destructor: Option<Box<dyn FnMut(T) + Send>>,
}

/// A single storage unit of a [`List`]: one payload and the links to its
/// neighbors.
///
/// A `Node` owned by the caller is always detached; its links are only
/// meaningful while it is stored in a list.
pub struct Node<T> {
    prev: Option<usize>,
    next: Option<usize>,
    payload: T,
}

/// A handle to a node linked into a [`List`].
///
/// Handles are cheap to copy and never borrow the list. A handle stops
/// resolving once its node leaves the list, and it never resolves against
/// another list: such uses fail with [`Error::StaleNode`] and
/// [`Error::ForeignNode`] respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: u64,
    index: usize,
    generation: u64,
}

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

// private methods
impl<T> List<T> {
    fn handle(&self, index: usize) -> Option<NodeRef> {
        let generation = self.slots.generation(index)?;
        Some(NodeRef {
            list: self.id,
            index,
            generation,
        })
    }

    /// Resolve `node` to the slot index of a node that is linked into this list.
    fn resolve(&self, node: NodeRef) -> Result<usize, Error> {
        if node.list != self.id {
            return Err(Error::ForeignNode);
        }
        match self.slots.generation(node.index) {
            Some(generation) if generation == node.generation => Ok(node.index),
            _ => Err(Error::StaleNode),
        }
    }

    /// Link `prev` to `next`, where `None` stands for the outside of the list,
    /// so the head and the tail are fixed up as well.
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Attach `node` to the list, between the adjacent positions `prev` and
    /// `next`.
    ///
    /// The storage must have been reserved by [`Slots::try_reserve_one`].
    fn attach_node(&mut self, prev: Option<usize>, next: Option<usize>, node: Node<T>) -> NodeRef {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let (index, generation) = self.slots.occupy(node.detached());
        self.connect(prev, Some(index));
        self.connect(Some(index), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(index));
            self.assert_adjacent(Some(index), next);
        }
        NodeRef {
            list: self.id,
            index,
            generation,
        }
    }

    /// Reserve a slot, then attach `node`. On resource exhaustion nothing is
    /// linked and the node goes back to the caller with [`Error::Alloc`].
    fn try_attach_node(
        &mut self,
        prev: Option<usize>,
        next: Option<usize>,
        node: Node<T>,
    ) -> Result<NodeRef, InsertError<T>> {
        match self.slots.try_reserve_one() {
            Ok(()) => Ok(self.attach_node(prev, next, node)),
            Err(err) => Err(InsertError::new(node, err)),
        }
    }

    /// Detach the node in slot `index` from the list, and return it.
    fn detach_node(&mut self, index: usize) -> Option<Node<T>> {
        let node = self.slots.vacate(index)?;
        self.connect(node.prev, node.next);
        self.len -= 1;
        Some(node.detached())
    }

    /// The slot of the node at position `at`, walking from the nearer end.
    fn slot_at(&self, at: usize) -> Option<usize> {
        if at >= self.len {
            return None;
        }
        if at <= self.len / 2 {
            let mut current = self.head?;
            for _ in 0..at {
                current = self.slots[current].next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in at + 1..self.len {
                current = self.slots[current].prev?;
            }
            Some(current)
        }
    }

    /// Hand a payload the list disposes of to the destructor, if any.
    fn dispose(&mut self, node: Node<T>) {
        match self.destructor.as_mut() {
            Some(destructor) => destructor(node.payload),
            None => drop(node),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => assert_eq!(self.slots[prev].next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(self.slots[next].prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List` without a destructor.
    ///
    /// # Examples
    /// ```
    /// use chain_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Slots::new(),
            head: None,
            tail: None,
            len: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            destructor: None,
        }
    }

    /// Create an empty `List` bound to `destructor`.
    ///
    /// The destructor is invoked exactly once on every payload the list
    /// disposes of itself. It must be `Send`, so the list can move to
    /// another thread with its payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    /// use std::sync::{Arc, Mutex};
    ///
    /// let disposed = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&disposed);
    /// let mut list = List::with_destructor(move |name: String| sink.lock().unwrap().push(name));
    ///
    /// let alice = list.push_back(Node::new("alice".to_string())).unwrap();
    /// list.push_back(Node::new("bob".to_string())).unwrap();
    ///
    /// list.delete(alice).unwrap();
    /// assert_eq!(*disposed.lock().unwrap(), ["alice"]);
    ///
    /// drop(list);
    /// assert_eq!(*disposed.lock().unwrap(), ["alice", "bob"]);
    /// ```
    pub fn with_destructor<D>(destructor: D) -> Self
    where
        D: FnMut(T) + Send + 'static,
    {
        let mut list = Self::new();
        list.destructor = Some(Box::new(destructor));
        list
    }

    /// Tear the list down: every remaining payload goes to the destructor, from
    /// the head to the tail, and every node is released.
    ///
    /// This is what dropping the list does; `free` only makes the teardown
    /// explicit.
    pub fn free(self) {
        drop(self);
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
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
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(Node::new(2)).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(Node::new(3)).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all nodes from the `List`, handing their payloads to the
    /// destructor from the head to the tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while let Some(node) = self.pop_front() {
            self.dispose(node);
        }
    }

    /// The handle of the first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<NodeRef> {
        self.handle(self.head?)
    }

    /// The handle of the last node, or `None` if the list is empty.
    #[inline]
    pub fn tail(&self) -> Option<NodeRef> {
        self.handle(self.tail?)
    }

    /// Provides a reference to the front payload, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(Node::new(1)).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        Some(&self.slots[self.head?].payload)
    }

    /// Provides a mutable reference to the front payload, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.slots[head].payload)
    }

    /// Provides a reference to the back payload, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(Node::new(1)).unwrap();
    /// list.push_back(Node::new(2)).unwrap();
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        Some(&self.slots[self.tail?].payload)
    }

    /// Provides a mutable reference to the back payload, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.slots[tail].payload)
    }

    /// Returns `true` if `node` is linked into this list.
    pub fn contains_node(&self, node: NodeRef) -> bool {
        self.resolve(node).is_ok()
    }

    /// The payload of `node`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Error, List, Node};
    ///
    /// let mut list = List::new();
    /// let node = list.push_back(Node::new('a')).unwrap();
    /// assert_eq!(list.get(node), Ok(&'a'));
    ///
    /// list.delete(node).unwrap();
    /// assert_eq!(list.get(node), Err(Error::StaleNode));
    /// ```
    pub fn get(&self, node: NodeRef) -> Result<&T, Error> {
        let index = self.resolve(node)?;
        Ok(&self.slots[index].payload)
    }

    /// The payload of `node`, mutably.
    pub fn get_mut(&mut self, node: NodeRef) -> Result<&mut T, Error> {
        let index = self.resolve(node)?;
        Ok(&mut self.slots[index].payload)
    }

    /// The handle of the node after `node`, or `Ok(None)` if `node` is the tail.
    pub fn next_of(&self, node: NodeRef) -> Result<Option<NodeRef>, Error> {
        let index = self.resolve(node)?;
        Ok(self.slots[index].next.and_then(|next| self.handle(next)))
    }

    /// The handle of the node before `node`, or `Ok(None)` if `node` is the head.
    pub fn prev_of(&self, node: NodeRef) -> Result<Option<NodeRef>, Error> {
        let index = self.resolve(node)?;
        Ok(self.slots[index].prev.and_then(|prev| self.handle(prev)))
    }

    /// Adds a node first in the list, and returns its handle.
    ///
    /// If the storage of the list cannot grow, the node is handed back in
    /// the error and the list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(Node::new(2)).unwrap();
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// let one = list.push_front(Node::new(1)).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.head(), Some(one));
    /// ```
    pub fn push_front(&mut self, node: Node<T>) -> Result<NodeRef, InsertError<T>> {
        self.try_attach_node(None, self.head, node)
    }

    /// Appends a node to the back of the list, and returns its handle.
    ///
    /// If the storage of the list cannot grow, the node is handed back in
    /// the error and the list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// list.push_back(Node::new(1)).unwrap();
    /// let three = list.push_back(Node::new(3)).unwrap();
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.tail(), Some(three));
    /// ```
    pub fn push_back(&mut self, node: Node<T>) -> Result<NodeRef, InsertError<T>> {
        self.try_attach_node(self.tail, None, node)
    }

    /// Removes the first node and returns it, or `None` if the list is empty.
    ///
    /// The payload is handed back to the caller; the destructor is not
    /// invoked.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_front().is_none());
    ///
    /// list.push_front(Node::new(1)).unwrap();
    /// list.push_front(Node::new(3)).unwrap();
    /// assert_eq!(list.pop_front().map(Node::into_payload), Some(3));
    /// assert_eq!(list.pop_front().map(Node::into_payload), Some(1));
    /// assert!(list.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<Node<T>> {
        let head = self.head?;
        self.detach_node(head)
    }

    /// Removes the last node and returns it, or `None` if the list is empty.
    ///
    /// The payload is handed back to the caller; the destructor is not
    /// invoked.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_back().is_none());
    /// list.push_back(Node::new(1)).unwrap();
    /// list.push_back(Node::new(3)).unwrap();
    /// assert_eq!(list.pop_back().map(Node::into_payload), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<Node<T>> {
        let tail = self.tail?;
        self.detach_node(tail)
    }

    /// The handle of the node at position `at`, or `None` if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b', 'c']);
    /// let b = list.fetch(1).unwrap();
    /// assert_eq!(list.get(b), Ok(&'b'));
    /// assert_eq!(list.fetch(3), None);
    /// ```
    pub fn fetch(&self, at: usize) -> Option<NodeRef> {
        self.handle(self.slot_at(at)?)
    }

    /// The payload of the node at position `at`, or `None` if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn get_at(&self, at: usize) -> Option<&T> {
        Some(&self.slots[self.slot_at(at)?].payload)
    }

    /// Returns the handle of the first node, from the head, whose payload
    /// matches `key` according to `matches`.
    ///
    /// `matches` should be free of side effects; it is called once per
    /// visited node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([("ann", 31), ("bob", 27), ("ann", 45)]);
    /// let found = list.find("ann", |user, name| user.0 == name).unwrap();
    /// assert_eq!(list.get(found), Ok(&("ann", 31)));
    /// assert_eq!(list.find("eve", |user, name| user.0 == name), None);
    /// ```
    pub fn find<K, P>(&self, key: &K, mut matches: P) -> Option<NodeRef>
    where
        K: ?Sized,
        P: FnMut(&T, &K) -> bool,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = &self.slots[index];
            if matches(&node.payload, key) {
                return self.handle(index);
            }
            current = node.next;
        }
        None
    }

    /// Inserts a node so that it ends up at position `at`, and returns its
    /// handle. `at == len` appends the node.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `at > len`; the node is
    /// handed back in the error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Error, List, Node};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(Node::new(4), 2).unwrap();
    /// list.insert(Node::new(5), 4).unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 4, 3, 5]);
    ///
    /// let err = list.insert(Node::new(6), 9).unwrap_err();
    /// assert_eq!(err.error(), &Error::IndexOutOfBounds { index: 9, len: 5 });
    /// assert_eq!(err.into_node().into_payload(), 6);
    /// ```
    pub fn insert(&mut self, node: Node<T>, at: usize) -> Result<NodeRef, InsertError<T>> {
        if at > self.len {
            let err = Error::IndexOutOfBounds {
                index: at,
                len: self.len,
            };
            return Err(InsertError::new(node, err));
        }
        match self.slot_at(at) {
            Some(next) => {
                let prev = self.slots[next].prev;
                self.try_attach_node(prev, Some(next), node)
            }
            None => self.try_attach_node(self.tail, None, node),
        }
    }

    /// Unlinks `node` and hands its payload to the destructor.
    ///
    /// Fails without touching the list if `node` belongs to another list or
    /// has already left this one.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Error, List, Node};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.push_back(Node::new(1)).unwrap();
    /// let two = list.push_back(Node::new(2)).unwrap();
    /// list.push_back(Node::new(3)).unwrap();
    ///
    /// list.delete(two).unwrap();
    /// assert_eq!(list, List::from_iter([1, 3]));
    /// assert_eq!(list.delete(two), Err(Error::StaleNode));
    /// ```
    pub fn delete(&mut self, node: NodeRef) -> Result<(), Error> {
        let node = self.remove(node)?;
        self.dispose(node);
        Ok(())
    }

    /// Unlinks the node at position `at` and hands its payload to the
    /// destructor.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn delete_at(&mut self, at: usize) -> Result<(), Error> {
        let index = self.slot_at(at).ok_or(Error::IndexOutOfBounds {
            index: at,
            len: self.len,
        })?;
        if let Some(node) = self.detach_node(index) {
            self.dispose(node);
        }
        Ok(())
    }

    /// Unlinks `node` and hands it back to the caller; the destructor is not
    /// invoked.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// Moving a node to the front, as a LRU cache does on access:
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    /// let c = list.tail().unwrap();
    /// let node = list.remove(c).unwrap();
    /// list.push_front(node).unwrap();
    /// assert_eq!(list, List::from_iter(['c', 'a', 'b']));
    /// ```
    pub fn remove(&mut self, node: NodeRef) -> Result<Node<T>, Error> {
        let index = self.resolve(node)?;
        self.detach_node(index).ok_or(Error::StaleNode)
    }

    /// Provides a cursor starting at the head ([`Direction::Forward`]) or at
    /// the tail ([`Direction::Backward`]).
    ///
    /// The cursor of an empty list is exhausted from the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use chain_list::list::cursor::Direction;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor(Direction::Backward);
    /// let three = cursor.next(&list).unwrap();
    /// assert_eq!(list.get(three), Ok(&3));
    /// ```
    pub fn cursor(&self, direction: Direction) -> Cursor {
        let start = match direction {
            Direction::Forward => self.head(),
            Direction::Backward => self.tail(),
        };
        Cursor::new(start, direction)
    }

    /// Provides a cursor starting at the node at position `at`, or `None` if
    /// `at >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn cursor_at(&self, at: usize, direction: Direction) -> Option<Cursor> {
        let start = self.fetch(at)?;
        Some(Cursor::new(Some(start), direction))
    }

    /// Provides a forward iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{List, Node};
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(Node::new(0)).unwrap();
    /// list.push_back(Node::new(1)).unwrap();
    /// list.push_back(Node::new(2)).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.head, self.tail, self.len)
    }

    /// Provides a forward iterator with mutable references to the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    ///
    /// for payload in list.iter_mut() {
    ///     *payload += 10;
    /// }
    /// assert_eq!(list, List::from_iter([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots, self.head, self.tail, self.len)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Node<T> {
    /// Create a detached node wrapping `payload`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::Node;
    ///
    /// let node = Node::new("payload");
    /// assert_eq!(node.payload(), &"payload");
    /// ```
    #[inline]
    pub fn new(payload: T) -> Self {
        Self {
            prev: None,
            next: None,
            payload,
        }
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    #[inline]
    pub fn into_payload(self) -> T {
        self.payload
    }

    fn detached(self) -> Self {
        Self {
            prev: None,
            next: None,
            ..self
        }
    }
}

impl<T> From<T> for Node<T> {
    fn from(payload: T) -> Self {
        Self::new(payload)
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.payload).finish()
    }
}
