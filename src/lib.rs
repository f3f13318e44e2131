//! This crate provides a doubly-linked list of owned, detachable nodes.
//!
//! The [`List`] allows inserting and removing nodes at both ends, or next to
//! any node it hands out a handle for, in constant time. In compromise,
//! addressing a node by its index takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::{List, Node};
//! use chain_list::list::cursor::Direction;
//!
//! let mut list = List::new();
//! for i in 1..=4 {
//!     list.push_back(Node::new(i)).unwrap();
//! }
//!
//! // delete the node with index 1, that is, the payload 2
//! list.delete_at(1).unwrap();
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3, 4]);
//!
//! // nodes popped from the list are handed back, detached
//! let node = list.pop_front().unwrap();
//! assert_eq!(node.into_payload(), 1);
//!
//! // walk the list from its tail
//! let mut cursor = list.cursor(Direction::Backward);
//! let four = cursor.next(&list).unwrap();
//! assert_eq!(list.get(four), Ok(&4));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!     ╔═══════════╗
//!     ║   head    ║ ────────────────┐
//!     ╟───────────╢                 │
//!     ║   tail    ║ ────────────────┼────────────────────────────┐
//!     ╟───────────╢                 ↓                            ↓
//!     ║   slots   ║ ──→ ┌─────────────────┬─────────────────┬─────────────────┐
//!     ╚═══════════╝     │ next: Some(2)   │ (vacant)        │ next: None      │
//!         List          │ prev: None      │ next_free: None │ prev: Some(0)   │
//!                       │ payload T       │                 │ payload T       │
//!                       └─────────────────┴─────────────────┴─────────────────┘
//!                             slot 0            slot 1            slot 2
//! ```
//! The `List` contains:
//! - the `slots`, a growable array owning the nodes linked into the list;
//! - the slot indices of the `head` and the `tail` node, or nothing if the list
//!   is empty;
//! - a length field `len` indicating the number of linked nodes.
//!
//! Each linked node stores its payload and the slot indices of its neighbors.
//! The `prev` link of the head and the `next` link of the tail are empty, so the
//! list is not cyclic.
//!
//! A slot freed by a removal is reused by a later insertion, and every slot
//! carries a generation number that grows when its node leaves the list.
//!
//! # Nodes and Handles
//!
//! A [`Node`] is created detached by [`Node::new`] and moved into the list by
//! [`push_front`], [`push_back`] or [`insert`]. These return a [`NodeRef`], a
//! copyable handle to the node inside the list. A handle is checked on every
//! use: it fails with [`Error::ForeignNode`] against another list, and with
//! [`Error::StaleNode`] once its node has left the list, even if a new node
//! reuses the slot.
//!
//! Insertions reserve their storage before touching the list. If the
//! allocation fails, the list is unchanged and the node is handed back inside
//! an [`InsertError`].
//!
//! ## Examples
//!
//! ```
//! use chain_list::{Error, List, Node};
//!
//! let mut list = List::new();
//! let a = list.push_back(Node::new('a')).unwrap();
//! let b = list.push_back(Node::new('b')).unwrap();
//!
//! list.delete(a).unwrap();
//! assert_eq!(list.get(a), Err(Error::StaleNode));
//! assert_eq!(list.delete(a), Err(Error::StaleNode));
//!
//! let other: List<char> = List::new();
//! assert_eq!(other.get(b), Err(Error::ForeignNode));
//! ```
//!
//! # Destructor
//!
//! A list created by [`List::with_destructor`] hands every payload it disposes
//! of itself to the destructor: on [`delete`], [`delete_at`], [`clear`] and when
//! the list is dropped, from the head to the tail. Nodes handed back to the
//! caller never reach the destructor. The destructor must be `Send`, so a
//! `List<T>` can be moved to another thread whenever `T` can, for instance
//! behind a `Mutex`.
//!
//! ## Examples
//!
//! ```
//! use chain_list::{List, Node};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let disposed = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&disposed);
//! let mut list = List::with_destructor(move |_: u32| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! for i in 0..3 {
//!     list.push_back(Node::new(i)).unwrap();
//! }
//! let popped = list.pop_back().unwrap(); // handed back, not disposed
//! list.free();
//!
//! assert_eq!(disposed.load(Ordering::Relaxed), 2);
//! assert_eq!(popped.into_payload(), 2);
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the payloads (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is a position in the list and a moving [`Direction`]. It is
//! created from either end of the list, from a node, or from an index, and
//! does not borrow the list: every move is given the list to walk, so the
//! list may be mutated between two moves. [`Cursor::walk`] turns a cursor into
//! an iterator over a borrowed list.
//!
//! ## Examples
//!
//! ```
//! use chain_list::{Error, List};
//! use chain_list::list::cursor::Direction;
//!
//! let mut list = List::from_iter(['a', 'b', 'c']);
//! let mut cursor = list.cursor_at(1, Direction::Forward).unwrap();
//!
//! let b = cursor.next(&list).unwrap();
//! list.delete(b).unwrap();
//! let c = cursor.next(&list).unwrap();
//! assert_eq!(list.get(c), Ok(&'c'));
//! assert_eq!(cursor.next(&list), Err(Error::CursorExhausted));
//! ```
//!
//! # Algorithms
//!
//! The list is sorted in place by a stable merge sort ([`sort`], [`sort_by`],
//! [`sort_by_key`]). Sorting relinks the nodes and never moves them, so every
//! handle still addresses the same payload afterwards.
//!
//! ```
//! use chain_list::List;
//! use chain_list::list::cursor::Direction;
//!
//! let mut list = List::from_iter([4, 1, 3, 2]);
//! list.sort();
//! let descending: Vec<_> = list
//!     .cursor(Direction::Backward)
//!     .walk(&list)
//!     .map(|(_, payload)| *payload)
//!     .collect();
//! assert_eq!(descending, vec![4, 3, 2, 1]);
//! ```
//!
//! [`List`]: crate::List
//! [`Node`]: crate::Node
//! [`NodeRef`]: crate::NodeRef
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`Direction`]: crate::list::cursor::Direction
//! [`Cursor::walk`]: crate::list::cursor::Cursor::walk
//! [`push_front`]: crate::List::push_front
//! [`push_back`]: crate::List::push_back
//! [`insert`]: crate::List::insert
//! [`delete`]: crate::List::delete
//! [`delete_at`]: crate::List::delete_at
//! [`clear`]: crate::List::clear
//! [`sort`]: crate::List::sort
//! [`sort_by`]: crate::List::sort_by
//! [`sort_by_key`]: crate::List::sort_by_key

pub use error::{Error, InsertError};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, Node, NodeRef};

pub mod list;

mod error;
