use crate::error::Error;
use crate::list::Node;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Generational slot storage of the nodes linked into one list.
///
/// A vacated slot is pushed onto an intrusive free list and reused by the
/// next insertion. Its generation is bumped on every vacation, so a
/// handle to the previous occupant never resolves to the new one.
pub(crate) struct Slots<T> {
    entries: Vec<Slot<T>>,
    free: Option<usize>,
}

enum Slot<T> {
    Occupied { generation: u64, node: Node<T> },
    Vacant { generation: u64, next_free: Option<usize> },
}

impl<T> Slots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: None,
        }
    }

    /// Makes sure that the next [`Slots::occupy`] does not need to grow the
    /// storage, or reports the allocation failure.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), Error> {
        if self.free.is_none() {
            self.entries.try_reserve(1)?;
        }
        Ok(())
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Moves `node` into a free slot and returns `(index, generation)`.
    pub(crate) fn occupy(&mut self, node: Node<T>) -> (usize, u64) {
        match self.free {
            Some(index) => {
                let (generation, next_free) = match self.entries[index] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => (generation, next_free),
                    Slot::Occupied { .. } => unreachable!("occupied slot in the free list"),
                };
                self.free = next_free;
                self.entries[index] = Slot::Occupied { generation, node };
                (index, generation)
            }
            None => {
                let index = self.entries.len();
                self.entries.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                (index, 0)
            }
        }
    }

    /// Moves the node out of slot `index` and puts the slot on the free list.
    ///
    /// Returns `None` (and changes nothing) if the slot is vacant.
    pub(crate) fn vacate(&mut self, index: usize) -> Option<Node<T>> {
        let generation = match self.entries.get(index)? {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Vacant { .. } => return None,
        };
        let vacant = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free,
        };
        match std::mem::replace(&mut self.entries[index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free = Some(index);
                Some(node)
            }
            Slot::Vacant { .. } => None,
        }
    }

    /// The generation of the node at `index`, or `None` if the slot is vacant.
    pub(crate) fn generation(&self, index: usize) -> Option<u64> {
        match self.entries.get(index)? {
            Slot::Occupied { generation, .. } => Some(*generation),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        match self.entries.get(index)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        match self.entries.get_mut(index)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}

/// A raw view of the slots that hands out mutable borrows of distinct nodes
/// for the whole lifetime `'a`.
pub(crate) struct SlotsMut<'a, T> {
    base: *mut Slot<T>,
    len: usize,
    _marker: PhantomData<&'a mut Slots<T>>,
}

impl<T> Slots<T> {
    pub(crate) fn as_slots_mut(&mut self) -> SlotsMut<'_, T> {
        SlotsMut {
            base: self.entries.as_mut_ptr(),
            len: self.entries.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> SlotsMut<'a, T> {
    /// Borrow the node in slot `index` mutably.
    ///
    /// It is unsafe because the same `index` must not be borrowed twice
    /// through one view.
    pub(crate) unsafe fn node_mut(&mut self, index: usize) -> &'a mut Node<T> {
        assert!(index < self.len, "linked slot {} is out of range", index);
        // SAFETY: `index` is in bounds of the entries borrowed for `'a`, and
        // the caller guarantees that no other borrow of this entry is alive.
        match &mut *self.base.add(index) {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => panic!("linked slot {} is vacant", index),
        }
    }
}

/// Indexing a vacant slot is a broken chain invariant, not a user error.
impl<T> Index<usize> for Slots<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Node<T> {
        match self.get(index) {
            Some(node) => node,
            None => panic!("linked slot {} is vacant", index),
        }
    }
}

impl<T> IndexMut<usize> for Slots<T> {
    fn index_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("linked slot {} is vacant", index),
        }
    }
}
