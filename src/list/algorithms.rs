use crate::list::List;
use crate::IterMut;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

// SAFETY: the destructor is the only field that is not `Sync`, and it is
// only reached through `&mut List`.
unsafe impl<T: Sync> Sync for List<T> {}

// SAFETY: an `IterMut` hands out disjoint `&mut T` borrowed from a
// `&mut List`, as a `&mut [T]` iterator does.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<T> List<T> {
    /// Returns `true` if the `List` contains a payload equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads). Nodes
    /// are relinked, never moved, so every [`NodeRef`](crate::NodeRef)
    /// keeps addressing the same payload.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over the links: the
    /// chain is halved with a slow and a fast pointer, both halves are sorted
    /// recursively, then merged. There is no extra temporary storage during
    /// merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.cmp(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads): when
    /// `compare` returns [`Ordering::Equal`], the node that came first stays
    /// first.
    ///
    /// The comparator function must define a total ordering for the
    /// payloads in the list. If the ordering is not total, the order
    /// of the payloads is unspecified, but every node stays in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v, List::from_iter([1, 2, 3, 4, 5]));
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v, List::from_iter([5, 4, 3, 2, 1]));
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, compare);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::merge_sort(self, |a, b| f(a).cmp(&f(b)));
    }
}
