use crate::list::slots::Slots;
use crate::List;
use std::cmp::Ordering;

pub(super) fn merge_sort<T, F>(list: &mut List<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len < 2 {
        return;
    }
    if let Some(head) = list.head {
        if let Some((head, tail)) = sort_chain(&mut list.slots, head, &mut compare) {
            list.head = Some(head);
            list.tail = Some(tail);
        }
    }
}

/// Sort the detached chain starting at `head`, and return its new
/// `(head, tail)`.
fn sort_chain<T, F>(slots: &mut Slots<T>, head: usize, compare: &mut F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let second = match split(slots, head) {
        Some(second) => second,
        None => return Some((head, head)),
    };
    let (left, _) = sort_chain(slots, head, compare)?;
    let (right, _) = sort_chain(slots, second, compare)?;
    merge(slots, left, right, compare)
}

/// Cut the chain starting at `head` after its middle node, and return the
/// head of the second half, or `None` if the chain has a single node.
///
/// The slow pointer moves one node per step and the fast pointer two, so
/// the slow one stops at the end of the first half.
fn split<T>(slots: &mut Slots<T>, head: usize) -> Option<usize> {
    let mut slow = head;
    let mut fast = slots[head].next;
    while let Some(step) = fast {
        let Some(leap) = slots[step].next else {
            break;
        };
        slow = slots[slow].next?;
        fast = slots[leap].next;
    }
    let second = slots[slow].next.take()?;
    slots[second].prev = None;
    Some(second)
}

/// Merge the sorted chains starting at `left` and `right` into one, and
/// return its `(head, tail)`.
///
/// On ties the node of `left` goes first.
fn merge<T, F>(
    slots: &mut Slots<T>,
    left: usize,
    right: usize,
    compare: &mut F,
) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut left, mut right) = (Some(left), Some(right));
    let mut head = None;
    let mut tail = None;
    while let Some(picked) = pick(slots, &mut left, &mut right, compare) {
        slots[picked].prev = tail;
        match tail {
            Some(tail) => slots[tail].next = Some(picked),
            None => head = Some(picked),
        }
        tail = Some(picked);
    }
    let tail = tail?;
    slots[tail].next = None;
    Some((head?, tail))
}

/// Take the front node of the run that goes first, and advance that run.
fn pick<T, F>(
    slots: &Slots<T>,
    left: &mut Option<usize>,
    right: &mut Option<usize>,
    compare: &mut F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let run = match (*left, *right) {
        (Some(l), Some(r)) => match compare(&slots[l].payload, &slots[r].payload) {
            Ordering::Greater => right,
            Ordering::Less | Ordering::Equal => left,
        },
        (Some(_), None) => left,
        (None, _) => right,
    };
    let picked = (*run)?;
    *run = slots[picked].next;
    Some(picked)
}

#[cfg(test)]
mod tests {
    use crate::list::tests::check_links;
    use crate::{List, Node};
    use std::cmp::Ordering;
    use std::iter::FromIterator;

    fn test_sort<I>(input: I)
    where
        I: IntoIterator<Item = i32>,
    {
        let mut vec = Vec::from_iter(input);
        let mut list = List::from_iter(vec.iter().copied());
        vec.sort();
        list.sort();
        check_links(&list);
        assert_eq!(Vec::from_iter(list), vec);
    }

    #[test]
    fn sort_small() {
        test_sort(None);
        test_sort(Some(1));
        test_sort([2, 1]);
        test_sort([1, 2]);
        test_sort([4, 1, 3, 2]);
        test_sort([3, 3, 1]);
        test_sort(0..9);
        test_sort((0..9).rev());
    }

    #[test]
    fn sort_large() {
        test_sort((0..200).map(|i| (i * 7919) % 211));
        test_sort((0..257).rev());
        test_sort((0..100).map(|i| i % 3));
    }

    #[test]
    fn sort_is_stable() {
        // (key, original position)
        let mut list = List::from_iter([(5, 0), (3, 1), (5, 2), (1, 3)]);
        list.sort_by(|a, b| a.0.cmp(&b.0));
        check_links(&list);
        assert_eq!(Vec::from_iter(list), vec![(1, 3), (3, 1), (5, 0), (5, 2)]);

        let input = Vec::from_iter((0..64).map(|i| ((i * 13) % 5, i)));
        let mut expected = input.clone();
        expected.sort_by_key(|pair| pair.0);
        let mut list = List::from_iter(input);
        list.sort_by_key(|pair| pair.0);
        assert_eq!(Vec::from_iter(list), expected);
    }

    #[test]
    fn sort_keeps_handles() {
        let mut list = List::new();
        let handles = Vec::from_iter([4, 1, 3, 2].iter().map(|&i| list.push_back(Node::new(i)).unwrap()));
        list.sort();
        for (handle, value) in handles.iter().zip([4, 1, 3, 2]) {
            assert_eq!(list.get(*handle), Ok(&value));
        }
        assert_eq!(list.head(), Some(handles[1]));
        assert_eq!(list.tail(), Some(handles[0]));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn sort_inconsistent_comparator_keeps_every_node() {
        let mut list = List::from_iter(0..50);
        let mut flip = false;
        list.sort_by(|_, _| {
            flip = !flip;
            if flip {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        check_links(&list);
        let mut payloads = Vec::from_iter(list);
        payloads.sort();
        assert_eq!(payloads, Vec::from_iter(0..50));
    }
}
