use chain_list::list::cursor::{Cursor, Direction};
use chain_list::{Error, List, Node, NodeRef};
use std::sync::{Arc, Mutex};
use std::thread;

fn filled(payloads: &[i32]) -> (List<i32>, Vec<NodeRef>) {
    let mut list = List::new();
    let handles = payloads
        .iter()
        .map(|&payload| list.push_back(Node::new(payload)).unwrap())
        .collect();
    (list, handles)
}

fn payloads(list: &List<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_new() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);
}

#[test]
fn test_push_back_pop_front_is_fifo() {
    let (mut list, _) = filled(&[1, 2, 3]);
    assert_eq!(list.len(), 3);

    let popped: Vec<_> = std::iter::from_fn(|| list.pop_front())
        .map(Node::into_payload)
        .collect();
    assert_eq!(popped, vec![1, 2, 3]);
    assert!(list.is_empty());
}

#[test]
fn test_push_front_pop_front_is_lifo() {
    let mut list = List::new();
    for i in 1..=3 {
        list.push_front(Node::new(i)).unwrap();
    }
    let popped: Vec<_> = std::iter::from_fn(|| list.pop_front())
        .map(Node::into_payload)
        .collect();
    assert_eq!(popped, vec![3, 2, 1]);
}

#[test]
fn test_pop_empty() {
    let mut list: List<i32> = List::new();
    assert!(list.pop_front().is_none());
    assert!(list.pop_back().is_none());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_delete_middle() {
    let (mut list, handles) = filled(&[1, 2, 3, 4]);
    list.delete(handles[1]).unwrap();
    assert_eq!(payloads(&list), vec![1, 3, 4]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.next_of(handles[0]), Ok(Some(handles[2])));
    assert_eq!(list.prev_of(handles[2]), Ok(Some(handles[0])));
}

#[test]
fn test_sort_then_walk_backward() {
    let (mut list, _) = filled(&[4, 1, 3, 2]);
    list.sort();

    let mut cursor = list.cursor(Direction::Backward);
    let mut seen = Vec::new();
    while let Ok(node) = cursor.next(&list) {
        seen.push(*list.get(node).unwrap());
    }
    assert_eq!(seen, vec![4, 3, 2, 1]);
    assert_eq!(cursor.next(&list), Err(Error::CursorExhausted));
}

#[test]
fn test_boundary_indices() {
    let (mut list, handles) = filled(&[10, 20, 30]);
    assert_eq!(list.fetch(0), Some(handles[0]));
    assert_eq!(list.fetch(2), Some(handles[2]));
    assert_eq!(list.fetch(3), None);

    assert_eq!(
        list.delete_at(3),
        Err(Error::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(list.len(), 3);

    // inserting at the length appends
    let tail = list.insert(Node::new(40), 3).unwrap();
    assert_eq!(list.tail(), Some(tail));
    let err = list.insert(Node::new(99), 5).unwrap_err();
    assert_eq!(*err.error(), Error::IndexOutOfBounds { index: 5, len: 4 });
    assert_eq!(err.into_node().into_payload(), 99);

    let head = list.insert(Node::new(0), 0).unwrap();
    assert_eq!(list.head(), Some(head));
    assert_eq!(payloads(&list), vec![0, 10, 20, 30, 40]);

    list.delete_at(4).unwrap();
    list.delete_at(0).unwrap();
    assert_eq!(payloads(&list), vec![10, 20, 30]);
}

#[test]
fn test_find() {
    let (list, handles) = filled(&[5, 7, 7, 9]);
    assert_eq!(list.find(&7, |payload, key| payload == key), Some(handles[1]));
    assert_eq!(list.find(&8, |payload, key| payload == key), None);
    assert_eq!(list.find(&8, |payload, key| payload > key), Some(handles[3]));
}

#[test]
fn test_destructor_counts() {
    let disposed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&disposed);
    let mut list = List::with_destructor(move |payload: i32| sink.lock().unwrap().push(payload));
    let handles: Vec<_> = (1..=5)
        .map(|i| list.push_back(Node::new(i)).unwrap())
        .collect();

    list.delete(handles[2]).unwrap();
    list.delete_at(0).unwrap();
    let popped = list.pop_back().unwrap();
    let removed = list.remove(handles[1]).unwrap();
    assert_eq!(*disposed.lock().unwrap(), vec![3, 1]);

    list.free();
    assert_eq!(*disposed.lock().unwrap(), vec![3, 1, 4]);
    assert_eq!(popped.into_payload(), 5);
    assert_eq!(removed.into_payload(), 2);
}

#[test]
fn test_destructor_on_clear() {
    let disposed = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&disposed);
    let mut list = List::with_destructor(move |_: String| *sink.lock().unwrap() += 1);
    for name in ["a", "b", "c"] {
        list.push_back(Node::new(name.to_string())).unwrap();
    }
    list.clear();
    assert_eq!(*disposed.lock().unwrap(), 3);
    assert!(list.is_empty());

    // the list stays usable after being cleared
    list.push_back(Node::new("d".to_string())).unwrap();
    drop(list);
    assert_eq!(*disposed.lock().unwrap(), 4);
}

#[test]
fn test_foreign_and_stale_nodes() {
    let (mut list, handles) = filled(&[1, 2]);
    let (other, other_handles) = filled(&[1, 2]);

    assert_eq!(list.delete(other_handles[0]), Err(Error::ForeignNode));
    assert_eq!(list.get(other_handles[1]), Err(Error::ForeignNode));
    assert_eq!(other.len(), 2);

    list.delete(handles[0]).unwrap();
    assert_eq!(list.delete(handles[0]), Err(Error::StaleNode));

    // the freed slot is reused, the old handle keeps failing
    let reused = list.push_back(Node::new(3)).unwrap();
    assert_eq!(list.get(handles[0]), Err(Error::StaleNode));
    assert_eq!(list.get(reused), Ok(&3));
    assert_eq!(payloads(&list), vec![2, 3]);
}

#[test]
fn test_cursor_from_node_and_index() {
    let (list, handles) = filled(&[1, 2, 3, 4]);

    let forward: Vec<_> = Cursor::from_node(handles[1], Direction::Forward)
        .walk(&list)
        .map(|(_, payload)| *payload)
        .collect();
    assert_eq!(forward, vec![2, 3, 4]);

    let backward: Vec<_> = list
        .cursor_at(2, Direction::Backward)
        .unwrap()
        .walk(&list)
        .map(|(node, _)| node)
        .collect();
    assert_eq!(backward, vec![handles[2], handles[1], handles[0]]);
    assert!(list.cursor_at(4, Direction::Backward).is_none());
}

#[test]
fn test_sort_by_is_stable() {
    let mut list = List::new();
    for pair in [("b", 0), ("a", 1), ("b", 2), ("a", 3)] {
        list.push_back(Node::new(pair)).unwrap();
    }
    list.sort_by(|x, y| x.0.cmp(y.0));
    let sorted: Vec<_> = list.into_iter().collect();
    assert_eq!(sorted, vec![("a", 1), ("a", 3), ("b", 0), ("b", 2)]);
}

#[test]
fn test_shared_across_threads() {
    let disposed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&disposed);
    let list = Arc::new(Mutex::new(List::with_destructor(move |payload: u32| {
        sink.lock().unwrap().push(payload)
    })));

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..10 {
                    let mut list = list.lock().unwrap();
                    list.push_back(Node::new(worker * 10 + i)).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let mut list = Arc::try_unwrap(list).ok().unwrap().into_inner().unwrap();
    assert_eq!(list.len(), 40);
    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), (0..40).collect::<Vec<_>>());

    // the whole list moves to another thread, and is torn down there
    thread::spawn(move || {
        list.delete_at(0).unwrap();
        list.free();
    })
    .join()
    .unwrap();
    assert_eq!(*disposed.lock().unwrap(), (0..40).collect::<Vec<_>>());
}
