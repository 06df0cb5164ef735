use std::sync::Arc;
use std::thread;
use super::*;

#[test]
fn map_operations() {
    let map = SharedMap::new();
    assert_eq!(None, map.set("a", 1));
    assert_eq!(Some(1), map.set("a", 2));
    assert_eq!(Some(2), map.get(&"a"));
    assert!(map.contains(&"a"));
    assert_eq!(Some(3), map.update(&"a", |v| { *v += 1; *v }));
    assert_eq!(Some(3), map.remove(&"a"));
    assert_eq!(None, map.remove(&"a"));
    assert_eq!(None, map.update(&"a", |v| *v));
    assert!(map.is_empty());
}

#[test]
fn map_snapshot() {
    let map = SharedMap::new();
    map.set("a", 1);
    map.set("b", 2);

    let snap = map.snapshot();
    assert_eq!(2, snap.len());
    assert_eq!(Some(&1), snap.get("a"));
    assert_eq!(Some(&2), snap.get("b"));

    let mut values = map.values();
    values.sort();
    assert_eq!(vec![1, 2], values);

    map.clear();
    assert_eq!(0, map.len());
}

#[test]
fn map_updates_from_threads() {
    let map = Arc::new(SharedMap::new());
    map.set(0u32, 0u64);

    let threads: Vec<_> = (0..4).map(|_| {
        let map = map.clone();
        thread::spawn(move || {
            for _ in 0..1000 {
                map.update(&0, |v| *v += 1);
            }
        })
    }).collect();

    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(Some(4000), map.get(&0));
}

#[test]
fn queue_pops_in_push_order() {
    let queue = SharedQueue::new(0);
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(3, queue.len());
    assert_eq!(Some(1), queue.pop());
    assert_eq!(Some(2), queue.pop());
    assert_eq!(Some(3), queue.pop());
    assert_eq!(None, queue.pop());
    assert!(queue.is_empty());
}

#[test]
fn queue_evicts_oldest_at_limit() {
    let queue = SharedQueue::new(4);
    for n in 0..5 {
        queue.push(n);
    }
    assert_eq!(4, queue.len());
    assert_eq!(vec![1, 2, 3, 4], queue.snapshot());
    assert_eq!(Some(1), queue.pop());
}

#[test]
fn vector_evicts_oldest_at_limit() {
    let vec = SharedVec::new(2);
    vec.push("a");
    vec.push("b");
    vec.push("c");
    assert_eq!(vec!["b", "c"], vec.snapshot());
    assert_eq!(Some("b"), vec.pop_front());
    assert_eq!(1, vec.len());
    vec.clear();
    assert_eq!(None, vec.pop_front());
}

#[test]
fn set_membership() {
    let set = SharedSet::new();
    assert!(set.insert(7));
    assert!(!set.insert(7));
    assert!(set.contains(&7));
    assert_eq!(1, set.len());
    assert!(set.remove(&7));
    assert!(!set.remove(&7));
    assert!(set.is_empty());
}
