use std::collections::VecDeque;
use parking_lot::Mutex;

pub struct SharedQueue<T> {
    limit: usize,
    inner: Mutex<VecDeque<T>>,
}

impl<T> SharedQueue<T> {
    // limit 0 means unbounded
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit,
            inner: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&self, value: T) {
        let mut queue = self.inner.lock();
        if self.limit > 0 && queue.len() >= self.limit {
            queue.pop_front();
        }
        queue.push_back(value);
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

impl<T: Clone> SharedQueue<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().iter().cloned().collect()
    }
}
