use std::collections::HashSet;
use std::hash::Hash;
use parking_lot::Mutex;

pub struct SharedSet<T> {
    inner: Mutex<HashSet<T>>,
}

impl<T: Eq + Hash> SharedSet<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashSet::new()),
        }
    }

    pub fn insert(&self, value: T) -> bool {
        self.inner.lock().insert(value)
    }

    pub fn remove(&self, value: &T) -> bool {
        self.inner.lock().remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
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

impl<T: Eq + Hash + Clone> SharedSet<T> {
    pub fn values(&self) -> Vec<T> {
        self.inner.lock().iter().cloned().collect()
    }
}
