use parking_lot::Mutex;

pub struct SharedVec<T> {
    limit: usize,
    inner: Mutex<Vec<T>>,
}

impl<T> SharedVec<T> {
    // limit 0 means unbounded
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit,
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, value: T) {
        let mut vec = self.inner.lock();
        if self.limit > 0 && vec.len() >= self.limit {
            vec.remove(0);
        }
        vec.push(value);
    }

    pub fn pop_front(&self) -> Option<T> {
        let mut vec = self.inner.lock();
        match vec.is_empty() {
            true  => None,
            false => Some(vec.remove(0)),
        }
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

impl<T: Clone> SharedVec<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().clone()
    }
}
