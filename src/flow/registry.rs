use std::collections::HashMap;
use crate::shared::SharedMap;
use super::{Flow, Key};

pub struct Registry {
    flows: SharedMap<Key, Flow>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            flows: SharedMap::new(),
        }
    }

    pub fn register(&self, key: Key, flow: Flow) {
        assert!(!self.flows.contains(&key), "flow {} registered twice", key);
        self.flows.set(key, flow);
    }

    pub fn update<R>(&self, key: &Key, f: impl FnOnce(&mut Flow) -> R) -> R {
        match self.flows.update(key, f) {
            Some(r) => r,
            None    => panic!("flow {} is not registered", key),
        }
    }

    pub fn unregister(&self, key: &Key) -> Flow {
        match self.flows.remove(key) {
            Some(flow) => flow,
            None       => panic!("flow {} is not registered", key),
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.flows.contains(key)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn snapshot(&self) -> HashMap<Key, Flow> {
        self.flows.snapshot()
    }
}
