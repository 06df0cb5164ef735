use std::net::SocketAddr;
use std::sync::Arc;
use crate::flow::Direction;

// the engine's three callbacks; events for one flow arrive in order,
// events for different flows may arrive on different threads
pub trait Tap: Send + Sync {
    fn connection_made(&self, local: SocketAddr, remote: SocketAddr, index: u32, stream: bool);
    fn teardown(&self, index: u32, stream: bool);
    fn data(&self, data: &[u8], dir: Direction, index: u32, stream: bool);
}

#[derive(Clone, Default)]
pub struct Taps {
    taps: Vec<Arc<dyn Tap>>,
}

impl Taps {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    pub fn add(&mut self, tap: Arc<dyn Tap>) {
        self.taps.push(tap);
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }
}

impl Tap for Taps {
    fn connection_made(&self, local: SocketAddr, remote: SocketAddr, index: u32, stream: bool) {
        for tap in &self.taps {
            tap.connection_made(local, remote, index, stream);
        }
    }

    fn teardown(&self, index: u32, stream: bool) {
        for tap in &self.taps {
            tap.teardown(index, stream);
        }
    }

    fn data(&self, data: &[u8], dir: Direction, index: u32, stream: bool) {
        for tap in &self.taps {
            tap.data(data, dir, index, stream);
        }
    }
}

#[cfg(test)]
mod test {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use crate::flow::Direction;
    use super::*;

    #[derive(Default)]
    struct Count {
        events: AtomicU32,
    }

    impl Tap for Count {
        fn connection_made(&self, _: SocketAddr, _: SocketAddr, _: u32, _: bool) {
            self.events.fetch_add(1, Ordering::Relaxed);
        }

        fn teardown(&self, _: u32, _: bool) {
            self.events.fetch_add(1, Ordering::Relaxed);
        }

        fn data(&self, _: &[u8], _: Direction, _: u32, _: bool) {
            self.events.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn fans_out_to_every_tap() {
        let a = Arc::new(Count::default());
        let b = Arc::new(Count::default());

        let mut taps = Taps::new();
        taps.add(a.clone());
        taps.add(b.clone());
        assert_eq!(2, taps.len());

        let local:  SocketAddr = "10.0.0.1:5000".parse().unwrap();
        let remote: SocketAddr = "93.184.0.1:443".parse().unwrap();
        taps.connection_made(local, remote, 3, true);
        taps.data(b"abc", Direction::Out, 3, true);
        taps.teardown(3, true);

        assert_eq!(3, a.events.load(Ordering::Relaxed));
        assert_eq!(3, b.events.load(Ordering::Relaxed));
    }
}
