use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use serde::{Serialize, Deserialize};
use crate::flow::Direction;
use crate::tap::Tap;

#[derive(Default)]
pub struct Stats {
    tcp: Counters,
    udp: Counters,
}

#[derive(Default)]
struct Counters {
    flows:  AtomicU32,
    active: AtomicU32,
    rx:     AtomicU64,
    tx:     AtomicU64,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub flows:  u32,
    pub active: u32,
    pub rx:     u64,
    pub tx:     u64,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tcp: Totals,
    pub udp: Totals,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tcp: self.tcp.totals(),
            udp: self.udp.totals(),
        }
    }

    fn counters(&self, stream: bool) -> &Counters {
        match stream {
            true  => &self.tcp,
            false => &self.udp,
        }
    }
}

impl Counters {
    fn totals(&self) -> Totals {
        Totals {
            flows:  self.flows.load(Ordering::Relaxed),
            active: self.active.load(Ordering::Relaxed),
            rx:     self.rx.load(Ordering::Relaxed),
            tx:     self.tx.load(Ordering::Relaxed),
        }
    }
}

impl Tap for Stats {
    fn connection_made(&self, _local: SocketAddr, _remote: SocketAddr, _index: u32, stream: bool) {
        let c = self.counters(stream);
        c.flows.fetch_add(1, Ordering::Relaxed);
        c.active.fetch_add(1, Ordering::Relaxed);
    }

    fn teardown(&self, _index: u32, stream: bool) {
        self.counters(stream).active.fetch_sub(1, Ordering::Relaxed);
    }

    fn data(&self, data: &[u8], dir: Direction, _index: u32, stream: bool) {
        let c = self.counters(stream);
        let n = data.len() as u64;
        match dir {
            Direction::Out => { c.tx.fetch_add(n, Ordering::Relaxed); }
            Direction::In  => { c.rx.fetch_add(n, Ordering::Relaxed); }
        }
    }
}

#[cfg(test)]
mod test {
    use std::net::SocketAddr;
    use crate::flow::Direction;
    use crate::tap::Tap;
    use super::*;

    #[test]
    fn totals_follow_events() {
        let stats = Stats::new();
        let local:  SocketAddr = "10.0.0.1:5000".parse().unwrap();
        let remote: SocketAddr = "93.184.0.1:443".parse().unwrap();

        stats.connection_made(local, remote, 1, true);
        stats.connection_made(local, remote, 1, false);
        stats.data(&[0; 700], Direction::Out, 1, true);
        stats.data(&[0; 300], Direction::In, 1, true);
        stats.data(&[0; 64], Direction::Out, 1, false);
        stats.teardown(1, true);

        let snap = stats.snapshot();
        assert_eq!(Totals { flows: 1, active: 0, rx: 300, tx: 700 }, snap.tcp);
        assert_eq!(Totals { flows: 1, active: 1, rx: 0, tx: 64 }, snap.udp);
    }

    #[test]
    fn snapshot_serializes() {
        let stats = Stats::new();
        let json = serde_json::to_string(&stats.snapshot()).unwrap();
        assert!(json.contains(r#""tcp":{"flows":0"#));
    }
}
