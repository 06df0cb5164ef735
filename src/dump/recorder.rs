use std::collections::HashMap;
use std::net::SocketAddr;
use log::{debug, trace};
use serde::{Serialize, Deserialize};
use crate::flow::{Direction, Flow, Key, Registry};
use crate::packet::Packets;
use crate::pcap::{Timestamp, Writer};
use crate::shared::SharedQueue;
use crate::tap::Tap;
use super::Config;

pub struct Recorder {
    flows:   Registry,
    packets: Packets,
    writer:  Writer,
    journal: SharedQueue<Entry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entry {
    pub ts:    Timestamp,
    pub key:   Key,
    pub event: Event,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Open,
    Data(Direction, usize),
    Close,
}

impl Recorder {
    pub fn new(config: Config) -> Self {
        Self {
            flows:   Registry::new(),
            packets: Packets::new(),
            writer:  Writer::new(config.path, config.limit, config.interval),
            journal: SharedQueue::new(config.journal),
        }
    }

    // the host drives time based flushes through this
    pub fn flush(&self, force: bool) {
        self.writer.flush(force);
    }

    pub fn stop(&self) {
        debug!("capture stopping with {} live flows", self.flows.len());
        self.writer.flush(true);
    }

    pub fn pending(&self) -> usize {
        self.writer.pending()
    }

    pub fn active(&self) -> usize {
        self.flows.len()
    }

    pub fn flows(&self) -> HashMap<Key, Flow> {
        self.flows.snapshot()
    }

    pub fn recent(&self) -> Vec<Entry> {
        self.journal.snapshot()
    }

    pub fn drain(&self) -> Option<Entry> {
        self.journal.pop()
    }
}

impl Tap for Recorder {
    fn connection_made(&self, local: SocketAddr, remote: SocketAddr, index: u32, stream: bool) {
        let key = Key::new(stream, index);
        let ts  = Timestamp::now();

        debug!("{} open {} -> {}", key, local, remote);

        self.flows.register(key, Flow::new(local, remote, key.0));
        self.journal.push(Entry { ts: ts, key: key, event: Event::Open });

        if stream {
            let run = self.flows.update(&key, |flow| {
                self.packets.handshake(flow, ts)
            });
            self.writer.append(&run);
            self.writer.flush(false);
        }
    }

    fn teardown(&self, index: u32, stream: bool) {
        let key = Key::new(stream, index);
        let ts  = Timestamp::now();

        let mut flow = self.flows.unregister(&key);

        debug!("{} close rx {} tx {}", key, flow.rx, flow.tx);

        if stream {
            let run = self.packets.teardown(&mut flow, ts);
            self.writer.append(&run);
            self.writer.flush(false);
        }

        self.journal.push(Entry { ts: ts, key: key, event: Event::Close });
    }

    fn data(&self, data: &[u8], dir: Direction, index: u32, stream: bool) {
        let key = Key::new(stream, index);
        let ts  = Timestamp::now();

        trace!("{} {:?} {} bytes", key, dir, data.len());

        let run = self.flows.update(&key, |flow| {
            self.packets.payload(flow, dir, data, ts)
        });
        self.writer.append(&run);
        self.journal.push(Entry { ts: ts, key: key, event: Event::Data(dir, data.len()) });
        self.writer.flush(false);
    }
}
