use chrono::Utc;
use serde::{Serialize, Deserialize};

pub const MAGIC:             u32 = 0xa1b2_c3d4;
pub const VERSION_MAJOR:     u16 = 2;
pub const VERSION_MINOR:     u16 = 4;
pub const SNAPLEN:           u32 = 0xa000_0000;
pub const LINKTYPE_ETHERNET: u32 = 1;

pub const FILE_HEADER_LEN:   usize = 24;
pub const RECORD_HEADER_LEN: usize = 16;

const STEP_USEC: u32 = 5;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp {
    pub sec:  u32,
    pub usec: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FileHeader {
    pub magic:   u32,
    pub major:   u16,
    pub minor:   u16,
    pub zone:    i32,
    pub sigfigs: u32,
    pub snaplen: u32,
    pub network: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    pub ts:   Timestamp,
    pub incl: u32,
    pub orig: u32,
}

impl Timestamp {
    pub fn now() -> Self {
        let ms = Utc::now().timestamp_millis();
        Self {
            sec:  (ms / 1000) as u32,
            usec: (ms % 1000) as u32 * 1000,
        }
    }

    // artificial spacing between frames of one event
    pub fn step(self) -> Self {
        match self.usec + STEP_USEC {
            usec if usec < 1_000_000 => Self { sec: self.sec, usec: usec },
            usec                     => Self { sec: self.sec + 1, usec: usec - 1_000_000 },
        }
    }
}

// capture headers are little-endian on disk, whatever the host is
impl FileHeader {
    pub fn new() -> Self {
        Self {
            magic:   MAGIC,
            major:   VERSION_MAJOR,
            minor:   VERSION_MINOR,
            zone:    0,
            sigfigs: 0,
            snaplen: SNAPLEN,
            network: LINKTYPE_ETHERNET,
        }
    }

    pub fn encode(&self) -> [u8; FILE_HEADER_LEN] {
        let mut buf = [0u8; FILE_HEADER_LEN];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4..6].copy_from_slice(&self.major.to_le_bytes());
        buf[6..8].copy_from_slice(&self.minor.to_le_bytes());
        buf[8..12].copy_from_slice(&self.zone.to_le_bytes());
        buf[12..16].copy_from_slice(&self.sigfigs.to_le_bytes());
        buf[16..20].copy_from_slice(&self.snaplen.to_le_bytes());
        buf[20..24].copy_from_slice(&self.network.to_le_bytes());
        buf
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < FILE_HEADER_LEN {
            return None;
        }

        Some(Self {
            magic:   u32le(&buf[0..]),
            major:   u16le(&buf[4..]),
            minor:   u16le(&buf[6..]),
            zone:    u32le(&buf[8..]) as i32,
            sigfigs: u32le(&buf[12..]),
            snaplen: u32le(&buf[16..]),
            network: u32le(&buf[20..]),
        })
    }
}

impl RecordHeader {
    // nothing is truncated, so both lengths agree
    pub fn new(ts: Timestamp, len: u32) -> Self {
        Self { ts: ts, incl: len, orig: len }
    }

    pub fn encode(&self) -> [u8; RECORD_HEADER_LEN] {
        let mut buf = [0u8; RECORD_HEADER_LEN];
        buf[0..4].copy_from_slice(&self.ts.sec.to_le_bytes());
        buf[4..8].copy_from_slice(&self.ts.usec.to_le_bytes());
        buf[8..12].copy_from_slice(&self.incl.to_le_bytes());
        buf[12..16].copy_from_slice(&self.orig.to_le_bytes());
        buf
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < RECORD_HEADER_LEN {
            return None;
        }

        Some(Self {
            ts:   Timestamp { sec: u32le(&buf[0..]), usec: u32le(&buf[4..]) },
            incl: u32le(&buf[8..]),
            orig: u32le(&buf[12..]),
        })
    }
}

fn u16le(buf: &[u8]) -> u16 {
    u16::from_le_bytes([buf[0], buf[1]])
}

fn u32le(buf: &[u8]) -> u32 {
    u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}
