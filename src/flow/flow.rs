use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flow {
    pub route:    Route,
    pub src_port: u16,
    pub dst_port: u16,
    pub protocol: Protocol,
    pub rx:       u32,
    pub tx:       u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Route {
    V4(Ipv4Addr, Ipv4Addr),
    V6(Ipv6Addr, Ipv6Addr),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    TCP,
    UDP,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Key(pub Protocol, pub u32);

impl Flow {
    pub fn new(local: SocketAddr, remote: SocketAddr, protocol: Protocol) -> Self {
        Self {
            route:    Route::new(local.ip(), remote.ip()),
            src_port: local.port(),
            dst_port: remote.port(),
            protocol: protocol,
            rx:       0,
            tx:       0,
        }
    }

    pub fn record(&mut self, dir: Direction, n: u32) {
        match dir {
            Direction::Out => self.tx += n,
            Direction::In  => self.rx += n,
        }
    }

    // synthetic (seq, ack) for a packet traveling in dir
    pub fn seq(&self, dir: Direction) -> (u32, u32) {
        dir.order(self.tx, self.rx)
    }

    pub fn ports(&self, dir: Direction) -> (u16, u16) {
        dir.order(self.src_port, self.dst_port)
    }
}

impl Route {
    // a mixed pair degrades to v6 with the v4 end mapped
    pub fn new(local: IpAddr, remote: IpAddr) -> Self {
        match (local, remote) {
            (IpAddr::V4(l), IpAddr::V4(r)) => Route::V4(l, r),
            (IpAddr::V6(l), IpAddr::V6(r)) => Route::V6(l, r),
            (IpAddr::V4(l), IpAddr::V6(r)) => Route::V6(l.to_ipv6_mapped(), r),
            (IpAddr::V6(l), IpAddr::V4(r)) => Route::V6(l, r.to_ipv6_mapped()),
        }
    }
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::In  => Direction::Out,
            Direction::Out => Direction::In,
        }
    }

    pub fn order<T>(self, local: T, remote: T) -> (T, T) {
        match self {
            Direction::Out => (local, remote),
            Direction::In  => (remote, local),
        }
    }
}

impl Key {
    pub fn new(stream: bool, index: u32) -> Self {
        match stream {
            true  => Key(Protocol::TCP, index),
            false => Key(Protocol::UDP, index),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.0, self.1)
    }
}
