use std::sync::atomic::{AtomicU16, Ordering};
use pnet::packet::ethernet::EtherTypes;
use pnet::packet::tcp::TcpFlags;
use crate::flow::{Direction, Flow, Protocol, Route};
use crate::pcap::{RecordHeader, Timestamp};
use crate::pcap::format::RECORD_HEADER_LEN;
use super::encode;
use super::encode::{ETHERNET_LEN, IPV6_LEN, TCP_LEN};

const CONTROL_LEN: usize = RECORD_HEADER_LEN + ETHERNET_LEN + IPV6_LEN + TCP_LEN;

pub struct Packets {
    send: AtomicU16,
    recv: AtomicU16,
}

impl Packets {
    pub fn new() -> Self {
        Self {
            send: AtomicU16::new(0x0010),
            recv: AtomicU16::new(0x00a0),
        }
    }

    // SYN, SYN+ACK, ACK; leaves the flow at tx 1, rx 1
    pub fn handshake(&self, flow: &mut Flow, ts: Timestamp) -> Vec<u8> {
        let mut run = Vec::with_capacity(3 * CONTROL_LEN);

        let syn = self.segment(flow, Direction::Out, TcpFlags::SYN, 0, 0, &[]);
        record(&mut run, ts, &syn);
        flow.tx = 1;
        flow.rx = 0;

        let ts = ts.step();
        let synack = self.segment(flow, Direction::In, TcpFlags::SYN | TcpFlags::ACK, flow.rx, flow.tx, &[]);
        record(&mut run, ts, &synack);
        flow.record(Direction::In, 1);

        let ts = ts.step();
        let (seq, ack) = flow.seq(Direction::Out);
        let done = self.segment(flow, Direction::Out, TcpFlags::ACK, seq, ack, &[]);
        record(&mut run, ts, &done);

        run
    }

    pub fn payload(&self, flow: &mut Flow, dir: Direction, data: &[u8], ts: Timestamp) -> Vec<u8> {
        match flow.protocol {
            Protocol::TCP => self.stream(flow, dir, data, ts),
            Protocol::UDP => self.dgram(flow, dir, data, ts),
        }
    }

    fn stream(&self, flow: &mut Flow, dir: Direction, data: &[u8], ts: Timestamp) -> Vec<u8> {
        let mut run = Vec::with_capacity(2 * CONTROL_LEN + data.len());

        let (seq, ack) = flow.seq(dir);
        let push = self.segment(flow, dir, TcpFlags::PSH | TcpFlags::ACK, seq, ack, data);
        record(&mut run, ts, &push);
        flow.record(dir, data.len() as u32);

        // the peer acknowledges right away
        let ts = ts.step();
        let (seq, ack) = flow.seq(dir.flip());
        let ack_pkt = self.segment(flow, dir.flip(), TcpFlags::ACK, seq, ack, &[]);
        record(&mut run, ts, &ack_pkt);

        run
    }

    fn dgram(&self, flow: &mut Flow, dir: Direction, data: &[u8], ts: Timestamp) -> Vec<u8> {
        let mut run = Vec::with_capacity(CONTROL_LEN + data.len());

        let (src, dst) = flow.ports(dir);
        let udp = encode::udp(src, dst, data.len() as u16);
        let pkt = self.frame(flow, dir, &udp, data);
        record(&mut run, ts, &pkt);
        flow.record(dir, data.len() as u32);

        run
    }

    // four way close, initiated locally; each FIN consumes one byte
    pub fn teardown(&self, flow: &mut Flow, ts: Timestamp) -> Vec<u8> {
        let mut run = Vec::with_capacity(4 * CONTROL_LEN);

        let (seq, ack) = flow.seq(Direction::Out);
        let fin = self.segment(flow, Direction::Out, TcpFlags::FIN, seq, ack, &[]);
        record(&mut run, ts, &fin);
        flow.record(Direction::Out, 1);

        let ts = ts.step();
        let (seq, ack) = flow.seq(Direction::In);
        let ack_in = self.segment(flow, Direction::In, TcpFlags::ACK, seq, ack, &[]);
        record(&mut run, ts, &ack_in);

        let ts = ts.step();
        let (seq, ack) = flow.seq(Direction::In);
        let fin_in = self.segment(flow, Direction::In, TcpFlags::FIN, seq, ack, &[]);
        record(&mut run, ts, &fin_in);
        flow.record(Direction::In, 1);

        let ts = ts.step();
        let (seq, ack) = flow.seq(Direction::Out);
        let done = self.segment(flow, Direction::Out, TcpFlags::ACK, seq, ack, &[]);
        record(&mut run, ts, &done);

        run
    }

    fn segment(&self, flow: &Flow, dir: Direction, flags: u16, seq: u32, ack: u32, data: &[u8]) -> Vec<u8> {
        let (src, dst) = flow.ports(dir);
        let tcp = encode::tcp(src, dst, flags, seq, ack);
        self.frame(flow, dir, &tcp, data)
    }

    fn frame(&self, flow: &Flow, dir: Direction, transport: &[u8], data: &[u8]) -> Vec<u8> {
        let payload = (transport.len() + data.len()) as u16;
        let mut frame = Vec::with_capacity(ETHERNET_LEN + IPV6_LEN + transport.len() + data.len());

        match flow.route {
            Route::V4(local, remote) => {
                let (src, dst) = dir.order(local, remote);
                frame.extend_from_slice(&encode::ethernet(dir, EtherTypes::Ipv4));
                frame.extend_from_slice(&encode::ipv4(src, dst, flow.protocol, payload, self.ident(dir)));
            }
            Route::V6(local, remote) => {
                let (src, dst) = dir.order(local, remote);
                frame.extend_from_slice(&encode::ethernet(dir, EtherTypes::Ipv6));
                frame.extend_from_slice(&encode::ipv6(src, dst, flow.protocol, payload));
            }
        }

        frame.extend_from_slice(transport);
        frame.extend_from_slice(data);
        frame
    }

    fn ident(&self, dir: Direction) -> u16 {
        match dir {
            Direction::Out => self.send.fetch_add(1, Ordering::Relaxed),
            Direction::In  => self.recv.fetch_add(1, Ordering::Relaxed),
        }
    }
}

fn record(run: &mut Vec<u8>, ts: Timestamp, frame: &[u8]) {
    run.extend_from_slice(&RecordHeader::new(ts, frame.len() as u32).encode());
    run.extend_from_slice(frame);
}
