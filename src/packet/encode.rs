use std::net::{Ipv4Addr, Ipv6Addr};
use pnet::packet::ethernet::{EtherType, MutableEthernetPacket};
use pnet::packet::ip::{IpNextHeaderProtocol, IpNextHeaderProtocols};
use pnet::packet::ipv4::MutableIpv4Packet;
use pnet::packet::ipv6::MutableIpv6Packet;
use pnet::packet::tcp::MutableTcpPacket;
use pnet::packet::udp::MutableUdpPacket;
use pnet::util::MacAddr;
use crate::flow::{Direction, Protocol};

pub const ETHERNET_LEN: usize = 14;
pub const IPV4_LEN:     usize = 20;
pub const IPV6_LEN:     usize = 40;
pub const TCP_LEN:      usize = 20;
pub const UDP_LEN:      usize = 8;

pub const HOPS:   u8  = 90;
pub const WINDOW: u16 = 0x8000;

// one fixed MAC per side of the tunnel, swapped with the direction
pub const LOCAL_MAC:  MacAddr = MacAddr(0x10, 0x20, 0x30, 0x40, 0x50, 0x60);
pub const REMOTE_MAC: MacAddr = MacAddr(0xf0, 0xe0, 0xd0, 0xc0, 0xb0, 0xa0);

pub fn ethernet(dir: Direction, ethertype: EtherType) -> [u8; ETHERNET_LEN] {
    let (src, dst) = dir.order(LOCAL_MAC, REMOTE_MAC);
    let mut buf = [0u8; ETHERNET_LEN];
    let mut pkt = MutableEthernetPacket::new(&mut buf).unwrap();
    pkt.set_source(src);
    pkt.set_destination(dst);
    pkt.set_ethertype(ethertype);
    buf
}

// tos, flags, fragment offset and checksum stay zero; length fields
// wrap at 2^16, the record header keeps the true frame size
pub fn ipv4(src: Ipv4Addr, dst: Ipv4Addr, protocol: Protocol, payload: u16, ident: u16) -> [u8; IPV4_LEN] {
    let mut buf = [0u8; IPV4_LEN];
    let mut pkt = MutableIpv4Packet::new(&mut buf).unwrap();
    pkt.set_version(4);
    pkt.set_header_length(5);
    pkt.set_total_length(payload.wrapping_add(IPV4_LEN as u16));
    pkt.set_identification(ident);
    pkt.set_ttl(HOPS);
    pkt.set_next_level_protocol(next_header(protocol));
    pkt.set_source(src);
    pkt.set_destination(dst);
    buf
}

// payload excludes the 40 byte fixed header
pub fn ipv6(src: Ipv6Addr, dst: Ipv6Addr, protocol: Protocol, payload: u16) -> [u8; IPV6_LEN] {
    let mut buf = [0u8; IPV6_LEN];
    let mut pkt = MutableIpv6Packet::new(&mut buf).unwrap();
    pkt.set_version(6);
    pkt.set_payload_length(payload);
    pkt.set_next_header(next_header(protocol));
    pkt.set_hop_limit(HOPS);
    pkt.set_source(src);
    pkt.set_destination(dst);
    buf
}

pub fn tcp(src: u16, dst: u16, flags: u16, seq: u32, ack: u32) -> [u8; TCP_LEN] {
    let mut buf = [0u8; TCP_LEN];
    let mut pkt = MutableTcpPacket::new(&mut buf).unwrap();
    pkt.set_source(src);
    pkt.set_destination(dst);
    pkt.set_sequence(seq);
    pkt.set_acknowledgement(ack);
    pkt.set_data_offset(5);
    pkt.set_flags(flags);
    pkt.set_window(WINDOW);
    buf
}

pub fn udp(src: u16, dst: u16, payload: u16) -> [u8; UDP_LEN] {
    let mut buf = [0u8; UDP_LEN];
    let mut pkt = MutableUdpPacket::new(&mut buf).unwrap();
    pkt.set_source(src);
    pkt.set_destination(dst);
    pkt.set_length(payload.wrapping_add(UDP_LEN as u16));
    buf
}

fn next_header(protocol: Protocol) -> IpNextHeaderProtocol {
    match protocol {
        Protocol::TCP => IpNextHeaderProtocols::Tcp,
        Protocol::UDP => IpNextHeaderProtocols::Udp,
    }
}
