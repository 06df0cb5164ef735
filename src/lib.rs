pub mod dump;
pub mod flow;
pub mod packet;
pub mod pcap;
pub mod shared;
pub mod stats;
pub mod tap;
