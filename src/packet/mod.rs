pub mod encode;

pub use frames::Packets;

mod frames;
