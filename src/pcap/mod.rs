pub mod format;

pub use format::{FileHeader, RecordHeader, Timestamp};
pub use writer::Writer;

mod timer;
mod writer;

#[cfg(test)]
mod test;
