pub use config::Config;
pub use recorder::{Entry, Event, Recorder};

mod config;
mod recorder;
