use std::path::PathBuf;
use std::time::Duration;

pub const FLUSH_LIMIT:    usize    = 0x100000;
pub const FLUSH_INTERVAL: Duration = Duration::from_secs(10);
pub const JOURNAL_LIMIT:  usize    = 50;

#[derive(Clone, Debug)]
pub struct Config {
    pub path:     PathBuf,
    pub limit:    usize,
    pub interval: Duration,
    pub journal:  usize,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:     path.into(),
            limit:    FLUSH_LIMIT,
            interval: FLUSH_INTERVAL,
            journal:  JOURNAL_LIMIT,
        }
    }
}
