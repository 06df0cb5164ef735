use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use anyhow::Result;
use log::{debug, warn};
use parking_lot::Mutex;
use super::format::FileHeader;
use super::timer::Timer;

pub struct Writer {
    path:    PathBuf,
    limit:   usize,
    pending: AtomicUsize,
    state:   Mutex<State>,
}

struct State {
    buffer: Vec<u8>,
    timer:  Timer,
}

impl Writer {
    pub fn new(path: PathBuf, limit: usize, interval: Duration) -> Self {
        Self {
            path:    path,
            limit:   limit,
            pending: AtomicUsize::new(0),
            state:   Mutex::new(State {
                buffer: Vec::new(),
                timer:  Timer::new(interval),
            }),
        }
    }

    pub fn append(&self, bytes: &[u8]) {
        let mut state = self.state.lock();
        state.buffer.extend_from_slice(bytes);
        self.pending.store(state.buffer.len(), Ordering::Relaxed);
    }

    pub fn flush(&self, force: bool) {
        let mut state = self.state.lock();
        if state.buffer.is_empty() {
            self.pending.store(0, Ordering::Relaxed);
            return;
        }

        if state.buffer.len() >= self.limit || force || state.timer.ready(Instant::now()) {
            match write_out(&self.path, &state.buffer) {
                Ok(n)  => {
                    debug!("wrote {} bytes to {:?}", n, self.path);
                    state.buffer.clear();
                }
                // keep the buffer, the next flush retries
                Err(e) => warn!("capture write failed: {:?}", e),
            }
        }

        self.pending.store(state.buffer.len(), Ordering::Relaxed);
    }

    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Relaxed)
    }
}

// the global header goes out once, when the file first appears
fn write_out(path: &Path, frames: &[u8]) -> Result<usize> {
    let fresh = !path.exists();

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    if fresh {
        file.write_all(&FileHeader::new().encode())?;
    }
    file.write_all(frames)?;

    Ok(frames.len())
}
