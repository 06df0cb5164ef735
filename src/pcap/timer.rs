use std::time::{Duration, Instant};

pub struct Timer {
    delay: Duration,
    next:  Instant,
}

impl Timer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay,
            next:  Instant::now() + delay,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if self.next <= now {
            self.next = now + self.delay;
            true
        } else {
            false
        }
    }
}
