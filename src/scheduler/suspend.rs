use std::thread;
use std::time::Duration;

/// Pauses the scheduler between phases.
pub trait Suspend {
    fn suspend(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Suspend for ThreadSleep {
    fn suspend(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
