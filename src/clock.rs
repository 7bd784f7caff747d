//! Injectable delays.
//!
//! Handlers never call `std::thread::sleep` directly. They go through a
//! [`Sleeper`], so tests can swap in a [`VirtualSleeper`] and check which
//! delays were requested without waiting for them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Blocks the current thread for a duration.
pub trait Sleeper: Send + Sync {
    /// Block for `duration`. Not cancellable.
    fn sleep(&self, duration: Duration);
}

/// Wall-clock sleeper backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Sleeper that returns immediately and keeps a record of virtual time.
///
/// Clones share the same record, so a test can keep one handle while the
/// handler under test owns another.
///
/// # Example
///
/// ```
/// use handler_talk::clock::{Sleeper, VirtualSleeper};
/// use std::time::Duration;
///
/// let sleeper = VirtualSleeper::new();
/// sleeper.sleep(Duration::from_secs(3));
/// assert_eq!(sleeper.elapsed(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VirtualSleeper {
    requests: Arc<Mutex<Vec<Duration>>>,
}

impl VirtualSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every duration requested so far, in request order.
    pub fn requests(&self) -> Vec<Duration> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Total virtual time slept.
    pub fn elapsed(&self) -> Duration {
        self.requests().iter().sum()
    }

    /// Number of sleeps requested.
    pub fn sleep_count(&self) -> usize {
        self.requests().len()
    }
}

impl Sleeper for VirtualSleeper {
    fn sleep(&self, duration: Duration) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_virtual_sleeper_does_not_block() {
        let sleeper = VirtualSleeper::new();
        let start = Instant::now();
        sleeper.sleep(Duration::from_secs(60));
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(sleeper.elapsed(), Duration::from_secs(60));
    }

    #[test]
    fn test_virtual_sleeper_clones_share_record() {
        let sleeper = VirtualSleeper::new();
        let shared = sleeper.clone();

        shared.sleep(Duration::from_millis(500));
        shared.sleep(Duration::from_secs(3));

        assert_eq!(
            sleeper.requests(),
            vec![Duration::from_millis(500), Duration::from_secs(3)]
        );
        assert_eq!(sleeper.sleep_count(), 2);
    }

    #[test]
    fn test_thread_sleeper_blocks() {
        let start = Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
