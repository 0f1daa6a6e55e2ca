//! Timer for the transient success banner
//!
//! Each banner gets a generation number. Scheduling spawns a thread that
//! sleeps for the delay and then sends that generation back over a channel.
//! The event loop polls without blocking and only acts on the generation of
//! the banner currently on screen, so an older timer never clears a newer
//! banner.
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use authdemo::banner::BannerTimer;
//!
//! let mut timer = BannerTimer::new();
//! timer.schedule(Duration::from_secs(3));
//!
//! // In the event loop
//! if timer.poll_expired() {
//!     // hide the banner
//! }
//! ```

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub struct BannerTimer {
    sender: Sender<u64>,
    receiver: Receiver<u64>,
    generation: u64,
    pending: usize,
}

impl BannerTimer {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            generation: 0,
            pending: 0,
        }
    }

    /// Starts a fire-and-forget timer for a new banner and returns its
    /// generation.
    pub fn schedule(&mut self, delay: Duration) -> u64 {
        self.generation += 1;
        self.pending += 1;
        let generation = self.generation;
        let sender = self.sender.clone();

        thread::spawn(move || {
            thread::sleep(delay);
            let _ = sender.send(generation);
        });

        generation
    }

    /// Drains fired timers. Returns `true` if the latest banner's timer is
    /// among them.
    pub fn poll_expired(&mut self) -> bool {
        let mut expired = false;
        while self.pending > 0 {
            match self.receiver.try_recv() {
                Ok(generation) => {
                    self.pending -= 1;
                    if generation == self.generation {
                        expired = true;
                    }
                }
                Err(_) => break,
            }
        }
        expired
    }

    /// Timers still sleeping.
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl Default for BannerTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Polls until `poll_expired` returns true or `timeout` passes.
    fn wait_expired(timer: &mut BannerTimer, timeout: Duration) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if timer.poll_expired() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_timer_creation() {
        let timer = BannerTimer::new();
        assert_eq!(timer.pending_count(), 0);
        assert!(!timer.has_pending());
    }

    #[test]
    fn test_schedule_increments_generation() {
        let mut timer = BannerTimer::new();
        assert_eq!(timer.schedule(Duration::from_secs(60)), 1);
        assert_eq!(timer.schedule(Duration::from_secs(60)), 2);
        assert_eq!(timer.pending_count(), 2);
    }

    #[test]
    fn test_not_expired_before_delay() {
        let mut timer = BannerTimer::new();
        timer.schedule(Duration::from_secs(60));
        assert!(!timer.poll_expired());
        assert!(timer.has_pending());
    }

    #[test]
    fn test_expires_after_delay() {
        let mut timer = BannerTimer::new();
        timer.schedule(Duration::from_millis(10));
        assert!(wait_expired(&mut timer, Duration::from_secs(2)));
        assert_eq!(timer.pending_count(), 0);
    }

    #[test]
    fn test_stale_timer_does_not_expire_newer_banner() {
        let mut timer = BannerTimer::new();
        timer.schedule(Duration::from_millis(10));
        timer.schedule(Duration::from_secs(60));

        thread::sleep(Duration::from_millis(200));
        assert!(!timer.poll_expired());
        assert_eq!(timer.pending_count(), 1);
    }
}
