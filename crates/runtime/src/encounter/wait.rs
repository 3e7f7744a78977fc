//! Bounded polling for units that may not have spawned yet.
use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};

/// Result of one bounded wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    /// Found alive.
    Present(T),
    /// Absent now, but seen alive earlier in the same encounter.
    Defeated,
    /// Never seen before the deadline.
    NotFound,
}

/// Remembers whether the encounter has ever seen its target alive.
///
/// Shared across every wait of one encounter so that a boss killed between
/// checks reads as defeated rather than missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTracker {
    seen_alive: bool,
}

impl SpawnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen_alive(&self) -> bool {
        self.seen_alive
    }
}

/// Deadline plus poll interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnWait {
    timeout: Duration,
    poll_interval: Duration,
}

impl SpawnWait {
    pub const fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Checks exactly once.
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Polls `probe` until it reports a unit, the tracker proves the unit was
    /// already killed, or the deadline passes.
    pub async fn until_present<T, F, Fut>(
        &self,
        tracker: &mut SpawnTracker,
        mut probe: F,
    ) -> Presence<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(found) = probe().await {
                tracker.seen_alive = true;
                return Presence::Present(found);
            }
            if tracker.seen_alive {
                return Presence::Defeated;
            }

            let now = Instant::now();
            if now >= deadline {
                return Presence::NotFound;
            }
            sleep(self.poll_interval.min(deadline - now)).await;
        }
    }
}
