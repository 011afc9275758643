//! Randomized pacing ("splay") between probes.
//!
//! All randomness of a scan flows from one [`SplaySource`] seeded once at scan
//! start. The producer and each worker get their own [`Splay`] derived from it
//! in a fixed order, so a fixed seed always yields the same delays.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Exclusive upper bound, in whole seconds, of the pause after queuing a target.
pub const PRODUCER_SPLAY_SECS: u64 = 17;

/// Exclusive upper bound, in whole seconds, of the pause after a probe.
pub const WORKER_SPLAY_SECS: u64 = 8;

pub struct SplaySource {
    master: StdRng,
    enabled: bool,
}

impl SplaySource {
    pub fn new(seed: u64, enabled: bool) -> Self {
        Self {
            master: StdRng::seed_from_u64(seed),
            enabled,
        }
    }

    pub fn producer(&mut self) -> Splay {
        self.derive(PRODUCER_SPLAY_SECS)
    }

    pub fn worker(&mut self) -> Splay {
        self.derive(WORKER_SPLAY_SECS)
    }

    fn derive(&mut self, bound_secs: u64) -> Splay {
        let seed: u64 = self.master.random();
        Splay {
            rng: StdRng::seed_from_u64(seed),
            bound_secs,
            enabled: self.enabled,
        }
    }
}

/// A single task's private jitter generator.
pub struct Splay {
    rng: StdRng,
    bound_secs: u64,
    enabled: bool,
}

impl Splay {
    /// A splay that never sleeps.
    pub fn disabled() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            bound_secs: 0,
            enabled: false,
        }
    }

    /// Draws the next delay, uniform whole seconds in `[0, bound)`.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if !self.enabled || self.bound_secs == 0 {
            return None;
        }
        let secs: u64 = self.rng.random_range(0..self.bound_secs);
        Some(Duration::from_secs(secs))
    }

    pub async fn pause(&mut self) {
        if let Some(delay) = self.next_delay() {
            trace!("splay: sleeping {}s", delay.as_secs());
            tokio::time::sleep(delay).await;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
