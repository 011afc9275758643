use std::time::Duration;

use crate::error::ConfigError;
use crate::network::ports::PortSet;

/// Per-connection timeout used when none, or zero, is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pool size used when none, or zero, is configured.
pub const DEFAULT_WORKERS: usize = 1;

/// Settings for one scan. Built once from the command line and never
/// mutated while the scan runs.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub hosts: Vec<String>,
    pub ports: PortSet,
    /// Upper bound for a single TCP handshake, name resolution included.
    pub timeout: Duration,
    /// Number of concurrent workers, never below one.
    pub workers: usize,
    /// Sleep a random number of seconds around each probe.
    pub splay: bool,
    /// Suppress output for unreachable targets.
    pub hide_failures: bool,
    /// Print the transport error next to unreachable targets.
    pub debug: bool,
    /// Seed for the splay generator. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl ScanConfig {
    pub fn new(hosts: Vec<String>, ports: PortSet) -> Self {
        Self {
            hosts,
            ports,
            timeout: DEFAULT_TIMEOUT,
            workers: DEFAULT_WORKERS,
            splay: false,
            hide_failures: false,
            debug: false,
            seed: None,
        }
    }

    /// A zero timeout falls back to [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() { DEFAULT_TIMEOUT } else { timeout };
        self
    }

    /// A zero worker count is coerced to one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_splay(mut self, splay: bool) -> Self {
        self.splay = splay;
        self
    }

    pub fn with_hide_failures(mut self, hide_failures: bool) -> Self {
        self.hide_failures = hide_failures;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the invariants the scanner relies on before any task is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hosts.is_empty() {
            return Err(ConfigError::NoHosts);
        }
        if self.ports.is_empty() {
            return Err(ConfigError::NoPorts);
        }
        Ok(())
    }

    /// Total number of `(host, port)` pairs this scan will probe.
    pub fn target_count(&self) -> usize {
        self.hosts.len() * self.ports.len()
    }
}
