//! Fixed-size worker pool draining the [`WorkQueue`].
//!
//! Per worker: `Idle -> Receiving -> Probing -> Reporting -> Idle`, until
//! `Receiving` sees the queue closed and drained, at which point the worker
//! exits. [`WorkerPool::run`] returns only once every worker has exited; if
//! one worker dies, the rest are aborted and reaped before the error returns.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use portania_common::network::result::ProbeResult;
use tokio::task::JoinSet;
use tracing::{debug, trace};

use super::Prober;
use super::queue::WorkQueue;
use super::splay::Splay;
use crate::report::Reporter;

/// Tally of what a worker, or the whole pool, processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub probed: usize,
    pub open: usize,
}

impl PoolStats {
    fn record(&mut self, result: &ProbeResult) {
        self.probed += 1;
        if result.is_reachable() {
            self.open += 1;
        }
    }

    fn merge(&mut self, other: PoolStats) {
        self.probed += other.probed;
        self.open += other.open;
    }
}

pub struct WorkerPool {
    size: usize,
    timeout: Duration,
    prober: Arc<dyn Prober>,
    reporter: Arc<dyn Reporter>,
}

impl WorkerPool {
    /// `size` is clamped to at least one worker.
    pub fn new(
        size: usize,
        timeout: Duration,
        prober: Arc<dyn Prober>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            size: size.max(1),
            timeout,
            prober,
            reporter,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Spawns the workers and waits for all of them to drain `queue`.
    ///
    /// `splays` supplies one pacing generator per worker; missing entries
    /// mean that worker never sleeps.
    pub async fn run(&self, queue: WorkQueue, splays: Vec<Splay>) -> anyhow::Result<PoolStats> {
        let mut splays = splays.into_iter();
        let mut workers: JoinSet<PoolStats> = JoinSet::new();

        for id in 0..self.size {
            let splay = splays.next().unwrap_or_else(Splay::disabled);
            workers.spawn(worker(
                id,
                queue.clone(),
                self.prober.clone(),
                self.reporter.clone(),
                self.timeout,
                splay,
            ));
        }
        drop(queue);

        let mut total = PoolStats::default();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(stats) => total.merge(stats),
                Err(e) => {
                    // No worker may outlive this call, even on failure.
                    workers.abort_all();
                    while workers.join_next().await.is_some() {}
                    return Err(e).context("a worker terminated abnormally");
                }
            }
        }

        debug!("worker pool finished: {} probed, {} open", total.probed, total.open);
        Ok(total)
    }
}

async fn worker(
    id: usize,
    queue: WorkQueue,
    prober: Arc<dyn Prober>,
    reporter: Arc<dyn Reporter>,
    timeout: Duration,
    mut splay: Splay,
) -> PoolStats {
    let mut stats = PoolStats::default();

    while let Some(target) = queue.next().await {
        trace!("worker {id}: probing {target}");
        let result: ProbeResult = prober.probe(&target, timeout).await;
        stats.record(&result);
        reporter.report(&result);
        splay.pause().await;
    }

    trace!("worker {id}: queue drained after {} probe(s)", stats.probed);
    stats
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
