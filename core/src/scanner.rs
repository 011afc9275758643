//! The scan driver and the **abstraction** every probing strategy plugs into.
//!
//! [`run_scan`] wires the pieces together: it validates the configuration,
//! seeds the splay generator, starts the [`producer`] on its own task and
//! blocks on the [`pool`] until the queue is closed and every worker has
//! exited.
//!
//! Probing itself sits behind the [`Prober`] trait so the scheduling engine
//! never depends on a concrete transport.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, ensure};
use async_trait::async_trait;
use portania_common::ScanConfig;
use portania_common::network::{result::ProbeResult, target::Target};
use tracing::{debug, info};

use crate::report::Reporter;

pub mod pool;
pub mod producer;
pub mod queue;
pub mod splay;

use pool::{PoolStats, WorkerPool};
use splay::{Splay, SplaySource};

/// Defines how a single target is tested for reachability.
///
/// Implementations never fail: transport errors become an unreachable
/// [`ProbeResult`] carrying the error text.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &Target, timeout: Duration) -> ProbeResult;
}

/// What a finished scan processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub probed: usize,
    pub open: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn closed(&self) -> usize {
        self.probed - self.open
    }
}

/// Probes every `(host, port)` pair of `config` and reports each outcome.
///
/// Returns once the producer has queued the whole cross product and all
/// workers have drained the queue. Configuration problems surface before
/// any task is spawned.
pub async fn run_scan(
    config: &ScanConfig,
    prober: Arc<dyn Prober>,
    reporter: Arc<dyn Reporter>,
) -> anyhow::Result<ScanSummary> {
    config.validate()?;

    let start: Instant = Instant::now();
    let seed: u64 = config.seed.unwrap_or_else(rand::random);
    debug!("splay {}, seed {seed}", if config.splay { "enabled" } else { "disabled" });

    let mut splay_source = SplaySource::new(seed, config.splay);
    let producer_splay: Splay = splay_source.producer();
    let worker_splays: Vec<Splay> = (0..config.workers.max(1))
        .map(|_| splay_source.worker())
        .collect();

    info!(
        "probing {} target(s) with {} worker(s), {}s timeout",
        config.target_count(),
        config.workers.max(1),
        config.timeout.as_secs_f64()
    );

    if config.workers > config.target_count() {
        debug!(
            "{} worker(s) requested for {} target(s), the surplus will sit idle",
            config.workers,
            config.target_count()
        );
    }

    let (sender, queue) = queue::work_queue();
    let producer = tokio::spawn(producer::produce(
        config.hosts.clone(),
        config.ports.clone(),
        sender,
        producer_splay,
    ));

    let pool = WorkerPool::new(config.workers, config.timeout, prober, reporter);
    let stats: PoolStats = match pool.run(queue, worker_splays).await {
        Ok(stats) => stats,
        Err(e) => {
            producer.abort();
            let _ = producer.await;
            return Err(e);
        }
    };

    let produced: usize = producer.await.context("target producer terminated abnormally")??;
    ensure!(
        produced == stats.probed,
        "queued {produced} target(s) but only {} were probed",
        stats.probed
    );

    Ok(ScanSummary {
        probed: stats.probed,
        open: stats.open,
        elapsed: start.elapsed(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
