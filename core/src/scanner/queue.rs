//! Single-producer, multi-consumer hand-off between the target producer and
//! the worker pool.
//!
//! The producer owns the only [`WorkSender`]. Closing it (or dropping it) is
//! the one completion signal: once the buffered targets are drained, every
//! [`WorkQueue::next`] call returns `None`, for every worker, forever.

use std::sync::Arc;

use portania_common::network::target::Target;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};

/// One slot keeps the producer at most a single target ahead of the pool.
const QUEUE_CAPACITY: usize = 1;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("work queue has no consumers left, {target_count} target(s) could not be queued")]
pub struct QueueClosed {
    pub target_count: usize,
}

pub struct WorkSender {
    tx: mpsc::Sender<Target>,
}

/// Consumer handle. Clones share the same underlying receiver, so every
/// target is handed to exactly one of them.
#[derive(Clone)]
pub struct WorkQueue {
    rx: Arc<Mutex<mpsc::Receiver<Target>>>,
}

pub fn work_queue() -> (WorkSender, WorkQueue) {
    let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
    (
        WorkSender { tx },
        WorkQueue {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

impl WorkSender {
    /// Waits for room in the queue, then enqueues `target`.
    pub async fn push(&self, target: Target) -> Result<(), QueueClosed> {
        self.tx
            .send(target)
            .await
            .map_err(|_| QueueClosed { target_count: 1 })
    }

    /// Seals the queue. Consumers still drain whatever is buffered.
    pub fn close(self) {
        drop(self.tx);
    }
}

impl WorkQueue {
    /// Next target, or `None` once the queue is closed and drained.
    pub async fn next(&self) -> Option<Target> {
        self.rx.lock().await.recv().await
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
