use portania_common::network::{ports::PortSet, target};
use tracing::debug;

use super::queue::{QueueClosed, WorkSender};
use super::splay::Splay;

/// Feeds every `(host, port)` pair into the queue, then closes it.
///
/// Returns how many targets were queued. Fails only when every consumer has
/// gone away before the cross product was exhausted.
pub async fn produce(
    hosts: Vec<String>,
    ports: PortSet,
    sender: WorkSender,
    mut splay: Splay,
) -> Result<usize, QueueClosed> {
    let total: usize = hosts.len() * ports.len();
    let mut produced: usize = 0;

    for target in target::enumerate(&hosts, &ports) {
        if sender.push(target).await.is_err() {
            return Err(QueueClosed {
                target_count: total - produced,
            });
        }
        produced += 1;
        splay.pause().await;
    }

    sender.close();
    debug!("queued {produced} target(s), work queue closed");
    Ok(produced)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
