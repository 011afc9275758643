use std::io;
use std::time::Duration;

use async_trait::async_trait;
use portania_common::network::{result::ProbeResult, target::Target};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::scanner::Prober;

/// Why a handshake did not complete.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {address} timed out after {timeout:?}")]
    Timeout { address: String, timeout: Duration },

    #[error("connecting to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },
}

/// Opens and immediately drops a TCP connection to `address`.
///
/// Name resolution runs inside the same deadline, so an unresolvable host
/// fails with [`ProbeError::Connect`] or [`ProbeError::Timeout`], whichever
/// comes first.
pub async fn handshake(address: &str, probe_timeout: Duration) -> Result<(), ProbeError> {
    match timeout(probe_timeout, TcpStream::connect(address)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(source)) => Err(ProbeError::Connect {
            address: address.to_string(),
            source,
        }),
        Err(_elapsed) => Err(ProbeError::Timeout {
            address: address.to_string(),
            timeout: probe_timeout,
        }),
    }
}

/// Plain TCP connect prober. One attempt per target, no retries.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, target: &Target, timeout: Duration) -> ProbeResult {
        match handshake(target.address(), timeout).await {
            Ok(()) => ProbeResult::open(target.clone()),
            Err(e) => {
                debug!("{e}");
                ProbeResult::closed(target.clone(), e.to_string())
            }
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
