use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portania_common::network::{ports::PortSet, result::ProbeResult, target::Target};
use portania_common::ScanConfig;
use portania_core::{Prober, Reporter};
use tokio::net::TcpListener;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Keeps a loopback listener alive for the duration of a test.
pub async fn open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port that was just released, so nothing listens on it.
pub async fn closed_port() -> u16 {
    let (listener, port) = open_port().await;
    drop(listener);
    port
}

pub fn config(hosts: &[&str], ports: Vec<u16>) -> ScanConfig {
    let hosts: Vec<String> = hosts.iter().map(|host| host.to_string()).collect();
    ScanConfig::new(hosts, PortSet::from_ports(ports).unwrap()).with_timeout(PROBE_TIMEOUT)
}

#[derive(Default)]
pub struct CollectingReporter {
    results: Mutex<Vec<ProbeResult>>,
}

impl CollectingReporter {
    pub fn results(&self) -> Vec<ProbeResult> {
        self.results.lock().unwrap().clone()
    }

    pub fn find(&self, port: u16) -> Option<ProbeResult> {
        self.results()
            .into_iter()
            .find(|result| result.target().port() == port)
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, result: &ProbeResult) {
        self.results.lock().unwrap().push(result.clone());
    }
}

/// Counts how often each target is probed and how many probes overlap.
#[derive(Default)]
pub struct RecordingProber {
    delay: Duration,
    seen: Mutex<HashMap<Target, usize>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RecordingProber {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn seen(&self) -> HashMap<Target, usize> {
        self.seen.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for RecordingProber {
    async fn probe(&self, target: &Target, _timeout: Duration) -> ProbeResult {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        *self.seen.lock().unwrap().entry(target.clone()).or_insert(0) += 1;
        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        ProbeResult::open(target.clone())
    }
}
