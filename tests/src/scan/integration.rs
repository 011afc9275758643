#![cfg(test)]
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use portania_common::ConfigError;
use portania_common::network::{ports::PortSet, target::Target};
use portania_core::network::tcp::TcpProber;
use portania_core::{ScanSummary, run_scan};

use crate::utils::{self, CollectingReporter, RecordingProber};

/// A listening loopback port is reported open, a released one closed with a cause.
#[tokio::test]
async fn loopback_open_and_closed_ports() {
    let (_listener, open) = utils::open_port().await;
    let closed: u16 = utils::closed_port().await;

    let reporter = Arc::new(CollectingReporter::default());
    let cfg = utils::config(&["127.0.0.1"], vec![open, closed]).with_workers(2);

    let summary: ScanSummary = run_scan(&cfg, Arc::new(TcpProber), reporter.clone())
        .await
        .unwrap();

    assert_eq!(summary.probed, 2);
    assert_eq!(summary.open, 1);
    assert_eq!(summary.closed(), 1);

    let open_result = reporter.find(open).expect("open port was not reported");
    assert!(open_result.is_reachable());
    assert_eq!(open_result.cause(), None);

    let closed_result = reporter.find(closed).expect("closed port was not reported");
    assert!(!closed_result.is_reachable());
    assert!(!closed_result.cause().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn localhost_without_listener_is_closed() {
    let closed: u16 = utils::closed_port().await;

    let reporter = Arc::new(CollectingReporter::default());
    let cfg = utils::config(&["localhost"], vec![closed]);

    run_scan(&cfg, Arc::new(TcpProber), reporter.clone()).await.unwrap();

    let results = reporter.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target().host(), "localhost");
    assert_eq!(results[0].target().port(), closed);
    assert!(!results[0].is_reachable());
    assert!(results[0].cause().is_some());
}

/// Every target is probed and reported exactly once, whatever the pool size.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn exactly_once_for_any_pool_size() {
    let hosts = ["alpha", "beta", "gamma"];
    let ports: Vec<u16> = (1000..1020).collect();
    let expected: HashSet<Target> = hosts
        .iter()
        .flat_map(|host| ports.iter().map(move |port| Target::new(*host, *port)))
        .collect();

    for workers in [0, 1, 2, 7, 32, 100] {
        let prober = Arc::new(RecordingProber::with_delay(Duration::from_millis(1)));
        let reporter = Arc::new(CollectingReporter::default());
        let cfg = utils::config(&hosts, ports.clone()).with_workers(workers);

        let summary = run_scan(&cfg, prober.clone(), reporter.clone()).await.unwrap();
        assert_eq!(summary.probed, 60, "workers = {workers}");

        let seen = prober.seen();
        assert_eq!(seen.len(), 60, "workers = {workers}");
        assert!(seen.values().all(|count| *count == 1), "duplicate probe with {workers} workers");
        assert_eq!(seen.keys().cloned().collect::<HashSet<Target>>(), expected);

        let reported: Vec<Target> = reporter
            .results()
            .iter()
            .map(|result| result.target().clone())
            .collect();
        assert_eq!(reported.len(), 60);
        assert_eq!(reported.into_iter().collect::<HashSet<Target>>(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrency_is_bounded_by_pool_size() {
    for workers in [1, 3, 5] {
        let prober = Arc::new(RecordingProber::with_delay(Duration::from_millis(5)));
        let cfg = utils::config(&["h"], (1..=40).collect()).with_workers(workers);

        run_scan(&cfg, prober.clone(), Arc::new(CollectingReporter::default()))
            .await
            .unwrap();

        let max = prober.max_in_flight();
        assert!(max >= 1 && max <= workers, "{max} probes overlapped with {workers} workers");
    }
}

#[tokio::test]
async fn single_worker_reports_in_enumeration_order() {
    let prober = Arc::new(RecordingProber::default());
    let reporter = Arc::new(CollectingReporter::default());
    let cfg = utils::config(&["a", "b"], vec![3, 1, 2]);

    run_scan(&cfg, prober, reporter.clone()).await.unwrap();

    let order: Vec<String> = reporter
        .results()
        .iter()
        .map(|result| result.target().to_string())
        .collect();
    assert_eq!(order, vec!["a:3", "a:1", "a:2", "b:3", "b:1", "b:2"]);
}

#[tokio::test(start_paused = true)]
async fn seeded_splay_scan_probes_everything() {
    let prober = Arc::new(RecordingProber::default());
    let reporter = Arc::new(CollectingReporter::default());
    let cfg = utils::config(&["a", "b"], vec![1, 2, 3, 4])
        .with_workers(3)
        .with_splay(true)
        .with_seed(Some(2024));

    let summary = run_scan(&cfg, prober.clone(), reporter.clone()).await.unwrap();

    assert_eq!(summary.probed, 8);
    assert_eq!(prober.seen().len(), 8);
    assert_eq!(reporter.results().len(), 8);
}

#[tokio::test]
async fn configuration_errors_abort_before_probing() {
    assert_eq!(PortSet::resolve::<&str>(&[], None), Err(ConfigError::NoPorts));

    let prober = Arc::new(RecordingProber::default());
    let cfg = utils::config(&[], vec![80]);

    let err = run_scan(&cfg, prober.clone(), Arc::new(CollectingReporter::default()))
        .await
        .unwrap_err();

    assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::NoHosts));
    assert!(prober.seen().is_empty());
}
