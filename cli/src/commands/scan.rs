use std::sync::Arc;
use std::time::Duration;

use portania_common::network::ports::PortSet;
use portania_common::{ConfigError, ScanConfig, utils};
use portania_core::network::tcp::TcpProber;
use portania_core::{ScanSummary, run_scan};
use tracing::info;

use crate::commands::CommandLine;
use crate::terminal::print::{self, ConsoleReporter};

pub async fn scan(commands: &CommandLine, use_color: bool) -> anyhow::Result<()> {
    let cfg: ScanConfig = build_config(commands)?;
    info!(
        "{} host(s), {} port(s) resolved",
        cfg.hosts.len(),
        cfg.ports.len()
    );

    let reporter = Arc::new(ConsoleReporter::new(use_color, cfg.hide_failures, cfg.debug));
    let summary: ScanSummary = run_scan(&cfg, Arc::new(TcpProber), reporter).await?;

    print::summary(&summary);
    Ok(())
}

/// Turns raw command line input into a validated [`ScanConfig`].
fn build_config(commands: &CommandLine) -> Result<ScanConfig, ConfigError> {
    let ports: PortSet = PortSet::resolve(&commands.ports, commands.port_range.as_deref())?;
    let hosts: Vec<String> = commands
        .hosts
        .iter()
        .flat_map(|entry| utils::tokens(entry))
        .map(str::to_string)
        .collect();

    let cfg = ScanConfig::new(hosts, ports)
        .with_timeout(Duration::from_secs(commands.timeout))
        .with_workers(commands.workers)
        .with_splay(commands.splay)
        .with_hide_failures(commands.hide_closed)
        .with_debug(commands.debug)
        .with_seed(commands.seed);

    cfg.validate()?;
    Ok(cfg)
}
