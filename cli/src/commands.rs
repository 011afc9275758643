pub mod scan;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "portania", version)]
#[command(about = "Checks which TCP ports accept connections on one or more hosts.")]
pub struct CommandLine {
    /// Hosts to scan, space or comma delimited (e.g. -H 'google.com localhost github.com')
    #[arg(short = 'H', long = "hosts", value_name = "HOSTS")]
    pub hosts: Vec<String>,

    /// Ports to scan, space or comma delimited (e.g. -p '80 443 3389 1433')
    #[arg(short = 'p', long = "ports", value_name = "PORTS")]
    pub ports: Vec<String>,

    /// Inclusive port range (e.g. -r 80-443)
    #[arg(short = 'r', long = "portrange", visible_alias = "pr", value_name = "LOW-HIGH")]
    pub port_range: Option<String>,

    /// Connection timeout in seconds, 0 falls back to the default
    #[arg(short = 't', long = "timeout", value_name = "SECONDS", default_value_t = 10)]
    pub timeout: u64,

    /// Number of concurrent workers, 0 is treated as 1
    #[arg(short = 'w', long = "workers", value_name = "N", default_value_t = 1)]
    pub workers: usize,

    /// Sleep a random number of seconds after queuing and after probing each target
    #[arg(short = 's', long = "splay")]
    pub splay: bool,

    /// Only print open ports
    #[arg(long = "hideclosed", visible_alias = "hidefailures")]
    pub hide_closed: bool,

    /// Show why a connection failed and enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,

    /// Seed for the splay generator, for reproducible pacing
    #[arg(long = "seed", value_name = "U64")]
    pub seed: Option<u64>,

    /// Never colorize output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
