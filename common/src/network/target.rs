//! # Scan Target Model
//!
//! A [`Target`] is one `(host, port)` pair. [`enumerate`] turns the host list
//! and the [`PortSet`] into the full cross product, hosts outermost.

use std::fmt;

use crate::network::ports::PortSet;

/// A single `(host, port)` pair to be probed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    host: String,
    port: u16,
    address: String,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host: String = host.into();
        let address: String = format_address(&host, port);
        Self {
            host,
            port,
            address,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The `host:port` string handed to the resolver.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Bare IPv6 literals need brackets before a port can be appended.
fn format_address(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Lazily yields every `(host, port)` pair, in host order then port order.
///
/// Yields `hosts.len() * ports.len()` targets; nothing when `hosts` is empty.
pub fn enumerate<'a>(hosts: &'a [String], ports: &'a PortSet) -> impl Iterator<Item = Target> + 'a {
    hosts
        .iter()
        .flat_map(move |host| ports.iter().map(move |port| Target::new(host.as_str(), port)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
