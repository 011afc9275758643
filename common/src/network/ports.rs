//! # Port Set
//!
//! Resolves the ports to probe from the two user inputs: a discrete list
//! (`"80 443"` or `"80,443"`) and an inclusive range (`"8000-8010"`).
//!
//! The two sources are concatenated in that order and duplicates are kept.
//! A bad token inside the discrete list is skipped with a warning, while a bad
//! range is fatal.

use tracing::warn;

use crate::error::ConfigError;
use crate::network::range::{self, PortRange};
use crate::utils;

/// Ordered, non-empty sequence of TCP ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSet {
    ports: Vec<u16>,
}

impl PortSet {
    /// Builds the set from raw list entries and an optional range expression.
    ///
    /// Each list entry may itself hold several comma or space separated ports.
    /// An empty range string counts as absent.
    pub fn resolve<S: AsRef<str>>(list: &[S], range: Option<&str>) -> Result<Self, ConfigError> {
        let mut ports: Vec<u16> = Vec::new();

        for token in list.iter().flat_map(|entry| utils::tokens(entry.as_ref())) {
            match range::parse_port(token) {
                Ok(port) => ports.push(port),
                Err(e) => warn!("{e}, skipping it"),
            }
        }

        if let Some(expr) = range.map(str::trim).filter(|expr| !expr.is_empty()) {
            let port_range: PortRange = expr.parse()?;
            ports.reserve(port_range.size());
            ports.extend(port_range.to_iter());
        }

        Self::from_ports(ports)
    }

    /// Wraps already validated ports, failing only when there are none.
    pub fn from_ports(ports: Vec<u16>) -> Result<Self, ConfigError> {
        if ports.is_empty() {
            return Err(ConfigError::NoPorts);
        }
        Ok(Self { ports })
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl From<PortRange> for PortSet {
    fn from(range: PortRange) -> Self {
        Self {
            ports: range.to_iter().collect(),
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

#[cfg(test)]
mod tests {
    use super::*;

    const NO_LIST: &[&str] = &[];

    fn contains_all(set: &PortSet, expected: &[u16]) -> bool {
        expected.iter().all(|port| set.as_slice().contains(port))
    }

    #[test]
    fn comma_list_resolves_every_port() {
        let set = PortSet::resolve(&["80,443,8080"], None).unwrap();
        assert!(contains_all(&set, &[80, 443, 8080]));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn space_list_split_across_entries() {
        let set = PortSet::resolve(&["80 443", "3389 1433"], None).unwrap();
        assert_eq!(set.as_slice(), &[80, 443, 3389, 1433]);
    }

    #[test]
    fn range_only_resolves_exact_span() {
        let set = PortSet::resolve(NO_LIST, Some("80-85")).unwrap();
        assert_eq!(set.as_slice(), &[80, 81, 82, 83, 84, 85]);
    }

    #[test]
    fn list_and_range_are_concatenated_without_dedup() {
        let set = PortSet::resolve(&["22 80"], Some("79-81")).unwrap();
        assert_eq!(set.as_slice(), &[22, 80, 79, 80, 81]);
    }

    #[test]
    fn bad_list_token_is_skipped() {
        let set = PortSet::resolve(&["80 http 443"], None).unwrap();
        assert_eq!(set.as_slice(), &[80, 443]);
    }

    #[test]
    fn only_bad_tokens_means_no_ports() {
        assert_eq!(PortSet::resolve(&["http"], None), Err(ConfigError::NoPorts));
    }

    #[test]
    fn nothing_supplied_means_no_ports() {
        let err = PortSet::resolve(NO_LIST, None).unwrap_err();
        assert_eq!(err, ConfigError::NoPorts);
        assert_eq!(err.to_string(), "no ports found to parse");

        assert_eq!(PortSet::resolve(&[""], Some("  ")), Err(ConfigError::NoPorts));
    }

    #[test]
    fn bad_range_is_fatal_even_with_valid_list() {
        assert_eq!(
            PortSet::resolve(&["80"], Some("90-85")),
            Err(ConfigError::InvertedRange { low: 90, high: 85 })
        );
        assert_eq!(
            PortSet::resolve(&["80"], Some("a-85")),
            Err(ConfigError::InvalidPort("a".to_string()))
        );
    }

    #[test]
    fn from_empty_ports_fails() {
        assert_eq!(PortSet::from_ports(Vec::new()), Err(ConfigError::NoPorts));
    }
}
