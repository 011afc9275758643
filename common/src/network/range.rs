use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ConfigError;

/// An inclusive, non-empty span of TCP ports such as `80-85`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    pub low: u16,
    pub high: u16,
}

impl PortRange {
    pub fn new(low: u16, high: u16) -> Result<Self, ConfigError> {
        if high < low {
            return Err(ConfigError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn to_iter(&self) -> RangeInclusive<u16> {
        self.low..=self.high
    }

    /// Number of ports covered, always at least one.
    pub fn size(&self) -> usize {
        usize::from(self.high - self.low) + 1
    }
}

impl FromStr for PortRange {
    type Err = ConfigError;

    /// Parses `LOW-HIGH`. Surrounding whitespace around either bound is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedRange(s.to_string());
        let (low_str, high_str) = s.trim().split_once('-').ok_or_else(malformed)?;
        if low_str.trim().is_empty() || high_str.trim().is_empty() {
            return Err(malformed());
        }

        let low = parse_port(low_str)?;
        let high = parse_port(high_str)?;

        Self::new(low, high)
    }
}

/// Parses a single port number.
///
/// Port `0` is rejected along with anything that does not fit in a `u16`.
pub fn parse_port(s: &str) -> Result<u16, ConfigError> {
    let trimmed = s.trim();
    match trimmed.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(trimmed.to_string())),
        Ok(port) => Ok(port),
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
