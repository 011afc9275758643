use thiserror::Error;

/// Fatal problems with user supplied scan settings.
///
/// Every variant aborts the scan before any connection is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unable to parse port {0}")]
    InvalidPort(String),

    #[error("invalid port range '{0}', expected the form LOW-HIGH")]
    MalformedRange(String),

    #[error("the upper port range must be larger than the lower end, {high} is less than {low}")]
    InvertedRange { low: u16, high: u16 },

    #[error("no ports found to parse")]
    NoPorts,

    #[error("no hosts were provided to scan")]
    NoHosts,
}
