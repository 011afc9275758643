use crate::network::target::Target;

/// Outcome of a single connection attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    target: Target,
    reachable: bool,
    cause: Option<String>,
}

impl ProbeResult {
    pub fn open(target: Target) -> Self {
        Self {
            target,
            reachable: true,
            cause: None,
        }
    }

    pub fn closed(target: Target, cause: impl Into<String>) -> Self {
        Self {
            target,
            reachable: false,
            cause: Some(cause.into()),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    /// Transport error text, only present for unreachable targets.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}
