use portania_common::network::result::ProbeResult;

/// Receives every probe outcome the moment a worker produces it.
///
/// Called concurrently from all workers, so implementations must serialize
/// their own output if line integrity matters.
pub trait Reporter: Send + Sync {
    fn report(&self, result: &ProbeResult);
}
