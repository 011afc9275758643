//! # Portania Core
//!
//! The scanning engine. A single producer enumerates every `(host, port)`
//! pair onto a bounded work queue, a fixed-size worker pool drains it through
//! a [`scanner::Prober`], and each result is handed to a [`report::Reporter`]
//! as soon as it exists.

pub mod network;
pub mod report;
pub mod scanner;

pub use report::Reporter;
pub use scanner::{Prober, ScanSummary, run_scan};
