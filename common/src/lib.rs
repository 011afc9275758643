//! # Portania Common
//!
//! Shared data model for the portania workspace: scan targets, port sets,
//! probe results, the immutable scan configuration and the configuration
//! error taxonomy.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

pub use config::ScanConfig;
pub use error::ConfigError;
