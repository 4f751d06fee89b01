//! Stable DTOs and IDs used across the licenseguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted license report
//! - stable string IDs (tool identity, config keys, output formats)

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;

pub use report::{Dependencies, DependencyEntry, LicenseReport};
