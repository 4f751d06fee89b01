//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses configuration provided as strings or
//! already-decoded values and resolves the effective policy.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::LicenseCheckConfigV1;
pub use resolve::{PolicySource, ResolvedPolicy, resolve_policy};

use anyhow::Context;

/// Parse a standalone `licenseguard.toml` into the loosely-typed config value.
///
/// Only TOML syntax errors fail; unknown keys and wrongly typed entries are left for
/// policy construction to drop.
pub fn parse_config_toml(input: &str) -> anyhow::Result<serde_json::Value> {
    let table: toml::Table = toml::from_str(input).context("parse config toml")?;
    serde_json::to_value(table).context("convert config toml")
}
