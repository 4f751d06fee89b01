//! Fuzz target for policy construction and the license report.
//!
//! Goal: building a policy from any config value and reporting on any package set should
//! **never panic**, and the report must hold one row per distinct display name.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use licenseguard_domain::{Package, Policy, RootPackage, build_report};
use std::collections::BTreeSet;

#[derive(Arbitrary, Debug)]
struct EvalInput {
    /// Raw policy block; usually not valid JSON, which yields the empty policy.
    config: String,
    packages: Vec<(String, Vec<String>)>,
}

fuzz_target!(|input: EvalInput| {
    if input.packages.len() > 64 {
        return;
    }

    let config = serde_json::from_str::<serde_json::Value>(&input.config).ok();
    let policy = Policy::from_config(config.as_ref());

    let packages: Vec<Package> = input
        .packages
        .into_iter()
        .map(|(name, licenses)| Package::new(name, "1.0.0").with_licenses(licenses))
        .collect();
    let distinct: BTreeSet<&str> = packages.iter().map(|p| p.name.as_str()).collect();

    let root = RootPackage::new(Package::new("acme/app", "1.0.0"));
    let report = build_report(&root, &policy, &packages);
    assert_eq!(report.dependencies.len(), distinct.len());
});
