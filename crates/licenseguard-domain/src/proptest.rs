//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - policy precedence (deny before allow, exceptions only annotate)
//! - dependency collection (distinct names, closure on cyclic graphs)
//! - report determinism

use crate::collect::{CollectMode, collect_packages};
use crate::evaluate::evaluate;
use crate::model::{InMemoryRepository, Package, RootPackage};
use crate::policy::Policy;
use crate::report::build_report;
use licenseguard_types::ids;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// A small license vocabulary so that intersections actually happen.
fn arb_license() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MIT".to_string()),
        Just("Apache-2.0".to_string()),
        Just("BSD-3-Clause".to_string()),
        Just("GPL-3.0-only".to_string()),
        Just("LGPL-2.1-or-later".to_string()),
        Just("proprietary".to_string()),
    ]
}

fn arb_licenses() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_license(), 0..4)
}

fn arb_license_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(arb_license(), 0..4)
}

/// Package names drawn from a small pool so duplicates and edges collide.
fn arb_package_name() -> impl Strategy<Value = String> {
    (0u8..12).prop_map(|i| format!("vendor/pkg-{i}"))
}

fn arb_package() -> impl Strategy<Value = Package> {
    (
        arb_package_name(),
        arb_licenses(),
        prop::collection::vec(arb_package_name(), 0..4),
        prop::collection::vec(arb_package_name(), 0..3),
    )
        .prop_map(|(name, licenses, requires, dev_requires)| {
            Package::new(name, "1.0.0")
                .with_licenses(licenses)
                .with_requires(requires)
                .with_dev_requires(dev_requires)
        })
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        arb_license_set(),
        arb_license_set(),
        prop::collection::btree_set(arb_package_name(), 0..4),
    )
        .prop_map(|(allow, deny, exceptions)| {
            Policy::new(
                allow,
                deny,
                exceptions.into_iter().map(|name| (name, "*".to_string())),
            )
        })
}

fn arb_root() -> impl Strategy<Value = RootPackage> {
    (
        prop::collection::vec(arb_package_name(), 0..4),
        prop::collection::vec(arb_package_name(), 0..4),
    )
        .prop_map(|(requires, dev_requires)| {
            RootPackage::new(
                Package::new("acme/app", "1.0.0")
                    .with_requires(requires)
                    .with_dev_requires(dev_requires),
            )
        })
}

fn reference_allowed(policy: &Policy, licenses: &[String]) -> bool {
    let hits = |list: &BTreeSet<String>| licenses.iter().any(|l| list.contains(l));
    if !policy.deny_list().is_empty() && hits(policy.deny_list()) {
        return false;
    }
    policy.allow_list().is_empty() || hits(policy.allow_list())
}

// ============================================================================
// Evaluator properties
// ============================================================================

proptest! {
    #[test]
    fn empty_policy_allows_everything(pkg in arb_package()) {
        let d = evaluate(&Policy::default(), &pkg);
        prop_assert!(d.allowed);
        prop_assert!(!d.exception_applied);
    }

    #[test]
    fn tool_package_is_always_allowed(policy in arb_policy(), licenses in arb_licenses()) {
        let pkg = Package::new(ids::TOOL_PACKAGE_NAME, "dev-main").with_licenses(licenses);
        prop_assert!(evaluate(&policy, &pkg).allowed);
    }

    #[test]
    fn deny_list_match_always_disallows(
        policy in arb_policy(),
        pkg in arb_package(),
    ) {
        let denied = pkg.licenses.iter().any(|l| policy.deny_list().contains(l));
        prop_assume!(denied);
        prop_assert!(!evaluate(&policy, &pkg).allowed);
    }

    #[test]
    fn allow_list_alone_requires_intersection(
        allow in arb_license_set(),
        pkg in arb_package(),
    ) {
        prop_assume!(!allow.is_empty());
        let policy = Policy::new(allow.clone(), Vec::<String>::new(), Vec::new());
        let expected = pkg.licenses.iter().any(|l| allow.contains(l));
        prop_assert_eq!(evaluate(&policy, &pkg).allowed, expected);
    }

    #[test]
    fn matches_reference_model(policy in arb_policy(), pkg in arb_package()) {
        let d = evaluate(&policy, &pkg);
        prop_assert_eq!(d.allowed, reference_allowed(&policy, &pkg.licenses));
        prop_assert_eq!(
            d.exception_applied,
            !d.allowed && policy.exceptions().contains_key(&pkg.pretty_name)
        );
    }

    #[test]
    fn exceptions_never_change_allowed(policy in arb_policy(), pkg in arb_package()) {
        let without = Policy::new(
            policy.allow_list().iter().cloned(),
            policy.deny_list().iter().cloned(),
            Vec::new(),
        );
        prop_assert_eq!(evaluate(&policy, &pkg).allowed, evaluate(&without, &pkg).allowed);
    }
}

// ============================================================================
// Collector properties
// ============================================================================

proptest! {
    #[test]
    fn full_mode_size_is_distinct_name_count(
        packages in prop::collection::vec(arb_package(), 0..20),
        root in arb_root(),
    ) {
        let distinct: BTreeSet<String> = packages.iter().map(|p| p.name.clone()).collect();
        let repo = InMemoryRepository::new(packages);
        let out = collect_packages(&repo, &root, CollectMode::Full).expect("collect");
        prop_assert_eq!(out.len(), distinct.len());
    }

    #[test]
    fn runtime_mode_is_the_runtime_closure(
        packages in prop::collection::vec(arb_package(), 0..20),
        root in arb_root(),
    ) {
        let repo = InMemoryRepository::new(packages);
        let full = collect_packages(&repo, &root, CollectMode::Full).expect("collect full");
        let runtime = collect_packages(&repo, &root, CollectMode::RuntimeOnly).expect("collect runtime");

        // Subset of the full set.
        for name in runtime.keys() {
            prop_assert!(full.contains_key(name));
        }

        // Closed under runtime requirements that are installed.
        for pkg in runtime.values() {
            for req in &pkg.requires {
                if full.contains_key(req) {
                    prop_assert!(runtime.contains_key(req), "{} requires {}", pkg.name, req);
                }
            }
        }

        // Every member is reachable: either a root requirement or required by a member.
        for name in runtime.keys() {
            let from_root = root.package.requires.contains(name);
            let from_member = runtime.values().any(|p| p.requires.contains(name));
            prop_assert!(from_root || from_member, "{} is not reachable", name);
        }
    }
}

// ============================================================================
// Report properties
// ============================================================================

proptest! {
    #[test]
    fn report_serialization_is_deterministic(
        policy in arb_policy(),
        packages in prop::collection::vec(arb_package(), 0..12),
        root in arb_root(),
    ) {
        let repo = InMemoryRepository::new(packages);
        let collected = collect_packages(&repo, &root, CollectMode::Full).expect("collect");

        let first = serde_json::to_string(&build_report(&root, &policy, collected.values()))
            .expect("serialize");
        let second = serde_json::to_string(&build_report(&root, &policy, collected.values()))
            .expect("serialize");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn report_entries_follow_collected_order(
        policy in arb_policy(),
        packages in prop::collection::vec(arb_package(), 0..12),
        root in arb_root(),
    ) {
        let repo = InMemoryRepository::new(packages);
        let collected = collect_packages(&repo, &root, CollectMode::Full).expect("collect");
        let report = build_report(&root, &policy, collected.values());

        let expected: Vec<&str> = collected.values().map(|p| p.pretty_name.as_str()).collect();
        prop_assert_eq!(report.dependencies.keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn unresolved_violation_matches_blocking_decisions(
        policy in arb_policy(),
        packages in prop::collection::vec(arb_package(), 0..12),
        root in arb_root(),
    ) {
        let repo = InMemoryRepository::new(packages);
        let collected = collect_packages(&repo, &root, CollectMode::Full).expect("collect");
        let report = build_report(&root, &policy, collected.values());

        let expected = collected.values().any(|p| evaluate(&policy, p).is_blocking());
        prop_assert_eq!(report.has_unresolved_violation(), expected);
    }
}
