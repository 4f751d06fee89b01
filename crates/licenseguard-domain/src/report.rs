use crate::evaluate::evaluate;
use crate::model::{Package, RootPackage};
use crate::policy::Policy;
use licenseguard_types::{Dependencies, DependencyEntry, LicenseReport, ids};
use std::collections::BTreeMap;

/// Evaluate every package and aggregate the decisions into a report.
///
/// Entries are keyed by display name but ordered by unique name; a later package with the
/// same unique name replaces an earlier one. The policy itself is not retained.
pub fn build_report<'a, I>(root: &RootPackage, policy: &Policy, packages: I) -> LicenseReport
where
    I: IntoIterator<Item = &'a Package>,
{
    let by_name: BTreeMap<&str, &Package> = packages
        .into_iter()
        .map(|pkg| (pkg.name.as_str(), pkg))
        .collect();

    let mut dependencies = Dependencies::new();

    for pkg in by_name.into_values() {
        let decision = evaluate(policy, pkg);
        dependencies.insert(
            pkg.pretty_name.clone(),
            DependencyEntry {
                version: pkg.version.clone(),
                license: pkg.licenses.clone(),
                allowed_to_use: decision.allowed,
                whitelisted: decision.exception_applied,
            },
        );
    }

    let report = LicenseReport {
        name: display_root_name(&root.package),
        version: root.package.version.clone(),
        license: root.package.licenses.clone(),
        dependencies,
    };

    tracing::debug!(
        dependencies = report.dependencies.len(),
        unresolved = report.has_unresolved_violation(),
        "built license report"
    );

    report
}

fn display_root_name(root: &Package) -> String {
    if root.pretty_name.is_empty() {
        ids::DEFAULT_ROOT_NAME.to_string()
    } else {
        root.pretty_name.clone()
    }
}
