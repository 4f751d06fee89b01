//! Dependency collection: which installed packages take part in a license check.

use crate::model::{Package, PackageRepository, RepositoryError, RootPackage};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectMode {
    /// Every installed package.
    #[default]
    Full,
    /// Transitive closure of the root's runtime requirements; dev requirements are never
    /// followed.
    RuntimeOnly,
}

impl CollectMode {
    pub fn from_no_dev(no_dev: bool) -> Self {
        if no_dev {
            CollectMode::RuntimeOnly
        } else {
            CollectMode::Full
        }
    }
}

/// Collect packages keyed by unique name, sorted by key.
///
/// Within the repository, a later package with the same name replaces an earlier one.
pub fn collect_packages(
    repo: &dyn PackageRepository,
    root: &RootPackage,
    mode: CollectMode,
) -> Result<BTreeMap<String, Package>, RepositoryError> {
    let installed = index_by_name(repo.packages()?);

    let collected = match mode {
        CollectMode::Full => installed,
        CollectMode::RuntimeOnly => runtime_closure(&installed, &root.package.requires),
    };

    tracing::debug!(
        mode = ?mode,
        packages = collected.len(),
        "collected packages"
    );

    Ok(collected)
}

fn index_by_name(packages: Vec<Package>) -> BTreeMap<String, Package> {
    let mut out = BTreeMap::new();
    for pkg in packages {
        out.insert(pkg.name.clone(), pkg);
    }
    out
}

/// Breadth-first walk over runtime requirement edges.
///
/// Names not present in `installed` (platform requirements, missing packages) are skipped.
/// The visited set guarantees termination on cyclic requirement graphs.
fn runtime_closure(
    installed: &BTreeMap<String, Package>,
    root_requires: &[String],
) -> BTreeMap<String, Package> {
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut queue: VecDeque<&str> = root_requires.iter().map(String::as_str).collect();
    let mut out = BTreeMap::new();

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name) {
            continue;
        }
        let Some(pkg) = installed.get(name) else {
            continue;
        };

        queue.extend(
            pkg.requires
                .iter()
                .map(String::as_str)
                .filter(|r| !visited.contains(r)),
        );
        out.insert(pkg.name.clone(), pkg.clone());
    }

    out
}
