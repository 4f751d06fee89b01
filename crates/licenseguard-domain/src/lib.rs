//! Pure license policy evaluation (no IO).
//!
//! Input: a policy, a root package, and a package repository supplied elsewhere.
//! Output: per-package decisions, a license report, and install-gate outcomes.

#![forbid(unsafe_code)]

pub mod collect;
pub mod gate;
pub mod model;
pub mod policy;
pub mod report;

mod evaluate;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use collect::{CollectMode, collect_packages};
pub use evaluate::{Decision, evaluate};
pub use gate::{GateOutcome, InstallGate, LicenseNotAllowed, PackageEvent};
pub use model::{InMemoryRepository, Package, PackageRepository, RepositoryError, RootPackage};
pub use policy::Policy;
pub use report::build_report;
