//! Install-time gate: one decision per package lifecycle event.
//!
//! The gate holds the policy loaded when the tool is activated and is passed to each
//! event handler explicitly. Every event runs IDLE -> EVALUATING -> {PASSED, WARNED,
//! BLOCKED}; nothing carries over between events.

use crate::evaluate::evaluate;
use crate::model::Package;
use crate::policy::Policy;

/// A package lifecycle event reported by the host package manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackageEvent {
    Install(Package),
    Update {
        initial: Option<Package>,
        target: Package,
    },
    Uninstall(Package),
    /// Any other operation kind; never gated.
    Other(String),
}

impl PackageEvent {
    /// The package a gated operation would put in place, if this event is gated at all.
    pub fn incoming_package(&self) -> Option<&Package> {
        match self {
            PackageEvent::Install(pkg) => Some(pkg),
            PackageEvent::Update { target, .. } => Some(target),
            PackageEvent::Uninstall(_) | PackageEvent::Other(_) => None,
        }
    }
}

/// Non-fatal result of handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Not an install/update, or the tool's own package.
    Skipped,
    Passed,
    /// Disallowed but excepted; the operation proceeds.
    Warned { message: String },
}

/// Fatal result: the triggering operation must be aborted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "ERROR: Licenses \"{licenses}\" of package \"{package}\" are not allowed to be used in the project. Installation failed."
)]
pub struct LicenseNotAllowed {
    pub package: String,
    /// Comma-joined license list.
    pub licenses: String,
}

#[derive(Clone, Debug, Default)]
pub struct InstallGate {
    policy: Policy,
}

impl InstallGate {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn handle(&self, event: &PackageEvent) -> Result<GateOutcome, LicenseNotAllowed> {
        let Some(pkg) = event.incoming_package() else {
            tracing::debug!(event = ?event, "skipping non install/update event");
            return Ok(GateOutcome::Skipped);
        };
        if pkg.is_tool_package() {
            return Ok(GateOutcome::Skipped);
        }

        let decision = evaluate(&self.policy, pkg);
        let licenses = pkg.licenses.join(", ");

        if decision.allowed {
            tracing::debug!(package = %pkg.pretty_name, "license check passed");
            Ok(GateOutcome::Passed)
        } else if decision.exception_applied {
            Ok(GateOutcome::Warned {
                message: format!(
                    "WARNING: Licenses \"{licenses}\" of package \"{}\" are not allowed to be used in the project but the package has been whitelisted.",
                    pkg.pretty_name
                ),
            })
        } else {
            Err(LicenseNotAllowed {
                package: pkg.pretty_name.clone(),
                licenses,
            })
        }
    }
}
