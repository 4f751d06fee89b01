use crate::model::Package;
use crate::policy::Policy;
use std::collections::BTreeSet;

/// Outcome of evaluating one package against one policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,

    /// The license lists reject the package but it is listed as an exception. Only set
    /// together with `allowed` for the tool's own package.
    pub exception_applied: bool,
}

impl Decision {
    const ALLOWED: Decision = Decision {
        allowed: true,
        exception_applied: false,
    };

    /// Disallowed with no exception to fall back on.
    pub fn is_blocking(&self) -> bool {
        !self.allowed && !self.exception_applied
    }
}

/// Decide whether `package` may be used under `policy`.
///
/// The deny-list is consulted first and wins; a non-empty allow-list then narrows the
/// result. Exceptions only annotate a result the lists reject. The tool's own package is
/// then forced to allowed, keeping any exception annotation.
pub fn evaluate(policy: &Policy, package: &Package) -> Decision {
    let mut allowed = true;

    if !policy.deny_list().is_empty() {
        allowed = !intersects(&package.licenses, policy.deny_list());
    }
    if allowed && !policy.allow_list().is_empty() {
        allowed = intersects(&package.licenses, policy.allow_list());
    }

    let exception_applied = !allowed && policy.is_excepted(&package.pretty_name);

    if package.is_tool_package() {
        allowed = true;
    }

    Decision {
        allowed,
        exception_applied,
    }
}

fn intersects(licenses: &[String], list: &BTreeSet<String>) -> bool {
    licenses.iter().any(|l| list.contains(l))
}
