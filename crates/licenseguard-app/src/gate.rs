//! The install-gate use case: decide one lifecycle event against the project policy.

use crate::policy::load_policy;
use anyhow::Context;
use camino::Utf8Path;
use licenseguard_domain::{GateOutcome, InstallGate, LicenseNotAllowed};

#[derive(Clone, Debug)]
pub struct GateInput<'a> {
    pub manifest_path: &'a Utf8Path,
    pub config_text: Option<&'a str>,
    /// One serialized lifecycle event.
    pub event_text: &'a str,
}

#[derive(Clone, Debug)]
pub struct GateOutput {
    /// `Err` means the operation must be aborted.
    pub decision: Result<GateOutcome, LicenseNotAllowed>,
}

impl GateOutput {
    pub fn exit_code(&self) -> i32 {
        crate::violation_exit_code(self.decision.is_err())
    }
}

pub fn run_gate(input: GateInput<'_>) -> anyhow::Result<GateOutput> {
    let loaded = load_policy(input.manifest_path, input.config_text)?;
    let gate = InstallGate::new(loaded.resolved.policy);

    let event = licenseguard_repo::parse_package_event(input.event_text).context("read event")?;
    let decision = gate.handle(&event);

    match &decision {
        Ok(outcome) => tracing::info!(outcome = ?outcome, "install gate decided"),
        Err(blocked) => tracing::info!(package = %blocked.package, "install gate blocked"),
    }

    Ok(GateOutput { decision })
}

#[cfg(test)]
mod tests {
    use super::*;
    use licenseguard_test_util::FixtureProject;
    use serde_json::json;

    const INSTALL_SEBASTIAN: &str = r#"{
        "operation": "install",
        "package": {"name": "sebastian/version", "version": "2.0.1", "license": ["BSD-3-Clause"]}
    }"#;

    fn gate(policy: serde_json::Value, event: &str) -> GateOutput {
        let project = FixtureProject::new().policy(policy).write();
        let manifest = project.manifest_path();
        run_gate(GateInput {
            manifest_path: &manifest,
            config_text: None,
            event_text: event,
        })
        .expect("run_gate")
    }

    #[test]
    fn disallowed_install_is_blocked() {
        let out = gate(json!({ "whitelist": ["MIT"] }), INSTALL_SEBASTIAN);
        let err = out.decision.clone().expect_err("blocked");
        assert_eq!(
            err.to_string(),
            "ERROR: Licenses \"BSD-3-Clause\" of package \"sebastian/version\" are not allowed to be used in the project. Installation failed."
        );
        assert_eq!(out.exit_code(), 1);
    }

    #[test]
    fn excepted_install_warns_and_proceeds() {
        let out = gate(
            json!({
                "whitelist": ["MIT"],
                "whitelisted-packages": { "sebastian/version": "*" },
            }),
            INSTALL_SEBASTIAN,
        );
        let Ok(GateOutcome::Warned { message }) = &out.decision else {
            panic!("expected warning, got {:?}", out.decision);
        };
        assert!(message.starts_with("WARNING: Licenses \"BSD-3-Clause\" of package \"sebastian/version\""));
        assert_eq!(out.exit_code(), 0);
    }

    #[test]
    fn uninstall_is_skipped() {
        let out = gate(
            json!({ "whitelist": ["MIT"] }),
            r#"{"operation": "uninstall", "package": {"name": "sebastian/version", "license": "BSD-3-Clause"}}"#,
        );
        assert_eq!(out.decision, Ok(GateOutcome::Skipped));
    }

    #[test]
    fn malformed_event_is_an_error() {
        let project = FixtureProject::new().write();
        let manifest = project.manifest_path();
        let err = run_gate(GateInput {
            manifest_path: &manifest,
            config_text: None,
            event_text: "{",
        })
        .expect_err("should fail");
        assert!(format!("{err:#}").contains("read event"));
    }
}
