//! The `check-licenses` use case: collect packages, evaluate policy, render the report.

use crate::format::ReportFormat;
use crate::policy::load_policy;
use anyhow::Context;
use camino::Utf8Path;
use licenseguard_domain::CollectMode;
use licenseguard_repo::InstalledRepository;
use licenseguard_settings::PolicySource;
use licenseguard_types::LicenseReport;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Root manifest path.
    pub manifest_path: &'a Utf8Path,
    /// Installed-package database path.
    pub installed_path: &'a Utf8Path,
    /// Standalone config contents, if a config file was given.
    pub config_text: Option<&'a str>,
    pub format: ReportFormat,
    pub mode: CollectMode,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: LicenseReport,
    /// The report rendered in the requested format.
    pub rendered: String,
    /// Violation flag under the requested format's rule.
    pub violation: bool,
    pub policy_source: PolicySource,
}

impl CheckOutput {
    pub fn exit_code(&self) -> i32 {
        crate::violation_exit_code(self.violation)
    }
}

pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let loaded = load_policy(input.manifest_path, input.config_text)?;

    let repo = InstalledRepository::new(input.installed_path.to_owned());
    let packages = licenseguard_domain::collect_packages(&repo, &loaded.root, input.mode)
        .context("collect packages")?;

    let report =
        licenseguard_domain::build_report(&loaded.root, &loaded.resolved.policy, packages.values());

    let rendered = match input.format {
        ReportFormat::Text => licenseguard_render::render_text(&report),
        ReportFormat::Json => licenseguard_render::render_json(&report).context("render json")?,
    };
    let violation = input.format.is_violation(&report);

    tracing::info!(
        format = %input.format,
        mode = ?input.mode,
        dependencies = report.dependencies.len(),
        violation,
        "license check finished"
    );

    Ok(CheckOutput {
        report,
        rendered,
        violation,
        policy_source: loaded.resolved.source,
    })
}
