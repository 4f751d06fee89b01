use crate::raw::RawPackage;
use anyhow::Context;
use licenseguard_domain::PackageEvent;
use serde::Deserialize;

#[derive(Deserialize)]
struct RawEvent {
    operation: String,
    #[serde(default)]
    package: Option<RawPackage>,
    #[serde(default)]
    initial: Option<RawPackage>,
    #[serde(default)]
    target: Option<RawPackage>,
}

/// Parse one serialized lifecycle event.
///
/// `install` and `uninstall` carry `package`; `update` carries `target` and optionally
/// `initial`. Other operation kinds are accepted without a package.
pub fn parse_package_event(text: &str) -> anyhow::Result<PackageEvent> {
    let raw: RawEvent = serde_json::from_str(text).context("parse package event")?;

    let event = match raw.operation.as_str() {
        "install" => PackageEvent::Install(
            raw.package
                .context("install event requires \"package\"")?
                .into_package(""),
        ),
        "update" => PackageEvent::Update {
            initial: raw.initial.map(|p| p.into_package("")),
            target: raw
                .target
                .context("update event requires \"target\"")?
                .into_package(""),
        },
        "uninstall" => PackageEvent::Uninstall(
            raw.package
                .context("uninstall event requires \"package\"")?
                .into_package(""),
        ),
        other => PackageEvent::Other(other.to_string()),
    };

    Ok(event)
}
