//! Wire shapes shared by manifests, the installed database, and lifecycle events.
//!
//! Everything except `name` is optional and loosely typed; conversion to the domain model
//! drops what it cannot interpret instead of failing.

use licenseguard_domain::Package;
use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawPackage {
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,

    /// A single identifier or a list of identifiers.
    #[serde(default)]
    pub license: Value,

    /// Object of requirement name -> constraint.
    #[serde(default)]
    pub require: Value,

    #[serde(default, rename = "require-dev")]
    pub require_dev: Value,

    #[serde(default)]
    pub source: Option<RawSource>,

    #[serde(default)]
    pub extra: Value,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    pub reference: Option<String>,
}

impl RawPackage {
    pub fn into_package(self, default_version: &str) -> Package {
        let version = full_pretty_version(
            self.version.as_deref().unwrap_or(default_version),
            self.source.as_ref().and_then(|s| s.reference.as_deref()),
        );

        Package::new(self.name, version)
            .with_licenses(licenses(&self.license))
            .with_requires(requirement_names(&self.require))
            .with_dev_requires(requirement_names(&self.require_dev))
    }
}

pub(crate) fn licenses(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn requirement_names(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

/// Dev versions built from a VCS checkout get the short commit appended, e.g.
/// `dev-main 1a2b3c4`.
pub(crate) fn full_pretty_version(version: &str, reference: Option<&str>) -> String {
    let is_dev = version.starts_with("dev-") || version.ends_with("-dev");
    match reference {
        Some(r) if is_dev && r.len() == 40 && r.bytes().all(|b| b.is_ascii_hexdigit()) => {
            format!("{version} {}", &r[..7])
        }
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn license_accepts_string_or_list() {
        assert_eq!(licenses(&json!("MIT")), vec!["MIT".to_string()]);
        assert_eq!(
            licenses(&json!(["MIT", 3, "", "Apache-2.0"])),
            vec!["MIT".to_string(), "Apache-2.0".to_string()]
        );
        assert!(licenses(&json!(null)).is_empty());
        assert!(licenses(&json!("")).is_empty());
    }

    #[test]
    fn requirement_names_come_from_object_keys() {
        let names = requirement_names(&json!({ "php": ">=8.0", "psr/log": "^1.1" }));
        assert_eq!(names, vec!["php".to_string(), "psr/log".to_string()]);
        assert!(requirement_names(&json!([])).is_empty());
    }

    #[test]
    fn dev_versions_get_short_reference() {
        let sha = "1a2b3c4d5e6f7a8b9c0d1a2b3c4d5e6f7a8b9c0d";
        assert_eq!(full_pretty_version("dev-main", Some(sha)), "dev-main 1a2b3c4");
        assert_eq!(full_pretty_version("2.x-dev", Some(sha)), "2.x-dev 1a2b3c4");
        assert_eq!(full_pretty_version("1.1.0", Some(sha)), "1.1.0");
        assert_eq!(full_pretty_version("dev-main", Some("v1.0")), "dev-main");
        assert_eq!(full_pretty_version("dev-main", None), "dev-main");
    }
}
