use licenseguard_domain::Policy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy block schema v1.
///
/// Lives under `extra."licenseguard/licenseguard"` in the root manifest, or at the top level
/// of a standalone `licenseguard.toml`. This typed view documents the accepted keys; the
/// policy itself is built leniently from the raw value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct LicenseCheckConfigV1 {
    /// License identifiers that may be used. Empty means "no allow-list".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist: Vec<String>,

    /// License identifiers that must not be used. Checked before the whitelist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,

    /// Package name -> version constraint. Listed packages with a disallowed license only
    /// produce a warning. The constraint is informational.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub whitelisted_packages: BTreeMap<String, String>,
}

impl From<&Policy> for LicenseCheckConfigV1 {
    fn from(policy: &Policy) -> Self {
        Self {
            whitelist: policy.allow_list().iter().cloned().collect(),
            blacklist: policy.deny_list().iter().cloned().collect(),
            whitelisted_packages: policy.exceptions().clone(),
        }
    }
}
