use crate::model::LicenseCheckConfigV1;
use licenseguard_domain::Policy;
use serde_json::Value;

/// Where the effective policy came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicySource {
    /// A standalone config file passed by the caller.
    File,
    /// The root manifest's `extra` block.
    Manifest,
    /// Neither source present: everything is allowed.
    Default,
}

#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub policy: Policy,
    pub source: PolicySource,
}

impl ResolvedPolicy {
    /// Normalized view of the policy, suitable for logging or echoing back to the user.
    pub fn effective_config(&self) -> LicenseCheckConfigV1 {
        LicenseCheckConfigV1::from(&self.policy)
    }
}

/// Resolve the effective policy.
///
/// A config file replaces the manifest block entirely; the two are never merged.
pub fn resolve_policy(manifest_block: Option<&Value>, file: Option<&Value>) -> ResolvedPolicy {
    let (config, source) = match (file, manifest_block) {
        (Some(file), _) => (Some(file), PolicySource::File),
        (None, Some(block)) => (Some(block), PolicySource::Manifest),
        (None, None) => (None, PolicySource::Default),
    };

    ResolvedPolicy {
        policy: Policy::from_config(config),
        source,
    }
}
