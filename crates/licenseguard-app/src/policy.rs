use anyhow::Context;
use camino::Utf8Path;
use licenseguard_domain::RootPackage;
use licenseguard_settings::ResolvedPolicy;

/// Root package plus the policy resolved for it.
#[derive(Clone, Debug)]
pub struct LoadedPolicy {
    pub root: RootPackage,
    pub resolved: ResolvedPolicy,
}

/// Load the root manifest and resolve the effective policy.
///
/// `config_text` is the content of a standalone TOML config; when present it replaces
/// the manifest's policy block.
pub fn load_policy(
    manifest_path: &Utf8Path,
    config_text: Option<&str>,
) -> anyhow::Result<LoadedPolicy> {
    let root =
        licenseguard_repo::load_root_manifest(manifest_path).context("load root manifest")?;

    let file_config = config_text
        .map(licenseguard_settings::parse_config_toml)
        .transpose()
        .context("parse config")?;

    let resolved =
        licenseguard_settings::resolve_policy(root.policy_config(), file_config.as_ref());
    let effective = resolved.effective_config();
    tracing::info!(
        source = ?resolved.source,
        whitelist = effective.whitelist.len(),
        blacklist = effective.blacklist.len(),
        whitelisted_packages = effective.whitelisted_packages.len(),
        "resolved license policy"
    );

    Ok(LoadedPolicy { root, resolved })
}
