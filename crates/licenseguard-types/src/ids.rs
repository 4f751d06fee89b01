//! Stable identifiers shared by every layer.

/// Package name of the license checker itself.
///
/// Packages with this name are always allowed, and the root manifest's `extra` block
/// under this key holds the policy.
pub const TOOL_PACKAGE_NAME: &str = "licenseguard/licenseguard";

// Config keys (inside the policy block)
pub const CONFIG_KEY_WHITELIST: &str = "whitelist";
pub const CONFIG_KEY_BLACKLIST: &str = "blacklist";
pub const CONFIG_KEY_WHITELISTED_PACKAGES: &str = "whitelisted-packages";

// Report formats
pub const FORMAT_TEXT: &str = "text";
pub const FORMAT_JSON: &str = "json";

/// Placeholder used when a list of licenses is empty.
pub const NO_LICENSE: &str = "none";

/// Version reported for a root manifest without an explicit version.
pub const DEFAULT_ROOT_VERSION: &str = "1.0.0+no-version-set";

/// Name reported for a root manifest without an explicit name.
pub const DEFAULT_ROOT_NAME: &str = "__root__";
