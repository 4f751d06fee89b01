use crate::raw::RawPackage;
use anyhow::Context;
use camino::Utf8Path;
use licenseguard_domain::RootPackage;
use licenseguard_types::ids;
use serde_json::Value;

pub fn parse_root_manifest(text: &str) -> anyhow::Result<RootPackage> {
    let mut value: Value = serde_json::from_str(text).context("parse root manifest")?;
    let Some(fields) = value.as_object_mut() else {
        anyhow::bail!("root manifest must be a JSON object");
    };
    // Unlike installed packages, a root manifest may omit its name.
    fields
        .entry("name")
        .or_insert_with(|| Value::String(String::new()));

    let pkg: RawPackage = serde_json::from_value(value).context("interpret root manifest")?;

    let extra = match &pkg.extra {
        Value::Object(_) => pkg.extra.clone(),
        _ => Value::Null,
    };

    Ok(RootPackage::new(pkg.into_package(ids::DEFAULT_ROOT_VERSION)).with_extra(extra))
}

pub fn load_root_manifest(path: &Utf8Path) -> anyhow::Result<RootPackage> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_root_manifest(&text).with_context(|| format!("parse {path}"))
}
