use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Per-dependency row of a license report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyEntry {
    pub version: String,
    /// Declared licenses in declaration order (may be empty).
    pub license: Vec<String>,
    pub allowed_to_use: bool,
    /// The package failed the license lists but is listed under `whitelisted-packages`.
    /// May be set alongside `allowed_to_use` for the tool's own package.
    pub whitelisted: bool,
}

impl DependencyEntry {
    /// Disallowed and not covered by an exception.
    pub fn is_unresolved_violation(&self) -> bool {
        !self.allowed_to_use && !self.whitelisted
    }
}

/// Dependency rows keyed by display name, in insertion order.
///
/// The report builder inserts in package-name order, which need not match the byte order
/// of the display names. Serializes as a JSON object; deserialization keeps document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dependencies {
    entries: Vec<(String, DependencyEntry)>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its position.
    pub fn insert(&mut self, name: String, entry: DependencyEntry) -> Option<DependencyEntry> {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push((name, entry));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DependencyEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, DependencyEntry)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a (String, DependencyEntry);
    type IntoIter = std::slice::Iter<'a, (String, DependencyEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, DependencyEntry)> for Dependencies {
    fn from_iter<T: IntoIterator<Item = (String, DependencyEntry)>>(iter: T) -> Self {
        let mut deps = Dependencies::new();
        for (name, entry) in iter {
            deps.insert(name, entry);
        }
        deps
    }
}

impl Serialize for Dependencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, entry)| (n, entry)))
    }
}

impl<'de> Deserialize<'de> for Dependencies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DependenciesVisitor;

        impl<'de> Visitor<'de> for DependenciesVisitor {
            type Value = Dependencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of package name to dependency entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Dependencies, A::Error> {
                let mut deps = Dependencies::new();
                while let Some((name, entry)) = map.next_entry::<String, DependencyEntry>()? {
                    deps.insert(name, entry);
                }
                Ok(deps)
            }
        }

        deserializer.deserialize_map(DependenciesVisitor)
    }
}

/// License report for a root package and its collected dependencies.
///
/// Field names are part of the JSON contract. `dependencies` is keyed by display name and
/// iterates in package-name order, so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LicenseReport {
    pub name: String,
    pub version: String,
    pub license: Vec<String>,
    #[schemars(with = "BTreeMap<String, DependencyEntry>")]
    pub dependencies: Dependencies,
}

impl LicenseReport {
    /// True if any dependency is disallowed without an exception.
    ///
    /// This is the flag used by the text summary and by the install gate.
    pub fn has_unresolved_violation(&self) -> bool {
        self.dependencies
            .values()
            .any(DependencyEntry::is_unresolved_violation)
    }

    /// True if any dependency is disallowed, exceptions included.
    ///
    /// The structured (JSON) output path reports on this flag.
    pub fn has_disallowed(&self) -> bool {
        self.dependencies.values().any(|d| !d.allowed_to_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(allowed_to_use: bool, whitelisted: bool) -> DependencyEntry {
        DependencyEntry {
            version: "1.0.0".to_string(),
            license: vec!["MIT".to_string()],
            allowed_to_use,
            whitelisted,
        }
    }

    #[test]
    fn excepted_entry_is_not_an_unresolved_violation() {
        let mut report = LicenseReport::default();
        report
            .dependencies
            .insert("vendor/a".to_string(), entry(false, true));

        assert!(!report.has_unresolved_violation());
        assert!(report.has_disallowed());
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let mut report = LicenseReport {
            name: "acme/app".to_string(),
            version: "1.0.0".to_string(),
            license: vec!["MIT".to_string()],
            dependencies: Dependencies::new(),
        };
        report
            .dependencies
            .insert("vendor/a".to_string(), entry(true, false));

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["name"], "acme/app");
        assert_eq!(value["license"][0], "MIT");
        assert_eq!(value["dependencies"]["vendor/a"]["allowed_to_use"], true);
        assert_eq!(value["dependencies"]["vendor/a"]["whitelisted"], false);
    }

    #[test]
    fn replaced_entry_keeps_its_position() {
        let mut deps = Dependencies::new();
        deps.insert("vendor/b".to_string(), entry(true, false));
        deps.insert("vendor/a".to_string(), entry(true, false));
        let previous = deps.insert("vendor/b".to_string(), entry(false, false));

        assert_eq!(previous, Some(entry(true, false)));
        assert_eq!(deps.keys().collect::<Vec<_>>(), vec!["vendor/b", "vendor/a"]);
        assert_eq!(deps.get("vendor/b"), Some(&entry(false, false)));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn dependencies_serialize_in_insertion_order() {
        let deps: Dependencies = [
            ("alpha/a".to_string(), entry(true, false)),
            ("Zeta/Z".to_string(), entry(true, false)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&deps).expect("serialize");
        let alpha = json.find("alpha/a").expect("alpha present");
        let zeta = json.find("Zeta/Z").expect("zeta present");
        assert!(alpha < zeta, "{json}");

        let back: Dependencies = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["alpha/a", "Zeta/Z"]);
        assert_eq!(back, deps);
    }
}
