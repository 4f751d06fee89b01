use licenseguard_types::ids;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// License policy declared by the root package.
///
/// Built once per run from a loosely-typed config object. Construction never fails:
/// non-string and empty entries are dropped, duplicates collapse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    allow: BTreeSet<String>,
    deny: BTreeSet<String>,

    /// Package display name -> version constraint. Only the keys take part in matching.
    exceptions: BTreeMap<String, String>,
}

impl Policy {
    /// Build a policy from a config block shaped like
    /// `{"whitelist": [...], "blacklist": [...], "whitelisted-packages": {...}}`.
    ///
    /// `None` and non-object values yield the empty policy.
    pub fn from_config(config: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = config else {
            return Self::default();
        };

        Self {
            allow: string_set(map.get(ids::CONFIG_KEY_WHITELIST)),
            deny: string_set(map.get(ids::CONFIG_KEY_BLACKLIST)),
            exceptions: exception_map(map.get(ids::CONFIG_KEY_WHITELISTED_PACKAGES)),
        }
    }

    pub fn new<A, D, E>(allow: A, deny: D, exceptions: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator<Item = (String, String)>,
    {
        Self {
            allow: non_empty(allow),
            deny: non_empty(deny),
            exceptions: exceptions
                .into_iter()
                .filter(|(name, _)| !name.is_empty())
                .collect(),
        }
    }

    pub fn allow_list(&self) -> &BTreeSet<String> {
        &self.allow
    }

    pub fn deny_list(&self) -> &BTreeSet<String> {
        &self.deny
    }

    pub fn exceptions(&self) -> &BTreeMap<String, String> {
        &self.exceptions
    }

    pub fn is_excepted(&self, display_name: &str) -> bool {
        self.exceptions.contains_key(display_name)
    }

    /// No allow-list, deny-list, or exceptions.
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty() && self.exceptions.is_empty()
    }
}

fn non_empty<I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .filter(|s: &String| !s.is_empty())
        .collect()
}

// A bare string counts as a one-element list.
fn string_set(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::String(s)) => non_empty([s.clone()]),
        Some(Value::Array(items)) => non_empty(items.iter().filter_map(Value::as_str)),
        _ => BTreeSet::new(),
    }
}

fn exception_map(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(map)) = value else {
        return BTreeMap::new();
    };

    map.iter()
        .filter(|(name, _)| !name.is_empty())
        .filter_map(|(name, constraint)| {
            constraint
                .as_str()
                .map(|c| (name.clone(), c.to_string()))
        })
        .collect()
}
