use licenseguard_types::ids;
use serde_json::Value;

/// A resolved dependency as recorded by the package manager.
///
/// `name` is the lower-cased unique identifier; `pretty_name` keeps the declared casing and
/// is what reports and exception lookups use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub pretty_name: String,
    pub version: String,
    pub licenses: Vec<String>,

    /// Runtime requirement names (lower-cased).
    pub requires: Vec<String>,

    /// Development-only requirement names (lower-cased). Never followed by the collector.
    pub dev_requires: Vec<String>,
}

impl Package {
    pub fn new(pretty_name: impl Into<String>, version: impl Into<String>) -> Self {
        let pretty_name = pretty_name.into();
        Self {
            name: normalize_name(&pretty_name),
            pretty_name,
            version: version.into(),
            licenses: Vec::new(),
            requires: Vec::new(),
            dev_requires: Vec::new(),
        }
    }

    pub fn with_licenses<I, S>(mut self, licenses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.licenses = licenses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.requires = requires.into_iter().map(|r| normalize_name(r.as_ref())).collect();
        self
    }

    pub fn with_dev_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dev_requires = requires.into_iter().map(|r| normalize_name(r.as_ref())).collect();
        self
    }

    /// Whether this is the license checker's own package.
    pub fn is_tool_package(&self) -> bool {
        self.name == ids::TOOL_PACKAGE_NAME
    }
}

/// The project being audited.
#[derive(Clone, Debug, PartialEq)]
pub struct RootPackage {
    pub package: Package,

    /// Raw `extra` object from the root manifest (`Value::Null` when absent).
    pub extra: Value,
}

impl RootPackage {
    pub fn new(package: Package) -> Self {
        Self {
            package,
            extra: Value::Null,
        }
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = extra;
        self
    }

    /// The policy block stored under the tool's package name, if any.
    pub fn policy_config(&self) -> Option<&Value> {
        self.extra.get(ids::TOOL_PACKAGE_NAME)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The installed-package database could not be read.
    #[error("package repository unavailable: {0}")]
    Unavailable(String),

    /// The database was readable but its contents are not a package list.
    #[error("package repository is malformed: {0}")]
    Malformed(String),
}

/// Source of the locally installed packages.
///
/// Implementations may read from disk; the domain only ever calls `packages` once per
/// collection.
pub trait PackageRepository {
    fn packages(&self) -> Result<Vec<Package>, RepositoryError>;
}

/// Repository backed by an in-memory package list.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    packages: Vec<Package>,
}

impl InMemoryRepository {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

impl PackageRepository for InMemoryRepository {
    fn packages(&self) -> Result<Vec<Package>, RepositoryError> {
        Ok(self.packages.clone())
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
