use crate::raw::RawPackage;
use camino::{Utf8Path, Utf8PathBuf};
use licenseguard_domain::{Package, PackageRepository, RepositoryError};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum InstalledDatabase {
    /// `{"packages": [...], "dev": true, "dev-package-names": [...]}`
    Wrapped { packages: Vec<RawPackage> },
    /// Older layout: a bare list of packages.
    Bare(Vec<RawPackage>),
}

/// Parse the installed-package database. Package order is preserved.
pub fn parse_installed(text: &str) -> Result<Vec<Package>, RepositoryError> {
    let db: InstalledDatabase =
        serde_json::from_str(text).map_err(|e| RepositoryError::Malformed(e.to_string()))?;

    let raw = match db {
        InstalledDatabase::Wrapped { packages } => packages,
        InstalledDatabase::Bare(packages) => packages,
    };

    Ok(raw
        .into_iter()
        .map(|p| p.into_package(""))
        .collect())
}

/// The installed-package database on disk.
///
/// The file is read each time `packages` is called; the collector calls it once.
#[derive(Clone, Debug)]
pub struct InstalledRepository {
    path: Utf8PathBuf,
}

impl InstalledRepository {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PackageRepository for InstalledRepository {
    fn packages(&self) -> Result<Vec<Package>, RepositoryError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| RepositoryError::Unavailable(format!("read {}: {e}", self.path)))?;
        let packages = parse_installed(&text)?;
        tracing::debug!(path = %self.path, packages = packages.len(), "read installed packages");
        Ok(packages)
    }
}
