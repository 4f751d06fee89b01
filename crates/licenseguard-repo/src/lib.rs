//! Repository adapters: read the root manifest, the installed-package database, and
//! serialized lifecycle events.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes.

#![forbid(unsafe_code)]

mod event;
mod installed;
mod manifest;
mod raw;

pub use event::parse_package_event;
pub use installed::{InstalledRepository, parse_installed};
pub use manifest::{load_root_manifest, parse_root_manifest};

use camino::{Utf8Path, Utf8PathBuf};

/// Root manifest file name, relative to the project root.
pub const DEFAULT_MANIFEST: &str = "composer.json";

/// Installed-package database, relative to the project root.
pub const DEFAULT_INSTALLED: &str = "vendor/composer/installed.json";

/// Locations of the files that describe one project.
#[derive(Clone, Debug)]
pub struct ProjectFiles {
    pub manifest: Utf8PathBuf,
    pub installed: Utf8PathBuf,
}

impl ProjectFiles {
    /// Default layout under `project_root`.
    pub fn in_root(project_root: &Utf8Path) -> Self {
        Self {
            manifest: project_root.join(DEFAULT_MANIFEST),
            installed: project_root.join(DEFAULT_INSTALLED),
        }
    }

    pub fn repository(&self) -> InstalledRepository {
        InstalledRepository::new(self.installed.clone())
    }
}

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a root manifest. **Never panics** on any input.
    pub fn parse_root_manifest(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_root_manifest(text)?;
        Ok(())
    }

    /// Parse arbitrary text as an installed database. **Never panics** on any input.
    pub fn parse_installed(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_installed(text)?;
        Ok(())
    }

    /// Parse arbitrary text as a lifecycle event. **Never panics** on any input.
    pub fn parse_package_event(text: &str) -> anyhow::Result<()> {
        let _ = super::parse_package_event(text)?;
        Ok(())
    }
}
