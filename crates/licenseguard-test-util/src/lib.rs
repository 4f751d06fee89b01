//! Shared test utilities for the licenseguard workspace.
//!
//! `FixtureProject` writes a root manifest and an installed-package database into a
//! temporary directory using the default project layout, so adapters, use cases, and the
//! CLI can all be exercised against real files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub const MANIFEST_FILE: &str = "composer.json";
pub const INSTALLED_FILE: &str = "vendor/composer/installed.json";

/// Builder for an on-disk project.
#[derive(Clone, Debug)]
pub struct FixtureProject {
    name: String,
    version: String,
    licenses: Vec<String>,
    require: Vec<String>,
    require_dev: Vec<String>,
    policy: Option<Value>,
    installed: Vec<Value>,
}

impl Default for FixtureProject {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureProject {
    /// `acme/app` 1.0.0 under MIT, with no requirements and no policy.
    pub fn new() -> Self {
        Self {
            name: "acme/app".to_string(),
            version: "1.0.0".to_string(),
            licenses: vec!["MIT".to_string()],
            require: Vec::new(),
            require_dev: Vec::new(),
            policy: None,
            installed: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn licenses(mut self, licenses: &[&str]) -> Self {
        self.licenses = licenses.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn require(mut self, name: &str) -> Self {
        self.require.push(name.to_string());
        self
    }

    pub fn require_dev(mut self, name: &str) -> Self {
        self.require_dev.push(name.to_string());
        self
    }

    /// Policy block stored under the tool's key in `extra`.
    pub fn policy(mut self, block: Value) -> Self {
        self.policy = Some(block);
        self
    }

    /// Add an installed package record.
    pub fn installed(
        mut self,
        name: &str,
        version: &str,
        licenses: &[&str],
        requires: &[&str],
    ) -> Self {
        self.installed.push(json!({
            "name": name,
            "version": version,
            "license": licenses,
            "require": constraints(requires),
        }));
        self
    }

    pub fn manifest_json(&self) -> Value {
        let mut manifest = json!({
            "name": self.name,
            "version": self.version,
            "license": self.licenses,
            "require": constraints(&self.require),
            "require-dev": constraints(&self.require_dev),
        });
        if let Some(policy) = &self.policy {
            manifest["extra"] = json!({ "licenseguard/licenseguard": policy });
        }
        manifest
    }

    pub fn installed_json(&self) -> Value {
        json!({
            "packages": self.installed,
            "dev": true,
            "dev-package-names": [],
        })
    }

    /// Write the project into a fresh temporary directory.
    ///
    /// Panics on IO failure; this is test-only code.
    pub fn write(&self) -> WrittenProject {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
        let project = WrittenProject { _dir: dir, root };
        project.write_file(MANIFEST_FILE, &pretty(&self.manifest_json()));
        project.write_file(INSTALLED_FILE, &pretty(&self.installed_json()));
        project
    }
}

/// A project on disk. The directory is removed on drop.
#[derive(Debug)]
pub struct WrittenProject {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl WrittenProject {
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn installed_path(&self) -> Utf8PathBuf {
        self.root.join(INSTALLED_FILE)
    }

    /// Write `contents` at `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

fn constraints(names: &[impl AsRef<str>]) -> Value {
    let map: Map<String, Value> = names
        .iter()
        .map(|n| (n.as_ref().to_string(), Value::String("*".to_string())))
        .collect();
    Value::Object(map)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("serialize fixture")
}
