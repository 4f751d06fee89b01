use crate::model::{Package, RootPackage};
use crate::policy::Policy;

pub fn package(name: &str, licenses: &[&str]) -> Package {
    Package::new(name, "1.0.0").with_licenses(licenses.iter().copied())
}

pub fn package_requiring(name: &str, requires: &[&str], dev_requires: &[&str]) -> Package {
    package(name, &["MIT"])
        .with_requires(requires.iter().copied())
        .with_dev_requires(dev_requires.iter().copied())
}

pub fn root(requires: &[&str], dev_requires: &[&str]) -> RootPackage {
    RootPackage::new(
        Package::new("acme/app", "1.0.0")
            .with_licenses(["MIT"])
            .with_requires(requires.iter().copied())
            .with_dev_requires(dev_requires.iter().copied()),
    )
}

pub fn policy(allow: &[&str], deny: &[&str], exceptions: &[&str]) -> Policy {
    Policy::new(
        allow.iter().copied(),
        deny.iter().copied(),
        exceptions
            .iter()
            .map(|name| (name.to_string(), "*".to_string())),
    )
}
