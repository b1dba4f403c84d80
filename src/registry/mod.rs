//! Package metadata registry access
//!
//! This module provides:
//! - The `VersionProvider` seam used by the version reporter
//! - A site-packages scanner reading installed distribution metadata
//! - Discovery of the local Python interpreter's import path

mod discover;
mod site_packages;

pub use discover::{discover_search_paths, parse_search_paths};
pub use site_packages::{normalize_name, SitePackagesRegistry};

use crate::error::MetadataError;

/// Trait for resolving installed package versions
pub trait VersionProvider {
    /// Get the registry name used in diagnostics
    fn registry_name(&self) -> &'static str;

    /// Resolve the installed version of a package.
    ///
    /// Returns `Ok(None)` when the package is not installed.
    fn resolve(&self, name: &str) -> Result<Option<String>, MetadataError>;
}

impl<P: VersionProvider + ?Sized> VersionProvider for &P {
    fn registry_name(&self) -> &'static str {
        (**self).registry_name()
    }

    fn resolve(&self, name: &str) -> Result<Option<String>, MetadataError> {
        (**self).resolve(name)
    }
}
