//! Installed distribution lookup in site-packages directories
//!
//! Handles metadata layouts:
//! - `name-1.2.3.dist-info/METADATA`
//! - `name-1.2.3-py3.12.egg-info/PKG-INFO`
//! - `name-1.2.3-py3.12.egg-info` (single file)

use crate::error::MetadataError;
use crate::registry::{discover_search_paths, VersionProvider};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// Runs of separators collapsed by name normalization
static NAME_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_.]+").unwrap());

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Normalize a distribution name for comparison (`Foo_Bar.baz` -> `foo-bar-baz`)
pub fn normalize_name(name: &str) -> String {
    NAME_SEPARATOR_RE.replace_all(name, "-").to_lowercase()
}

/// Metadata layout of a distribution entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataLayout {
    DistInfo,
    EggInfo,
}

/// A `*.dist-info` / `*.egg-info` entry found in a search root
#[derive(Debug, Clone, PartialEq, Eq)]
struct DistributionEntry {
    path: PathBuf,
    layout: MetadataLayout,
}

impl DistributionEntry {
    /// Split an entry file name into normalized name and entry, if it is a
    /// distribution metadata entry
    fn parse(path: PathBuf, file_name: &str) -> Option<(String, Self)> {
        let (stem, layout) = if let Some(stem) = file_name.strip_suffix(DIST_INFO_SUFFIX) {
            (stem, MetadataLayout::DistInfo)
        } else if let Some(stem) = file_name.strip_suffix(EGG_INFO_SUFFIX) {
            (stem, MetadataLayout::EggInfo)
        } else {
            return None;
        };

        let name = stem.split('-').next().unwrap_or(stem);
        if name.is_empty() {
            return None;
        }

        Some((normalize_name(name), Self { path, layout }))
    }

    /// Path of the metadata file holding the `Version` header
    fn metadata_path(&self) -> PathBuf {
        match self.layout {
            MetadataLayout::DistInfo => self.path.join("METADATA"),
            MetadataLayout::EggInfo if self.path.is_dir() => self.path.join("PKG-INFO"),
            MetadataLayout::EggInfo => self.path.clone(),
        }
    }

    /// Read the installed version from the metadata `Version` header.
    ///
    /// A missing metadata file or header yields `None`; the entry name is
    /// never used as a version.
    fn read_version(&self) -> Result<Option<String>, MetadataError> {
        let metadata_path = self.metadata_path();
        let bytes = match fs::read(&metadata_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(MetadataError::read_error(metadata_path, e)),
        };
        let content = String::from_utf8(bytes)
            .map_err(|_| MetadataError::invalid(&metadata_path, "metadata is not valid UTF-8"))?;

        Ok(parse_metadata_version(&content))
    }
}

/// Extract the `Version` header from core metadata.
///
/// Headers end at the first blank line; everything after is the description.
fn parse_metadata_version(content: &str) -> Option<String> {
    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case("version") {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Version provider backed by installed distribution metadata
#[derive(Debug, Clone, Default)]
pub struct SitePackagesRegistry {
    /// Search roots in precedence order
    roots: Vec<PathBuf>,
}

impl SitePackagesRegistry {
    /// Create a registry over explicit search roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Create a registry over the local interpreter's import path
    pub fn discover() -> Self {
        Self::new(discover_search_paths())
    }

    /// Get the search roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the distribution entry for a normalized name within a single root.
    ///
    /// Roots and entries that cannot be listed are skipped.
    fn find_in_root(root: &Path, wanted: &str) -> Option<DistributionEntry> {
        // sys.path may hold zip archives and stale entries
        if !root.is_dir() {
            return None;
        }

        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "skipping unreadable search root");
                return None;
            }
        };

        let mut candidates: Vec<DistributionEntry> = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(root = %root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some((name, dist)) = DistributionEntry::parse(entry.path(), file_name) {
                if name == wanted {
                    candidates.push(dist);
                }
            }
        }

        // Directory listing order is platform dependent
        candidates.into_iter().min_by(|a, b| a.path.cmp(&b.path))
    }
}

impl VersionProvider for SitePackagesRegistry {
    fn registry_name(&self) -> &'static str {
        "site-packages"
    }

    /// The first distribution found decides the result, even when its
    /// metadata carries no version.
    fn resolve(&self, name: &str) -> Result<Option<String>, MetadataError> {
        let wanted = normalize_name(name);
        for root in &self.roots {
            if let Some(dist) = Self::find_in_root(root, &wanted) {
                let version = dist.read_version()?;
                debug!(path = %dist.path.display(), version = ?version, "found distribution");
                return Ok(version);
            }
        }
        Ok(None)
    }
}
