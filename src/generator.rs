//! README generation workflow
//!
//! This module provides:
//! - Workflow coordination: resolve versions → render template → write file
//! - Generator configuration built from CLI arguments
//! - Full-overwrite document writing with classified IO errors

use crate::domain::{DependencyEntry, DOCUMENTED_DEPENDENCIES};
use crate::error::{AppError, WriteError};
use crate::registry::{SitePackagesRegistry, VersionProvider};
use crate::report::{render_report, VersionReporter};
use crate::template::{readme_template, Placeholder, RenderContext, Template};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output file path
    pub output: PathBuf,
    /// Explicit metadata search roots; `None` asks the local interpreter
    pub site_packages: Option<Vec<PathBuf>>,
}

impl GeneratorConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(output: PathBuf, site_packages: Vec<PathBuf>) -> Self {
        Self {
            output,
            site_packages: if site_packages.is_empty() {
                None
            } else {
                Some(site_packages)
            },
        }
    }

    /// Build the metadata registry this configuration points at
    pub fn registry(&self) -> SitePackagesRegistry {
        match &self.site_packages {
            Some(roots) => SitePackagesRegistry::new(roots.clone()),
            None => SitePackagesRegistry::discover(),
        }
    }
}

/// Rendered document before it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Full document text
    pub content: String,
    /// Entries embedded in the version report
    pub dependencies: Vec<DependencyEntry>,
}

/// Result of a successful generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    /// Path the document was written to
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes_written: usize,
    /// Entries embedded in the version report
    pub dependencies: Vec<DependencyEntry>,
}

/// Generates the README from a template and a version provider
pub struct ReadmeGenerator<P> {
    reporter: VersionReporter<P>,
    template: Template,
    output: PathBuf,
}

impl<P: VersionProvider> ReadmeGenerator<P> {
    /// Create a generator for the README template
    pub fn new(provider: P, output: impl Into<PathBuf>) -> Self {
        Self::with_template(provider, readme_template(), output)
    }

    /// Create a generator over a custom template
    pub fn with_template(provider: P, template: Template, output: impl Into<PathBuf>) -> Self {
        Self {
            reporter: VersionReporter::new(provider),
            template,
            output: output.into(),
        }
    }

    /// Resolve dependency versions and render the document text
    pub fn render(&self) -> Result<RenderedDocument, AppError> {
        let dependencies = self.reporter.collect(&DOCUMENTED_DEPENDENCIES);
        let context =
            RenderContext::new().with(Placeholder::DependencyVersions, render_report(&dependencies));
        let content = self.template.render(&context)?;

        Ok(RenderedDocument {
            content,
            dependencies,
        })
    }

    /// Render the document and write it to the output path, replacing any
    /// existing file
    pub fn generate(&self) -> Result<GenerateResult, AppError> {
        let document = self.render()?;
        write_document(&self.output, &document.content)?;

        Ok(GenerateResult {
            path: self.output.clone(),
            bytes_written: document.content.len(),
            dependencies: document.dependencies,
        })
    }
}

/// Write the document as UTF-8, truncating any existing content
pub fn write_document(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|e| WriteError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
