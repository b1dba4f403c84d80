//! Application error types using thiserror
//!
//! Error hierarchy:
//! - MetadataError: Issues reading installed package metadata (recovered by the reporter)
//! - RenderError: Issues filling the document template
//! - WriteError: Failures persisting the generated document

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Template rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Output file errors
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Errors related to reading package metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Failed to read a metadata file or search root
    #[error("failed to read package metadata at {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata present but unusable
    #[error("invalid package metadata in {path}: {message}")]
    InvalidMetadata { path: PathBuf, message: String },
}

/// Errors related to template rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// A placeholder had no value in the render context
    #[error("no value supplied for template placeholder '{placeholder}'")]
    MissingValue { placeholder: String },
}

/// Errors related to writing the generated document
#[derive(Error, Debug)]
pub enum WriteError {
    /// Parent directory does not exist
    #[error("directory not found for output file: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Permission denied
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic IO error
    #[error("failed to write {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MetadataError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetadataError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new InvalidMetadata error
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        MetadataError::InvalidMetadata {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RenderError {
    /// Creates a new MissingValue error
    pub fn missing_value(placeholder: impl Into<String>) -> Self {
        RenderError::MissingValue {
            placeholder: placeholder.into(),
        }
    }
}

impl WriteError {
    /// Classifies an IO failure on `path` by its error kind
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => WriteError::DirectoryNotFound { path },
            ErrorKind::PermissionDenied => WriteError::PermissionDenied { path },
            _ => WriteError::Generic { path, source },
        }
    }
}
