//! Core domain models for docgen
//!
//! This module contains the types shared by the reporter and the renderer:
//! - Dependency entries resolved from the package metadata registry
//! - The fixed list of documented dependencies

mod dependency;

pub use dependency::{DependencyEntry, DOCUMENTED_DEPENDENCIES, NOT_INSTALLED};
