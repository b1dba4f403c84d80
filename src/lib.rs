//! docgen - README generator library
//!
//! This library renders the project README from a fixed template and a
//! report of installed dependency versions:
//! - Version lookup through installed package metadata (site-packages)
//! - Template rendering with named placeholders
//! - Full-overwrite document writing

pub mod cli;
pub mod domain;
pub mod error;
pub mod escape;
pub mod generator;
pub mod output;
pub mod registry;
pub mod report;
pub mod template;
