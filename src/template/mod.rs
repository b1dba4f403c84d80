//! Document templates
//!
//! A template is an ordered list of static text segments interleaved with
//! named placeholders. Rendering substitutes each placeholder from a
//! `RenderContext`; a placeholder without a value is an error.

mod readme;

pub use readme::readme_template;

use crate::error::RenderError;
use std::collections::HashMap;
use std::fmt;

/// Named dynamic section of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Rendered dependency version report
    DependencyVersions,
}

impl Placeholder {
    /// Stable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::DependencyVersions => "dependency_versions",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single template segment
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Static text emitted verbatim
    Text(&'static str),
    /// Dynamic value looked up at render time
    Slot(Placeholder),
}

/// Values substituted into placeholders
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: HashMap<Placeholder, String>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value (builder pattern)
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.insert(placeholder, value);
        self
    }

    /// Set a placeholder value
    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    /// Get a placeholder value
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

/// Ordered sequence of text and placeholder segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Create an empty template
    pub fn new() -> Self {
        Self::default()
    }

    /// Append static text (builder pattern)
    pub fn text(mut self, text: &'static str) -> Self {
        self.segments.push(Segment::Text(text));
        self
    }

    /// Append a placeholder (builder pattern)
    pub fn slot(mut self, placeholder: Placeholder) -> Self {
        self.segments.push(Segment::Slot(placeholder));
        self
    }

    /// Render the template, substituting every placeholder from `context`
    pub fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Slot(placeholder) => {
                    let value = context
                        .get(*placeholder)
                        .ok_or_else(|| RenderError::missing_value(placeholder.name()))?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}
