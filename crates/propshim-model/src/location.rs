//! Source locations attached to requests and diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an annotated method was declared.
///
/// Lines and columns are one-indexed; zero means the position is unknown.
///
/// # Example
///
/// ```
/// use propshim_model::SourceLocation;
///
/// let location = SourceLocation::new(Some(String::from("Task.java")), 12, 5);
/// assert_eq!(location.to_string(), "Task.java:12:5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
}

impl SourceLocation {
    /// Creates a new source location.
    #[must_use]
    pub const fn new(file: Option<String>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Returns the source file, if known.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Returns the one-indexed line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the one-indexed column.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().unwrap_or("<unknown>");
        write!(f, "{file}:{}:{}", self.line, self.column)
    }
}
