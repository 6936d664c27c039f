//! Diagnostics reported for methods that could not be processed.
//!
//! A failed method yields exactly one [`Diagnostic`]: a stable
//! [`DiagnosticCode`], a human-readable reason, and the declaration site when
//! one is known. Diagnostics never abort the rest of a batch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::SourceLocation;

/// Stable error codes for method-level failures.
///
/// # Example
///
/// ```
/// use propshim_model::DiagnosticCode;
///
/// let code = DiagnosticCode::UnresolvedOriginalType;
/// assert_eq!(code.to_string(), "E_PROPSHIM_UNRESOLVED_ORIGINAL_TYPE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// No project identifier was configured.
    MissingProjectContext,
    /// The marked method is not a parameterless `get*` method.
    InvalidAccessorShape,
    /// A required attribute was absent and had no declared default.
    MissingAttribute,
    /// The declared wrapper is not in the resolver table.
    UnresolvedOriginalType,
    /// An override named an accessor kind outside the known set.
    UnsupportedAccessorKind,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProjectContext => f.write_str("E_PROPSHIM_MISSING_PROJECT_CONTEXT"),
            Self::InvalidAccessorShape => f.write_str("E_PROPSHIM_INVALID_ACCESSOR_SHAPE"),
            Self::MissingAttribute => f.write_str("E_PROPSHIM_MISSING_ATTRIBUTE"),
            Self::UnresolvedOriginalType => f.write_str("E_PROPSHIM_UNRESOLVED_ORIGINAL_TYPE"),
            Self::UnsupportedAccessorKind => {
                f.write_str("E_PROPSHIM_UNSUPPORTED_ACCESSOR_KIND")
            }
        }
    }
}

/// A single method-level failure.
///
/// # Example
///
/// ```
/// use propshim_model::{Diagnostic, DiagnosticCode};
///
/// let diagnostic = Diagnostic::new(
///     DiagnosticCode::MissingAttribute,
///     String::from("Missing 'fluentSetter' attribute"),
///     None,
/// );
/// assert_eq!(
///     diagnostic.to_string(),
///     "E_PROPSHIM_MISSING_ATTRIBUTE: Missing 'fluentSetter' attribute"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Diagnostic {
    code: DiagnosticCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub const fn new(
        code: DiagnosticCode,
        message: String,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            code,
            message,
            location,
        }
    }

    /// Returns the stable code.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the declaration site, if known.
    #[must_use]
    pub const fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }
}
