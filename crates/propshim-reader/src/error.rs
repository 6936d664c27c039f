//! Failures raised while turning one annotated method into requests.
//!
//! Every variant is method-local and final: the reader converts it into a
//! single [`Diagnostic`] and moves on to the next method.

use propshim_model::{Diagnostic, DiagnosticCode, SourceLocation};
use thiserror::Error;

/// Errors arising while reading a marked method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadFailure {
    /// No project identifier was configured for the compilation unit.
    #[error(
        "Project name is not specified or is empty. Use --project-name=<projectName> or PROPSHIM_PROJECT_NAME to set the project name."
    )]
    MissingProjectContext,

    /// The marked method has parameters or does not start with `get`.
    #[error(
        "Method '{method}' annotated with @UpgradedProperty should be a simple getter: name should start with 'get' and method should not have any parameters."
    )]
    InvalidAccessorShape {
        /// Qualified signature of the offending method.
        method: String,
    },

    /// A required attribute was neither written nor declared with a default.
    #[error("Missing '{attribute}' attribute{}", annotation_suffix(.annotation))]
    MissingAttribute {
        /// Attribute name as spelled on the annotation.
        attribute: &'static str,
        /// Annotation the attribute belongs to, when worth naming.
        annotation: Option<&'static str>,
    },

    /// The declared wrapper is not in the resolver table and no explicit
    /// original type was given.
    #[error(
        "Cannot extract original type for method '{method}: {declared}'. Use explicit @UpgradedProperty#originalType instead."
    )]
    UnresolvedOriginalType {
        /// Qualified signature of the method.
        method: String,
        /// The declared return type.
        declared: String,
    },

    /// An override named an accessor kind outside the known set.
    #[error("Unsupported accessor type: {kind}")]
    UnsupportedAccessorKind {
        /// The constant name that was written.
        kind: String,
    },
}

fn annotation_suffix(annotation: &Option<&'static str>) -> String {
    annotation.map_or_else(String::new, |name| format!(" in @{name}"))
}

impl ReadFailure {
    /// Returns the stable diagnostic code for this failure.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            Self::MissingProjectContext => DiagnosticCode::MissingProjectContext,
            Self::InvalidAccessorShape { .. } => DiagnosticCode::InvalidAccessorShape,
            Self::MissingAttribute { .. } => DiagnosticCode::MissingAttribute,
            Self::UnresolvedOriginalType { .. } => DiagnosticCode::UnresolvedOriginalType,
            Self::UnsupportedAccessorKind { .. } => DiagnosticCode::UnsupportedAccessorKind,
        }
    }

    /// Converts the failure into a diagnostic anchored at `location`.
    #[must_use]
    pub fn into_diagnostic(self, location: &SourceLocation) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string(), Some(location.clone()))
    }
}
