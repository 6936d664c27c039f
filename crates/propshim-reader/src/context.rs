//! Per-build project context.
//!
//! The project identifier is resolved once, before any method is read, and
//! then threaded explicitly into the reader.

use std::fmt;

use propshim_model::InterceptionChannel;

/// Namespace of every generated class.
pub const GENERATED_NAMESPACE: &str = "org.gradle.internal.classpath.generated";

const DYNAMIC_REGISTRATION_BASE: &str = "InterceptorDeclaration_PropertyUpgradesGroovyInterceptors";
const DIRECT_REGISTRATION_BASE: &str = "InterceptorDeclaration_PropertyUpgradesJvmBytecode";

/// A validated project identifier and its class-name suffix.
///
/// # Example
///
/// ```
/// use propshim_model::InterceptionChannel;
/// use propshim_reader::ProjectContext;
///
/// let context = ProjectContext::new("core-runtime").expect("non-empty identifier");
/// assert_eq!(context.class_suffix(), "CoreRuntime");
/// assert!(context
///     .registration_class(InterceptionChannel::DirectCalls)
///     .ends_with("PropertyUpgradesJvmBytecode_CoreRuntime"));
/// assert!(ProjectContext::new("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    project_name: String,
    class_suffix: String,
}

impl ProjectContext {
    /// Validates a project identifier.
    ///
    /// Returns `None` when the identifier is empty. An identifier made only
    /// of separators is accepted and yields an empty class-name suffix.
    #[must_use]
    pub fn new(project_name: &str) -> Option<Self> {
        if project_name.is_empty() {
            return None;
        }
        Some(Self {
            project_name: project_name.to_owned(),
            class_suffix: pascal_case(project_name),
        })
    }

    /// Validates an optional identifier.
    #[must_use]
    pub fn from_option(project_name: Option<&str>) -> Option<Self> {
        project_name.and_then(Self::new)
    }

    /// Returns the identifier as configured.
    #[must_use]
    pub const fn project_name(&self) -> &str {
        self.project_name.as_str()
    }

    /// Returns the `PascalCase` suffix appended to registration classes.
    #[must_use]
    pub const fn class_suffix(&self) -> &str {
        self.class_suffix.as_str()
    }

    /// Fully qualified registration class for `channel`.
    #[must_use]
    pub fn registration_class(&self, channel: InterceptionChannel) -> String {
        let base = match channel {
            InterceptionChannel::DynamicCalls => DYNAMIC_REGISTRATION_BASE,
            InterceptionChannel::DirectCalls => DIRECT_REGISTRATION_BASE,
        };
        format!("{GENERATED_NAMESPACE}.{base}_{}", self.class_suffix)
    }
}

impl fmt::Display for ProjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.project_name)
    }
}

fn pascal_case(project_name: &str) -> String {
    project_name
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(crate::naming::capitalize)
        .collect()
}
