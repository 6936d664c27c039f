//! The reader: validation, accessor construction and request building for marked
//! methods, one at a time or as a batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use propshim_model::{
    AnnotatedMethod, AttributeDefaults, Diagnostic, InterceptionRequest, MethodDeclaration,
    UpgradeDirective,
};

use crate::accessor::build_accessor_specs;
use crate::context::ProjectContext;
use crate::error::ReadFailure;
use crate::requests::RequestBuilder;

const READER_TARGET: &str = "propshim_reader::reader";

/// Result of reading one marked method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Every request produced for the method.
    Requests(Vec<InterceptionRequest>),
    /// The single reason the method was rejected.
    Diagnostic(Diagnostic),
}

/// A marked method's qualified signature paired with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodOutcome {
    method: String,
    #[serde(flatten)]
    status: OutcomeStatus,
}

impl MethodOutcome {
    /// Pairs a method signature with its result.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        result: Result<Vec<InterceptionRequest>, Diagnostic>,
    ) -> Self {
        let status = match result {
            Ok(requests) => OutcomeStatus::Requests(requests),
            Err(diagnostic) => OutcomeStatus::Diagnostic(diagnostic),
        };
        Self {
            method: method.into(),
            status,
        }
    }

    /// Returns the qualified signature of the method.
    #[must_use]
    pub const fn method(&self) -> &str {
        self.method.as_str()
    }

    /// Returns the result.
    #[must_use]
    pub const fn status(&self) -> &OutcomeStatus {
        &self.status
    }

    /// Returns the requests, if the method succeeded.
    #[must_use]
    pub fn requests(&self) -> Option<&[InterceptionRequest]> {
        match &self.status {
            OutcomeStatus::Requests(requests) => Some(requests),
            OutcomeStatus::Diagnostic(_) => None,
        }
    }

    /// Returns the diagnostic, if the method failed.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.status {
            OutcomeStatus::Diagnostic(diagnostic) => Some(diagnostic),
            OutcomeStatus::Requests(_) => None,
        }
    }

    /// Returns `true` when the method failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Diagnostic(_))
    }
}

/// Turns marked accessor methods into interception requests.
///
/// The reader holds only read-only configuration, so one instance may serve
/// any number of methods, from any number of threads.
///
/// # Example
///
/// ```
/// use propshim_model::{AnnotatedMethod, JvmType, MethodDeclaration, UpgradeDirective};
/// use propshim_reader::{ProjectContext, PropertyUpgradeReader};
///
/// let reader = PropertyUpgradeReader::new(ProjectContext::new("core"));
/// let method = MethodDeclaration::new(
///     JvmType::object("org.example.Task"),
///     "getName",
///     "org.gradle.api.provider.Property<java.lang.String>".parse().expect("type"),
/// );
/// let annotated = AnnotatedMethod::new(method, UpgradeDirective::new());
/// let requests = reader
///     .read(&annotated)
///     .expect("method is marked")
///     .expect("method is valid");
/// assert_eq!(requests.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyUpgradeReader {
    context: Option<ProjectContext>,
    defaults: AttributeDefaults,
}

impl PropertyUpgradeReader {
    /// Creates a reader using the standard declared attribute defaults.
    #[must_use]
    pub const fn new(context: Option<ProjectContext>) -> Self {
        Self {
            context,
            defaults: AttributeDefaults::declared(),
        }
    }

    /// Replaces the declared attribute defaults.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: AttributeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the project context, if one was configured.
    #[must_use]
    pub const fn context(&self) -> Option<&ProjectContext> {
        self.context.as_ref()
    }

    /// Reads one method.
    ///
    /// Returns `None` for methods without the upgrade marker; they are not
    /// processed at all.
    #[must_use]
    pub fn read(
        &self,
        annotated: &AnnotatedMethod,
    ) -> Option<Result<Vec<InterceptionRequest>, Diagnostic>> {
        annotated
            .directive()
            .map(|directive| self.read_method(annotated.method(), directive))
    }

    /// Reads a method known to carry the upgrade marker.
    ///
    /// # Errors
    ///
    /// Returns exactly one [`Diagnostic`] when the method cannot be
    /// processed; no requests are returned alongside it.
    pub fn read_method(
        &self,
        method: &MethodDeclaration,
        directive: &UpgradeDirective,
    ) -> Result<Vec<InterceptionRequest>, Diagnostic> {
        match self.try_read(method, directive) {
            Ok(requests) => {
                debug!(
                    target: READER_TARGET,
                    method = %method.qualified_signature(),
                    requests = requests.len(),
                    "read upgraded property"
                );
                Ok(requests)
            }
            Err(failure) => {
                let diagnostic = failure.into_diagnostic(method.location());
                warn!(
                    target: READER_TARGET,
                    method = %method.qualified_signature(),
                    code = %diagnostic.code(),
                    location = %method.location(),
                    reason = diagnostic.message(),
                    "rejected upgraded property"
                );
                Err(diagnostic)
            }
        }
    }

    /// Reads every marked method in input order, skipping unmarked ones.
    ///
    /// A failing method never affects the others.
    #[must_use]
    pub fn read_all<'m, I>(&self, methods: I) -> Vec<MethodOutcome>
    where
        I: IntoIterator<Item = &'m AnnotatedMethod>,
    {
        let outcomes: Vec<MethodOutcome> = methods
            .into_iter()
            .filter_map(|annotated| {
                self.read(annotated).map(|result| {
                    MethodOutcome::new(annotated.method().qualified_signature(), result)
                })
            })
            .collect();
        let failed = outcomes.iter().filter(|outcome| outcome.is_failure()).count();
        info!(
            target: READER_TARGET,
            project = self.context.as_ref().map(ProjectContext::project_name),
            methods = outcomes.len(),
            failed,
            "read batch of upgraded properties"
        );
        outcomes
    }

    fn try_read(
        &self,
        method: &MethodDeclaration,
        directive: &UpgradeDirective,
    ) -> Result<Vec<InterceptionRequest>, ReadFailure> {
        let context = self
            .context
            .as_ref()
            .ok_or(ReadFailure::MissingProjectContext)?;
        if !method.parameters().is_empty() || !method.name().starts_with("get") {
            return Err(ReadFailure::InvalidAccessorShape {
                method: method.qualified_signature(),
            });
        }
        let specs = build_accessor_specs(method, directive, &self.defaults)?;
        let builder = RequestBuilder::new(context, method);
        Ok(specs
            .iter()
            .flat_map(|spec| builder.requests_for(spec))
            .collect())
    }
}
