//! Method declarations as handed over by the annotation-resolution step.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::directive::UpgradeDirective;
use crate::jvm_type::JvmType;
use crate::location::SourceLocation;
use crate::type_ref::TypeRef;

/// A single declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParameter {
    name: String,
    #[serde(rename = "type")]
    parameter_type: TypeRef,
}

impl MethodParameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the declared parameter type.
    #[must_use]
    pub const fn parameter_type(&self) -> &TypeRef {
        &self.parameter_type
    }
}

/// A resolved method signature together with its declaring type and
/// location.
///
/// # Example
///
/// ```
/// use propshim_model::{JvmType, MethodDeclaration};
///
/// let method = MethodDeclaration::new(
///     JvmType::object("org.example.Task"),
///     "getName",
///     "org.gradle.api.provider.Property<java.lang.String>".parse().expect("type"),
/// );
/// assert_eq!(method.qualified_signature(), "org.example.Task.getName()");
/// assert_eq!(method.descriptor(), "()Lorg/gradle/api/provider/Property;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    owner: JvmType,
    name: String,
    #[serde(default)]
    parameters: Vec<MethodParameter>,
    return_type: TypeRef,
    #[serde(default)]
    location: SourceLocation,
}

impl MethodDeclaration {
    /// Creates a parameterless declaration at an unknown location.
    #[must_use]
    pub fn new(owner: JvmType, name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            owner,
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            location: SourceLocation::default(),
        }
    }

    /// Replaces the parameter list.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<MethodParameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the declaration site.
    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Returns the declaring type.
    #[must_use]
    pub const fn owner(&self) -> &JvmType {
        &self.owner
    }

    /// Returns the simple method name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// Returns the declared return type.
    #[must_use]
    pub const fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    /// Returns the declaration site.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Renders `name(ParamType, ...)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut out = format!("{}(", self.name);
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}", parameter.parameter_type);
        }
        out.push(')');
        out
    }

    /// Renders `owner.name(ParamType, ...)`.
    #[must_use]
    pub fn qualified_signature(&self) -> String {
        format!("{}.{}", self.owner, self.signature())
    }

    /// Renders the erased JVM descriptor of this method.
    #[must_use]
    pub fn descriptor(&self) -> String {
        let parameters: Vec<JvmType> = self
            .parameters
            .iter()
            .map(|parameter| parameter.parameter_type.erasure().clone())
            .collect();
        JvmType::method_descriptor(self.return_type.erasure(), &parameters)
    }
}

/// A method paired with its upgrade marker, if it carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedMethod {
    method: MethodDeclaration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upgraded_property: Option<UpgradeDirective>,
}

impl AnnotatedMethod {
    /// Pairs a declaration with its resolved upgrade directive.
    #[must_use]
    pub const fn new(method: MethodDeclaration, directive: UpgradeDirective) -> Self {
        Self {
            method,
            upgraded_property: Some(directive),
        }
    }

    /// Wraps a declaration that carries no upgrade marker.
    #[must_use]
    pub const fn unmarked(method: MethodDeclaration) -> Self {
        Self {
            method,
            upgraded_property: None,
        }
    }

    /// Returns the method declaration.
    #[must_use]
    pub const fn method(&self) -> &MethodDeclaration {
        &self.method
    }

    /// Returns the upgrade directive, if the method is marked.
    #[must_use]
    pub const fn directive(&self) -> Option<&UpgradeDirective> {
        self.upgraded_property.as_ref()
    }
}
