//! Resolved attributes of the upgrade marker and its accessor overrides.
//!
//! The annotation-resolution step hands over attribute values exactly as they
//! were written on the annotation instance: anything the author omitted is
//! `None`. Annotation-level declared defaults are carried separately in
//! [`AttributeDefaults`] so the reader can resolve an attribute from the
//! instance, then from the declared default, and only then fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::jvm_type::JvmType;

/// Binary name of the sentinel type used as the `originalType` default.
///
/// An `originalType` attribute equal to this type counts as absent.
pub const DEFAULT_MARKER_TYPE: &str =
    "org.gradle.internal.instrumentation.api.annotations.UpgradedProperty$DefaultValue";

/// Returns `true` when the type is the `originalType` sentinel.
#[must_use]
pub fn is_default_marker(candidate: &JvmType) -> bool {
    candidate.class_name() == Some(DEFAULT_MARKER_TYPE)
}

/// The accessor flavours an override entry may name.
///
/// # Example
///
/// ```
/// use propshim_model::AccessorKind;
///
/// assert_eq!(AccessorKind::from_constant("SETTER"), Some(AccessorKind::Setter));
/// assert_eq!(AccessorKind::Getter.constant_name(), "GETTER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessorKind {
    /// A value-returning accessor.
    Getter,
    /// A value-accepting accessor.
    Setter,
}

impl AccessorKind {
    /// Returns the enum constant name used in annotation attributes.
    #[must_use]
    pub const fn constant_name(self) -> &'static str {
        match self {
            Self::Getter => "GETTER",
            Self::Setter => "SETTER",
        }
    }

    /// Resolves an enum constant name, returning `None` for unknown names.
    #[must_use]
    pub fn from_constant(name: &str) -> Option<Self> {
        match name {
            "GETTER" => Some(Self::Getter),
            "SETTER" => Some(Self::Setter),
            _ => None,
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}

/// One explicitly declared original accessor.
///
/// Each entry stands alone: nothing is inherited from sibling entries or
/// from the enclosing directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_type: Option<JvmType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fluent_setter: Option<bool>,
}

impl AccessorOverride {
    /// Creates an entry naming the accessor kind and original method.
    #[must_use]
    pub fn new(kind: AccessorKind, method_name: impl Into<String>) -> Self {
        Self {
            value: Some(kind.constant_name().to_owned()),
            method_name: Some(method_name.into()),
            original_type: None,
            fluent_setter: None,
        }
    }

    /// Sets the raw accessor-kind constant.
    #[must_use]
    pub fn with_value(mut self, constant: impl Into<String>) -> Self {
        self.value = Some(constant.into());
        self
    }

    /// Sets the original method name.
    #[must_use]
    pub fn with_method_name(mut self, method_name: impl Into<String>) -> Self {
        self.method_name = Some(method_name.into());
        self
    }

    /// Sets the explicit original type.
    #[must_use]
    pub fn with_original_type(mut self, original_type: JvmType) -> Self {
        self.original_type = Some(original_type);
        self
    }

    /// Sets the fluent-setter flag.
    #[must_use]
    pub const fn with_fluent_setter(mut self, fluent_setter: bool) -> Self {
        self.fluent_setter = Some(fluent_setter);
        self
    }

    /// Returns the raw accessor-kind constant, if written.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the original method name, if written.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Returns the explicit original type unless absent or the sentinel.
    #[must_use]
    pub fn original_type(&self) -> Option<&JvmType> {
        self.original_type
            .as_ref()
            .filter(|candidate| !is_default_marker(candidate))
    }

    /// Returns the fluent-setter flag, if written.
    #[must_use]
    pub const fn fluent_setter(&self) -> Option<bool> {
        self.fluent_setter
    }
}

/// The resolved attributes of an upgrade marker.
///
/// # Example
///
/// ```
/// use propshim_model::{AccessorKind, AccessorOverride, UpgradeDirective};
///
/// let directive = UpgradeDirective::new()
///     .with_fluent_setter(true)
///     .with_original_accessors(vec![AccessorOverride::new(AccessorKind::Getter, "isEnabled")]);
/// assert_eq!(directive.fluent_setter(), Some(true));
/// assert_eq!(directive.original_accessors().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeDirective {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    original_accessors: Vec<AccessorOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_type: Option<JvmType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fluent_setter: Option<bool>,
}

impl UpgradeDirective {
    /// Creates a directive with no attributes written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit accessor overrides.
    #[must_use]
    pub fn with_original_accessors(mut self, accessors: Vec<AccessorOverride>) -> Self {
        self.original_accessors = accessors;
        self
    }

    /// Sets the explicit original type.
    #[must_use]
    pub fn with_original_type(mut self, original_type: JvmType) -> Self {
        self.original_type = Some(original_type);
        self
    }

    /// Sets the fluent-setter flag.
    #[must_use]
    pub const fn with_fluent_setter(mut self, fluent_setter: bool) -> Self {
        self.fluent_setter = Some(fluent_setter);
        self
    }

    /// Returns the explicit accessor overrides.
    #[must_use]
    pub fn original_accessors(&self) -> &[AccessorOverride] {
        &self.original_accessors
    }

    /// Returns the explicit original type unless absent or the sentinel.
    #[must_use]
    pub fn original_type(&self) -> Option<&JvmType> {
        self.original_type
            .as_ref()
            .filter(|candidate| !is_default_marker(candidate))
    }

    /// Returns the fluent-setter flag, if written.
    #[must_use]
    pub const fn fluent_setter(&self) -> Option<bool> {
        self.fluent_setter
    }
}

/// Defaults declared on the annotation types themselves.
///
/// # Example
///
/// ```
/// use propshim_model::AttributeDefaults;
///
/// assert_eq!(AttributeDefaults::declared().directive_fluent_setter(), Some(false));
/// assert_eq!(AttributeDefaults::none().override_fluent_setter(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefaults {
    directive_fluent_setter: Option<bool>,
    override_fluent_setter: Option<bool>,
}

impl AttributeDefaults {
    /// The defaults declared by the standard marker annotations.
    #[must_use]
    pub const fn declared() -> Self {
        Self {
            directive_fluent_setter: Some(false),
            override_fluent_setter: Some(false),
        }
    }

    /// No declared defaults; every omitted attribute is missing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            directive_fluent_setter: None,
            override_fluent_setter: None,
        }
    }

    /// Declared default of `fluentSetter` on the directive.
    #[must_use]
    pub const fn directive_fluent_setter(&self) -> Option<bool> {
        self.directive_fluent_setter
    }

    /// Declared default of `fluentSetter` on override entries.
    #[must_use]
    pub const fn override_fluent_setter(&self) -> Option<bool> {
        self.override_fluent_setter
    }
}

impl Default for AttributeDefaults {
    fn default() -> Self {
        Self::declared()
    }
}
