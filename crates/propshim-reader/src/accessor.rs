//! Accessor specifications derived from a marked method.

use propshim_model::{
    AccessorKind, AccessorOverride, AttributeDefaults, JvmType, MethodDeclaration,
    UpgradeDirective,
};

use crate::error::ReadFailure;
use crate::naming::{implied_getter_name, implied_setter_name, property_name_of};
use crate::wrapper::resolve_original_type;

const ACCESSOR_ANNOTATION: &str = "UpgradedAccessor";

/// A fully resolved getter or setter to intercept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    kind: AccessorKind,
    property_name: String,
    method_name: String,
    original_type: JvmType,
    fluent_setter: bool,
}

impl AccessorSpec {
    /// Creates an accessor spec, deriving the property name from `method_name`.
    #[must_use]
    pub fn new(
        kind: AccessorKind,
        method_name: impl Into<String>,
        original_type: JvmType,
        fluent_setter: bool,
    ) -> Self {
        let name: String = method_name.into();
        Self {
            kind,
            property_name: property_name_of(&name),
            method_name: name,
            original_type,
            fluent_setter,
        }
    }

    /// Returns the accessor kind.
    #[must_use]
    pub const fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Returns the property name.
    #[must_use]
    pub const fn property_name(&self) -> &str {
        self.property_name.as_str()
    }

    /// Returns the original accessor's method name.
    #[must_use]
    pub const fn method_name(&self) -> &str {
        self.method_name.as_str()
    }

    /// Returns the original value type.
    #[must_use]
    pub const fn original_type(&self) -> &JvmType {
        &self.original_type
    }

    /// Returns whether the original setter returned its owner.
    #[must_use]
    pub const fn fluent_setter(&self) -> bool {
        self.fluent_setter
    }
}

/// Builds the accessor specs for a marked method.
///
/// Explicit override entries yield one accessor spec each, resolved independently.
/// Without overrides, an implied getter and setter pair is produced.
///
/// # Errors
///
/// Returns the first [`ReadFailure`] met while resolving an attribute or the
/// original type. No partial list is returned.
pub fn build_accessor_specs(
    method: &MethodDeclaration,
    directive: &UpgradeDirective,
    defaults: &AttributeDefaults,
) -> Result<Vec<AccessorSpec>, ReadFailure> {
    if directive.original_accessors().is_empty() {
        return [AccessorKind::Getter, AccessorKind::Setter]
            .into_iter()
            .map(|kind| implied_spec(method, kind, directive, defaults))
            .collect();
    }
    directive
        .original_accessors()
        .iter()
        .map(|entry| override_spec(method, entry, defaults))
        .collect()
}

fn override_spec(
    method: &MethodDeclaration,
    entry: &AccessorOverride,
    defaults: &AttributeDefaults,
) -> Result<AccessorSpec, ReadFailure> {
    let method_name = entry.method_name().ok_or(ReadFailure::MissingAttribute {
        attribute: "methodName",
        annotation: Some(ACCESSOR_ANNOTATION),
    })?;
    let constant = entry.value().ok_or(ReadFailure::MissingAttribute {
        attribute: "value",
        annotation: Some(ACCESSOR_ANNOTATION),
    })?;
    let kind = AccessorKind::from_constant(constant).ok_or_else(|| {
        ReadFailure::UnsupportedAccessorKind {
            kind: constant.to_owned(),
        }
    })?;
    let original_type = resolve_original_type(method, entry.original_type())?;
    let fluent_setter =
        resolve_fluent_setter(entry.fluent_setter(), defaults.override_fluent_setter())?;
    Ok(AccessorSpec::new(kind, method_name, original_type, fluent_setter))
}

fn implied_spec(
    method: &MethodDeclaration,
    kind: AccessorKind,
    directive: &UpgradeDirective,
    defaults: &AttributeDefaults,
) -> Result<AccessorSpec, ReadFailure> {
    let original_type = resolve_original_type(method, directive.original_type())?;
    let method_name = match kind {
        AccessorKind::Getter => {
            implied_getter_name(&property_name_of(method.name()), &original_type)
        }
        AccessorKind::Setter => implied_setter_name(method.name()),
    };
    let fluent_setter =
        resolve_fluent_setter(directive.fluent_setter(), defaults.directive_fluent_setter())?;
    Ok(AccessorSpec::new(kind, method_name, original_type, fluent_setter))
}

/// Instance value, then declared default, then failure.
fn resolve_fluent_setter(
    instance: Option<bool>,
    declared: Option<bool>,
) -> Result<bool, ReadFailure> {
    instance.or(declared).ok_or(ReadFailure::MissingAttribute {
        attribute: "fluentSetter",
        annotation: None,
    })
}
