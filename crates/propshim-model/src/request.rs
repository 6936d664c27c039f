//! Interception requests emitted for downstream adapter generation.
//!
//! An [`InterceptionRequest`] pairs a call-site shape ([`CallDescriptor`])
//! with the adapter method that should service it
//! ([`ImplementationBinding`]), plus [`RequestExtra`] metadata telling the
//! consumer which interception channel to register and how to generate the
//! adapter body.

use serde::{Deserialize, Serialize};

use crate::jvm_type::JvmType;
use crate::location::SourceLocation;

/// The call-site style a descriptor matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableKind {
    /// An explicit virtual call on an instance.
    InstanceMethod,
    /// A dynamic read of a property by name.
    GroovyPropertyGetter,
}

/// The role a call parameter plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterKind {
    /// The object the call is made on.
    Receiver,
    /// An ordinary argument.
    MethodParameter,
}

/// One parameter of a call descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallParameter {
    name: String,
    #[serde(rename = "type")]
    parameter_type: JvmType,
    kind: ParameterKind,
}

impl CallParameter {
    /// Creates a call parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_type: JvmType, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            kind,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the parameter type.
    #[must_use]
    pub const fn parameter_type(&self) -> &JvmType {
        &self.parameter_type
    }

    /// Returns the parameter role.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }
}

/// The shape of the call sites to intercept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDescriptor {
    kind: CallableKind,
    owner: JvmType,
    name: String,
    return_type: JvmType,
    parameters: Vec<CallParameter>,
}

impl CallDescriptor {
    /// Creates a call descriptor.
    #[must_use]
    pub fn new(
        kind: CallableKind,
        owner: JvmType,
        name: impl Into<String>,
        return_type: JvmType,
        parameters: Vec<CallParameter>,
    ) -> Self {
        Self {
            kind,
            owner,
            name: name.into(),
            return_type,
            parameters,
        }
    }

    /// Returns the call-site style.
    #[must_use]
    pub const fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Returns the type that owns the callable.
    #[must_use]
    pub const fn owner(&self) -> &JvmType {
        &self.owner
    }

    /// Returns the callable name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the return type.
    #[must_use]
    pub const fn return_type(&self) -> &JvmType {
        &self.return_type
    }

    /// Returns the ordered parameters.
    #[must_use]
    pub fn parameters(&self) -> &[CallParameter] {
        &self.parameters
    }
}

/// The adapter method a call is redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationBinding {
    owner: String,
    name: String,
    descriptor: String,
}

impl ImplementationBinding {
    /// Creates a binding.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Returns the adapter class name.
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Returns the adapter method name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the adapter method descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &str {
        self.descriptor.as_str()
    }
}

/// Which call sites a request rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionChannel {
    /// Dynamic property access resolved by name at run time.
    DynamicCalls,
    /// Direct method calls compiled into bytecode.
    DirectCalls,
}

/// Category of the declared wrapper an upgraded property returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpgradedPropertyType {
    /// A mutable file collection.
    ConfigurableFileCollection,
    /// A regular-file or directory location wrapper.
    FileSystemLocationProperty,
    /// A map-valued wrapper.
    MapProperty,
    /// A list-valued wrapper.
    ListProperty,
    /// A set-valued wrapper.
    SetProperty,
    /// A single-value wrapper, and the fallback for unlisted shapes.
    Property,
}

/// Metadata the adapter generator needs to bridge one accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpgradeMetadata {
    property_name: String,
    fluent_setter: bool,
    adapter_class: String,
    original_method_name: String,
    original_method_descriptor: String,
    original_type: JvmType,
    upgraded_type: UpgradedPropertyType,
}

impl PropertyUpgradeMetadata {
    /// Creates the metadata bundle.
    #[must_use]
    pub fn new(
        property_name: impl Into<String>,
        fluent_setter: bool,
        adapter_class: impl Into<String>,
        original_method_name: impl Into<String>,
        original_method_descriptor: impl Into<String>,
        original_type: JvmType,
        upgraded_type: UpgradedPropertyType,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            fluent_setter,
            adapter_class: adapter_class.into(),
            original_method_name: original_method_name.into(),
            original_method_descriptor: original_method_descriptor.into(),
            original_type,
            upgraded_type,
        }
    }

    /// Returns the property name.
    #[must_use]
    pub const fn property_name(&self) -> &str {
        self.property_name.as_str()
    }

    /// Returns whether the setter returns its owner.
    #[must_use]
    pub const fn fluent_setter(&self) -> bool {
        self.fluent_setter
    }

    /// Returns the adapter class name.
    #[must_use]
    pub const fn adapter_class(&self) -> &str {
        self.adapter_class.as_str()
    }

    /// Returns the annotated method's name.
    #[must_use]
    pub const fn original_method_name(&self) -> &str {
        self.original_method_name.as_str()
    }

    /// Returns the annotated method's descriptor.
    #[must_use]
    pub const fn original_method_descriptor(&self) -> &str {
        self.original_method_descriptor.as_str()
    }

    /// Returns the value type the accessor exposed before its upgrade.
    #[must_use]
    pub const fn original_type(&self) -> &JvmType {
        &self.original_type
    }

    /// Returns the category of the declared wrapper.
    #[must_use]
    pub const fn upgraded_type(&self) -> UpgradedPropertyType {
        self.upgraded_type
    }
}

/// Contextual metadata attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestExtra {
    /// Where the annotated method was declared.
    OriginatingElement {
        /// The declaration site.
        location: SourceLocation,
    },
    /// Registers the request with an interception channel.
    Intercept {
        /// The call-site family to rewrite.
        channel: InterceptionChannel,
        /// The generated class that registers the interceptors.
        registration_class: String,
    },
    /// Adapter-generation metadata.
    PropertyUpgrade(PropertyUpgradeMetadata),
}

/// A call-site descriptor bound to its adapter implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptionRequest {
    call: CallDescriptor,
    implementation: ImplementationBinding,
    extras: Vec<RequestExtra>,
}

impl InterceptionRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(
        call: CallDescriptor,
        implementation: ImplementationBinding,
        extras: Vec<RequestExtra>,
    ) -> Self {
        Self {
            call,
            implementation,
            extras,
        }
    }

    /// Returns the intercepted call shape.
    #[must_use]
    pub const fn call(&self) -> &CallDescriptor {
        &self.call
    }

    /// Returns the adapter binding.
    #[must_use]
    pub const fn implementation(&self) -> &ImplementationBinding {
        &self.implementation
    }

    /// Returns the attached extras.
    #[must_use]
    pub fn extras(&self) -> &[RequestExtra] {
        &self.extras
    }

    /// Returns the interception channel, if one is attached.
    #[must_use]
    pub fn channel(&self) -> Option<InterceptionChannel> {
        self.extras.iter().find_map(|extra| match extra {
            RequestExtra::Intercept { channel, .. } => Some(*channel),
            _ => None,
        })
    }

    /// Returns the property-upgrade metadata, if attached.
    #[must_use]
    pub fn upgrade_metadata(&self) -> Option<&PropertyUpgradeMetadata> {
        self.extras.iter().find_map(|extra| match extra {
            RequestExtra::PropertyUpgrade(metadata) => Some(metadata),
            _ => None,
        })
    }
}
