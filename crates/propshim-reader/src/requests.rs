//! Interception requests for one accessor spec.
//!
//! A getter is intercepted twice: once for dynamic property reads and once
//! for direct calls. Both bind to the same adapter accessor. A setter is
//! intercepted for direct calls only.

use propshim_model::{
    AccessorKind, CallDescriptor, CallParameter, CallableKind, ImplementationBinding,
    InterceptionChannel, InterceptionRequest, JvmType, MethodDeclaration, ParameterKind,
    PropertyUpgradeMetadata, RequestExtra, UpgradedPropertyType,
};

use crate::accessor::AccessorSpec;
use crate::context::{GENERATED_NAMESPACE, ProjectContext};
use crate::naming::property_name_of;
use crate::wrapper::upgraded_property_type;

const RECEIVER_PARAMETER: &str = "receiver";
const SETTER_ARGUMENT: &str = "arg0";

/// Name of the adapter class generated for `owner`.
#[must_use]
pub fn adapter_class_name(owner: &JvmType) -> String {
    format!("{GENERATED_NAMESPACE}.{}_Adapter", owner.simple_name())
}

/// Builds requests for the specs of one annotated method.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    context: &'a ProjectContext,
    method: &'a MethodDeclaration,
    adapter_class: String,
    adapter_property: String,
    upgraded_type: UpgradedPropertyType,
}

impl<'a> RequestBuilder<'a> {
    /// Prepares a builder for `method` under `context`.
    #[must_use]
    pub fn new(context: &'a ProjectContext, method: &'a MethodDeclaration) -> Self {
        Self {
            context,
            method,
            adapter_class: adapter_class_name(method.owner()),
            adapter_property: property_name_of(method.name()),
            upgraded_type: upgraded_property_type(method.return_type()),
        }
    }

    /// Emits the requests for an accessor spec: two for a getter, one for a setter.
    #[must_use]
    pub fn requests_for(&self, spec: &AccessorSpec) -> Vec<InterceptionRequest> {
        match spec.kind() {
            AccessorKind::Getter => vec![self.dynamic_getter(spec), self.direct_getter(spec)],
            AccessorKind::Setter => vec![self.direct_setter(spec)],
        }
    }

    fn dynamic_getter(&self, spec: &AccessorSpec) -> InterceptionRequest {
        let owner = self.method.owner();
        let call = CallDescriptor::new(
            CallableKind::GroovyPropertyGetter,
            owner.clone(),
            spec.property_name(),
            spec.original_type().clone(),
            vec![CallParameter::new(
                RECEIVER_PARAMETER,
                owner.clone(),
                ParameterKind::Receiver,
            )],
        );
        InterceptionRequest::new(
            call,
            self.getter_binding(spec.original_type()),
            self.extras(InterceptionChannel::DynamicCalls, spec, false),
        )
    }

    fn direct_getter(&self, spec: &AccessorSpec) -> InterceptionRequest {
        let call = CallDescriptor::new(
            CallableKind::InstanceMethod,
            self.method.owner().clone(),
            spec.method_name(),
            spec.original_type().clone(),
            Vec::new(),
        );
        InterceptionRequest::new(
            call,
            self.getter_binding(spec.original_type()),
            self.extras(InterceptionChannel::DirectCalls, spec, false),
        )
    }

    fn direct_setter(&self, spec: &AccessorSpec) -> InterceptionRequest {
        let owner = self.method.owner();
        let return_type = if spec.fluent_setter() {
            owner.clone()
        } else {
            JvmType::Void
        };
        let call = CallDescriptor::new(
            CallableKind::InstanceMethod,
            owner.clone(),
            spec.method_name(),
            return_type.clone(),
            vec![CallParameter::new(
                SETTER_ARGUMENT,
                spec.original_type().clone(),
                ParameterKind::MethodParameter,
            )],
        );
        let descriptor = JvmType::method_descriptor(
            &return_type,
            &[owner.clone(), spec.original_type().clone()],
        );
        let binding = ImplementationBinding::new(
            self.adapter_class.as_str(),
            format!("access_set_{}", self.adapter_property),
            descriptor,
        );
        InterceptionRequest::new(
            call,
            binding,
            self.extras(InterceptionChannel::DirectCalls, spec, spec.fluent_setter()),
        )
    }

    fn getter_binding(&self, original_type: &JvmType) -> ImplementationBinding {
        let descriptor =
            JvmType::method_descriptor(original_type, std::slice::from_ref(self.method.owner()));
        ImplementationBinding::new(
            self.adapter_class.as_str(),
            format!("access_get_{}", self.adapter_property),
            descriptor,
        )
    }

    fn extras(
        &self,
        channel: InterceptionChannel,
        spec: &AccessorSpec,
        fluent_setter: bool,
    ) -> Vec<RequestExtra> {
        vec![
            RequestExtra::OriginatingElement {
                location: self.method.location().clone(),
            },
            RequestExtra::Intercept {
                channel,
                registration_class: self.context.registration_class(channel),
            },
            RequestExtra::PropertyUpgrade(PropertyUpgradeMetadata::new(
                spec.property_name(),
                fluent_setter,
                self.adapter_class.as_str(),
                self.method.name(),
                self.method.descriptor(),
                spec.original_type().clone(),
                self.upgraded_type,
            )),
        ]
    }
}
