//! Value types for the property-upgrade shim generator.
//!
//! This crate holds everything that crosses a boundary: the method metadata
//! and resolved marker attributes handed over by annotation resolution, and
//! the interception requests and diagnostics handed on to adapter
//! generation. Every type is an immutable value with `serde` support so the
//! same shapes travel through the JSON batch interface.
//!
//! # Core types
//!
//! - [`JvmType`] and [`TypeRef`]: erased types and generic declarations
//! - [`MethodDeclaration`] and [`AnnotatedMethod`]: the input contract
//! - [`UpgradeDirective`], [`AccessorOverride`] and [`AttributeDefaults`]:
//!   resolved marker attributes
//! - [`InterceptionRequest`] and its parts: the output contract
//! - [`Diagnostic`] and [`DiagnosticCode`]: method-level failures
//!
//! # Example
//!
//! ```
//! use propshim_model::{JvmType, TypeRef};
//!
//! let declared: TypeRef = "org.gradle.api.provider.ListProperty<java.lang.String>"
//!     .parse()
//!     .expect("valid declared type");
//! assert_eq!(declared.erasure().descriptor(), "Lorg/gradle/api/provider/ListProperty;");
//! assert_eq!(JvmType::Boolean.descriptor(), "Z");
//! ```

mod diagnostic;
mod directive;
mod error;
mod jvm_type;
mod location;
mod method;
mod request;
mod type_ref;

pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use directive::{
    AccessorKind, AccessorOverride, AttributeDefaults, DEFAULT_MARKER_TYPE, UpgradeDirective,
    is_default_marker,
};
pub use error::TypeNameError;
pub use jvm_type::JvmType;
pub use location::SourceLocation;
pub use method::{AnnotatedMethod, MethodDeclaration, MethodParameter};
pub use request::{
    CallDescriptor, CallParameter, CallableKind, ImplementationBinding, InterceptionChannel,
    InterceptionRequest, ParameterKind, PropertyUpgradeMetadata, RequestExtra,
    UpgradedPropertyType,
};
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
