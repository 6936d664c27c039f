//! Interception-request reader for upgraded properties.
//!
//! When a type's accessors move from plain values to lazy wrappers, code
//! compiled against the old accessors still calls them. This crate takes a
//! method marked as an upgraded property and computes the interception
//! requests that keep those old call sites working: which calls to rewrite,
//! and which generated adapter accessor each call is redirected to.
//!
//! # Pipeline
//!
//! - [`naming`] derives property names and implied accessor names.
//! - [`WrapperKind`] and [`resolve_original_type`] recover the value type a
//!   wrapper replaced.
//! - [`build_accessor_specs`] resolves the getters and setters to intercept.
//! - [`RequestBuilder`] turns each accessor spec into requests.
//! - [`PropertyUpgradeReader`] validates, orchestrates and converts failures
//!   into diagnostics.

mod accessor;
mod context;
mod error;
pub mod naming;
mod reader;
mod requests;
mod wrapper;

pub use accessor::{AccessorSpec, build_accessor_specs};
pub use context::{GENERATED_NAMESPACE, ProjectContext};
pub use error::ReadFailure;
pub use reader::{MethodOutcome, OutcomeStatus, PropertyUpgradeReader};
pub use requests::{RequestBuilder, adapter_class_name};
pub use wrapper::{WrapperKind, resolve_original_type, upgraded_property_type};

#[cfg(test)]
mod tests;
