//! Shared builders for reader tests.

use propshim_model::{InterceptionRequest, JvmType, MethodDeclaration, SourceLocation};

use crate::ProjectContext;

pub(super) const OWNER: &str = "org.example.Task";

pub(super) fn owner() -> JvmType {
    JvmType::object(OWNER)
}

pub(super) fn getter(name: &str, declared: &str) -> MethodDeclaration {
    MethodDeclaration::new(owner(), name, declared.parse().expect("declared type"))
        .with_location(SourceLocation::new(Some(String::from("Task.java")), 21, 5))
}

pub(super) fn context() -> ProjectContext {
    ProjectContext::new("core-runtime").expect("valid project name")
}

/// One line per request: call shape, then the adapter it binds to.
pub(super) fn summarize(requests: &[InterceptionRequest]) -> String {
    requests
        .iter()
        .map(|request| {
            let call = request.call();
            let parameters: Vec<String> = call
                .parameters()
                .iter()
                .map(|parameter| format!("{}: {}", parameter.name(), parameter.parameter_type()))
                .collect();
            let binding = request.implementation();
            format!(
                "{:?} {}({}) -> {} => {}{}",
                call.kind(),
                call.name(),
                parameters.join(", "),
                call.return_type(),
                binding.name(),
                binding.descriptor()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
