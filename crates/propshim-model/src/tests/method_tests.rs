//! Tests for [`MethodDeclaration`] and [`AnnotatedMethod`].

use rstest::{fixture, rstest};

use crate::{
    AnnotatedMethod, JvmType, MethodDeclaration, MethodParameter, SourceLocation, TypeRef,
    UpgradeDirective,
};

#[fixture]
fn getter() -> MethodDeclaration {
    MethodDeclaration::new(
        JvmType::object("org.example.Compile"),
        "getDestination",
        "org.gradle.api.file.DirectoryProperty".parse().expect("type"),
    )
    .with_location(SourceLocation::new(Some("Compile.java".into()), 40, 5))
}

#[rstest]
fn signature_of_parameterless_method(getter: MethodDeclaration) {
    assert_eq!(getter.signature(), "getDestination()");
    assert_eq!(
        getter.qualified_signature(),
        "org.example.Compile.getDestination()"
    );
}

#[rstest]
fn signature_lists_parameter_types(getter: MethodDeclaration) {
    let method = getter.with_parameters(vec![
        MethodParameter::new("index", TypeRef::raw(JvmType::Int)),
        MethodParameter::new(
            "names",
            "java.util.List<java.lang.String>".parse().expect("type"),
        ),
    ]);
    assert_eq!(
        method.signature(),
        "getDestination(int,java.util.List<java.lang.String>)"
    );
    assert_eq!(
        method.descriptor(),
        "(ILjava/util/List;)Lorg/gradle/api/file/DirectoryProperty;"
    );
}

#[rstest]
fn descriptor_uses_erasures(getter: MethodDeclaration) {
    assert_eq!(
        getter.descriptor(),
        "()Lorg/gradle/api/file/DirectoryProperty;"
    );
}

#[rstest]
fn location_is_retained(getter: MethodDeclaration) {
    assert_eq!(getter.location().to_string(), "Compile.java:40:5");
}

#[test]
fn unknown_location_renders_placeholder() {
    assert_eq!(SourceLocation::default().to_string(), "<unknown>:0:0");
}

#[rstest]
fn annotated_method_json_shape(getter: MethodDeclaration) {
    let annotated = AnnotatedMethod::new(getter, UpgradeDirective::new().with_fluent_setter(true));
    let json = serde_json::to_value(&annotated).expect("serialize");
    assert_eq!(json["method"]["name"], "getDestination");
    assert_eq!(
        json["method"]["returnType"],
        "org.gradle.api.file.DirectoryProperty"
    );
    assert_eq!(json["upgradedProperty"]["fluentSetter"], true);
}

#[test]
fn annotated_method_parses_minimal_json() {
    let json = r#"{
        "method": {
            "owner": "org.example.Task",
            "name": "getName",
            "returnType": "org.gradle.api.provider.Property<java.lang.String>"
        },
        "upgradedProperty": {}
    }"#;
    let annotated: AnnotatedMethod = serde_json::from_str(json).expect("deserialize");
    assert!(annotated.method().parameters().is_empty());
    assert_eq!(annotated.method().location(), &SourceLocation::default());
    let directive = annotated.directive().expect("marked");
    assert!(directive.original_accessors().is_empty());
    assert_eq!(directive.fluent_setter(), None);
}

#[test]
fn unmarked_method_has_no_directive() {
    let json = r#"{
        "method": {
            "owner": "org.example.Task",
            "name": "getName",
            "returnType": "java.lang.String"
        }
    }"#;
    let annotated: AnnotatedMethod = serde_json::from_str(json).expect("deserialize");
    assert!(annotated.directive().is_none());
}
