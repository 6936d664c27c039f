//! Tests for original-type resolution.

use rstest::rstest;

use propshim_model::{JvmType, UpgradedPropertyType};

use super::support::getter;
use crate::{ReadFailure, WrapperKind, resolve_original_type, upgraded_property_type};

#[rstest]
#[case("org.gradle.api.file.RegularFileProperty", "java.io.File")]
#[case("org.gradle.api.file.DirectoryProperty", "java.io.File")]
#[case("org.gradle.api.provider.Property<java.lang.String>", "java.lang.String")]
#[case("org.gradle.api.provider.Property<java.lang.Boolean>", "java.lang.Boolean")]
#[case("org.gradle.api.provider.Property<boolean>", "boolean")]
#[case(
    "org.gradle.api.provider.Property<java.util.List<java.lang.String>>",
    "java.util.List"
)]
#[case(
    "org.gradle.api.file.ConfigurableFileCollection",
    "org.gradle.api.file.FileCollection"
)]
#[case(
    "org.gradle.api.provider.MapProperty<java.lang.String, java.lang.Integer>",
    "java.util.Map"
)]
#[case("org.gradle.api.provider.ListProperty<java.lang.String>", "java.util.List")]
#[case("org.gradle.api.provider.SetProperty<java.io.File>", "java.util.Set")]
fn resolves_table_entries(#[case] declared: &str, #[case] expected: &str) {
    let method = getter("getValue", declared);
    let resolved = resolve_original_type(&method, None).expect("resolvable wrapper");
    assert_eq!(resolved.to_string(), expected);
}

#[test]
fn resolved_type_does_not_depend_on_property_name() {
    let declared = "org.gradle.api.provider.Property<java.lang.String>";
    let first = resolve_original_type(&getter("getName", declared), None);
    let second = resolve_original_type(&getter("getSomethingElse", declared), None);
    assert_eq!(first, second);
}

#[rstest]
#[case("java.lang.String")]
#[case("org.gradle.api.provider.Property")]
#[case("org.gradle.api.provider.Property<java.lang.String, java.lang.String>")]
#[case("org.gradle.api.provider.Provider<java.lang.String>")]
#[case("int")]
fn rejects_shapes_outside_the_table(#[case] declared: &str) {
    let method = getter("getValue", declared);
    let failure = resolve_original_type(&method, None).expect_err("unresolvable");
    assert!(matches!(failure, ReadFailure::UnresolvedOriginalType { .. }));
}

#[test]
fn unresolved_message_names_method_and_declared_type() {
    let method = getter("getValue", "org.gradle.api.provider.Provider<java.lang.String>");
    let failure = resolve_original_type(&method, None).expect_err("unresolvable");
    assert_eq!(
        failure.to_string(),
        "Cannot extract original type for method 'org.example.Task.getValue(): \
         org.gradle.api.provider.Provider<java.lang.String>'. \
         Use explicit @UpgradedProperty#originalType instead."
    );
}

#[rstest]
#[case("org.gradle.api.provider.Property<java.lang.String>")]
#[case("org.gradle.api.provider.Provider<java.lang.String>")]
#[case("java.lang.Object")]
fn explicit_type_always_wins(#[case] declared: &str) {
    let method = getter("getValue", declared);
    let explicit = JvmType::object("java.lang.CharSequence");
    let resolved = resolve_original_type(&method, Some(&explicit)).expect("explicit type");
    assert_eq!(resolved, explicit);
}

#[rstest]
#[case("org.gradle.api.file.RegularFileProperty", UpgradedPropertyType::FileSystemLocationProperty)]
#[case("org.gradle.api.file.DirectoryProperty", UpgradedPropertyType::FileSystemLocationProperty)]
#[case("org.gradle.api.provider.Property<java.lang.String>", UpgradedPropertyType::Property)]
#[case(
    "org.gradle.api.file.ConfigurableFileCollection",
    UpgradedPropertyType::ConfigurableFileCollection
)]
#[case("org.gradle.api.provider.MapProperty<K, V>", UpgradedPropertyType::MapProperty)]
#[case("org.gradle.api.provider.ListProperty<E>", UpgradedPropertyType::ListProperty)]
#[case("org.gradle.api.provider.SetProperty<E>", UpgradedPropertyType::SetProperty)]
#[case("java.lang.String", UpgradedPropertyType::Property)]
fn upgraded_type_categories(#[case] declared: &str, #[case] expected: UpgradedPropertyType) {
    let parsed = declared.parse().expect("declared type");
    assert_eq!(upgraded_property_type(&parsed), expected);
}

#[test]
fn every_wrapper_round_trips_through_its_class_name() {
    for kind in WrapperKind::ALL {
        assert_eq!(WrapperKind::from_class_name(kind.class_name()), Some(kind));
    }
}
