//! Property and accessor naming conventions.
//!
//! These follow the bean conventions the upgraded APIs were written against:
//! `isX`/`getX`/`setX` map to property `x`, and anything else passes through
//! untouched.

use propshim_model::JvmType;

/// Derives the property name from an accessor method name.
///
/// `isEnabled` → `enabled`, `getOutputDir` → `outputDir`,
/// `setOutputDir` → `outputDir`. Names that do not follow a prefix with an
/// upper-case letter are returned unchanged.
#[must_use]
pub fn property_name_of(method_name: &str) -> String {
    ["is", "get", "set"]
        .into_iter()
        .find_map(|prefix| decapitalized_suffix(method_name, prefix))
        .unwrap_or_else(|| method_name.to_owned())
}

fn decapitalized_suffix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next().filter(|c| c.is_uppercase())?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Upper-cases the first character and keeps the remainder.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// The getter a property exposed before its upgrade.
///
/// Primitive `boolean` properties used the `is` prefix.
#[must_use]
pub fn implied_getter_name(property_name: &str, original_type: &JvmType) -> String {
    let prefix = if original_type.is_boolean() { "is" } else { "get" };
    format!("{prefix}{}", capitalize(property_name))
}

/// The setter paired with an annotated getter.
///
/// Replaces the first occurrence of `get` in the getter's own name, which is
/// its prefix for every name that passes accessor-shape validation.
#[must_use]
pub fn implied_setter_name(getter_name: &str) -> String {
    getter_name.replacen("get", "set", 1)
}
