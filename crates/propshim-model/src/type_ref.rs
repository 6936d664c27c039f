//! Declared types with their generic arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeNameError;
use crate::jvm_type::{JvmType, MAX_NESTING_DEPTH};

/// A declared type: its erasure plus ordered generic type arguments.
///
/// Arguments may be primitives so the model can describe wrapper shapes
/// independently of any one source language's boxing rules.
///
/// # Example
///
/// ```
/// use propshim_model::{JvmType, TypeRef};
///
/// let declared: TypeRef = "org.gradle.api.provider.Property<java.lang.String>"
///     .parse()
///     .expect("valid declared type");
/// assert_eq!(declared.class_name(), Some("org.gradle.api.provider.Property"));
/// assert_eq!(declared.arguments()[0].erasure(), &JvmType::object("java.lang.String"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    erasure: JvmType,
    arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a parameterised type reference.
    #[must_use]
    pub const fn new(erasure: JvmType, arguments: Vec<Self>) -> Self {
        Self { erasure, arguments }
    }

    /// Creates a type reference without type arguments.
    #[must_use]
    pub const fn raw(erasure: JvmType) -> Self {
        Self::new(erasure, Vec::new())
    }

    /// Returns the erased type.
    #[must_use]
    pub const fn erasure(&self) -> &JvmType {
        &self.erasure
    }

    /// Returns the generic type arguments in declaration order.
    #[must_use]
    pub fn arguments(&self) -> &[Self] {
        &self.arguments
    }

    /// Returns the binary class name of the erasure, if it is a class.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.erasure.class_name()
    }
}

impl From<JvmType> for TypeRef {
    fn from(erasure: JvmType) -> Self {
        Self::raw(erasure)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.erasure)?;
        if let Some((first, rest)) = self.arguments.split_first() {
            write!(f, "<{first}")?;
            for argument in rest {
                write!(f, ", {argument}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for TypeRef {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeRefParser {
            input: s,
            rest: s,
            depth: 0,
        };
        let parsed = parser.parse_type()?;
        let rest = parser.rest.trim();
        if rest.is_empty() {
            Ok(parsed)
        } else if rest.starts_with('>') || rest.starts_with(',') {
            Err(parser.unbalanced())
        } else {
            Err(TypeNameError::TrailingInput {
                input: s.to_owned(),
                rest: rest.to_owned(),
            })
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

/// Recursive-descent parser over `Name<Arg, Arg<Nested>>` spellings.
struct TypeRefParser<'a> {
    input: &'a str,
    rest: &'a str,
    depth: usize,
}

impl TypeRefParser<'_> {
    fn parse_type(&mut self) -> Result<TypeRef, TypeNameError> {
        let name_end = self.rest.find(['<', ',', '>']).unwrap_or(self.rest.len());
        let (name, tail) = self.rest.split_at(name_end);
        self.rest = tail;
        let erasure: JvmType = name.parse()?;

        let Some(after_open) = self.rest.strip_prefix('<') else {
            return Ok(TypeRef::raw(erasure));
        };
        self.rest = after_open;
        if self.depth == MAX_NESTING_DEPTH {
            return Err(TypeNameError::TooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;

        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_type()?);
            let trimmed = self.rest.trim_start();
            if let Some(next) = trimmed.strip_prefix(',') {
                self.rest = next;
            } else if let Some(next) = trimmed.strip_prefix('>') {
                self.rest = next;
                self.depth -= 1;
                break;
            } else {
                return Err(self.unbalanced());
            }
        }
        Ok(TypeRef::new(erasure, arguments))
    }

    fn unbalanced(&self) -> TypeNameError {
        TypeNameError::UnbalancedArguments {
            input: self.input.to_owned(),
        }
    }
}
