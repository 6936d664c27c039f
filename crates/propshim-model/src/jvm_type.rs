//! Erased JVM types and their descriptor encoding.
//!
//! A [`JvmType`] is the erasure of a declared type as the virtual machine
//! sees it: a primitive, a class, or an array of either. Types travel through
//! the JSON interface in their Java source spelling (`boolean`,
//! `java.lang.String`, `int[]`) and are rendered into descriptor strings
//! (`Z`, `Ljava/lang/String;`, `[I`) when bindings are emitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeNameError;

/// Deepest array or generic nesting a type spelling may use. Matches the JVM
/// limit on array dimensions.
pub(crate) const MAX_NESTING_DEPTH: usize = 255;

/// An erased JVM type.
///
/// # Example
///
/// ```
/// use propshim_model::JvmType;
///
/// let string = JvmType::object("java.lang.String");
/// assert_eq!(string.descriptor(), "Ljava/lang/String;");
/// assert_eq!(string.simple_name(), "String");
///
/// let flags: JvmType = "boolean[]".parse().expect("valid type name");
/// assert_eq!(flags.descriptor(), "[Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JvmType {
    /// The `void` pseudo-type, valid only as a return type.
    Void,
    /// `boolean`.
    Boolean,
    /// `byte`.
    Byte,
    /// `char`.
    Char,
    /// `short`.
    Short,
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// A class or interface, identified by its binary name
    /// (`java.util.Map$Entry`).
    Object(String),
    /// An array of the boxed element type.
    Array(Box<JvmType>),
}

impl JvmType {
    /// Creates a class type from its binary name.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    /// Creates an array type with the given element type.
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns `true` for the primitive `boolean` type only.
    ///
    /// The boxed `java.lang.Boolean` class is deliberately not matched.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Returns the binary class name for class types.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Object(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the unqualified name, dropping the package and any enclosing
    /// classes.
    #[must_use]
    pub fn simple_name(&self) -> String {
        match self {
            Self::Object(name) => {
                let unqualified = name.rsplit('.').next().unwrap_or(name);
                unqualified
                    .rsplit('$')
                    .next()
                    .unwrap_or(unqualified)
                    .to_owned()
            }
            Self::Array(element) => format!("{}[]", element.simple_name()),
            primitive => primitive.to_string(),
        }
    }

    /// Renders the JVM field descriptor for this type.
    #[must_use]
    pub fn descriptor(&self) -> String {
        let mut out = String::new();
        self.write_descriptor(&mut out);
        out
    }

    /// Renders a JVM method descriptor from a return type and ordered
    /// parameter types.
    ///
    /// # Example
    ///
    /// ```
    /// use propshim_model::JvmType;
    ///
    /// let owner = JvmType::object("org.example.Task");
    /// let descriptor = JvmType::method_descriptor(&JvmType::Void, &[owner, JvmType::Int]);
    /// assert_eq!(descriptor, "(Lorg/example/Task;I)V");
    /// ```
    #[must_use]
    pub fn method_descriptor(return_type: &Self, parameters: &[Self]) -> String {
        let mut out = String::from("(");
        for parameter in parameters {
            parameter.write_descriptor(&mut out);
        }
        out.push(')');
        return_type.write_descriptor(&mut out);
        out
    }

    fn write_descriptor(&self, out: &mut String) {
        match self {
            Self::Void => out.push('V'),
            Self::Boolean => out.push('Z'),
            Self::Byte => out.push('B'),
            Self::Char => out.push('C'),
            Self::Short => out.push('S'),
            Self::Int => out.push('I'),
            Self::Long => out.push('J'),
            Self::Float => out.push('F'),
            Self::Double => out.push('D'),
            Self::Object(name) => {
                out.push('L');
                out.push_str(&name.replace('.', "/"));
                out.push(';');
            }
            Self::Array(element) => {
                out.push('[');
                element.write_descriptor(out);
            }
        }
    }
}

impl fmt::Display for JvmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Boolean => f.write_str("boolean"),
            Self::Byte => f.write_str("byte"),
            Self::Char => f.write_str("char"),
            Self::Short => f.write_str("short"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Object(name) => f.write_str(name),
            Self::Array(element) => write!(f, "{element}[]"),
        }
    }
}

impl FromStr for JvmType {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut name = s.trim();
        let mut dimensions = 0_usize;
        while let Some(element) = name.strip_suffix("[]") {
            if dimensions == MAX_NESTING_DEPTH {
                return Err(TypeNameError::TooDeep {
                    limit: MAX_NESTING_DEPTH,
                });
            }
            name = element.trim_end();
            dimensions += 1;
        }
        let parsed = match name {
            "" => return Err(TypeNameError::Empty),
            "void" => Self::Void,
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "char" => Self::Char,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            class_name => {
                validate_class_name(class_name)?;
                Self::Object(class_name.to_owned())
            }
        };
        Ok((0..dimensions).fold(parsed, |element, _| Self::array_of(element)))
    }
}

impl TryFrom<String> for JvmType {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JvmType> for String {
    fn from(value: JvmType) -> Self {
        value.to_string()
    }
}

fn validate_class_name(name: &str) -> Result<(), TypeNameError> {
    let valid = name.split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    });
    if valid {
        Ok(())
    } else {
        Err(TypeNameError::InvalidClassName {
            name: name.to_owned(),
        })
    }
}
