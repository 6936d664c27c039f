//! Errors raised while parsing type names from their source spelling.

use thiserror::Error;

/// Errors arising from [`JvmType`](crate::JvmType) and
/// [`TypeRef`](crate::TypeRef) parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeNameError {
    /// The type name was empty or contained only whitespace.
    #[error("type name is empty")]
    Empty,

    /// A class name segment was empty or contained an illegal character.
    #[error("'{name}' is not a valid class name")]
    InvalidClassName {
        /// The rejected name.
        name: String,
    },

    /// A generic argument list was opened but never closed, or closed twice.
    #[error("unbalanced type arguments in '{input}'")]
    UnbalancedArguments {
        /// The full input being parsed.
        input: String,
    },

    /// Characters remained after a complete type was parsed.
    #[error("unexpected trailing input '{rest}' in '{input}'")]
    TrailingInput {
        /// The full input being parsed.
        input: String,
        /// The unparsed remainder.
        rest: String,
    },

    /// Array dimensions or generic arguments nested past the supported depth.
    #[error("type name nests deeper than {limit} levels")]
    TooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
}
