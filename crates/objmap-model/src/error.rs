//! Error types for the value model.

use thiserror::Error;

/// Errors returned by a type's constructor adapter.
///
/// A constructor receives the full name → value table assembled by the
/// mapper and reports which names it could not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// A parameter the constructor requires was not supplied.
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    /// Parameters were supplied that the constructor does not accept.
    #[error("unexpected parameters: {}", .0.join(", "))]
    UnexpectedParameters(Vec<String>),

    /// A parameter was supplied with a value of the wrong kind.
    #[error("parameter '{name}' expects {expected}, found {found}")]
    InvalidParameter {
        name: String,
        expected: String,
        found: String,
    },

    /// Constructor-specific failure.
    #[error("{0}")]
    Message(String),
}

/// Errors from converting a primitive into an enumerated value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No member of the enumeration has this symbolic name.
    #[error("{enum_name} has no member named '{name}'")]
    UnknownMember { enum_name: String, name: String },

    /// No member of the enumeration has this numeric value.
    #[error("{value} is not a valid {enum_name}")]
    UnknownValue { enum_name: String, value: i64 },
}

pub type Result<T> = std::result::Result<T, ConstructError>;
