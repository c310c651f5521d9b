//! Error types for mapping operations.

use objmap_model::{ConstructError, ConversionError, Params};
use thiserror::Error;

/// Errors from configuring or running a mapper.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The input is an instance of neither mapped class.
    #[error("This mapper does not support {class} class")]
    UnsupportedClass { class: String },

    /// A source attribute could not be read.
    #[error("Unknown attribute: {attribute}")]
    AttributeRead { attribute: String, class: String },

    /// `map_attr_name` found no counterpart for the name.
    #[error("{0}")]
    UnknownAttributeName(String),

    /// The destination constructor rejected the assembled parameters.
    #[error("Error when initializing class {class} with params: {params}\n{source}")]
    Construction {
        class: String,
        params: Params,
        #[source]
        source: ConstructError,
    },

    /// A value could not be converted to the destination's enumerated type.
    #[error("cannot convert attribute '{attribute}': {source}")]
    Conversion {
        attribute: String,
        #[source]
        source: ConversionError,
    },

    /// A typed mapping call asked for a class the mapper does not produce.
    #[error("mapper produced {found}, expected {expected}")]
    UnexpectedOutput { expected: String, found: String },

    /// Nested mappers recursed deeper than the configured limit.
    #[error("nested mapping exceeded the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    /// Option name not recognised.
    #[error("unknown mapper option: {0}")]
    UnknownOption(String),

    /// Mapping profile could not be parsed.
    #[error("invalid mapping profile: {0}")]
    InvalidProfile(#[from] serde_json::Error),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
