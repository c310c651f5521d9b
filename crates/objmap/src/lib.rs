//! Bidirectional attribute mapper between two classes.
//!
//! An [`ObjectMapper`] copies same-named attributes from an instance of one
//! class into a new instance of the other, in either direction. On top of the
//! implicit name matching it supports:
//! - explicit renames and suppressions ([`MapperBuilder::custom_mappings`])
//! - nested mappers for attributes that hold objects of other mapped classes
//! - initializers that compute destination attributes from the whole source
//! - enum conversion to and from integers and strings
//!
//! Classes take part by implementing [`Mappable`] from `objmap-model`.

#![deny(unsafe_code)]

pub mod builder;
pub mod conversion;
pub mod engine;
pub mod error;
pub mod options;
pub mod resolve;

pub use builder::{Initializer, MapperBuilder, initializer};
pub use engine::{Direction, ObjectMapper};
pub use error::{MappingError, Result};
pub use options::{MapperOption, MapperOptions, MappingProfile};
pub use resolve::{ExplicitMappings, ResolvedMapping};

pub use objmap_model::{
    ClassDescriptor, ClassKey, ConstructError, ConversionError, EnumDescriptor, EnumValue,
    FieldSource, FromValue, Mappable, MappedEnum, Object, ObjectBox, ObjectSource, Params,
    Record, Value, ValueKind,
};
