//! Value model for the objmap attribute mapper.
//!
//! This crate holds everything a type needs to take part in mapping:
//! - [`Value`] and [`ValueKind`]: dynamic attribute values and their runtime types
//! - [`EnumDescriptor`] / [`MappedEnum`]: enumerated types the mapper can convert
//! - [`Mappable`] / [`Object`]: declared attribute schemas and type-erased instances
//! - [`FieldSource`]: the read interface, with object and record adapters
//! - [`Params`]: the keyword table passed to constructors

#![deny(unsafe_code)]

pub mod enums;
pub mod error;
pub mod object;
pub mod params;
pub mod source;
pub mod value;

pub use enums::{EnumDescriptor, EnumValue, MappedEnum};
pub use error::{ConstructError, ConversionError};
pub use object::{ClassDescriptor, ClassKey, Mappable, Object, ObjectBox};
pub use params::{FromValue, Params};
pub use source::{FieldSource, ObjectSource, Record};
pub use value::{Value, ValueKind};
