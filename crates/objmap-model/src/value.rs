//! Dynamic attribute values and their runtime kinds.

use std::fmt;

use crate::enums::{EnumDescriptor, EnumValue};
use crate::object::{ClassKey, Object, ObjectBox};

/// A single attribute value as read from, or written into, an object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Enum(EnumValue),
    /// Carried as-is; the mapper never maps list elements.
    List(Vec<Value>),
    Object(ObjectBox),
}

impl Value {
    /// Wraps a concrete object.
    pub fn object<T: Object>(object: T) -> Self {
        Self::Object(ObjectBox::new(object))
    }

    /// Runtime kind used to decide whether a conversion applies.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Enum(member) => ValueKind::Enum(member.descriptor()),
            Self::List(_) => ValueKind::List,
            Self::Object(object) => ValueKind::Object(object.class()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Self::Enum(member) => Some(*member),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Object> {
        match self {
            Self::Object(object) => Some(object.as_object()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value:?}"),
            Self::Enum(member) => write!(f, "{member}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(object) => write!(f, "{object:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<ObjectBox> for Value {
    fn from(value: ObjectBox) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// The runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Str,
    Enum(&'static EnumDescriptor),
    List,
    Object(ClassKey),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("str"),
            Self::Enum(descriptor) => f.write_str(descriptor.name()),
            Self::List => f.write_str("list"),
            Self::Object(class) => f.write_str(class.name()),
        }
    }
}
