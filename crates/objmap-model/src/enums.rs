//! Enumerated-type descriptors.
//!
//! An enumeration is described once by a static [`EnumDescriptor`] listing
//! its members as `(symbolic name, numeric value)` pairs. Values carried
//! through the mapper are [`EnumValue`]s pointing back at that descriptor,
//! so the engine can convert between members, their names and their numbers
//! without knowing the concrete Rust enum.

use std::fmt;

use crate::error::ConversionError;

/// Static description of an enumerated type.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumDescriptor {
    name: &'static str,
    members: &'static [(&'static str, i64)],
}

impl EnumDescriptor {
    pub const fn new(name: &'static str, members: &'static [(&'static str, i64)]) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the member at `index` in declaration order.
    pub fn member(&'static self, index: usize) -> Option<EnumValue> {
        (index < self.members.len()).then_some(EnumValue {
            descriptor: self,
            index,
        })
    }

    /// Iterates all members in declaration order.
    pub fn members(&'static self) -> impl Iterator<Item = EnumValue> {
        (0..self.members.len()).map(move |index| EnumValue {
            descriptor: self,
            index,
        })
    }

    /// Looks up the member whose symbolic name equals `name`.
    pub fn by_name(&'static self, name: &str) -> Result<EnumValue, ConversionError> {
        self.members
            .iter()
            .position(|(member, _)| *member == name)
            .map(|index| EnumValue {
                descriptor: self,
                index,
            })
            .ok_or_else(|| ConversionError::UnknownMember {
                enum_name: self.name.to_string(),
                name: name.to_string(),
            })
    }

    /// Looks up the first member whose numeric value equals `value`.
    pub fn by_value(&'static self, value: i64) -> Result<EnumValue, ConversionError> {
        self.members
            .iter()
            .position(|(_, member)| *member == value)
            .map(|index| EnumValue {
                descriptor: self,
                index,
            })
            .ok_or_else(|| ConversionError::UnknownValue {
                enum_name: self.name.to_string(),
                value,
            })
    }
}

/// A member of an enumerated type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    descriptor: &'static EnumDescriptor,
    index: usize,
}

impl EnumValue {
    pub fn descriptor(&self) -> &'static EnumDescriptor {
        self.descriptor
    }

    /// Position of the member in declaration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Symbolic name of the member.
    pub fn name(&self) -> &'static str {
        self.descriptor.members[self.index].0
    }

    /// Underlying numeric value of the member.
    pub fn value(&self) -> i64 {
        self.descriptor.members[self.index].1
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({})", self.descriptor.name, self.name(), self.value())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.descriptor.name, self.name())
    }
}

/// Bridges a Rust enum to its [`EnumDescriptor`].
///
/// `ordinal` must be the position of the variant in `DESCRIPTOR`.
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// enum Priority { Low, Normal, Urgent }
///
/// impl MappedEnum for Priority {
///     const DESCRIPTOR: &'static EnumDescriptor = &EnumDescriptor::new(
///         "Priority",
///         &[("LOW", 1), ("NORMAL", 2), ("URGENT", 3)],
///     );
///
///     fn ordinal(self) -> usize {
///         self as usize
///     }
///
///     fn from_ordinal(ordinal: usize) -> Option<Self> {
///         [Self::Low, Self::Normal, Self::Urgent].get(ordinal).copied()
///     }
/// }
/// ```
pub trait MappedEnum: Copy + Send + Sync + 'static {
    const DESCRIPTOR: &'static EnumDescriptor;

    fn ordinal(self) -> usize;

    fn from_ordinal(ordinal: usize) -> Option<Self>;

    fn to_enum_value(self) -> EnumValue {
        EnumValue {
            descriptor: Self::DESCRIPTOR,
            index: self.ordinal(),
        }
    }

    /// Recovers the Rust variant, if `value` belongs to this enumeration.
    fn from_enum_value(value: &EnumValue) -> Option<Self> {
        if value.descriptor() == Self::DESCRIPTOR {
            Self::from_ordinal(value.index())
        } else {
            None
        }
    }
}
