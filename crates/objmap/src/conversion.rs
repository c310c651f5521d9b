//! Value conversion rules.
//!
//! Applied when a source value's kind differs from the kind of the matching
//! attribute on the destination prototype. Only conversions between an
//! enumerated type and an integer or string are defined; every other
//! mismatch passes the value through untouched.

use objmap_model::{ConversionError, Value, ValueKind};

/// Converts `value` towards `target`.
///
/// | from       | to         | result                          |
/// |------------|------------|---------------------------------|
/// | enumerated | int        | the member's numeric value      |
/// | enumerated | str        | the member's symbolic name      |
/// | int        | enumerated | member with that numeric value  |
/// | str        | enumerated | member with that symbolic name  |
/// | other      | any        | unchanged                       |
pub fn convert(value: Value, target: ValueKind) -> Result<Value, ConversionError> {
    match (value, target) {
        (Value::Enum(member), ValueKind::Int) => Ok(Value::Int(member.value())),
        (Value::Enum(member), ValueKind::Str) => Ok(Value::Str(member.name().to_string())),
        (Value::Int(number), ValueKind::Enum(descriptor)) => {
            descriptor.by_value(number).map(Value::Enum)
        }
        (Value::Str(name), ValueKind::Enum(descriptor)) => {
            descriptor.by_name(&name).map(Value::Enum)
        }
        (value, _) => Ok(value),
    }
}
