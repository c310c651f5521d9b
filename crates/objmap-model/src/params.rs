//! Keyword parameter tables handed to constructors.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use crate::enums::MappedEnum;
use crate::error::{ConstructError, Result};
use crate::object::Mappable;
use crate::value::Value;

/// Name → value table used to build a destination instance.
///
/// Constructors consume entries with the `take*` family and call
/// [`Params::finish`] last so that names they do not accept are reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Removes and converts a parameter.
    ///
    /// A missing parameter is an error unless `T` has a value for absence
    /// (`Option<_>`).
    pub fn take<T: FromValue>(&mut self, name: &str) -> Result<T> {
        let Some(value) = self.values.remove(name) else {
            return T::from_missing()
                .ok_or_else(|| ConstructError::MissingParameter(name.to_string()));
        };
        T::from_value(value).map_err(|value| invalid(name, &T::expected(), &value))
    }

    /// Like [`Params::take`], falling back to `T::default()` when absent.
    pub fn take_or_default<T: FromValue + Default>(&mut self, name: &str) -> Result<T> {
        if self.contains(name) {
            self.take(name)
        } else {
            Ok(T::default())
        }
    }

    /// Removes a parameter holding a member of `E`.
    pub fn take_enum<E: MappedEnum>(&mut self, name: &str) -> Result<E> {
        self.take_optional_enum(name)?
            .ok_or_else(|| ConstructError::MissingParameter(name.to_string()))
    }

    pub fn take_optional_enum<E: MappedEnum>(&mut self, name: &str) -> Result<Option<E>> {
        match self.values.remove(name) {
            None | Some(Value::None) => Ok(None),
            Some(value) => value
                .as_enum()
                .and_then(|member| E::from_enum_value(&member))
                .map(Some)
                .ok_or_else(|| invalid(name, E::DESCRIPTOR.name(), &value)),
        }
    }

    /// Removes a parameter holding a nested `T` instance.
    pub fn take_object<T: Mappable>(&mut self, name: &str) -> Result<T> {
        self.take_optional_object(name)?
            .ok_or_else(|| ConstructError::MissingParameter(name.to_string()))
    }

    pub fn take_optional_object<T: Mappable>(&mut self, name: &str) -> Result<Option<T>> {
        match self.values.remove(name) {
            None | Some(Value::None) => Ok(None),
            Some(Value::Object(object)) => {
                let found = object.class();
                object
                    .downcast::<T>()
                    .map(Some)
                    .ok_or_else(|| ConstructError::InvalidParameter {
                        name: name.to_string(),
                        expected: T::CLASS_NAME.to_string(),
                        found: found.name().to_string(),
                    })
            }
            Some(value) => Err(invalid(name, T::CLASS_NAME, &value)),
        }
    }

    /// Fails if any parameter was left unconsumed.
    pub fn finish(self) -> Result<()> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(ConstructError::UnexpectedParameters(
                self.values.into_keys().collect(),
            ))
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, value)) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

fn invalid(name: &str, expected: &str, found: &Value) -> ConstructError {
    ConstructError::InvalidParameter {
        name: name.to_string(),
        expected: expected.to_string(),
        found: found.kind().to_string(),
    }
}

/// Extraction of a primitive parameter from a [`Value`].
pub trait FromValue: Sized {
    /// Kind name used in error messages.
    fn expected() -> String;

    /// Converts the value, handing it back on a kind mismatch.
    fn from_value(value: Value) -> std::result::Result<Self, Value>;

    /// Value to use when the parameter is absent, if absence is acceptable.
    fn from_missing() -> Option<Self> {
        None
    }
}

impl FromValue for Value {
    fn expected() -> String {
        "any".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        Ok(value)
    }

    fn from_missing() -> Option<Self> {
        Some(Value::None)
    }
}

impl FromValue for bool {
    fn expected() -> String {
        "bool".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(other),
        }
    }
}

impl FromValue for i64 {
    fn expected() -> String {
        "int".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Int(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl FromValue for f64 {
    fn expected() -> String {
        "float".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Float(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl FromValue for String {
    fn expected() -> String {
        "str".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Str(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl FromValue for Vec<Value> {
    fn expected() -> String {
        "list".to_string()
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> String {
        format!("optional {}", T::expected())
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::None => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn from_missing() -> Option<Self> {
        Some(None)
    }
}
