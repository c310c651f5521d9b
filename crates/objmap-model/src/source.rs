//! Read access to named fields.
//!
//! The mapper only ever reads its input through [`FieldSource`]. Objects are
//! read by attribute access through [`ObjectSource`]; string-keyed maps are
//! read by key through [`Record`].

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::object::Object;
use crate::value::Value;

pub trait FieldSource {
    /// Class name reported in errors.
    fn class_name(&self) -> &str;

    fn field_names(&self) -> Vec<String>;

    /// Reads a field; `None` when the field does not exist.
    fn read_field(&self, name: &str) -> Option<Value>;

    /// The underlying object, when the source is one.
    fn as_object(&self) -> Option<&dyn Object> {
        None
    }
}

impl dyn FieldSource + '_ {
    /// Typed access to the underlying object, for initializers.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_object()?.as_any().downcast_ref::<T>()
    }
}

/// Attribute-access adapter over an [`Object`].
#[derive(Debug, Clone, Copy)]
pub struct ObjectSource<'a> {
    object: &'a dyn Object,
}

impl<'a> ObjectSource<'a> {
    pub fn new(object: &'a dyn Object) -> Self {
        Self { object }
    }

    pub fn object(&self) -> &'a dyn Object {
        self.object
    }
}

impl FieldSource for ObjectSource<'_> {
    fn class_name(&self) -> &str {
        self.object.class().name()
    }

    fn field_names(&self) -> Vec<String> {
        self.object.attribute_names()
    }

    fn read_field(&self, name: &str) -> Option<Value> {
        self.object.get_attribute(name)
    }

    fn as_object(&self) -> Option<&dyn Object> {
        Some(self.object)
    }
}

/// A plain string-keyed mapping standing in for an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub const CLASS_NAME: &'static str = "Record";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl FieldSource for Record {
    fn class_name(&self) -> &str {
        Self::CLASS_NAME
    }

    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn read_field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}
