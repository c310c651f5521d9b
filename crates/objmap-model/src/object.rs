//! Mappable objects and class descriptors.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ConstructError;
use crate::params::Params;
use crate::value::Value;

/// Runtime identity of a class.
///
/// Two keys are equal when they refer to the same Rust type; the name is
/// carried for messages only.
#[derive(Debug, Clone, Copy)]
pub struct ClassKey {
    id: TypeId,
    name: &'static str,
}

impl ClassKey {
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    pub fn of<T: Mappable>() -> Self {
        Self::new::<T>(T::CLASS_NAME)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for ClassKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassKey {}

impl Hash for ClassKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type-erased instance the mapper can read from and hand back.
///
/// Implemented for every [`Mappable`] type. Implement it directly only for
/// types whose attribute set varies per instance.
pub trait Object: Any + fmt::Debug + Send + Sync {
    fn class(&self) -> ClassKey;

    /// Externally visible attribute names of this instance.
    fn attribute_names(&self) -> Vec<String>;

    fn get_attribute(&self, name: &str) -> Option<Value>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_names().iter().any(|attribute| attribute == name)
    }

    fn clone_boxed(&self) -> Box<dyn Object>;

    fn eq_object(&self, other: &dyn Object) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A record type with a declared attribute schema.
///
/// `FIELDS` lists the attributes taking part in implicit name matching,
/// `field` reads one of them, and `construct` is the keyword constructor
/// the mapper calls with the assembled parameter table.
pub trait Mappable: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    const CLASS_NAME: &'static str;
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<Value>;

    fn construct(params: Params) -> Result<Self, ConstructError>;

    /// Representative instance used to discover attributes and their kinds.
    ///
    /// Types without a side-effect-free default return `None`, which limits
    /// the mapper to explicit mappings on that side.
    fn prototype() -> Option<Self> {
        None
    }
}

impl<T: Mappable> Object for T {
    fn class(&self) -> ClassKey {
        ClassKey::of::<T>()
    }

    fn attribute_names(&self) -> Vec<String> {
        T::FIELDS.iter().map(|name| (*name).to_string()).collect()
    }

    fn get_attribute(&self, name: &str) -> Option<Value> {
        self.field(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        T::FIELDS.iter().any(|field| *field == name)
    }

    fn clone_boxed(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    fn eq_object(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Owned, clonable, comparable handle to a type-erased object.
pub struct ObjectBox(Box<dyn Object>);

impl ObjectBox {
    pub fn new<T: Object>(object: T) -> Self {
        Self(Box::new(object))
    }

    pub fn from_boxed(object: Box<dyn Object>) -> Self {
        Self(object)
    }

    pub fn class(&self) -> ClassKey {
        self.0.class()
    }

    pub fn as_object(&self) -> &dyn Object {
        self.0.as_ref()
    }

    pub fn into_boxed(self) -> Box<dyn Object> {
        self.0
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Unwraps the concrete object, if it is a `T`.
    pub fn downcast<T: Object>(self) -> Option<T> {
        self.0.into_any().downcast::<T>().ok().map(|object| *object)
    }
}

impl Clone for ObjectBox {
    fn clone(&self) -> Self {
        Self(self.0.clone_boxed())
    }
}

impl PartialEq for ObjectBox {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_object(other.0.as_ref())
    }
}

impl fmt::Debug for ObjectBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0.as_ref(), f)
    }
}

type Constructor = fn(Params) -> Result<Box<dyn Object>, ConstructError>;
type PrototypeFactory = fn() -> Option<Box<dyn Object>>;

/// Everything the mapper needs to know about one participant class.
#[derive(Clone, Copy)]
pub struct ClassDescriptor {
    key: ClassKey,
    constructor: Constructor,
    prototype_factory: PrototypeFactory,
}

impl ClassDescriptor {
    pub fn of<T: Mappable>() -> Self {
        Self {
            key: ClassKey::of::<T>(),
            constructor: construct_boxed::<T>,
            prototype_factory: prototype_boxed::<T>,
        }
    }

    pub fn key(&self) -> ClassKey {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Builds an instance from a keyword parameter table.
    pub fn construct(&self, params: Params) -> Result<Box<dyn Object>, ConstructError> {
        (self.constructor)(params)
    }

    /// Synthesizes a prototype instance, if the class offers one.
    pub fn prototype(&self) -> Option<Box<dyn Object>> {
        (self.prototype_factory)()
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("class", &self.key.name())
            .finish_non_exhaustive()
    }
}

fn construct_boxed<T: Mappable>(params: Params) -> Result<Box<dyn Object>, ConstructError> {
    T::construct(params).map(|object| Box::new(object) as Box<dyn Object>)
}

fn prototype_boxed<T: Mappable>() -> Option<Box<dyn Object>> {
    T::prototype().map(|object| Box::new(object) as Box<dyn Object>)
}
