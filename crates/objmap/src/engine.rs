//! Mapping engine implementation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use objmap_model::{
    ClassDescriptor, ClassKey, FieldSource, Mappable, Object, ObjectBox, ObjectSource, Params,
    Value,
};

use crate::builder::{Initializer, MapperBuilder};
use crate::conversion::convert;
use crate::error::{MappingError, Result};
use crate::options::MapperOptions;
use crate::resolve::{ExplicitMappings, resolve};

/// Which way a mapping call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "left_to_right",
            Direction::RightToLeft => "right_to_left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One participant class with its prototype and the initializers that
/// produce its attributes.
pub(crate) struct Side {
    pub(crate) class: ClassDescriptor,
    pub(crate) prototype: Option<Box<dyn Object>>,
    pub(crate) initializers: BTreeMap<String, Initializer>,
}

impl Side {
    pub(crate) fn new(class: ClassDescriptor, prototype: Option<Box<dyn Object>>) -> Self {
        Self {
            class,
            prototype,
            initializers: BTreeMap::new(),
        }
    }

    fn prototype(&self) -> Option<&dyn Object> {
        self.prototype.as_deref()
    }
}

/// Nested mappers indexed by the class of the value they accept.
#[derive(Default)]
pub(crate) struct NestedMappers {
    from_left: HashMap<ClassKey, Arc<ObjectMapper>>,
    from_right: HashMap<ClassKey, Arc<ObjectMapper>>,
}

impl NestedMappers {
    pub(crate) fn register(&mut self, mapper: Arc<ObjectMapper>) {
        self.from_left.insert(mapper.left_class(), Arc::clone(&mapper));
        self.from_right.insert(mapper.right_class(), mapper);
    }

    fn lookup(&self, direction: Direction, class: ClassKey) -> Option<&ObjectMapper> {
        let table = match direction {
            Direction::LeftToRight => &self.from_left,
            Direction::RightToLeft => &self.from_right,
        };
        table.get(&class).map(Arc::as_ref)
    }

    fn len(&self) -> usize {
        self.from_left.len()
    }
}

/// A configured, immutable mapper between two classes.
///
/// Built through [`MapperBuilder`]; once built it is `Send + Sync` and can be
/// shared freely, including as a nested mapper of other mappers.
///
/// # Example
///
/// ```ignore
/// use objmap::{ObjectMapper, MapperOption};
///
/// let mapper = ObjectMapper::from_class::<Ticket, TicketRow>()
///     .custom_mappings([("assignee", Some("owner"))])
///     .option(MapperOption::FailOnGetAttr, false)
///     .build();
///
/// let row: TicketRow = mapper.map_into(&ticket)?;
/// ```
pub struct ObjectMapper {
    pub(crate) left: Side,
    pub(crate) right: Side,
    pub(crate) explicit: ExplicitMappings,
    pub(crate) nested: NestedMappers,
    pub(crate) options: MapperOptions,
}

impl ObjectMapper {
    /// Starts a mapper between two classes, synthesizing their prototypes.
    pub fn from_class<L: Mappable, R: Mappable>() -> MapperBuilder {
        MapperBuilder::new(ClassDescriptor::of::<L>(), ClassDescriptor::of::<R>())
    }

    /// Starts a mapper from caller-supplied prototype instances.
    pub fn from_prototype<L: Mappable, R: Mappable>(left: L, right: R) -> MapperBuilder {
        MapperBuilder::with_prototypes(
            ClassDescriptor::of::<L>(),
            ClassDescriptor::of::<R>(),
            Box::new(left),
            Box::new(right),
        )
    }

    pub fn from_descriptors(left: ClassDescriptor, right: ClassDescriptor) -> MapperBuilder {
        MapperBuilder::new(left, right)
    }

    pub fn left_class(&self) -> ClassKey {
        self.left.class.key()
    }

    pub fn right_class(&self) -> ClassKey {
        self.right.class.key()
    }

    pub fn left_prototype(&self) -> Option<&dyn Object> {
        self.left.prototype()
    }

    pub fn right_prototype(&self) -> Option<&dyn Object> {
        self.right.prototype()
    }

    pub fn explicit_mappings(&self) -> &ExplicitMappings {
        &self.explicit
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Direction selected by an input of class `class`.
    pub fn direction_of(&self, class: ClassKey) -> Result<Direction> {
        if class == self.left_class() {
            Ok(Direction::LeftToRight)
        } else if class == self.right_class() {
            Ok(Direction::RightToLeft)
        } else {
            Err(MappingError::UnsupportedClass {
                class: class.name().to_string(),
            })
        }
    }

    /// Maps an instance of either class into a new instance of the other.
    ///
    /// The input's class selects the direction. To map a string-keyed
    /// [`Record`](objmap_model::Record), use [`ObjectMapper::map_source`]
    /// with an explicit [`Direction`].
    pub fn map(&self, object: &dyn Object) -> Result<Box<dyn Object>> {
        let direction = self.direction_of(object.class())?;
        self.map_source(direction, &ObjectSource::new(object))
    }

    /// Like [`ObjectMapper::map`], returning the concrete destination type.
    pub fn map_into<T: Mappable>(&self, object: &dyn Object) -> Result<T> {
        let mapped = self.map(object)?;
        let found = mapped.class();
        ObjectBox::from_boxed(mapped)
            .downcast::<T>()
            .ok_or_else(|| MappingError::UnexpectedOutput {
                expected: T::CLASS_NAME.to_string(),
                found: found.name().to_string(),
            })
    }

    /// Maps any field source, such as a [`Record`](objmap_model::Record),
    /// in an explicit direction.
    pub fn map_source(
        &self,
        direction: Direction,
        source: &dyn FieldSource,
    ) -> Result<Box<dyn Object>> {
        self.map_nested(direction, source, 0, usize::MAX)
    }

    /// Assembles the destination parameter table without constructing it.
    pub fn map_params(&self, direction: Direction, source: &dyn FieldSource) -> Result<Params> {
        self.mapped_params(direction, source, 0, self.options.max_depth)
    }

    /// Returns the counterpart of `name` in the opposite class.
    ///
    /// Explicit entries win; a suppressed name resolves to `None`. Otherwise
    /// the name maps to itself if both prototypes expose it.
    pub fn map_attr_name<'a>(&'a self, name: &'a str) -> Result<Option<&'a str>> {
        if let Some(target) = self.explicit.from_left().get(name) {
            return Ok(target.as_deref());
        }
        if let Some(target) = self.explicit.from_right().get(name) {
            return Ok(target.as_deref());
        }
        if let (Some(left), Some(right)) = (self.left.prototype(), self.right.prototype())
            && left.has_attribute(name)
            && right.has_attribute(name)
        {
            return Ok(Some(name));
        }
        Err(MappingError::UnknownAttributeName(name.to_string()))
    }

    fn destination(&self, direction: Direction) -> &Side {
        match direction {
            Direction::LeftToRight => &self.right,
            Direction::RightToLeft => &self.left,
        }
    }

    fn map_nested(
        &self,
        direction: Direction,
        source: &dyn FieldSource,
        depth: usize,
        limit: usize,
    ) -> Result<Box<dyn Object>> {
        let limit = limit.min(self.options.max_depth);
        if depth > limit {
            return Err(MappingError::DepthExceeded { limit });
        }

        let destination = self.destination(direction);
        tracing::debug!(
            source = source.class_name(),
            destination = destination.class.name(),
            %direction,
            depth,
            "Mapping object"
        );

        let params = self.mapped_params(direction, source, depth, limit)?;
        self.construct(destination, params)
    }

    fn mapped_params(
        &self,
        direction: Direction,
        source: &dyn FieldSource,
        depth: usize,
        limit: usize,
    ) -> Result<Params> {
        let destination = self.destination(direction);
        let mapping = resolve(
            source,
            destination.prototype(),
            self.explicit.for_direction(direction),
        );

        let mut params = Params::new();
        for (from, to) in &mapping {
            let Some(to) = to else {
                tracing::debug!(attribute = %from, "Skipping suppressed attribute");
                continue;
            };
            let value = self.read_attribute(source, from)?;
            let value = self.transfer_value(direction, destination, to, value, depth, limit)?;
            params.insert(to.clone(), value);
        }

        // Initializers see the original source and override mapped values.
        for (name, initializer) in &destination.initializers {
            tracing::trace!(attribute = %name, "Applying initializer");
            params.insert(name.clone(), initializer(source));
        }

        Ok(params)
    }

    fn read_attribute(&self, source: &dyn FieldSource, name: &str) -> Result<Value> {
        if let Some(value) = source.read_field(name) {
            return Ok(value);
        }
        if self.options.fail_on_get_attr {
            return Err(MappingError::AttributeRead {
                attribute: name.to_string(),
                class: source.class_name().to_string(),
            });
        }
        tracing::debug!(
            attribute = name,
            class = source.class_name(),
            "Attribute missing, mapping as None"
        );
        Ok(Value::None)
    }

    fn transfer_value(
        &self,
        direction: Direction,
        destination: &Side,
        name: &str,
        value: Value,
        depth: usize,
        limit: usize,
    ) -> Result<Value> {
        if let Value::Object(object) = &value
            && let Some(nested) = self.nested.lookup(direction, object.class())
        {
            let nested_direction = nested.direction_of(object.class())?;
            tracing::debug!(
                attribute = name,
                class = object.class().name(),
                "Delegating to nested mapper"
            );
            let source = ObjectSource::new(object.as_object());
            let mapped = nested.map_nested(nested_direction, &source, depth + 1, limit)?;
            return Ok(Value::Object(ObjectBox::from_boxed(mapped)));
        }

        let expected = destination
            .prototype()
            .and_then(|prototype| prototype.get_attribute(name))
            .map(|attribute| attribute.kind());

        match expected {
            Some(kind) if kind != value.kind() => {
                tracing::trace!(
                    attribute = name,
                    from = %value.kind(),
                    to = %kind,
                    "Converting value"
                );
                convert(value, kind).map_err(|source| MappingError::Conversion {
                    attribute: name.to_string(),
                    source,
                })
            }
            _ => Ok(value),
        }
    }

    fn construct(&self, destination: &Side, params: Params) -> Result<Box<dyn Object>> {
        destination
            .class
            .construct(params.clone())
            .map_err(|source| MappingError::Construction {
                class: destination.class.name().to_string(),
                params,
                source,
            })
    }
}

impl fmt::Debug for ObjectMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMapper")
            .field("left", &self.left.class.name())
            .field("right", &self.right.class.name())
            .field("explicit", &self.explicit)
            .field("nested", &self.nested.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
