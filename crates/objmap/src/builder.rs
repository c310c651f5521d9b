//! Mapper configuration.

use std::fmt;
use std::sync::Arc;

use objmap_model::{ClassDescriptor, FieldSource, Mappable, Object, Value};

use crate::engine::{NestedMappers, ObjectMapper, Side};
use crate::options::{MapperOption, MapperOptions, MappingProfile};
use crate::resolve::ExplicitMappings;

/// Computes one destination attribute from the original source.
pub type Initializer = Arc<dyn Fn(&dyn FieldSource) -> Value + Send + Sync>;

/// Wraps a closure as an [`Initializer`].
pub fn initializer<F, V>(f: F) -> Initializer
where
    F: Fn(&dyn FieldSource) -> V + Send + Sync + 'static,
    V: Into<Value>,
{
    Arc::new(move |source: &dyn FieldSource| -> Value { f(source).into() })
}

/// Collects configuration for an [`ObjectMapper`].
///
/// Every method consumes and returns the builder; [`MapperBuilder::build`]
/// freezes the result.
pub struct MapperBuilder {
    left: Side,
    right: Side,
    explicit: ExplicitMappings,
    nested: NestedMappers,
    options: MapperOptions,
}

impl MapperBuilder {
    /// Starts from two classes, synthesizing each prototype if the class
    /// provides one.
    pub fn new(left: ClassDescriptor, right: ClassDescriptor) -> Self {
        let left_prototype = left.prototype();
        let right_prototype = right.prototype();
        tracing::debug!(
            left = left.name(),
            right = right.name(),
            left_prototype = left_prototype.is_some(),
            right_prototype = right_prototype.is_some(),
            "Configuring mapper"
        );
        Self::from_sides(
            Side::new(left, left_prototype),
            Side::new(right, right_prototype),
        )
    }

    pub(crate) fn with_prototypes(
        left: ClassDescriptor,
        right: ClassDescriptor,
        left_prototype: Box<dyn Object>,
        right_prototype: Box<dyn Object>,
    ) -> Self {
        tracing::debug!(
            left = left.name(),
            right = right.name(),
            "Configuring mapper from prototypes"
        );
        Self::from_sides(
            Side::new(left, Some(left_prototype)),
            Side::new(right, Some(right_prototype)),
        )
    }

    fn from_sides(left: Side, right: Side) -> Self {
        Self {
            left,
            right,
            explicit: ExplicitMappings::new(),
            nested: NestedMappers::default(),
            options: MapperOptions::default(),
        }
    }

    /// Adds explicit `left → right` name pairs; `None` suppresses a name in
    /// both directions.
    pub fn custom_mappings<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.explicit.extend(
            mappings
                .into_iter()
                .map(|(left, right)| (left.into(), right.map(Into::into))),
        );
        self
    }

    /// Registers a built mapper for attribute values of its classes.
    pub fn nested_mapper(mut self, mapper: impl Into<Arc<ObjectMapper>>) -> Self {
        self.nested.register(mapper.into());
        self
    }

    /// Sets a left-side attribute, applied when mapping right to left.
    pub fn left_initializer<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn FieldSource) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.left.initializers.insert(name.into(), initializer(f));
        self
    }

    /// Sets a right-side attribute, applied when mapping left to right.
    pub fn right_initializer<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&dyn FieldSource) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.right.initializers.insert(name.into(), initializer(f));
        self
    }

    pub fn left_initializers<I, K>(mut self, initializers: I) -> Self
    where
        I: IntoIterator<Item = (K, Initializer)>,
        K: Into<String>,
    {
        self.left.initializers.extend(
            initializers
                .into_iter()
                .map(|(name, initializer)| (name.into(), initializer)),
        );
        self
    }

    pub fn right_initializers<I, K>(mut self, initializers: I) -> Self
    where
        I: IntoIterator<Item = (K, Initializer)>,
        K: Into<String>,
    {
        self.right.initializers.extend(
            initializers
                .into_iter()
                .map(|(name, initializer)| (name.into(), initializer)),
        );
        self
    }

    pub fn option(mut self, option: MapperOption, value: bool) -> Self {
        self.options.set(option, value);
        self
    }

    pub fn options(mut self, options: MapperOptions) -> Self {
        self.options = options;
        self
    }

    /// Applies the declarative settings of a profile.
    pub fn profile(mut self, profile: &MappingProfile) -> Self {
        self.explicit.extend(profile.custom_mappings.clone());
        self.options = profile.options;
        self
    }

    /// Replaces the left class and prototype with `prototype` and its type.
    pub fn with_left_prototype<T: Mappable>(mut self, prototype: T) -> Self {
        self.left.class = ClassDescriptor::of::<T>();
        self.left.prototype = Some(Box::new(prototype));
        self
    }

    /// Replaces the right class and prototype with `prototype` and its type.
    pub fn with_right_prototype<T: Mappable>(mut self, prototype: T) -> Self {
        self.right.class = ClassDescriptor::of::<T>();
        self.right.prototype = Some(Box::new(prototype));
        self
    }

    pub fn build(self) -> ObjectMapper {
        ObjectMapper {
            left: self.left,
            right: self.right,
            explicit: self.explicit,
            nested: self.nested,
            options: self.options,
        }
    }
}

impl fmt::Debug for MapperBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperBuilder")
            .field("left", &self.left.class.name())
            .field("right", &self.right.class.name())
            .field("explicit", &self.explicit)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
