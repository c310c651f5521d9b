//! Configuration options for mappers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};

/// Named options accepted by [`MapperBuilder::option`](crate::MapperBuilder::option).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapperOption {
    /// Whether a failed source attribute read aborts the mapping.
    FailOnGetAttr,
}

impl MapperOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapperOption::FailOnGetAttr => "fail_on_get_attr",
        }
    }
}

impl fmt::Display for MapperOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapperOption {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fail_on_get_attr" => Ok(MapperOption::FailOnGetAttr),
            other => Err(MappingError::UnknownOption(other.to_string())),
        }
    }
}

/// Options controlling mapper behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Fail when a source attribute cannot be read.
    ///
    /// When disabled, unreadable attributes map to `Value::None`.
    pub fail_on_get_attr: bool,

    /// Maximum nesting depth for nested mapper delegation.
    pub max_depth: usize,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            fail_on_get_attr: true,
            max_depth: 32,
        }
    }
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every failed read is fatal.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Failed reads degrade to absent values.
    pub fn lenient() -> Self {
        Self {
            fail_on_get_attr: false,
            ..Default::default()
        }
    }

    pub fn with_fail_on_get_attr(mut self, enable: bool) -> Self {
        self.fail_on_get_attr = enable;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn set(&mut self, option: MapperOption, value: bool) {
        match option {
            MapperOption::FailOnGetAttr => self.fail_on_get_attr = value,
        }
    }

    pub fn get(&self, option: MapperOption) -> bool {
        match option {
            MapperOption::FailOnGetAttr => self.fail_on_get_attr,
        }
    }
}

/// Declarative part of a mapper configuration.
///
/// Nested mappers and initializers are code and cannot be expressed here.
///
/// ```json
/// {
///   "custom_mappings": { "full_name": "name", "internal_id": null },
///   "options": { "fail_on_get_attr": false }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingProfile {
    /// Left attribute name → right attribute name; `null` suppresses.
    pub custom_mappings: BTreeMap<String, Option<String>>,
    pub options: MapperOptions,
}

impl MappingProfile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
