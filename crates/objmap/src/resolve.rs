//! Attribute resolution.
//!
//! Computes which source attribute feeds which destination attribute for a
//! single mapping call: identically named attributes present on both the
//! source and the destination prototype, overridden by explicit entries.

use std::collections::{BTreeMap, BTreeSet};

use objmap_model::{FieldSource, Object};

use crate::Direction;

/// Source attribute → destination attribute; `None` suppresses the entry.
pub type ResolvedMapping = BTreeMap<String, Option<String>>;

/// Explicit name overrides, kept as exact inverses of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitMappings {
    from_left: BTreeMap<String, Option<String>>,
    from_right: BTreeMap<String, Option<String>>,
}

impl ExplicitMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `left → right`, or a suppression of `left` when `right` is `None`.
    ///
    /// Any earlier pair touching either name is dropped from both tables.
    pub fn insert(&mut self, left: String, right: Option<String>) {
        self.unlink_left(&left);
        match right {
            Some(right) => {
                self.unlink_right(&right);
                self.from_left.insert(left.clone(), Some(right.clone()));
                self.from_right.insert(right, Some(left));
            }
            None => {
                self.unlink_right(&left);
                self.from_left.insert(left.clone(), None);
                self.from_right.insert(left, None);
            }
        }
    }

    pub fn extend<I>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        for (left, right) in mappings {
            self.insert(left, right);
        }
    }

    pub fn from_left(&self) -> &BTreeMap<String, Option<String>> {
        &self.from_left
    }

    pub fn from_right(&self) -> &BTreeMap<String, Option<String>> {
        &self.from_right
    }

    /// Table consulted when reading a source in `direction`.
    pub fn for_direction(&self, direction: Direction) -> &BTreeMap<String, Option<String>> {
        match direction {
            Direction::LeftToRight => &self.from_left,
            Direction::RightToLeft => &self.from_right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_left.is_empty()
    }

    fn unlink_left(&mut self, left: &str) {
        if let Some(previous) = self.from_left.remove(left) {
            let key = previous.as_deref().unwrap_or(left).to_string();
            self.from_right.remove(&key);
        }
    }

    fn unlink_right(&mut self, right: &str) {
        if let Some(previous) = self.from_right.remove(right) {
            let key = previous.as_deref().unwrap_or(right).to_string();
            self.from_left.remove(&key);
        }
    }
}

/// Resolves the effective mapping for one source.
///
/// Without a destination prototype no implicit entries exist and only the
/// explicit table applies. An implicit entry is dropped when an explicit
/// entry writes the same destination attribute.
pub fn resolve(
    source: &dyn FieldSource,
    destination_prototype: Option<&dyn Object>,
    explicit: &BTreeMap<String, Option<String>>,
) -> ResolvedMapping {
    let mut resolved = ResolvedMapping::new();

    if let Some(prototype) = destination_prototype {
        let destination: BTreeSet<String> = prototype.attribute_names().into_iter().collect();
        let claimed: BTreeSet<&str> = explicit.values().filter_map(Option::as_deref).collect();
        resolved.extend(
            source
                .field_names()
                .into_iter()
                .filter(|name| destination.contains(name) && !claimed.contains(name.as_str()))
                .map(|name| (name.clone(), Some(name))),
        );
    }

    resolved.extend(explicit.iter().map(|(from, to)| (from.clone(), to.clone())));
    resolved
}
