//! Ordered property storage with typed accessors.

use std::borrow::Cow;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ObjectError;
use crate::value::PropValue;

/// The properties of one widget, in insertion order.
///
/// Insertion order is what the parser saw (or the order a builder set
/// properties in); the serializer imposes its own ordering on output, so
/// iteration order here only matters for debugging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: IndexMap<String, PropValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PropValue> {
        self.entries.get_mut(key)
    }

    /// Set a property, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a property. Order of the remaining entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PropValue)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut PropValue> {
        self.entries.values_mut()
    }

    /// Look up a property that must exist.
    ///
    /// `displayFileName` gets a synthetic `{0: ""}` when absent: EDM treats
    /// a Related Display with no files as having one empty slot, and
    /// downstream code relies on that shape being present.
    pub fn require(&self, key: &str) -> Result<Cow<'_, PropValue>, ObjectError> {
        match self.entries.get(key) {
            Some(v) => Ok(Cow::Borrowed(v)),
            None if key == "displayFileName" => {
                let mut m = BTreeMap::new();
                m.insert(0, String::new());
                Ok(Cow::Owned(PropValue::Map(m)))
            }
            None => Err(ObjectError::MissingProperty(key.to_string())),
        }
    }

    /// A required integer property.
    pub fn int(&self, key: &str) -> Result<i64, ObjectError> {
        self.require(key)?
            .as_int()
            .ok_or_else(|| ObjectError::WrongShape {
                key: key.to_string(),
                expected: "an integer",
            })
    }

    /// A required string property.
    pub fn string(&self, key: &str) -> Result<String, ObjectError> {
        match self.require(key)?.as_ref() {
            PropValue::Str(s) => Ok(s.clone()),
            _ => Err(ObjectError::WrongShape {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PropertyMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
