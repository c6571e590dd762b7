use std::fmt;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{Result, StateError};

pub const DELIMITER: char = '/';

/// Path of the `index`-th entry of the array stored under `key`.
pub fn lookup(key: &str, index: usize) -> String {
    format!("{key}{DELIMITER}{index}")
}

/// Hierarchical key/value state. Paths use [`DELIMITER`] between object keys
/// and array indices, e.g. `layers/2`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateTree {
    root: Map<String, Value>,
    flushed: Option<String>,
    flush_count: u64,
}

impl StateTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(root) => Ok(Self {
                root,
                ..Self::default()
            }),
            _ => Err(StateError::NotAnObject),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(DELIMITER);
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                Value::Object(map) => map.get(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut segments = path.split(DELIMITER);
        let mut current = self.root.get_mut(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                Value::Object(map) => map.get_mut(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn get_value<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .get(path)
            .ok_or_else(|| StateError::MissingKey(path.to_string()))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Inserts or replaces a top-level value, or replaces an existing nested one.
    pub fn set_value<T: Serialize>(&mut self, path: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.set_object(path, value)
    }

    pub fn set_object(&mut self, path: &str, value: Value) -> Result<()> {
        if !path.contains(DELIMITER) {
            self.root.insert(path.to_string(), value);
            return Ok(());
        }
        let slot = self
            .get_mut(path)
            .ok_or_else(|| StateError::MissingKey(path.to_string()))?;
        *slot = value;
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.root.remove(key)
    }

    pub fn insert_array(&mut self, key: &str, size: usize) {
        self.root
            .insert(key.to_string(), Value::Array(vec![Value::Null; size]));
    }

    /// Zero for a missing key or a value that is not an array.
    pub fn array_size(&self, key: &str) -> usize {
        self.get(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Gives `key` an array of `size` null entries. Existing entries are
    /// dropped; callers rewrite the whole array.
    pub fn resize_array(&mut self, key: &str, size: usize) -> Result<()> {
        match self.get_mut(key) {
            Some(Value::Array(items)) => {
                items.clear();
                items.resize(size, Value::Null);
                Ok(())
            }
            Some(_) => Err(StateError::NotAnArray(key.to_string())),
            None => self.set_object(key, Value::Array(vec![Value::Null; size])),
        }
    }

    /// Marks the current content as persisted.
    pub fn flush_state(&mut self) {
        let snapshot = self.to_string();
        debug!("flush state #{} ({} bytes)", self.flush_count + 1, snapshot.len());
        self.flushed = Some(snapshot);
        self.flush_count += 1;
    }

    pub fn flushed(&self) -> Option<&str> {
        self.flushed.as_deref()
    }

    pub fn flush_count(&self) -> u64 {
        self.flush_count
    }
}

impl fmt::Display for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = serde_json::to_string(&self.root).map_err(|_| fmt::Error)?;
        f.write_str(&raw)
    }
}
