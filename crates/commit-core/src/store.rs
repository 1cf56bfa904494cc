//! Typed access to the input values supplied by the host.
//!
//! Values live in a [`KeyValueStore`] keyed by the host's entry names
//! (`INPUT_ADD`, `INPUT_AUTHOR_NAME`, ...). [`Inputs`] is the only component
//! that writes to it; everything else reads and requests defaults through it.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::key::InputKey;

/// Backing storage for raw input values.
pub trait KeyValueStore {
    fn get(&self, name: &str) -> Option<&str>;
    fn set(&mut self, name: &str, value: String);
    fn delete(&mut self, name: &str);
}

/// In-memory store, usually a snapshot of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the `INPUT_*` entries of an environment-like iterator.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with("INPUT_"))
            .collect();
        Self { entries }
    }

    /// Snapshot the `INPUT_*` entries of the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: String) {
        self.entries.insert(name.to_string(), value);
    }

    fn delete(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

const TRUE_VALUES: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_VALUES: [&str; 3] = ["false", "False", "FALSE"];

/// Typed view over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Inputs<S = MemoryStore> {
    store: S,
}

impl<S: KeyValueStore> Inputs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Trimmed value of `key`, empty when absent.
    pub fn get(&self, key: InputKey) -> String {
        self.store
            .get(&key.env_var())
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Whether `key` holds a non-blank value.
    pub fn is_set(&self, key: InputKey) -> bool {
        !self.get(key).is_empty()
    }

    /// Value of `key` or `None` when blank.
    pub fn get_opt(&self, key: InputKey) -> Option<String> {
        Some(self.get(key)).filter(|v| !v.is_empty())
    }

    /// Coerce `key` to a boolean.
    ///
    /// Only the YAML 1.2 core spellings are accepted; anything else,
    /// including an absent value, is [`Error::InvalidBooleanFormat`].
    pub fn get_bool(&self, key: InputKey) -> Result<bool> {
        let value = self.get(key);
        if TRUE_VALUES.contains(&value.as_str()) {
            Ok(true)
        } else if FALSE_VALUES.contains(&value.as_str()) {
            Ok(false)
        } else {
            Err(Error::InvalidBooleanFormat { key, value })
        }
    }

    /// Write `value` for `key`. `None` or an empty string deletes the entry.
    pub fn set(&mut self, key: InputKey, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => self.store.set(&key.env_var(), v.to_string()),
            _ => self.store.delete(&key.env_var()),
        }
    }

    /// Write `value` only if `key` is currently unset. Returns the effective
    /// value afterwards.
    pub fn set_default(&mut self, key: InputKey, value: &str) -> String {
        if !self.is_set(key) {
            self.set(key, Some(value));
        }
        self.get(key)
    }

    /// Fill every unset key that the action manifest declares a default for.
    pub fn apply_manifest_defaults(&mut self) {
        for key in InputKey::ALL {
            if let Some(default) = key.manifest_default() {
                self.set_default(key, default);
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl Inputs<MemoryStore> {
    /// Inputs from the process environment with manifest defaults applied.
    pub fn from_env() -> Self {
        let mut inputs = Self::new(MemoryStore::from_env());
        inputs.apply_manifest_defaults();
        inputs
    }

    /// Build inputs directly from `(key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (InputKey, &'a str)>) -> Self {
        let mut inputs = Self::new(MemoryStore::new());
        for (key, value) in pairs {
            inputs.set(key, Some(value));
        }
        inputs
    }
}
