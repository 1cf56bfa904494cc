//! Layered loading of the input store.
//!
//! 1. the optional `--inputs-file` (TOML, keys are input names)
//! 2. `INPUT_*` variables, when not blank
//! 3. manifest defaults for whatever is still unset

use std::path::Path;

use commit_core::{InputKey, Inputs, KeyValueStore, MemoryStore};

use crate::error::{CliError, Result};

pub fn load<I>(file: Option<&Path>, vars: I) -> Result<Inputs>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut store = match file {
        Some(path) => read_inputs_file(path)?,
        None => MemoryStore::new(),
    };

    let env = MemoryStore::from_vars(vars);
    for (name, value) in env.iter() {
        // The runner exports every declared input, unset ones as "".
        if !value.trim().is_empty() {
            store.set(name, value.to_string());
        }
    }

    let mut inputs = Inputs::new(store);
    inputs.apply_manifest_defaults();
    Ok(inputs)
}

fn read_inputs_file(path: &Path) -> Result<MemoryStore> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::user(format!("Cannot read inputs file {}: {e}", path.display()))
    })?;
    let table: toml::Table = toml::from_str(&content)?;

    let mut store = MemoryStore::new();
    for (name, value) in table {
        let key: InputKey = name.parse()?;
        let value = input_value(&name, value)?;
        tracing::debug!(input = %key, "Loaded from inputs file");
        store.set(&key.env_var(), value);
    }
    Ok(store)
}

/// Render a TOML value the way the runner would pass it: as a string.
/// Arrays of strings become JSON arrays.
fn input_value(name: &str, value: toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Array(items) => {
            let items = items
                .into_iter()
                .map(|item| match item {
                    toml::Value::String(s) => Ok(s),
                    other => Err(CliError::user(format!(
                        "Input '{name}' must be an array of strings, found {}",
                        other.type_str()
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(serde_json::to_string(&items)?)
        }
        other => Err(CliError::user(format!(
            "Unsupported value for input '{name}': {}",
            other.type_str()
        ))),
    }
}
