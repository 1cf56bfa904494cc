//! Step outputs published to the host.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::key::OutputKey;

/// Destination for published outputs.
pub trait OutputSink {
    /// Publish `value` under `key`. An absent value is published as empty.
    fn publish(&mut self, key: OutputKey, value: &str) -> std::io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn publish(&mut self, key: OutputKey, value: &str) -> std::io::Result<()> {
        (**self).publish(key, value)
    }
}

/// Sink that keeps everything in memory, in publication order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub published: Vec<(OutputKey, String)>,
}

impl OutputSink for MemorySink {
    fn publish(&mut self, key: OutputKey, value: &str) -> std::io::Result<()> {
        self.published.push((key, value.to_string()));
        Ok(())
    }
}

/// Current output values, republished on every change.
#[derive(Debug)]
pub struct Outputs<O> {
    sink: O,
    values: BTreeMap<OutputKey, Option<String>>,
}

impl<O: OutputSink> Outputs<O> {
    /// Initialize every output to its safe default and publish each one
    /// immediately, so a run that fails early still reports `false`s.
    pub fn declare(sink: O) -> Result<Self> {
        let mut outputs = Self {
            sink,
            values: BTreeMap::new(),
        };
        for key in OutputKey::ALL {
            outputs.set(key, key.initial_value())?;
        }
        Ok(outputs)
    }

    pub fn set(&mut self, key: OutputKey, value: Option<&str>) -> Result<()> {
        tracing::debug!(output = %key, value = value.unwrap_or(""), "Setting output");
        self.sink
            .publish(key, value.unwrap_or(""))
            .map_err(|source| Error::Output { key, source })?;
        self.values.insert(key, value.map(str::to_string));
        Ok(())
    }

    pub fn set_flag(&mut self, key: OutputKey, value: bool) -> Result<()> {
        self.set(key, Some(if value { "true" } else { "false" }))
    }

    pub fn get(&self, key: OutputKey) -> Option<&str> {
        self.values.get(&key).and_then(|v| v.as_deref())
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn into_sink(self) -> O {
        self.sink
    }
}
