//! Operational monitoring records.
//!
//! A reporting caller hands an [`InfoCollector`] to [`DaqModule::get_info`]; the module adds
//! one record per telemetry struct it publishes. Records are stored as JSON keyed by
//! [`InfoRecord::NAME`] so the collector does not need to know record shapes.
//!
//! [`DaqModule::get_info`]: crate::appfwk::DaqModule::get_info

use crate::error::AppResult;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

/// A telemetry record a module can publish.
pub trait InfoRecord: Serialize {
    /// Key the record is stored under
    const NAME: &'static str;
}

/// Sink for one round of telemetry reports.
#[derive(Debug, Default, Clone)]
pub struct InfoCollector {
    records: BTreeMap<String, serde_json::Value>,
}

impl InfoCollector {
    /// Creates an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record`, replacing any earlier record of the same kind.
    pub fn add<R: InfoRecord>(&mut self, record: &R) -> AppResult<()> {
        let value = serde_json::to_value(record)?;
        self.records.insert(R::NAME.to_string(), value);
        Ok(())
    }

    /// Raw JSON for the record stored under `name`
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.records.get(name)
    }

    /// Reads back a typed record, if present and well formed
    pub fn record<R: InfoRecord + DeserializeOwned>(&self) -> Option<R> {
        self.records
            .get(R::NAME)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Returns true if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records as a single JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.records
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}
