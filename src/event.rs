use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::NotifyError;

/// Object-storage change notification that triggers an invocation.
///
/// Fields absent from the payload decode to their empty values, the two
/// timestamps excepted. Only `bucket` and `name` are required to locate
/// the export; everything else is informational.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageEvent {
    pub bucket: String,
    pub name: String,
    pub metageneration: String,
    pub resource_state: String,
    pub time_created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl StorageEvent {
    /// Decode the raw trigger payload and check that it points at an object.
    pub fn decode(payload: &Value) -> Result<Self, NotifyError> {
        let event: Self = serde_json::from_value(payload.clone())
            .map_err(|err| NotifyError::Decode(err.to_string()))?;

        if event.bucket.is_empty() {
            return Err(NotifyError::Decode("bucket is missing".into()));
        }

        if event.name.is_empty() {
            return Err(NotifyError::Decode("object name is missing".into()));
        }

        Ok(event)
    }

    /// Whether the event describes a deleted object rather than a new one.
    pub fn is_deletion(&self) -> bool {
        self.resource_state == "not_exists"
    }
}
