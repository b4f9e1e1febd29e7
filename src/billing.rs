use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// One line of a billing export, as written by the billing pipeline.
///
/// Money amounts stay as strings end to end; the notifier never does
/// arithmetic on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingRecord {
    pub account_id: String,
    pub line_item_id: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub measurements: Vec<Measurement>,
    pub cost: Cost,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    pub measurement_id: String,
    pub sum: String,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    pub amount: String,
    pub currency: String,
}

/// Decode an export object into billing records.
pub fn parse(content: &[u8]) -> Result<Vec<BillingRecord>, NotifyError> {
    serde_json::from_slice(content).map_err(|err| NotifyError::Parse(err.to_string()))
}
