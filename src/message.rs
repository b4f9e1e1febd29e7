use serde::{Deserialize, Serialize};

use crate::billing::BillingRecord;

/// Display name the notification is posted under.
const BOT_NAME: &str = "gcp-billing-bot";

/// Accent color of the message attachment.
const COLOR: &str = "#36a64f";

/// Appended to every cost amount.
const VALUE_SUFFIX: &str = "ドル（USD）";

/// Appended to the billing period label in the pretext.
const PRETEXT_SUFFIX: &str = "の請求書";

/// One cost line in the notification. Member order is wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: String,
}

/// Notification payload posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub pretext: String,
    pub username: String,
    pub color: String,
    pub fields: Vec<Field>,
}

/// Assemble a notification from the billing period label and the parsed
/// records, one field per record, record order preserved.
pub fn build(period: &str, records: &[BillingRecord]) -> Message {
    let fields = records
        .iter()
        .map(|record| Field {
            title: format!(
                "{}: {}",
                record.project_id.as_deref().unwrap_or_default(),
                record.description
            ),
            value: format!("{}{VALUE_SUFFIX}", record.cost.amount),
        })
        .collect();

    Message {
        pretext: format!("{period}{PRETEXT_SUFFIX}"),
        username: BOT_NAME.to_string(),
        color: COLOR.to_string(),
        fields,
    }
}
