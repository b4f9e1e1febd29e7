use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::billing;
use crate::config::Config;
use crate::date;
use crate::error::NotifyError;
use crate::event::StorageEvent;
use crate::message;
use crate::storage::ObjectStore;
use crate::webhook::Notifier;

/// Process one storage trigger end to end.
///
/// Decodes the trigger, fetches and parses the export object, and posts a
/// single notification. Every failure aborts the invocation; nothing is
/// sent unless the whole pipeline succeeded.
pub async fn handle(
    event: LambdaEvent<Value>,
    config: &Config,
    store: &dyn ObjectStore,
    notifier: &dyn Notifier,
) -> Result<(), NotifyError> {
    let (payload, context) = event.into_parts();
    let event = StorageEvent::decode(&payload)?;

    log::info!("Request ID: {}", context.request_id);
    log::info!("Function: {}", context.invoked_function_arn);
    log::info!("Bucket: {}", event.bucket);
    log::info!("File: {}", event.name);
    log::info!("Metageneration: {}", event.metageneration);
    log::info!("State: {}", event.resource_state);
    log::info!("Created: {:?}", event.time_created);
    log::info!("Updated: {:?}", event.updated);

    if event.is_deletion() {
        log::info!("Object {} was deleted, nothing to report", event.name);
        return Ok(());
    }

    let content = store.fetch(&event.bucket, &event.name).await?;
    let records = billing::parse(&content)?;

    if records.is_empty() {
        log::info!("billing information is empty");
        return Ok(());
    }

    let period = date::extract(&config.object_name_pattern, &event.name)?;
    notifier.send(&message::build(&period, &records)).await?;

    log::info!("File {} processed", event.name);
    Ok(())
}
