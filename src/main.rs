use billing_notify::config::Config;
use billing_notify::handler;
use billing_notify::storage::S3ObjectStore;
use billing_notify::webhook::WebhookClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn invoke(
    event: LambdaEvent<Value>,
    config: &Config,
    store: &S3ObjectStore,
    webhook: &WebhookClient,
) -> Result<(), Error> {
    if let Err(err) = handler::handle(event, config, store, webhook).await {
        log::error!("Invocation failed: {err}");
        return Err(err.into());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config));
    let webhook = WebhookClient::new(config.webhook_url.clone());

    run(service_fn(|event| invoke(event, &config, &store, &webhook))).await
}
