use eyre::Context;
use regex::Regex;

/// Environment variable holding the webhook endpoint URL.
const WEBHOOK_ENV: &str = "WEBHOOK";

/// Naming convention of billing export objects, e.g.
/// `billing-2019-01-18.json`. The first capture group is the billing
/// period label embedded in the notification pretext.
const OBJECT_NAME_PATTERN: &str = r"billing-(.*)\.json";

/// Read-only process configuration, built once at startup and passed by
/// reference into the handler.
#[derive(Debug)]
pub struct Config {
    pub webhook_url: String,
    pub object_name_pattern: Regex,
}

impl Config {
    pub fn new(webhook_url: String) -> eyre::Result<Self> {
        Ok(Self {
            webhook_url,
            object_name_pattern: Regex::new(OBJECT_NAME_PATTERN)
                .wrap_err("Failed to compile the object name pattern")?,
        })
    }

    /// Build the configuration from the function environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::new(std::env::var(WEBHOOK_ENV).wrap_err("WEBHOOK is missing")?)
    }
}
