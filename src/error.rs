use thiserror::Error;

/// Failure of a single notifier invocation.
///
/// Each variant maps to one pipeline stage. Any of them aborts the
/// invocation immediately and is reported to the runtime as-is; there is
/// no retry and no partial delivery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("invalid storage event: {0}")]
    Decode(String),

    #[error("failed to read object: {0}")]
    Fetch(String),

    #[error("failed to decode billing records: {0}")]
    Parse(String),

    #[error("object name does not match the billing export convention: {0}")]
    Extract(String),

    #[error("failed to deliver notification: {0}")]
    Dispatch(String),
}
