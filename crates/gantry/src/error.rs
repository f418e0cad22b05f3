//! Error types for gantry.

use thiserror::Error;

/// Errors produced while translating a response into a proxy result.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("response payload is neither JSON-serializable nor text: {0}")]
    UnserializablePayload(#[source] serde_json::Error),
}

/// Errors reported to the run-loop for a single invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("response translation failed: {0}")]
    Convert(#[from] ConvertError),
}

/// Errors that end [`start`](crate::start).
#[derive(Debug, Error)]
pub enum StartError {
    #[error("failed to build async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("lambda run-loop exited: {0}")]
    RunLoop(String),
}
