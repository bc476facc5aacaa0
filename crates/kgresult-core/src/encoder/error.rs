use thiserror::Error;

use super::RecordKind;

/// Errors that can occur while encoding records.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Object of type {kind} is not JSON serializable by the {policy} encoder")]
    UnsupportedType {
        policy: &'static str,
        kind: RecordKind,
    },

    #[error("Unknown encoder policy: {0} (expected \"search\" or \"complex\")")]
    UnknownPolicy(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
