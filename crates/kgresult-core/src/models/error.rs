use thiserror::Error;

/// Errors raised while constructing or decoding records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// BigNode type tag outside the allow-list.
    #[error("Invalid type: {0} for BigNode")]
    InvalidType(String),

    /// BigNode payload that is neither a FakeStatement nor a SimpleNode.
    #[error("Node must be a FakeStatement or a SimpleNode: {0}")]
    InvalidPayloadType(String),

    /// Input that does not have the shape of the record at all.
    #[error("Malformed record: {0}")]
    Malformed(String),
}
