//! Serializable record layer for knowledge-graph query results.
//!
//! Records are produced by an external result builder and written out as
//! JSON for a presentation layer. See [`models`] for the record types and
//! [`encoder`] for the two encoding policies.

pub mod config;
pub mod encoder;
pub mod models;

pub use config::{Config, ConfigError, OutputConfig};
pub use encoder::{ComplexEncoder, EncodeError, Encoder, Policy, Record, RecordKind, SearchEncoder};
pub use models::{
    BigNode, BigNodeType, FakeStatement, Link, ModelError, Node, NodeAttr, NodePayload,
    ResultItem, SearchResult, SimpleNode, Weight,
};
