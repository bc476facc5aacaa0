//! Record types for knowledge-graph query results.
//!
//! - `node` - path elements (`Node`, `Link`)
//! - `payload` - BigNode payloads (`FakeStatement`, `SimpleNode`)
//! - `big_node` - the validated `BigNode` envelope
//! - `result` - full (`ResultItem`) and flat (`SearchResult`) results

mod big_node;
mod error;
mod node;
mod payload;
mod result;

pub use big_node::{BigNode, BigNodeType};
pub use error::ModelError;
pub use node::{Link, Node, NodeAttr};
pub use payload::{FakeStatement, NodePayload, SimpleNode, FAKE_STATEMENT_TYPE};
pub use result::{ResultItem, SearchResult, Weight};
