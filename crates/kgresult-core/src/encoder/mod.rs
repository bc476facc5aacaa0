//! JSON encoding policies for result records.
//!
//! Two policies exist side by side and are never merged:
//!
//! - [`SearchEncoder`] - accepts only `SearchResult` (the flat list view).
//! - [`ComplexEncoder`] - accepts `Node`, `Link`, `ResultItem` and `SearchResult`.
//!
//! Neither accepts `BigNode`, `FakeStatement` or `SimpleNode`; those are
//! written with their own `to_json`.

mod error;

pub use error::EncodeError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{BigNode, FakeStatement, Link, Node, ResultItem, SearchResult, SimpleNode};

/// Concrete record type, as seen by an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Node,
    Link,
    ResultItem,
    SearchResult,
    BigNode,
    FakeStatement,
    SimpleNode,
}

impl RecordKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Link => "Link",
            Self::ResultItem => "ResultItem",
            Self::SearchResult => "SearchResult",
            Self::BigNode => "BigNode",
            Self::FakeStatement => "FakeStatement",
            Self::SimpleNode => "SimpleNode",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record an encoder can be asked to write.
pub trait Record: Serialize {
    fn kind(&self) -> RecordKind;

    /// Kinds of the records nested inside this one.
    fn nested_kinds(&self) -> Vec<RecordKind> {
        Vec::new()
    }
}

impl Record for Node {
    fn kind(&self) -> RecordKind {
        RecordKind::Node
    }
}

impl Record for Link {
    fn kind(&self) -> RecordKind {
        RecordKind::Link
    }
}

impl Record for SearchResult {
    fn kind(&self) -> RecordKind {
        RecordKind::SearchResult
    }
}

impl Record for ResultItem {
    fn kind(&self) -> RecordKind {
        RecordKind::ResultItem
    }

    fn nested_kinds(&self) -> Vec<RecordKind> {
        let mut kinds = Vec::new();
        if !self.nodes.is_empty() {
            kinds.push(RecordKind::Node);
        }
        if !self.links.is_empty() {
            kinds.push(RecordKind::Link);
        }
        kinds
    }
}

impl Record for BigNode {
    fn kind(&self) -> RecordKind {
        RecordKind::BigNode
    }
}

impl Record for FakeStatement {
    fn kind(&self) -> RecordKind {
        RecordKind::FakeStatement
    }
}

impl Record for SimpleNode {
    fn kind(&self) -> RecordKind {
        RecordKind::SimpleNode
    }
}

/// An encoding policy: which record kinds it writes.
///
/// A recognized record is written as a mapping of its fields in
/// declaration order, nested records included. Anything else is an
/// [`EncodeError::UnsupportedType`].
pub trait Encoder {
    /// Policy name used in errors and logs.
    fn name(&self) -> &'static str;

    fn recognizes(&self, kind: RecordKind) -> bool;

    /// Fail unless the record and everything nested in it is recognized.
    fn check<R: Record>(&self, record: &R) -> Result<(), EncodeError> {
        let kinds = std::iter::once(record.kind()).chain(record.nested_kinds());
        for kind in kinds {
            if !self.recognizes(kind) {
                tracing::warn!(policy = self.name(), %kind, "unsupported record type");
                return Err(EncodeError::UnsupportedType {
                    policy: self.name(),
                    kind,
                });
            }
        }
        Ok(())
    }

    /// [`Encoder::check`] plus the debug event every entry point logs.
    fn prepare<R: Record>(&self, record: &R) -> Result<(), EncodeError> {
        self.check(record)?;
        tracing::debug!(policy = self.name(), kind = %record.kind(), "encoding record");
        Ok(())
    }

    fn encode<R: Record>(&self, record: &R) -> Result<Value, EncodeError> {
        self.prepare(record)?;
        Ok(serde_json::to_value(record)?)
    }

    /// Encode a list of records as a JSON array.
    fn encode_all<R: Record>(&self, records: &[R]) -> Result<Value, EncodeError> {
        let values = records
            .iter()
            .map(|r| self.encode(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Array(values))
    }

    fn encode_to_string<R: Record>(&self, record: &R) -> Result<String, EncodeError> {
        self.prepare(record)?;
        Ok(serde_json::to_string(record)?)
    }
}

/// Writes `SearchResult` only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEncoder;

impl Encoder for SearchEncoder {
    fn name(&self) -> &'static str {
        "search"
    }

    fn recognizes(&self, kind: RecordKind) -> bool {
        kind == RecordKind::SearchResult
    }
}

/// Writes `Node`, `Link`, `ResultItem` and `SearchResult`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexEncoder;

impl Encoder for ComplexEncoder {
    fn name(&self) -> &'static str {
        "complex"
    }

    fn recognizes(&self, kind: RecordKind) -> bool {
        matches!(
            kind,
            RecordKind::Node | RecordKind::Link | RecordKind::ResultItem | RecordKind::SearchResult
        )
    }
}

/// Encoder picked at runtime, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Search,
    #[default]
    Complex,
}

impl Encoder for Policy {
    fn name(&self) -> &'static str {
        match self {
            Policy::Search => SearchEncoder.name(),
            Policy::Complex => ComplexEncoder.name(),
        }
    }

    fn recognizes(&self, kind: RecordKind) -> bool {
        match self {
            Policy::Search => SearchEncoder.recognizes(kind),
            Policy::Complex => ComplexEncoder.recognizes(kind),
        }
    }
}

impl FromStr for Policy {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Policy::Search),
            "complex" => Ok(Policy::Complex),
            _ => Err(EncodeError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_encoder_kinds() {
        assert!(SearchEncoder.recognizes(RecordKind::SearchResult));
        for kind in [RecordKind::Node, RecordKind::Link, RecordKind::ResultItem, RecordKind::BigNode] {
            assert!(!SearchEncoder.recognizes(kind));
        }
    }

    #[test]
    fn test_complex_encoder_kinds() {
        for kind in [RecordKind::Node, RecordKind::Link, RecordKind::ResultItem, RecordKind::SearchResult] {
            assert!(ComplexEncoder.recognizes(kind));
        }
        for kind in [RecordKind::BigNode, RecordKind::FakeStatement, RecordKind::SimpleNode] {
            assert!(!ComplexEncoder.recognizes(kind));
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("search".parse::<Policy>().unwrap(), Policy::Search);
        assert_eq!(" Complex ".parse::<Policy>().unwrap(), Policy::Complex);
        assert!(matches!("my".parse::<Policy>(), Err(EncodeError::UnknownPolicy(_))));
    }

    #[test]
    fn test_policy_delegates() {
        assert_eq!(Policy::Search.name(), "search");
        assert!(!Policy::Search.recognizes(RecordKind::Node));
        assert!(Policy::Complex.recognizes(RecordKind::Node));
    }
}
