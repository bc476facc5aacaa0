//! Validated envelope pairing a payload with a connection counter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ModelError;
use super::payload::NodePayload;

/// Allowed BigNode type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BigNodeType {
    #[serde(rename = "Fake_Statement")]
    FakeStatement,
    Language,
    Channel,
    Country,
    Entity,
    Location,
    Record,
}

impl BigNodeType {
    pub const ALL: [BigNodeType; 7] = [
        BigNodeType::FakeStatement,
        BigNodeType::Language,
        BigNodeType::Channel,
        BigNodeType::Country,
        BigNodeType::Entity,
        BigNodeType::Location,
        BigNodeType::Record,
    ];

    /// The tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FakeStatement => "Fake_Statement",
            Self::Language => "Language",
            Self::Channel => "Channel",
            Self::Country => "Country",
            Self::Entity => "Entity",
            Self::Location => "Location",
            Self::Record => "Record",
        }
    }
}

impl fmt::Display for BigNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BigNodeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::InvalidType(s.to_string()))
    }
}

/// A payload plus the number of connections it has in the result graph.
///
/// Validated once, at construction or decoding; never re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBigNode")]
pub struct BigNode {
    /// Node identifier.
    pub id: i64,
    /// Connection count.
    pub connections: u64,
    /// Type tag from the allow-list.
    #[serde(rename = "type")]
    pub node_type: BigNodeType,
    /// Wrapped payload.
    pub node: NodePayload,
}

impl BigNode {
    /// Build a BigNode from a textual type tag.
    ///
    /// Fails with [`ModelError::InvalidType`] when the tag is not allowed.
    pub fn new(
        node_type: &str,
        id: i64,
        connections: u64,
        node: impl Into<NodePayload>,
    ) -> Result<Self, ModelError> {
        let node_type: BigNodeType = node_type.parse().inspect_err(|e| {
            tracing::warn!(id, "rejected BigNode: {e}");
        })?;
        Ok(Self::with_type(node_type, id, connections, node))
    }

    /// Build a BigNode from an already-validated type tag.
    pub fn with_type(
        node_type: BigNodeType,
        id: i64,
        connections: u64,
        node: impl Into<NodePayload>,
    ) -> Self {
        Self {
            id,
            connections,
            node_type,
            node: node.into(),
        }
    }

    /// Build a BigNode whose payload is untyped JSON.
    ///
    /// The type tag is checked before the payload, so a bad tag wins over a
    /// bad payload.
    pub fn from_parts(
        node_type: &str,
        id: i64,
        connections: u64,
        node: Value,
    ) -> Result<Self, ModelError> {
        let node_type: BigNodeType = node_type.parse().inspect_err(|e| {
            tracing::warn!(id, "rejected BigNode: {e}");
        })?;
        let node = NodePayload::try_from(node).inspect_err(|e| {
            tracing::warn!(id, "rejected BigNode: {e}");
        })?;
        Ok(Self::with_type(node_type, id, connections, node))
    }

    /// Decode a BigNode from its JSON form, running the same validation as
    /// [`BigNode::from_parts`].
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        let raw: RawBigNode =
            serde_json::from_value(value).map_err(|e| ModelError::Malformed(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn increase_connections(&mut self) {
        self.connections += 1;
    }

    /// `{id, connections, type, node}` with the payload serialized by variant.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "connections": self.connections,
            "type": self.node_type.as_str(),
            "node": self.node.to_json(),
        })
    }
}

/// Unvalidated wire form of a BigNode.
#[derive(Deserialize)]
struct RawBigNode {
    id: i64,
    connections: u64,
    #[serde(rename = "type")]
    node_type: String,
    node: Value,
}

impl TryFrom<RawBigNode> for BigNode {
    type Error = ModelError;

    fn try_from(raw: RawBigNode) -> Result<Self, Self::Error> {
        BigNode::from_parts(&raw.node_type, raw.id, raw.connections, raw.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SimpleNode;

    #[test]
    fn test_type_tags_round_trip_through_str() {
        for t in BigNodeType::ALL {
            assert_eq!(t.as_str().parse::<BigNodeType>().unwrap(), t);
            assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
        }
    }

    #[test]
    fn test_type_tags_are_case_sensitive() {
        assert!("entity".parse::<BigNodeType>().is_err());
        assert!("FakeStatement".parse::<BigNodeType>().is_err());
    }

    #[test]
    fn test_bad_type_wins_over_bad_payload() {
        let result = BigNode::from_parts("Bogus", 1, 0, json!(3));
        assert_eq!(result, Err(ModelError::InvalidType("Bogus".to_string())));
    }

    #[test]
    fn test_serde_matches_to_json() {
        let node = BigNode::new("Entity", 5, 2, SimpleNode::new("Acme", "Entity", 5)).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), node.to_json());
    }
}
