//! Payload shapes carried by a [`BigNode`](super::BigNode).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use super::error::ModelError;

/// Type tag written by every [`FakeStatement`].
pub const FAKE_STATEMENT_TYPE: &str = "Fake_Statement";

/// A statement payload.
///
/// The wire form also carries `type` (always `Fake_Statement`) and `id`
/// (always equal to `intra_id`); neither is stored, and decoding rejects an
/// `id` that differs from `intra_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FakeStatement {
    /// Publication date.
    pub date: String,
    /// Statement identifier, also exposed as `id`.
    pub intra_id: i64,
    /// Statement text.
    pub statement: String,
    /// Tokens extracted from the statement.
    pub words: Vec<String>,
    /// Source URL.
    pub url: String,
}

impl FakeStatement {
    pub fn new(
        date: impl Into<String>,
        intra_id: i64,
        statement: impl Into<String>,
        words: Vec<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            intra_id,
            statement: statement.into(),
            words,
            url: url.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.intra_id
    }

    /// Flat mapping of all seven fields.
    pub fn to_json(&self) -> Value {
        json!({
            "type": FAKE_STATEMENT_TYPE,
            "date": self.date,
            "intra_id": self.intra_id,
            "statement": self.statement,
            "words": self.words,
            "id": self.id(),
            "url": self.url,
        })
    }
}

impl Serialize for FakeStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// A named-entity payload: a language, channel, country, location, record...
///
/// The wire form also carries `intra_id`, always equal to `id`; decoding
/// rejects a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleNode {
    /// Caller-supplied entity type.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Entity name.
    pub name: String,
    /// Entity identifier, also exposed as `intra_id`.
    pub id: i64,
}

impl SimpleNode {
    pub fn new(name: impl Into<String>, node_type: impl Into<String>, id: i64) -> Self {
        Self {
            node_type: node_type.into(),
            name: name.into(),
            id,
        }
    }

    pub fn intra_id(&self) -> i64 {
        self.id
    }

    /// Flat mapping of all four fields.
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.node_type,
            "name": self.name,
            "id": self.id,
            "intra_id": self.intra_id(),
        })
    }
}

impl Serialize for SimpleNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// The payload wrapped by a BigNode. Closed over its two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    FakeStatement(FakeStatement),
    SimpleNode(SimpleNode),
}

impl NodePayload {
    pub fn to_json(&self) -> Value {
        match self {
            Self::FakeStatement(s) => s.to_json(),
            Self::SimpleNode(n) => n.to_json(),
        }
    }

    /// Short name of the variant, used in log and error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::FakeStatement(_) => "FakeStatement",
            Self::SimpleNode(_) => "SimpleNode",
        }
    }
}

impl From<FakeStatement> for NodePayload {
    fn from(statement: FakeStatement) -> Self {
        Self::FakeStatement(statement)
    }
}

impl From<SimpleNode> for NodePayload {
    fn from(node: SimpleNode) -> Self {
        Self::SimpleNode(node)
    }
}

/// Recognize an untyped JSON payload.
///
/// An object with a `name` is a SimpleNode; otherwise an object typed
/// `Fake_Statement` is a FakeStatement. Anything else is rejected.
impl TryFrom<Value> for NodePayload {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Some(object) = value.as_object() else {
            return Err(ModelError::InvalidPayloadType(format!("expected an object, got {value}")));
        };

        let invalid = |e: serde_json::Error| ModelError::InvalidPayloadType(e.to_string());
        let wire_id = object.get("id").cloned();
        let wire_intra_id = object.get("intra_id").cloned();

        if object.contains_key("name") {
            let node: SimpleNode = serde_json::from_value(value).map_err(invalid)?;
            check_mirrored_id("intra_id", wire_intra_id, node.id)?;
            Ok(Self::SimpleNode(node))
        } else if object.get("type").and_then(Value::as_str) == Some(FAKE_STATEMENT_TYPE) {
            let statement: FakeStatement = serde_json::from_value(value).map_err(invalid)?;
            check_mirrored_id("id", wire_id, statement.intra_id)?;
            Ok(Self::FakeStatement(statement))
        } else {
            Err(ModelError::InvalidPayloadType(format!("unrecognized payload {value}")))
        }
    }
}

/// A mirrored id on the wire must match the stored one when present.
fn check_mirrored_id(field: &str, wire: Option<Value>, expected: i64) -> Result<(), ModelError> {
    match wire {
        None | Some(Value::Null) => Ok(()),
        Some(value) if value.as_i64() == Some(expected) => Ok(()),
        Some(value) => Err(ModelError::InvalidPayloadType(format!(
            "{field} {value} does not match {expected}"
        ))),
    }
}

impl Serialize for NodePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NodePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        NodePayload::try_from(value).map_err(serde::de::Error::custom)
    }
}
