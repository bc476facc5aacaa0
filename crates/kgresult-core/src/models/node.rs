//! Path elements: the nodes and links that lead to a result statement.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// A value in a node's free-form attribute map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeAttr {
    Int(i64),
    Text(String),
}

impl From<i64> for NodeAttr {
    fn from(value: i64) -> Self {
        NodeAttr::Int(value)
    }
}

impl From<&str> for NodeAttr {
    fn from(value: &str) -> Self {
        NodeAttr::Text(value.to_string())
    }
}

impl From<String> for NodeAttr {
    fn from(value: String) -> Self {
        NodeAttr::Text(value)
    }
}

/// One vertex on the path to a result statement.
///
/// Identity is the path-local `intra_id`: equality and hashing ignore every
/// other field, so a `HashSet<Node>` deduplicates by position on the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Path-local identifier.
    pub intra_id: i64,
    /// Statement text shown for this vertex.
    pub statement: String,
    /// Free-form tag.
    #[serde(default)]
    pub tag: String,
    /// Global graph identifier.
    pub id: i64,
    /// Community (cluster) the vertex belongs to.
    #[serde(default)]
    pub community: i64,
    /// Extra attributes. An empty map is the same as none and is omitted.
    #[serde(
        default,
        deserialize_with = "non_empty_attributes",
        skip_serializing_if = "none_or_empty"
    )]
    pub n: Option<BTreeMap<String, NodeAttr>>,
    /// Vertex degree. Zero is the same as none and is omitted.
    #[serde(
        default,
        deserialize_with = "non_zero_degree",
        skip_serializing_if = "none_or_zero"
    )]
    pub degree: Option<i64>,
}

impl Node {
    /// Create a node with an empty tag, community 0 and no optional fields.
    pub fn new(intra_id: i64, statement: impl Into<String>, id: i64) -> Self {
        Self {
            intra_id,
            statement: statement.into(),
            tag: String::new(),
            id,
            community: 0,
            n: None,
            degree: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_community(mut self, community: i64) -> Self {
        self.community = community;
        self
    }

    /// Attach extra attributes. An empty map counts as not supplied.
    pub fn with_attributes(mut self, n: BTreeMap<String, NodeAttr>) -> Self {
        self.n = if n.is_empty() { None } else { Some(n) };
        self
    }

    /// Set the degree. A degree of 0 counts as not supplied.
    pub fn with_degree(mut self, degree: i64) -> Self {
        self.degree = (degree != 0).then_some(degree);
        self
    }
}

fn none_or_empty(n: &Option<BTreeMap<String, NodeAttr>>) -> bool {
    n.as_ref().map_or(true, BTreeMap::is_empty)
}

fn none_or_zero(degree: &Option<i64>) -> bool {
    degree.map_or(true, |d| d == 0)
}

fn non_empty_attributes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, NodeAttr>>, D::Error> {
    let n = Option::<BTreeMap<String, NodeAttr>>::deserialize(deserializer)?;
    Ok(n.filter(|map| !map.is_empty()))
}

fn non_zero_degree<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let degree = Option::<i64>::deserialize(deserializer)?;
    Ok(degree.filter(|d| *d != 0))
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.intra_id == other.intra_id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.intra_id.hash(state);
    }
}

/// An edge between two nodes of the same result path.
///
/// `source` and `target` hold the `intra_id` of the nodes they connect.
/// Direction is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target node `intra_id`.
    pub target: i64,
    /// Source node `intra_id`.
    pub source: i64,
    /// Free-form tag.
    #[serde(default)]
    pub tag: String,
    /// Edge value; encoded as `""` when absent.
    #[serde(default, with = "empty_or_int")]
    pub value: Option<i64>,
}

impl Link {
    /// Create a link with an empty tag and no value.
    pub fn new(target: i64, source: i64) -> Self {
        Self {
            target,
            source,
            tag: String::new(),
            value: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Wire form of `Link::value`: an integer, or `""` for none.
mod empty_or_int {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_i64(*v),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Int(v)) => Ok(Some(v)),
            Some(Raw::Text(s)) if s.is_empty() => Ok(None),
            Some(Raw::Text(s)) => s
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid link value: {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_node_identity_ignores_other_fields() {
        let a = Node::new(1, "first", 10).with_tag("a");
        let b = Node::new(1, "second", 20).with_community(3);
        let c = Node::new(2, "first", 10).with_tag("a");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Node> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_omits_unsupplied_optionals() {
        let node = Node::new(1, "s", 7);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"intra_id": 1, "statement": "s", "tag": "", "id": 7, "community": 0})
        );
    }

    #[test]
    fn test_node_with_optionals() {
        let mut attrs = BTreeMap::new();
        attrs.insert("lang".to_string(), NodeAttr::from("en"));
        attrs.insert("rank".to_string(), NodeAttr::from(3));

        let node = Node::new(1, "s", 7).with_attributes(attrs).with_degree(4);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["n"], json!({"lang": "en", "rank": 3}));
        assert_eq!(value["degree"], json!(4));
    }

    #[test]
    fn test_zero_degree_is_omitted() {
        let node = Node::new(1, "s", 7).with_degree(0);
        assert!(node.degree.is_none());
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"intra_id":1,"statement":"s","tag":"","id":7,"community":0}"#
        );
    }

    #[test]
    fn test_falsy_fields_set_directly_are_omitted() {
        let mut node = Node::new(1, "s", 7);
        node.n = Some(BTreeMap::new());
        node.degree = Some(0);
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("n").is_none());
        assert!(value.get("degree").is_none());
    }

    #[test]
    fn test_decoding_drops_empty_optionals() {
        let node: Node = serde_json::from_value(json!({
            "intra_id": 1, "statement": "s", "id": 7, "n": {}, "degree": 0
        }))
        .unwrap();
        assert!(node.n.is_none());
        assert!(node.degree.is_none());
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"intra_id":1,"statement":"s","tag":"","id":7,"community":0}"#
        );

        let node: Node = serde_json::from_value(json!({
            "intra_id": 1, "statement": "s", "id": 7, "n": null, "degree": 2
        }))
        .unwrap();
        assert!(node.n.is_none());
        assert_eq!(node.degree, Some(2));
    }

    #[test]
    fn test_empty_attributes_are_omitted() {
        let node = Node::new(1, "s", 7).with_attributes(BTreeMap::new());
        assert!(node.n.is_none());
    }

    #[test]
    fn test_link_value_defaults_to_empty_string() {
        let link = Link::new(2, 1);
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"target": 2, "source": 1, "tag": "", "value": ""})
        );

        let link = link.with_value(4);
        assert_eq!(serde_json::to_value(&link).unwrap()["value"], json!(4));
    }

    #[test]
    fn test_link_value_decoding() {
        let link: Link = serde_json::from_value(json!({"target": 2, "source": 1, "value": ""})).unwrap();
        assert_eq!(link.value, None);

        let link: Link = serde_json::from_value(json!({"target": 2, "source": 1})).unwrap();
        assert_eq!(link.value, None);
        assert_eq!(link.tag, "");

        let link: Link = serde_json::from_value(json!({"target": 2, "source": 1, "value": 9})).unwrap();
        assert_eq!(link.value, Some(9));

        let bad = serde_json::from_value::<Link>(json!({"target": 2, "source": 1, "value": "x"}));
        assert!(bad.is_err());
    }
}
