//! Query result records.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::node::{Link, Node};

/// Rank or score of a result. Integer weights stay integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Int(i64),
    Float(f64),
}

impl Weight {
    pub fn as_f64(&self) -> f64 {
        match self {
            Weight::Int(w) => *w as f64,
            Weight::Float(w) => *w,
        }
    }
}

impl From<i32> for Weight {
    fn from(weight: i32) -> Self {
        Weight::Int(weight.into())
    }
}

impl From<i64> for Weight {
    fn from(weight: i64) -> Self {
        Weight::Int(weight)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight::Float(weight)
    }
}

/// A target statement together with the path that justifies it.
///
/// `nodes` and `links` are expected to form a connected path ending at the
/// statement identified by `intra_id`. This is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Rank or score of the result.
    pub weight: Weight,
    /// Identifier of the target statement.
    pub intra_id: i64,
    /// Query that produced this result.
    pub query_id: i64,
    /// Target statement text.
    pub statement: String,
    /// Selection flag.
    #[serde(default)]
    pub selected: i64,
    /// Path to the target statement, in order.
    pub nodes: Vec<Node>,
    /// Edges along the path, in order.
    pub links: Vec<Link>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub channel: Vec<String>,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl ResultItem {
    pub fn new(
        weight: impl Into<Weight>,
        intra_id: i64,
        query_id: i64,
        statement: impl Into<String>,
        nodes: Vec<Node>,
        links: Vec<Link>,
    ) -> Self {
        Self {
            weight: weight.into(),
            intra_id,
            query_id,
            statement: statement.into(),
            selected: 0,
            nodes,
            links,
            date: String::new(),
            channel: Vec::new(),
            location: Vec::new(),
            url: String::new(),
        }
    }

    pub fn with_selected(mut self, selected: i64) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_channel(mut self, channel: Vec<String>) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_location(mut self, location: Vec<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// A path-less summary of one statement, for list display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub intra_id: i64,
    pub query_id: i64,
    pub statement: String,
    #[serde(default)]
    pub selected: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub channel: Vec<String>,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl SearchResult {
    pub fn new(intra_id: i64, query_id: i64, statement: impl Into<String>) -> Self {
        Self {
            intra_id,
            query_id,
            statement: statement.into(),
            selected: 0,
            date: String::new(),
            channel: Vec::new(),
            location: Vec::new(),
            url: String::new(),
            languages: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: i64) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_channel(mut self, channel: Vec<String>) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_location(mut self, location: Vec<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    /// Flat mapping of all nine fields, in declaration order.
    pub fn to_json(&self) -> Value {
        json!({
            "intra_id": self.intra_id,
            "query_id": self.query_id,
            "statement": self.statement,
            "selected": self.selected,
            "date": self.date,
            "channel": self.channel,
            "location": self.location,
            "url": self.url,
            "languages": self.languages,
        })
    }
}
