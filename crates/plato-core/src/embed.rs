//! Insert content - either plain text or an opaque embed.

use crate::error::{DeltaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An opaque inline object such as an image or formula.
///
/// Embeds are compared structurally but never merged with neighbouring
/// content; each one occupies exactly one position in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Embed {
    /// A bare integer token.
    Token(i64),
    /// A keyed object, e.g. `{"image": "https://..."}`.
    Object(Map<String, Value>),
}

impl Embed {
    /// Build an object embed from key/value pairs.
    pub fn object<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Embed::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Embed {
    type Error = DeltaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Embed::Token)
                .ok_or_else(|| DeltaError::UnsupportedEmbed(n.to_string())),
            Value::Object(map) => Ok(Embed::Object(map)),
            other => Err(DeltaError::UnsupportedEmbed(other.to_string())),
        }
    }
}

impl From<i64> for Embed {
    fn from(token: i64) -> Self {
        Embed::Token(token)
    }
}

impl From<i32> for Embed {
    fn from(token: i32) -> Self {
        Embed::Token(token.into())
    }
}

impl From<Map<String, Value>> for Embed {
    fn from(map: Map<String, Value>) -> Self {
        Embed::Object(map)
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Embed::Token(t) => write!(f, "{}", t),
            Embed::Object(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

/// What an insert puts into the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsertContent {
    Text(String),
    Embed(Embed),
}

impl InsertContent {
    pub fn is_text(&self) -> bool {
        matches!(self, InsertContent::Text(_))
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, InsertContent::Embed(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InsertContent::Text(s) => Some(s),
            InsertContent::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            InsertContent::Text(_) => None,
            InsertContent::Embed(e) => Some(e),
        }
    }

    /// Document length occupied by this content. Text counts chars, an
    /// embed always counts as one.
    pub fn len(&self) -> usize {
        match self {
            InsertContent::Text(s) => s.chars().count(),
            InsertContent::Embed(_) => 1,
        }
    }

    /// Only the empty string is empty; embeds never are.
    pub fn is_empty(&self) -> bool {
        match self {
            InsertContent::Text(s) => s.is_empty(),
            InsertContent::Embed(_) => false,
        }
    }
}

impl From<&str> for InsertContent {
    fn from(text: &str) -> Self {
        InsertContent::Text(text.to_string())
    }
}

impl From<String> for InsertContent {
    fn from(text: String) -> Self {
        InsertContent::Text(text)
    }
}

impl From<Embed> for InsertContent {
    fn from(embed: Embed) -> Self {
        InsertContent::Embed(embed)
    }
}

impl From<i64> for InsertContent {
    fn from(token: i64) -> Self {
        InsertContent::Embed(Embed::Token(token))
    }
}

impl From<i32> for InsertContent {
    fn from(token: i32) -> Self {
        InsertContent::Embed(Embed::from(token))
    }
}

impl From<Map<String, Value>> for InsertContent {
    fn from(map: Map<String, Value>) -> Self {
        InsertContent::Embed(Embed::Object(map))
    }
}
