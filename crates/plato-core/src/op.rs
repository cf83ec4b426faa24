//! Delta operations.
//!
//! An `Op` is one step of a document change: insert new content, retain
//! (skip over, optionally reformatting) existing content, or delete it.
//! Ops are immutable values once built. The constructors collapse an
//! empty attribute map to `None`, and equality treats the two as the same
//! even for ops assembled by hand or deserialized.

use crate::attributes::AttributeMap;
use crate::embed::InsertContent;
use crate::error::{DeltaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single delta operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Insert text or an embed at the current position.
    Insert {
        content: InsertContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attributes: Option<AttributeMap>,
    },
    /// Keep `length` units, applying `attributes` if present.
    Retain {
        length: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attributes: Option<AttributeMap>,
    },
    /// Remove `length` units.
    Delete { length: usize },
}

impl Op {
    /// Insert without attributes.
    pub fn insert(content: impl Into<InsertContent>) -> Self {
        Self::insert_with(content, None)
    }

    /// Insert with optional attributes. `None` and an empty map build the
    /// same op.
    pub fn insert_with(content: impl Into<InsertContent>, attributes: Option<AttributeMap>) -> Self {
        Op::Insert {
            content: content.into(),
            attributes: AttributeMap::normalize(attributes),
        }
    }

    /// Retain without attributes.
    pub fn retain(length: usize) -> Self {
        Self::retain_with(length, None)
    }

    /// Retain with optional attributes, normalized like [`Op::insert_with`].
    pub fn retain_with(length: usize, attributes: Option<AttributeMap>) -> Self {
        Op::Retain {
            length,
            attributes: AttributeMap::normalize(attributes),
        }
    }

    pub fn delete(length: usize) -> Self {
        Op::Delete { length }
    }

    /// Retain from a signed length, rejecting negatives.
    pub fn try_retain(length: i64, attributes: Option<AttributeMap>) -> Result<Self> {
        Ok(Self::retain_with(checked_length("retain", length)?, attributes))
    }

    /// Delete from a signed length, rejecting negatives.
    pub fn try_delete(length: i64) -> Result<Self> {
        Ok(Self::delete(checked_length("delete", length)?))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Op::Insert { .. })
    }

    pub fn is_retain(&self) -> bool {
        matches!(self, Op::Retain { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Op::Delete { .. })
    }

    /// Attributes carried by this op. Deletes never carry any.
    pub fn attributes(&self) -> Option<&AttributeMap> {
        match self {
            Op::Insert { attributes, .. } | Op::Retain { attributes, .. } => {
                attributes.as_ref().filter(|attrs| !attrs.is_empty())
            }
            Op::Delete { .. } => None,
        }
    }

    /// Effective length of the op in document units.
    pub fn len(&self) -> usize {
        match self {
            Op::Insert { content, .. } => content.len(),
            Op::Retain { length, .. } | Op::Delete { length } => *length,
        }
    }

    /// True for ops with no effect: zero-length retains and deletes and
    /// inserts of the empty string.
    pub fn is_noop(&self) -> bool {
        match self {
            Op::Insert { content, .. } => content.is_empty(),
            Op::Retain { length, .. } | Op::Delete { length } => *length == 0,
        }
    }

    /// Short variant name, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Op::Insert { .. } => "insert",
            Op::Retain { .. } => "retain",
            Op::Delete { .. } => "delete",
        }
    }
}

fn checked_length(op: &'static str, length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| DeltaError::NegativeLength { op, length })
}

impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Op::Insert {
                    content: a,
                    attributes: attrs_a,
                },
                Op::Insert {
                    content: b,
                    attributes: attrs_b,
                },
            ) => a == b && AttributeMap::equivalent(attrs_a.as_ref(), attrs_b.as_ref()),
            (
                Op::Retain {
                    length: a,
                    attributes: attrs_a,
                },
                Op::Retain {
                    length: b,
                    attributes: attrs_b,
                },
            ) => a == b && AttributeMap::equivalent(attrs_a.as_ref(), attrs_b.as_ref()),
            (Op::Delete { length: a }, Op::Delete { length: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Op {}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Insert { content, .. } => match content {
                InsertContent::Text(s) => write!(f, "insert({:?}", s)?,
                InsertContent::Embed(e) => write!(f, "insert({}", e)?,
            },
            Op::Retain { length, .. } => write!(f, "retain({}", length)?,
            Op::Delete { length } => return write!(f, "delete({})", length),
        }
        match self.attributes() {
            Some(attrs) => write!(f, ", {})", attrs),
            None => write!(f, ")"),
        }
    }
}
