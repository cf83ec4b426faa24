//! The Delta builder.
//!
//! A `Delta` is an ordered list of ops kept in canonical form as it is
//! built. Every mutation funnels through [`Delta::push`], which looks only
//! at the tail of the list:
//!
//! ```text
//! push(op):
//!   op is a no-op                  -> drop it
//!   list is empty                  -> append
//!   op merges into last            -> replace last with the merge
//!   op is insert, last is delete   -> move op ahead of the trailing
//!                                     delete run, merging with the op
//!                                     before that run if possible
//!   otherwise                      -> append
//! ```

use crate::canonical::{self, Violation};
use plato_core::{AttributeMap, InsertContent, Op};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// An ordered, canonical list of delta operations.
///
/// Cloning a delta copies its ops; the clone mutates independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delta {
    ops: Vec<Op>,
}

impl Delta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Wrap an existing op sequence as-is.
    ///
    /// The ops are not renormalized; the caller vouches that they are
    /// already canonical. Use `collect()` to build a delta through `push`.
    pub fn from_ops(ops: impl Into<Vec<Op>>) -> Self {
        Self { ops: ops.into() }
    }

    /// The ops in application order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Number of ops (not document length, see [`Delta::length`]).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Insert text or an embed without attributes.
    pub fn insert(&mut self, content: impl Into<InsertContent>) -> &mut Self {
        self.push(Op::insert(content))
    }

    /// Insert with optional attributes.
    pub fn insert_with(
        &mut self,
        content: impl Into<InsertContent>,
        attributes: Option<AttributeMap>,
    ) -> &mut Self {
        self.push(Op::insert_with(content, attributes))
    }

    pub fn delete(&mut self, length: usize) -> &mut Self {
        self.push(Op::delete(length))
    }

    pub fn retain(&mut self, length: usize) -> &mut Self {
        self.push(Op::retain(length))
    }

    /// Retain with optional attributes.
    pub fn retain_with(&mut self, length: usize, attributes: Option<AttributeMap>) -> &mut Self {
        self.push(Op::retain_with(length, attributes))
    }

    /// Append `op`, keeping the list canonical.
    pub fn push(&mut self, op: Op) -> &mut Self {
        if op.is_noop() {
            trace!(%op, "dropping no-op");
            return self;
        }

        let last = match self.ops.last_mut() {
            Some(last) => last,
            None => {
                trace!(%op, "appending to empty delta");
                self.ops.push(op);
                return self;
            }
        };

        let op = match canonical::merge_into(last, op) {
            None => {
                trace!(len = self.ops.len(), "merged into tail");
                return self;
            }
            Some(op) => op,
        };

        if op.is_insert() && self.ops.last().is_some_and(Op::is_delete) {
            self.insert_before_deletes(op);
            return self;
        }

        trace!(%op, "appending");
        self.ops.push(op);
        self
    }

    /// Place an insert ahead of the trailing run of deletes.
    fn insert_before_deletes(&mut self, op: Op) {
        let mut index = self.ops.len();
        while index > 0 && self.ops[index - 1].is_delete() {
            index -= 1;
        }

        let op = match index.checked_sub(1) {
            Some(prev) => match canonical::merge_into(&mut self.ops[prev], op) {
                None => {
                    trace!(index = prev, "merged ahead of deletes");
                    return;
                }
                Some(op) => op,
            },
            None => op,
        };

        trace!(%op, index, "inserting ahead of deletes");
        self.ops.insert(index, op);
    }

    /// Drop a trailing retain that carries no attributes.
    ///
    /// Such a retain has no effect at the end of a change. This is never
    /// run by `push`; call it once a delta is complete.
    pub fn chop(&mut self) -> &mut Self {
        if matches!(self.ops.last(), Some(op @ Op::Retain { .. }) if op.attributes().is_none()) {
            self.ops.pop();
        }
        self
    }

    /// Total length of all ops.
    pub fn length(&self) -> usize {
        self.ops.iter().map(Op::len).sum()
    }

    /// Net change in document length when this delta is applied.
    pub fn change_length(&self) -> i64 {
        self.ops
            .iter()
            .map(|op| match op {
                Op::Insert { .. } => op.len() as i64,
                Op::Delete { length } => -(*length as i64),
                Op::Retain { .. } => 0,
            })
            .sum()
    }

    /// A document is a delta made only of inserts.
    pub fn is_document(&self) -> bool {
        self.ops.iter().all(Op::is_insert)
    }

    pub fn is_canonical(&self) -> bool {
        canonical::is_canonical(&self.ops)
    }

    pub fn violations(&self) -> Vec<Violation> {
        canonical::violations(&self.ops)
    }
}

impl From<Vec<Op>> for Delta {
    fn from(ops: Vec<Op>) -> Self {
        Self::from_ops(ops)
    }
}

impl Extend<Op> for Delta {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        for op in iter {
            self.push(op);
        }
    }
}

/// Collecting pushes each op, so the result is canonical.
impl FromIterator<Op> for Delta {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        let mut delta = Delta::new();
        delta.extend(iter);
        delta
    }
}

impl IntoIterator for Delta {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops: Vec<String> = self.ops.iter().map(|op| op.to_string()).collect();
        write!(f, "[{}]", ops.join(", "))
    }
}
