//! Canonical form - the merge predicate and invariant checks.
//!
//! A delta is canonical when:
//!  - no op has zero effective length
//!  - no two adjacent ops are mergeable
//!  - no insert directly follows a delete
//!
//! Two ops are mergeable when they are the same variant and:
//!  - Insert: both contents are text and the attributes are equivalent
//!  - Retain: the attributes are equivalent
//!  - Delete: always
//!
//! Embeds never merge, not even with an identical embed.

use plato_core::{AttributeMap, InsertContent, Op};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether `next` could be folded into `last`.
pub fn mergeable(last: &Op, next: &Op) -> bool {
    match (last, next) {
        (
            Op::Insert {
                content: InsertContent::Text(_),
                attributes: a,
            },
            Op::Insert {
                content: InsertContent::Text(_),
                attributes: b,
            },
        )
        | (Op::Retain { attributes: a, .. }, Op::Retain { attributes: b, .. }) => {
            AttributeMap::equivalent(a.as_ref(), b.as_ref())
        }
        (Op::Delete { .. }, Op::Delete { .. }) => true,
        _ => false,
    }
}

/// Fold `next` into `last` in place.
///
/// Returns `None` when the merge happened, otherwise hands `next` back
/// untouched so the caller can place it elsewhere.
pub fn merge_into(last: &mut Op, next: Op) -> Option<Op> {
    if !mergeable(last, &next) {
        return Some(next);
    }
    match (last, next) {
        (
            Op::Insert {
                content: InsertContent::Text(text),
                ..
            },
            Op::Insert {
                content: InsertContent::Text(more),
                ..
            },
        ) => text.push_str(&more),
        (Op::Retain { length, .. }, Op::Retain { length: more, .. })
        | (Op::Delete { length }, Op::Delete { length: more }) => *length += more,
        (_, next) => return Some(next),
    }
    None
}

/// A place where an op sequence breaks canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// The op at `index` has no effect.
    ZeroLength { index: usize },
    /// The ops at `index` and `index + 1` should have been merged.
    Mergeable { index: usize },
    /// An insert at `index + 1` follows the delete at `index`.
    InsertAfterDelete { index: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ZeroLength { index } => write!(f, "zero-length op at {}", index),
            Violation::Mergeable { index } => {
                write!(f, "mergeable ops at {} and {}", index, index + 1)
            }
            Violation::InsertAfterDelete { index } => {
                write!(f, "insert at {} follows delete at {}", index + 1, index)
            }
        }
    }
}

/// Every canonical-form violation in `ops`, in index order.
pub fn violations(ops: &[Op]) -> Vec<Violation> {
    let mut found = Vec::new();
    for (index, op) in ops.iter().enumerate() {
        if op.is_noop() {
            found.push(Violation::ZeroLength { index });
        }
    }
    for (index, pair) in ops.windows(2).enumerate() {
        if mergeable(&pair[0], &pair[1]) {
            found.push(Violation::Mergeable { index });
        } else if pair[0].is_delete() && pair[1].is_insert() {
            found.push(Violation::InsertAfterDelete { index });
        }
    }
    found.sort_by_key(|v| match v {
        Violation::ZeroLength { index }
        | Violation::Mergeable { index }
        | Violation::InsertAfterDelete { index } => *index,
    });
    found
}

pub fn is_canonical(ops: &[Op]) -> bool {
    violations(ops).is_empty()
}
