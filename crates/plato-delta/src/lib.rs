//! Plato Delta - canonical-form delta building
//!
//! This crate keeps a list of insert/retain/delete operations in
//! minimal normal form as it is built:
//! - No-op pushes are dropped
//! - Adjacent compatible ops are merged
//! - Inserts are moved ahead of trailing deletes
//!
//! Compose, transform and diff build on that invariant and are not part
//! of this crate.
//!
//! # Example
//!
//! ```rust
//! use plato_core::{attributes, Op};
//! use plato_delta::Delta;
//!
//! let mut delta = Delta::new();
//! delta
//!     .insert("a")
//!     .delete(1)
//!     .insert("b")
//!     .retain_with(3, Some(attributes! { "bold" => true }));
//!
//! assert_eq!(
//!     delta.ops(),
//!     &[
//!         Op::insert("ab"),
//!         Op::delete(1),
//!         Op::retain_with(3, Some(attributes! { "bold" => true })),
//!     ]
//! );
//! ```

pub mod canonical;
pub mod delta;

// Re-export main types
pub use canonical::{is_canonical, merge_into, mergeable, Violation};
pub use delta::Delta;
