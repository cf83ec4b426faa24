// File: `crates/plato-core/src/lib.rs`
//! Plato Core - value types for rich-text deltas
//!
//! - [`AttributeMap`]: named scalar formatting attributes
//! - [`InsertContent`] / [`Embed`]: text or opaque inline objects
//! - [`Op`]: insert, retain and delete operations
//!
//! The canonicalizing `Delta` builder lives in `plato-delta`.

pub mod attributes;
pub mod embed;
pub mod error;
pub mod op;

pub use attributes::{AttributeMap, AttributeValue};
pub use embed::{Embed, InsertContent};
pub use error::{DeltaError, Result};
pub use op::Op;
