//! # Family Tree
//!
//! Turns a flat snapshot of person records into a genealogical forest.
//!
//! Each record may name a father, a mother and a spouse by id. The core
//! resolves those references into a graph, hangs every person under a
//! single placement parent so each lineage is a tree, and flattens the
//! result into positioned nodes a renderer can draw directly. A timeline
//! of life events is derived from the same records.
//!
//! ## Architecture
//!
//! - **Graph Builder** ([`graph`]): index records by id, link parents and
//!   spouses, collect [`StructuralIssue`]s
//! - **Forest Assembler** ([`forest`]): ordered roots, disjoint trees
//! - **Layout Engine** ([`layout`]): pre-order positions with spouse pairing
//! - **Timeline** ([`timeline`]): dated events, stable chronological order
//! - **Record Store** ([`store`]): snapshot boundary to persistence
//!
//! All operations are pure, synchronous functions over an owned or borrowed
//! snapshot. Bad data never aborts a build; it is reported alongside the
//! result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod forest;
pub mod graph;
pub mod issue;
pub mod layout;
pub mod record;
pub mod store;
pub mod timeline;
pub mod tree;
pub mod validate;

// Re-export main types
pub use context::{BuildContext, DuplicatePolicy, ParentPrecedence};
pub use error::{FamilyTreeError, Result};
pub use forest::{assemble, Forest};
pub use graph::{build, FamilyGraph, NodeId, PersonNode, Relatives};
pub use issue::{IssueKind, ReferenceField, StructuralIssue};
pub use layout::{layout, PositionedNode, SpousePairing};
pub use record::{records_from_json, Gender, PersonRecord};
pub use store::{MemoryStore, RecordStore};
pub use timeline::{timeline, EventKind, TimelineEvent};
pub use tree::FamilyTree;
pub use validate::{validate_record, FieldError};

/// Family tree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
