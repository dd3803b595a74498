//! Family graph: one node per unique record id, linked by resolved references
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`].
//! "Parent owns child" is just an index in the parent's `children` list,
//! and the spouse link is a second, non-owning index.
//!
//! # Example
//!
//! ```
//! use family_tree::{BuildContext, FamilyGraph, PersonRecord};
//!
//! let records = vec![
//!     PersonRecord::new("1", "John"),
//!     PersonRecord::new("2", "Jane").with_father("1"),
//! ];
//! let graph = FamilyGraph::build(&records, &BuildContext::default());
//!
//! let john = graph.lookup("1").unwrap();
//! let jane = graph.lookup("2").unwrap();
//! assert_eq!(graph[john].children(), &[jane]);
//! assert_eq!(graph[jane].placement_parent(), Some(john));
//! assert!(graph.issues().is_empty());
//! ```

mod builder;
mod relatives;

pub use relatives::Relatives;

use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use crate::context::BuildContext;
use crate::issue::StructuralIssue;
use crate::record::PersonRecord;

/// Index of a node within one [`FamilyGraph`].
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in input order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A record plus the links derived for it during one build.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonNode {
    record: PersonRecord,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    spouse: Option<NodeId>,
}

impl PersonNode {
    fn new(record: PersonRecord) -> Self {
        Self {
            record,
            children: Vec::new(),
            parent: None,
            spouse: None,
        }
    }

    /// The record this node wraps.
    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    /// The record id.
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Children placed under this node, in discovery order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The parent hosting this node in the tree, if any.
    pub fn placement_parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The resolved spouse.
    pub fn spouse(&self) -> Option<NodeId> {
        self.spouse
    }

    /// Whether this node has no placement parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The linked node graph for one snapshot, plus the issues found building it.
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    /// All nodes, in first-occurrence order of their ids
    nodes: Vec<PersonNode>,

    /// Record id to node
    index: IndexMap<String, NodeId>,

    /// Structural issues in detection order
    issues: Vec<StructuralIssue>,
}

impl FamilyGraph {
    /// Build the graph for a snapshot of records.
    ///
    /// Never fails: inconsistencies are collected in [`issues`](Self::issues)
    /// and the offending reference is treated as unset.
    pub fn build(records: &[PersonRecord], ctx: &BuildContext) -> Self {
        builder::build(records, ctx)
    }

    /// Look up a node by record id.
    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Look up a node by record id and return it.
    pub fn person(&self, id: &str) -> Option<&PersonNode> {
        self.lookup(id).map(|n| &self.nodes[n.0])
    }

    /// Get a node by index.
    pub fn get(&self, node: NodeId) -> Option<&PersonNode> {
        self.nodes.get(node.0)
    }

    /// Iterate over all nodes with their ids, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PersonNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Nodes with no placement parent, in input order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(|(_, n)| n.is_root()).map(|(id, _)| id)
    }

    /// Structural issues found while building.
    pub fn issues(&self) -> &[StructuralIssue] {
        &self.issues
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for FamilyGraph {
    type Output = PersonNode;

    fn index(&self, node: NodeId) -> &Self::Output {
        &self.nodes[node.0]
    }
}

/// Build the graph for a snapshot (convenience wrapper).
pub fn build(records: &[PersonRecord], ctx: &BuildContext) -> FamilyGraph {
    FamilyGraph::build(records, ctx)
}
