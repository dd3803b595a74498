//! One snapshot's graph, forest and layout, built together

use crate::context::BuildContext;
use crate::forest::Forest;
use crate::graph::FamilyGraph;
use crate::issue::StructuralIssue;
use crate::layout::{layout, PositionedNode};
use crate::record::PersonRecord;
use crate::timeline::{timeline, TimelineEvent};

/// Everything derived from one snapshot of records.
///
/// Rebuilt from scratch for every snapshot; nothing is shared between
/// builds.
///
/// # Example
///
/// ```
/// use family_tree::{BuildContext, FamilyTree, PersonRecord};
///
/// let records = vec![
///     PersonRecord::new("1", "John"),
///     PersonRecord::new("2", "Jane").with_father("1"),
///     PersonRecord::new("3", "Jack").with_father("1"),
/// ];
/// let tree = FamilyTree::build(&records, &BuildContext::default());
///
/// let depths: Vec<(&str, usize)> = tree
///     .layout()
///     .iter()
///     .map(|p| (p.id.as_str(), p.generation_depth))
///     .collect();
/// assert_eq!(depths, vec![("1", 0), ("2", 1), ("3", 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct FamilyTree {
    graph: FamilyGraph,
    forest: Forest,
    layout: Vec<PositionedNode>,
}

impl FamilyTree {
    /// Build, assemble and lay out `records`.
    pub fn build(records: &[PersonRecord], ctx: &BuildContext) -> Self {
        let graph = FamilyGraph::build(records, ctx);
        let forest = Forest::assemble(&graph);
        let layout = layout(&graph, &forest);
        Self {
            graph,
            forest,
            layout,
        }
    }

    /// The linked graph.
    pub fn graph(&self) -> &FamilyGraph {
        &self.graph
    }

    /// The forest roots.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// The positioned nodes, pre-order.
    pub fn layout(&self) -> &[PositionedNode] {
        &self.layout
    }

    /// Structural issues found while building.
    pub fn issues(&self) -> &[StructuralIssue] {
        self.graph.issues()
    }

    /// Timeline of the records this tree was built from.
    ///
    /// Uses the surviving record for each id, so duplicates resolved by the
    /// build do not produce duplicate events.
    pub fn timeline(&self, ctx: &BuildContext) -> Vec<TimelineEvent> {
        let records: Vec<PersonRecord> = self
            .graph
            .iter()
            .map(|(_, person)| person.record().clone())
            .collect();
        timeline(&records, ctx)
    }
}
