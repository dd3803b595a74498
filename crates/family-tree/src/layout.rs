//! Flatten a forest into positioned nodes for any renderer
//!
//! The output is a pre-order sequence. Each entry carries its generation
//! depth, its index among its siblings and how its spouse is shown, which is
//! enough for a renderer to place it without walking the tree again.
//!
//! A spouse that is itself a root is drawn next to its partner rather than
//! as a separate tree. The pair is one unit: the spouse's children follow the
//! partner's children, numbered on from them, and name the partner as their
//! `parent` since the spouse has no entry of its own. A spouse that already
//! has a place in some lineage stays there and is only referenced. Edge
//! crossings between remarried families are not minimised.

use serde::Serialize;
use tracing::debug;

use crate::forest::Forest;
use crate::graph::{FamilyGraph, NodeId};

/// How a positioned member's spouse is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "placement", content = "node", rename_all = "camelCase")]
pub enum SpousePairing {
    /// No spouse link in either direction
    None,
    /// Spouse is drawn beside this member, sharing its depth
    Adjacent(NodeId),
    /// Spouse is drawn in its own lineage (or beside someone else)
    Elsewhere(NodeId),
}

impl SpousePairing {
    /// The spouse node, however it is placed.
    pub fn spouse(&self) -> Option<NodeId> {
        match self {
            SpousePairing::None => None,
            SpousePairing::Adjacent(n) | SpousePairing::Elsewhere(n) => Some(*n),
        }
    }
}

/// One member's position in the flattened layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    /// The member
    pub node: NodeId,

    /// The member's record id
    pub id: String,

    /// The positioned node this member hangs under: its placement parent, or
    /// that parent's partner when the parent is drawn as an adjacent spouse
    pub parent: Option<NodeId>,

    /// Generations below the root (roots are 0)
    pub generation_depth: usize,

    /// Position among the children of the parent's pair, or among the
    /// emitted roots
    pub sibling_index: usize,

    /// How the member's spouse is shown
    pub spouse_pairing: SpousePairing,
}

struct Visit {
    node: NodeId,
    parent: Option<NodeId>,
    depth: usize,
    sibling_index: usize,
}

/// Lay out every tree of `forest`, in root order.
///
/// Each node is emitted at most once, and nodes drawn as an adjacent spouse
/// are not emitted at all.
pub fn layout(graph: &FamilyGraph, forest: &Forest) -> Vec<PositionedNode> {
    let inbound_spouse = inbound_spouses(graph);
    let mut visited = vec![false; graph.len()];
    let mut out = Vec::with_capacity(graph.len());
    let mut stack = Vec::new();

    let mut roots_emitted = 0;
    for &root in forest.roots() {
        if visited[root.index()] {
            continue;
        }
        stack.push(Visit {
            node: root,
            parent: None,
            depth: 0,
            sibling_index: roots_emitted,
        });
        roots_emitted += 1;

        while let Some(visit) = stack.pop() {
            if visited[visit.node.index()] {
                continue;
            }
            visited[visit.node.index()] = true;
            let person = &graph[visit.node];
            let depth = visit.depth + 1;

            let spouse = match person.spouse().or(inbound_spouse[visit.node.index()]) {
                Some(s) if graph[s].is_root() && !visited[s.index()] => {
                    visited[s.index()] = true;
                    let offset = person.children().len();
                    push_children(&mut stack, graph[s].children(), visit.node, depth, offset);
                    SpousePairing::Adjacent(s)
                }
                Some(s) => SpousePairing::Elsewhere(s),
                None => SpousePairing::None,
            };
            // Pushed last so the member's own children pop first.
            push_children(&mut stack, person.children(), visit.node, depth, 0);

            out.push(PositionedNode {
                node: visit.node,
                id: person.id().to_string(),
                parent: visit.parent,
                generation_depth: visit.depth,
                sibling_index: visit.sibling_index,
                spouse_pairing: spouse,
            });
        }
    }

    debug!(positioned = out.len(), nodes = graph.len(), "laid out forest");
    out
}

fn push_children(
    stack: &mut Vec<Visit>,
    children: &[NodeId],
    host: NodeId,
    depth: usize,
    offset: usize,
) {
    stack.extend(
        children
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &node)| Visit {
                node,
                parent: Some(host),
                depth,
                sibling_index: offset + i,
            }),
    );
}

/// For each node, the first node (in input order) naming it as spouse.
fn inbound_spouses(graph: &FamilyGraph) -> Vec<Option<NodeId>> {
    let mut inbound = vec![None; graph.len()];
    for (node, person) in graph.iter() {
        if let Some(spouse) = person.spouse() {
            inbound[spouse.index()].get_or_insert(node);
        }
    }
    inbound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildContext, PersonRecord};

    fn lay(records: &[PersonRecord]) -> (FamilyGraph, Vec<PositionedNode>) {
        let graph = FamilyGraph::build(records, &BuildContext::default());
        let forest = Forest::assemble(&graph);
        let positioned = layout(&graph, &forest);
        (graph, positioned)
    }

    #[test]
    fn test_empty_forest() {
        let (_, positioned) = lay(&[]);
        assert!(positioned.is_empty());
    }

    #[test]
    fn test_single_node() {
        let (_, positioned) = lay(&[PersonRecord::new("1", "Solo")]);
        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].generation_depth, 0);
        assert_eq!(positioned[0].spouse_pairing, SpousePairing::None);
    }

    #[test]
    fn test_inbound_spouse_is_paired() {
        // Only "b" names the partner; "a" comes first and still gets the pair.
        let records = vec![PersonRecord::new("a", "A"), PersonRecord::new("b", "B").with_spouse("a")];
        let (graph, positioned) = lay(&records);
        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].id, "a");
        assert_eq!(
            positioned[0].spouse_pairing,
            SpousePairing::Adjacent(graph.lookup("b").unwrap())
        );
    }
}
