//! Two-pass graph construction: index the records, then link them

use indexmap::map::Entry;
use indexmap::IndexMap;
use petgraph::unionfind::UnionFind;
use tracing::{debug, warn};

use super::{FamilyGraph, NodeId, PersonNode};
use crate::context::{BuildContext, DuplicatePolicy, ParentPrecedence};
use crate::issue::{ReferenceField, StructuralIssue};
use crate::record::PersonRecord;

/// Where an id was first seen and which record currently holds it.
struct Slot {
    first_position: usize,
    chosen: usize,
}

pub(super) fn build(records: &[PersonRecord], ctx: &BuildContext) -> FamilyGraph {
    let mut issues = Vec::new();

    // ═══════════════════════════════════════════════════════════════════
    // Pass 1: index
    // ═══════════════════════════════════════════════════════════════════

    let mut slots: IndexMap<&str, Slot> = IndexMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match slots.entry(record.id.as_str()) {
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                issues.push(StructuralIssue::DuplicateId {
                    id: record.id.clone(),
                    position,
                    first_position: slot.first_position,
                });
                if ctx.duplicate_policy == DuplicatePolicy::LastWriteWins {
                    slot.chosen = position;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Slot {
                    first_position: position,
                    chosen: position,
                });
            }
        }
    }

    let mut graph = FamilyGraph {
        nodes: Vec::with_capacity(slots.len()),
        index: IndexMap::with_capacity(slots.len()),
        issues: Vec::new(),
    };
    for (i, (id, slot)) in slots.iter().enumerate() {
        graph.index.insert((*id).to_string(), NodeId(i));
        graph
            .nodes
            .push(PersonNode::new(records[slot.chosen].clone()));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Pass 2: link
    // ═══════════════════════════════════════════════════════════════════

    // Tree membership. A node is still a root when its turn comes, so
    // hanging it under a parent in the same tree would close a cycle.
    let mut trees = UnionFind::new(graph.nodes.len());
    for i in 0..graph.nodes.len() {
        let node = NodeId(i);
        link_parent(&mut graph, &mut trees, node, ctx, &mut issues);
        link_spouse(&mut graph, node, &mut issues);
    }

    if ctx.check_spouse_symmetry {
        check_spouse_symmetry(&graph, &mut issues);
    }

    for issue in &issues {
        warn!(id = %issue.record_id(), kind = ?issue.kind(), "{issue}");
    }
    debug!(
        records = records.len(),
        nodes = graph.nodes.len(),
        issues = issues.len(),
        "built family graph"
    );

    graph.issues = issues;
    graph
}

/// Resolve the parent references of `node` and place it under the first
/// one that resolves, in precedence order.
///
/// Once a parent resolves, the remaining one is only checked when
/// `report_secondary_dangling` is set.
fn link_parent(
    graph: &mut FamilyGraph,
    trees: &mut UnionFind<usize>,
    node: NodeId,
    ctx: &BuildContext,
    issues: &mut Vec<StructuralIssue>,
) {
    let record = &graph.nodes[node.0].record;
    let father = (ReferenceField::FatherId, record.father().map(str::to_string));
    let mother = (ReferenceField::MotherId, record.mother().map(str::to_string));
    let candidates = match ctx.parent_precedence {
        ParentPrecedence::FatherFirst => [father, mother],
        ParentPrecedence::MotherFirst => [mother, father],
    };

    let mut placement = None;
    for (field, target) in candidates {
        if placement.is_some() && !ctx.report_secondary_dangling {
            break;
        }
        let Some(target) = target else { continue };
        match graph.lookup(&target) {
            Some(parent) => {
                if placement.is_none() {
                    placement = Some((field, target, parent));
                }
            }
            None => issues.push(StructuralIssue::DanglingReference {
                id: graph.nodes[node.0].record.id.clone(),
                field,
                target,
            }),
        }
    }

    let Some((field, target, parent)) = placement else {
        return;
    };

    if !trees.union(node.0, parent.0) {
        issues.push(StructuralIssue::CycleDetected {
            id: graph.nodes[node.0].record.id.clone(),
            field,
            target,
        });
        return;
    }

    graph.nodes[parent.0].children.push(node);
    graph.nodes[node.0].parent = Some(parent);
}

fn link_spouse(graph: &mut FamilyGraph, node: NodeId, issues: &mut Vec<StructuralIssue>) {
    let record = &graph.nodes[node.0].record;
    let Some(target) = record.spouse().map(str::to_string) else {
        return;
    };
    let id = record.id.clone();

    if target == id {
        issues.push(StructuralIssue::CycleDetected {
            id,
            field: ReferenceField::SpouseId,
            target,
        });
        return;
    }

    match graph.lookup(&target) {
        Some(spouse) => graph.nodes[node.0].spouse = Some(spouse),
        None => issues.push(StructuralIssue::DanglingReference {
            id,
            field: ReferenceField::SpouseId,
            target,
        }),
    }
}

fn check_spouse_symmetry(graph: &FamilyGraph, issues: &mut Vec<StructuralIssue>) {
    for (node, person) in graph.iter() {
        let Some(spouse) = person.spouse else { continue };
        let partner = &graph[spouse];
        if partner.spouse != Some(node) {
            issues.push(StructuralIssue::AsymmetricSpouse {
                id: person.record.id.clone(),
                spouse: partner.record.id.clone(),
                partner_of_spouse: partner.record.spouse().map(str::to_string),
            });
        }
    }
}
