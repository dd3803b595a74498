//! Property tests: forest coverage, idempotence, termination, timeline order

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use family_tree::*;

/// Reference to one of `n` records, or past the end (dangling), or absent.
fn reference(n: usize) -> impl Strategy<Value = Option<usize>> {
    prop::option::of(0..n + 3)
}

/// Records "p0".."p{n-1}" with arbitrary parent and spouse references,
/// including self-references, cycles and dangling ids.
fn snapshot() -> impl Strategy<Value = Vec<PersonRecord>> {
    (0usize..40).prop_flat_map(|n| {
        prop::collection::vec((reference(n), reference(n), reference(n)), n).prop_map(|refs| {
            refs.into_iter()
                .enumerate()
                .map(|(i, (father, mother, spouse))| {
                    let mut r = PersonRecord::new(format!("p{i}"), format!("Person {i}"));
                    r.father_id = father.map(|f| format!("p{f}"));
                    r.mother_id = mother.map(|m| format!("p{m}"));
                    r.spouse_id = spouse.map(|s| format!("p{s}"));
                    r
                })
                .collect()
        })
    })
}

fn context() -> impl Strategy<Value = BuildContext> {
    (any::<bool>(), any::<bool>()).prop_map(|(mother_first, strict)| {
        BuildContext::new()
            .with_parent_precedence(if mother_first {
                ParentPrecedence::MotherFirst
            } else {
                ParentPrecedence::FatherFirst
            })
            .with_spouse_symmetry_check(strict)
    })
}

// =============================================================================
// Every record appears in the forest exactly once
// =============================================================================
proptest! {
    #[test]
    fn forest_covers_every_record_once(records in snapshot(), ctx in context()) {
        let graph = build(&records, &ctx);
        let forest = assemble(&graph);

        let walked: Vec<NodeId> = forest.walk(&graph).collect();
        let unique: HashSet<NodeId> = walked.iter().copied().collect();
        prop_assert_eq!(walked.len(), records.len());
        prop_assert_eq!(unique.len(), records.len());

        for record in &records {
            prop_assert!(graph.lookup(&record.id).is_some());
        }
    }
}

// =============================================================================
// Layout shows every node once, as a member or as an adjacent spouse
// =============================================================================
proptest! {
    #[test]
    fn layout_shows_every_node_once(records in snapshot(), ctx in context()) {
        let graph = build(&records, &ctx);
        let forest = assemble(&graph);
        let positioned = layout(&graph, &forest);

        let mut seen = HashSet::new();
        let mut pairings = HashMap::new();
        let mut roots = 0;
        for p in &positioned {
            prop_assert!(seen.insert(p.node));
            if let SpousePairing::Adjacent(s) = p.spouse_pairing {
                prop_assert!(seen.insert(s));
            }
            match p.parent {
                Some(parent) => {
                    // Hosts come earlier in pre-order.
                    let pairing = pairings.get(&parent).copied();
                    prop_assert!(pairing.is_some());
                    let mut unit: Vec<NodeId> = graph[parent].children().to_vec();
                    if let Some(SpousePairing::Adjacent(s)) = pairing {
                        unit.extend_from_slice(graph[s].children());
                    }
                    prop_assert_eq!(unit[p.sibling_index], p.node);
                }
                None => {
                    prop_assert_eq!(p.generation_depth, 0);
                    prop_assert_eq!(p.sibling_index, roots);
                    roots += 1;
                }
            }
            pairings.insert(p.node, p.spouse_pairing);
        }
        prop_assert_eq!(seen.len(), graph.len());
    }
}

// =============================================================================
// Building twice gives the same structure
// =============================================================================
proptest! {
    #[test]
    fn build_is_idempotent(records in snapshot(), ctx in context()) {
        let first = FamilyTree::build(&records, &ctx);
        let second = FamilyTree::build(&records, &ctx);

        prop_assert_eq!(first.forest(), second.forest());
        prop_assert_eq!(first.layout(), second.layout());
        prop_assert_eq!(first.issues(), second.issues());
    }
}

// =============================================================================
// A refused parent edge always leaves the node as a root
// =============================================================================
proptest! {
    #[test]
    fn cycle_issues_make_roots(records in snapshot(), ctx in context()) {
        let graph = build(&records, &ctx);
        for issue in graph.issues() {
            if let StructuralIssue::CycleDetected { id, field, .. } = issue {
                if *field != ReferenceField::SpouseId {
                    prop_assert!(graph.person(id).unwrap().is_root());
                }
            }
        }
    }
}

// =============================================================================
// Duplicate ids collapse to one node each
// =============================================================================
proptest! {
    #[test]
    fn duplicates_collapse(ids in prop::collection::vec(0u8..8, 0..30)) {
        let records: Vec<PersonRecord> = ids
            .iter()
            .map(|i| PersonRecord::new(i.to_string(), "Someone"))
            .collect();
        let distinct: HashSet<u8> = ids.iter().copied().collect();

        let graph = build(&records, &BuildContext::default());
        let duplicates = graph
            .issues()
            .iter()
            .filter(|i| i.kind() == IssueKind::DuplicateId)
            .count();
        prop_assert_eq!(graph.len(), distinct.len());
        prop_assert_eq!(duplicates, records.len() - distinct.len());
    }
}

// =============================================================================
// Timeline is sorted and stable
// =============================================================================
proptest! {
    #[test]
    fn timeline_sorted_and_stable(
        dates in prop::collection::vec(prop::option::of((1990u32..1993, 1u32..3, 1u32..3)), 0..40)
    ) {
        let records: Vec<PersonRecord> = dates
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let r = PersonRecord::new(i.to_string(), "Someone");
                match d {
                    Some((y, m, day)) => r.born(format!("{y:04}-{m:02}-{day:02}")),
                    None => r,
                }
            })
            .collect();

        let events = timeline(&records, &BuildContext::default());
        prop_assert_eq!(events.len(), dates.iter().filter(|d| d.is_some()).count());

        for pair in events.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
            if pair[0].date == pair[1].date {
                let a: usize = pair[0].id.parse().unwrap();
                let b: usize = pair[1].id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }
}
