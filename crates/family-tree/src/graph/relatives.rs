//! Immediate relatives of one member, across both parent links

use serde::Serialize;

use super::{FamilyGraph, NodeId};

/// A member's resolved parents, spouses and children.
///
/// Unlike the placement tree, which hangs each node under a single parent,
/// this view follows both `fatherId` and `motherId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relatives {
    /// The member's id
    pub id: String,
    /// Resolved father
    pub father: Option<String>,
    /// Resolved mother
    pub mother: Option<String>,
    /// Own spouse first, then everyone naming this member as spouse
    pub spouses: Vec<String>,
    /// Everyone naming this member as father or mother, in input order
    pub children: Vec<String>,
}

impl FamilyGraph {
    /// Collect the immediate relatives of the member with `id`.
    ///
    /// Returns `None` if no such member exists.
    pub fn relatives(&self, id: &str) -> Option<Relatives> {
        let node = self.lookup(id)?;
        let record = &self[node].record;

        let resolve = |target: Option<&str>| {
            target
                .and_then(|t| self.lookup(t))
                .filter(|n| *n != node)
                .map(|n| self[n].id().to_string())
        };

        let mut spouses: Vec<NodeId> = self[node].spouse.into_iter().collect();
        let mut children = Vec::new();
        for (other, person) in self.iter() {
            if other == node {
                continue;
            }
            if person.spouse == Some(node) && !spouses.contains(&other) {
                spouses.push(other);
            }
            let names = |target: Option<&str>| target.and_then(|t| self.lookup(t)) == Some(node);
            if names(person.record.father()) || names(person.record.mother()) {
                children.push(person.id().to_string());
            }
        }

        Some(Relatives {
            id: record.id.clone(),
            father: resolve(record.father()),
            mother: resolve(record.mother()),
            spouses: spouses.iter().map(|n| self[*n].id().to_string()).collect(),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{BuildContext, FamilyGraph, PersonRecord};

    #[test]
    fn test_relatives_follow_both_parents() {
        let records = vec![
            PersonRecord::new("f", "Father").with_spouse("m"),
            PersonRecord::new("m", "Mother"),
            PersonRecord::new("c1", "Child").with_father("f").with_mother("m"),
            PersonRecord::new("c2", "Child").with_mother("m"),
            PersonRecord::new("x", "Ex").with_spouse("f"),
        ];
        let graph = FamilyGraph::build(&records, &BuildContext::default());

        let mother = graph.relatives("m").unwrap();
        assert_eq!(mother.children, vec!["c1", "c2"]);
        assert_eq!(mother.spouses, vec!["f"]);

        let father = graph.relatives("f").unwrap();
        assert_eq!(father.spouses, vec!["m", "x"]);
        assert_eq!(father.children, vec!["c1"]);

        let child = graph.relatives("c1").unwrap();
        assert_eq!(child.father.as_deref(), Some("f"));
        assert_eq!(child.mother.as_deref(), Some("m"));
    }

    #[test]
    fn test_relatives_unknown_member() {
        let graph = FamilyGraph::build(&[], &BuildContext::default());
        assert!(graph.relatives("nobody").is_none());
    }
}
