//! Partition the family graph into ordered, disjoint rooted trees

use serde::Serialize;
use tracing::debug;

use crate::graph::{FamilyGraph, NodeId};

/// Root nodes of every tree in a [`FamilyGraph`], in input order.
///
/// Each node of the graph is reachable from exactly one root by following
/// `children` links. Sibling order is the order children were discovered
/// while walking the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forest {
    roots: Vec<NodeId>,
}

impl Forest {
    /// Collect the roots of `graph`.
    pub fn assemble(graph: &FamilyGraph) -> Self {
        let roots: Vec<NodeId> = graph.roots().collect();
        debug!(nodes = graph.len(), roots = roots.len(), "assembled forest");
        Self { roots }
    }

    /// The root nodes.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of trees.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether the forest has no trees.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every node in one tree, pre-order, without recursion.
    pub fn descendants<'g>(
        &self,
        graph: &'g FamilyGraph,
        root: NodeId,
    ) -> impl Iterator<Item = NodeId> + 'g {
        let mut stack = vec![root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(graph[node].children().iter().rev().copied());
            Some(node)
        })
    }

    /// Every node in the forest, tree by tree, pre-order.
    pub fn walk<'a>(&'a self, graph: &'a FamilyGraph) -> impl Iterator<Item = NodeId> + 'a {
        self.roots
            .iter()
            .flat_map(move |root| self.descendants(graph, *root))
    }
}

/// Assemble the forest for a graph (convenience wrapper).
pub fn assemble(graph: &FamilyGraph) -> Forest {
    Forest::assemble(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildContext, PersonRecord};

    #[test]
    fn test_root_order_follows_input() {
        let records = vec![
            PersonRecord::new("z", "Zed"),
            PersonRecord::new("a", "Ann").with_father("z"),
            PersonRecord::new("m", "Max"),
        ];
        let graph = FamilyGraph::build(&records, &BuildContext::default());
        let forest = Forest::assemble(&graph);
        let roots: Vec<&str> = forest.roots().iter().map(|n| graph[*n].id()).collect();
        assert_eq!(roots, vec!["z", "m"]);
    }

    #[test]
    fn test_walk_is_pre_order() {
        let records = vec![
            PersonRecord::new("1", "A"),
            PersonRecord::new("2", "B").with_father("1"),
            PersonRecord::new("3", "C").with_father("2"),
            PersonRecord::new("4", "D").with_father("1"),
        ];
        let graph = FamilyGraph::build(&records, &BuildContext::default());
        let forest = Forest::assemble(&graph);
        let order: Vec<&str> = forest.walk(&graph).map(|n| graph[n].id()).collect();
        assert_eq!(order, vec!["1", "2", "3", "4"]);
    }
}
