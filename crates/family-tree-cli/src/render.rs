//! Plain-text rendering of the core's outputs

use std::fmt::{self, Write};

use family_tree::{FamilyGraph, PositionedNode, Relatives, SpousePairing, TimelineEvent};

/// Indented outline, two spaces per generation. Adjacent spouses print as
/// `A + B`, spouses placed elsewhere as `A (spouse: B)`.
pub fn outline(graph: &FamilyGraph, positioned: &[PositionedNode]) -> String {
    let mut out = String::new();
    for p in positioned {
        // Writing into a String cannot fail.
        write_member(&mut out, graph, p).ok();
    }
    out
}

fn write_member(out: &mut impl Write, graph: &FamilyGraph, p: &PositionedNode) -> fmt::Result {
    let person = graph[p.node].record();
    write!(
        out,
        "{:indent$}{} [{}]",
        "",
        person.display_name(),
        p.id,
        indent = p.generation_depth * 2
    )?;
    match p.spouse_pairing {
        SpousePairing::Adjacent(s) => {
            write!(out, " + {} [{}]", graph[s].record().display_name(), graph[s].id())?
        }
        SpousePairing::Elsewhere(s) => write!(out, " (spouse: {})", graph[s].id())?,
        SpousePairing::None => {}
    }
    writeln!(out)
}

/// One event per line: `date  label`.
pub fn events(events: &[TimelineEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{}  {}\n", e.date, e.label))
        .collect()
}

/// Member detail block.
pub fn relatives(graph: &FamilyGraph, relatives: &Relatives) -> String {
    let mut out = String::new();
    write_relatives(&mut out, graph, relatives).ok();
    out
}

fn write_relatives(out: &mut impl Write, graph: &FamilyGraph, relatives: &Relatives) -> fmt::Result {
    let name = |id: &str| {
        graph
            .person(id)
            .map(|p| format!("{} [{}]", p.record().display_name(), id))
            .unwrap_or_else(|| id.to_string())
    };
    let list = |ids: &[String]| {
        if ids.is_empty() {
            "-".to_string()
        } else {
            ids.iter().map(|id| name(id.as_str())).collect::<Vec<_>>().join(", ")
        }
    };
    let single = |id: &Option<String>| id.as_deref().map(name).unwrap_or_else(|| "-".to_string());

    writeln!(out, "{}", name(relatives.id.as_str()))?;
    writeln!(out, "  father:   {}", single(&relatives.father))?;
    writeln!(out, "  mother:   {}", single(&relatives.mother))?;
    writeln!(out, "  spouses:  {}", list(&relatives.spouses))?;
    writeln!(out, "  children: {}", list(&relatives.children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use family_tree::{BuildContext, FamilyTree, PersonRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outline() {
        let records = vec![
            PersonRecord::new("1", "John").with_last_name("Doe").with_spouse("2"),
            PersonRecord::new("2", "Mary"),
            PersonRecord::new("3", "Jane").with_father("1"),
        ];
        let tree = FamilyTree::build(&records, &BuildContext::default());
        assert_eq!(
            outline(tree.graph(), tree.layout()),
            "John Doe [1] + Mary [2]\n  Jane [3]\n"
        );
    }

    #[test]
    fn test_relatives_block() {
        let records = vec![
            PersonRecord::new("1", "John").with_spouse("2"),
            PersonRecord::new("2", "Mary"),
            PersonRecord::new("3", "Jane").with_father("1").with_mother("2"),
        ];
        let tree = FamilyTree::build(&records, &BuildContext::default());
        let jane = tree.graph().relatives("3").unwrap();
        assert_eq!(
            relatives(tree.graph(), &jane),
            "Jane [3]\n  father:   John [1]\n  mother:   Mary [2]\n  spouses:  -\n  children: -\n"
        );
    }
}
