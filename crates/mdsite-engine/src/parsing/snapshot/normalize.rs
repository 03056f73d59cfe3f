use std::fmt::Write;

use crate::parsing::markup::MarkupNode;

/// Renders `node` as an indented outline.
///
/// Containers print their tag, tagged leaves print the tag followed by the
/// quoted value, raw text prints the quoted value alone. Attributes follow
/// the tag in insertion order.
pub fn normalize(node: &MarkupNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &MarkupNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        MarkupNode::Leaf {
            tag: None, value, ..
        } => {
            let _ = writeln!(out, "{indent}{value:?}");
        }
        MarkupNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            let _ = write!(out, "{indent}{tag}");
            for (key, val) in attributes {
                let _ = write!(out, " {key}={val:?}");
            }
            let _ = writeln!(out, " {value:?}");
        }
        MarkupNode::Container {
            tag,
            children,
            attributes,
        } => {
            let _ = write!(out, "{indent}{tag}");
            for (key, val) in attributes {
                let _ = write!(out, " {key}={val:?}");
            }
            out.push('\n');
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_nests_by_depth() {
        let tree = MarkupNode::container(
            "div",
            vec![MarkupNode::container(
                "p",
                vec![
                    MarkupNode::text("see "),
                    MarkupNode::leaf("a", "docs").with_attribute("href", "/docs"),
                ],
            )],
        );
        assert_eq!(
            normalize(&tree),
            "div\n  p\n    \"see \"\n    a href=\"/docs\" \"docs\"\n"
        );
    }

    #[test]
    fn newlines_are_escaped() {
        assert_eq!(normalize(&MarkupNode::text("a\nb")), "\"a\\nb\"\n");
    }
}
