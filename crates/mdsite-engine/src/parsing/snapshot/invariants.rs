use crate::parsing::markup::MarkupNode;

const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "pre",
    "blockquote",
    "ul",
    "ol",
];

const INLINE_TAGS: &[&str] = &["b", "i", "code", "a", "img"];

/// Validates the shape of a converted document.
///
/// Asserts that:
/// - The root is a `div` container
/// - Every root child is a container with a known block tag
/// - `pre` holds exactly one `code` leaf
/// - Lists hold only `li` containers
/// - Every other block holds only inline leaves
/// - Links carry `href`; images carry `src` then `alt` and have no value
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &MarkupNode) {
    assert!(
        matches!(root, MarkupNode::Container { tag, .. } if tag == "div"),
        "root is not a div container: {root:?}"
    );
    for block in root.children() {
        check_block(block);
    }
}

fn check_block(block: &MarkupNode) {
    let MarkupNode::Container { tag, children, .. } = block else {
        panic!("block is not a container: {block:?}");
    };
    assert!(
        BLOCK_TAGS.contains(&tag.as_str()),
        "unknown block tag: {tag}"
    );

    match tag.as_str() {
        "pre" => {
            assert!(
                matches!(children.as_slice(), [MarkupNode::Leaf { tag: Some(t), .. }] if t == "code"),
                "pre must hold exactly one code leaf: {children:?}"
            );
        }
        "ul" | "ol" => {
            for item in children {
                let MarkupNode::Container { tag, children, .. } = item else {
                    panic!("list child is not a container: {item:?}");
                };
                assert_eq!(tag, "li", "list child is not an li");
                children.iter().for_each(check_inline);
            }
        }
        _ => children.iter().for_each(check_inline),
    }
}

fn check_inline(node: &MarkupNode) {
    let MarkupNode::Leaf {
        tag,
        value,
        attributes,
    } = node
    else {
        panic!("inline content is not a leaf: {node:?}");
    };
    let Some(tag) = tag else {
        return;
    };
    assert!(
        INLINE_TAGS.contains(&tag.as_str()),
        "unknown inline tag: {tag}"
    );
    match tag.as_str() {
        "a" => assert!(attributes.contains_key("href"), "link without href"),
        "img" => {
            let keys: Vec<_> = attributes.keys().map(String::as_str).collect();
            assert_eq!(keys, ["src", "alt"], "image attributes out of order");
            assert!(value.is_empty(), "image with a value: {value:?}");
        }
        _ => assert!(attributes.is_empty(), "{tag} with attributes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::document_to_markup;

    #[test]
    fn converted_documents_pass() {
        let root = document_to_markup(
            "# T\n\nSee ![cat](/cat.png) and [docs](/docs)\n\n```\ncode\n```\n\n- a\n- b\n\n1. x\n\n> q",
        )
        .unwrap();
        check(&root);
    }

    #[test]
    #[should_panic(expected = "root is not a div")]
    fn non_div_root_fails() {
        check(&MarkupNode::container("span", vec![]));
    }

    #[test]
    #[should_panic(expected = "pre must hold exactly one code leaf")]
    fn bare_pre_fails() {
        check(&MarkupNode::container(
            "div",
            vec![MarkupNode::container("pre", vec![])],
        ));
    }
}
