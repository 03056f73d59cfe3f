//! # Markup Tree
//!
//! The output element tree produced by block rendering, and its serialization
//! to an HTML fragment.
//!
//! A node is either a `Leaf` (optional tag, always a value) or a `Container`
//! (tag plus ordered children). Leaves with no tag serialize as their raw
//! value. Attribute values are written verbatim: quote characters inside them
//! are not escaped.

use std::fmt;

use indexmap::IndexMap;

/// Element attributes, serialized in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node of the output element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// A node with text content and no children.
    Leaf {
        /// Element tag. `None` renders the value as raw text.
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// A tagged node wrapping child nodes.
    Container {
        tag: String,
        children: Vec<MarkupNode>,
        attributes: Attributes,
    },
}

impl MarkupNode {
    /// Creates an untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a tagged leaf.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        MarkupNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a container with the given children.
    pub fn container(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Container {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Appends an attribute, keeping insertion order.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            MarkupNode::Leaf { attributes, .. } | MarkupNode::Container { attributes, .. } => {
                attributes.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Leaf { tag, .. } => tag.as_deref(),
            MarkupNode::Container { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            MarkupNode::Leaf { attributes, .. } | MarkupNode::Container { attributes, .. } => {
                attributes
            }
        }
    }

    /// Children of a container; leaves have none.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Leaf { .. } => &[],
            MarkupNode::Container { children, .. } => children,
        }
    }

    /// Serializes this node and its subtree to HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

/// Serializes a node and its subtree to an HTML fragment.
pub fn serialize(node: &MarkupNode) -> String {
    node.to_html()
}

impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupNode::Leaf {
                tag: None, value, ..
            } => f.write_str(value),
            MarkupNode::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                write!(f, "<{tag}")?;
                write_attributes(f, attributes)?;
                write!(f, ">{value}</{tag}>")
            }
            MarkupNode::Container {
                tag,
                children,
                attributes,
            } => {
                write!(f, "<{tag}")?;
                write_attributes(f, attributes)?;
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &Attributes) -> fmt::Result {
    for (key, value) in attributes {
        write!(f, " {key}=\"{value}\"")?;
    }
    Ok(())
}
