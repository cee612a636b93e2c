//! Node tree for the Wren parser.
//!
//! # Design
//!
//! The tree is a plain owned value: every [`Node`] owns its children, its
//! strings and its [`AttributesMap`]. There are no parent pointers and no
//! shared mutability, so a parsed tree can be moved across threads and
//! dropped independently of the buffer it was parsed from.

mod attributes;
mod print;

use std::collections::HashSet;

use serde::Serialize;

pub use attributes::AttributesMap;
pub use print::{dump_tree, print_tree};

/// A node of the parsed document.
///
/// Text nodes are leaves by construction; only elements have children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A run of character data between tags.
    Text {
        /// The text exactly as it appeared in the input.
        content: String,
    },
    /// An element with its attributes and children.
    Element(ElementData),
}

/// Element-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// The tag name, compared byte-for-byte when matching close tags.
    #[serde(rename = "tagName")]
    pub tag_name: String,
    /// Attributes declared on the opening tag.
    #[serde(rename = "attributes")]
    pub attrs: AttributesMap,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Returns the set of class names from the `class` attribute.
    ///
    /// The value is split on ASCII whitespace; empty segments are ignored.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Create an element node.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Self>) -> Self {
        Self::Element(ElementData {
            tag_name: tag_name.into(),
            attrs,
            children,
        })
    }

    /// Whether this is a text node.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Whether this is an element node.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            Self::Text { .. } => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            Self::Element(_) => None,
        }
    }

    /// The node's children; always empty for text nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(data) => &data.children,
            Self::Text { .. } => &[],
        }
    }

    /// Iterate over this node and all of its descendants in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenated text of every text node in this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(Self::as_text).collect()
    }

    /// First element (in document order, including `self`) with this tag name.
    #[must_use]
    pub fn find_element(&self, tag_name: &str) -> Option<&ElementData> {
        self.descendants()
            .filter_map(Self::as_element)
            .find(|data| data.tag_name == tag_name)
    }

    /// Number of levels in this subtree: 1 for a leaf or an empty element.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

/// Pre-order iterator over a node and its descendants.
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call stack.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
