//! Human-readable tree dumps.

use std::fmt::Write;

use crate::Node;

/// Render `node` and its subtree, one node per line, two spaces per level.
///
/// Elements print as `<tag name="value">` with attributes sorted by name.
/// Text prints quoted, with newlines escaped and spaces shown as `·` so
/// leading and trailing whitespace stays visible.
#[must_use]
pub fn dump_tree(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Print `node` and its subtree to stdout in the [`dump_tree`] format.
pub fn print_tree(node: &Node) {
    print!("{}", dump_tree(node));
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    // Writing into a String cannot fail.
    let _ = match node {
        Node::Element(data) => {
            if data.attrs.is_empty() {
                writeln!(out, "{prefix}<{}>", data.tag_name)
            } else {
                let attrs: Vec<String> = data
                    .attrs
                    .sorted()
                    .into_iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect();
                writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))
            }
        }
        Node::Text { content } => {
            let display = content.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
    };
    for child in node.children() {
        write_node(out, child, indent + 1);
    }
}
