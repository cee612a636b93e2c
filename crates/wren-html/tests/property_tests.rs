//! Property-based tests for the parser.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use wren_html::{AttributesMap, Node, parse};

const TAGS: &[&str] = &["p", "div", "span", "B", "h1", "x9"];
const NAMES: &[&str] = &["id", "class", "href", "dataX", "A1"];
const VALUES: &[&str] = &["", "a", "hello world", "x>y", "caf\u{e9}", "<tag>"];
const TEXTS: &[&str] = &["hello", "caf\u{e9} \u{1F426}", "a > b", "trailing  ", "42", "'q'"];

/// A well-formed document tree together with its markup.
#[derive(Debug, Clone)]
struct Document {
    tree: Node,
    markup: String,
}

fn pick<'a>(g: &mut Gen, choices: &[&'a str]) -> &'a str {
    g.choose(choices).copied().unwrap_or_default()
}

fn arbitrary_element(g: &mut Gen, depth: usize) -> Node {
    let tag = pick(g, TAGS);
    let attrs: AttributesMap = (0..usize::arbitrary(g) % 3)
        .map(|_| (pick(g, NAMES), pick(g, VALUES)))
        .collect();

    let mut children = Vec::new();
    if depth > 0 {
        for _ in 0..usize::arbitrary(g) % 4 {
            if bool::arbitrary(g) {
                children.push(arbitrary_element(g, depth - 1));
            } else if !children.last().is_some_and(Node::is_text) {
                // Adjacent text runs would be read back as one node.
                children.push(Node::text(pick(g, TEXTS)));
            }
        }
    }
    Node::element(tag, attrs, children)
}

fn to_markup(node: &Node, out: &mut String) {
    match node {
        Node::Text { content } => out.push_str(content),
        Node::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            for (name, value) in data.attrs.sorted() {
                out.push_str(&format!(" {name}=\"{value}\""));
            }
            out.push('>');
            for child in &data.children {
                to_markup(child, out);
            }
            out.push_str(&format!("</{}>", data.tag_name));
        }
    }
}

impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        let tree = arbitrary_element(g, 4);
        let mut markup = String::new();
        to_markup(&tree, &mut markup);
        Self { tree, markup }
    }
}

#[quickcheck]
fn well_formed_documents_parse_to_their_tree(doc: Document) -> bool {
    parse(doc.markup.as_bytes()) == Ok(doc.tree)
}

#[quickcheck]
fn parsing_is_deterministic(input: Vec<u8>) -> bool {
    let before = input.clone();
    let first = parse(&input);
    let second = parse(&input);
    first == second && input == before
}

#[quickcheck]
fn arbitrary_markup_never_panics(fragments: Vec<u8>) -> bool {
    // Bias the bytes towards structural characters so the interesting
    // paths are reached more often than with uniform noise.
    const ALPHABET: &[u8] = b"<>/=\" ab\n";
    let input: Vec<u8> = fragments
        .iter()
        .map(|&b| ALPHABET[usize::from(b) % ALPHABET.len()])
        .collect();
    let _ = parse(&input);
    true
}

#[quickcheck]
fn wrapper_only_when_not_exactly_one_top_level_node(count: u8) -> bool {
    let count = usize::from(count % 5);
    let markup = "<i>x</i>".repeat(count);
    match parse(markup.as_bytes()) {
        Ok(Node::Element(data)) if count == 1 => data.tag_name == "i",
        Ok(Node::Element(data)) => data.tag_name == "html" && data.children.len() == count,
        _ => false,
    }
}
