#![allow(dead_code)]

use richtext_dom_engine::{Document, NodeId, markup};

/// A detached `body` element holding the parsed markup.
pub fn body(source: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    markup::parse_into(&mut doc, body, source).unwrap();
    (doc, body)
}

/// Follow a chain of child indices from `root`.
pub fn node_at(doc: &Document, root: NodeId, path: &[usize]) -> NodeId {
    path.iter()
        .fold(root, |node, &index| doc.child_at(node, index).unwrap())
}

pub fn html(doc: &Document, node: NodeId) -> String {
    markup::inner_markup(doc, node)
}
