use crate::dom::{Document, NodeId};
use crate::markup;

/// A detached `div` holding the parsed markup.
pub(crate) fn container(markup_source: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let div = doc.create_element("div");
    markup::parse_into(&mut doc, div, markup_source).unwrap();
    (doc, div)
}

/// Follow a chain of child indices from `root`.
pub(crate) fn node_at(doc: &Document, root: NodeId, path: &[usize]) -> NodeId {
    path.iter()
        .fold(root, |node, &index| doc.child_at(node, index).unwrap())
}

pub(crate) fn html(doc: &Document, node: NodeId) -> String {
    markup::inner_markup(doc, node)
}
