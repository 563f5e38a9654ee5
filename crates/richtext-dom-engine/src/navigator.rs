//! # Tree navigation
//!
//! Read-only traversal primitives: leaves in document order, ancestor
//! chains and searches, and a bounded depth-first iterator. Nothing here
//! mutates the tree.

use crate::dom::{Document, NodeId};

/// Outcome of a [`NodeFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Accept,
    Reject,
}

impl From<bool> for FilterAction {
    fn from(accept: bool) -> Self {
        if accept {
            FilterAction::Accept
        } else {
            FilterAction::Reject
        }
    }
}

/// Caller-supplied node predicate used by the ancestor searches.
pub trait NodeFilter {
    fn accept_node(&self, doc: &Document, node: NodeId) -> FilterAction;
}

impl<F> NodeFilter for F
where
    F: Fn(&Document, NodeId) -> FilterAction,
{
    fn accept_node(&self, doc: &Document, node: NodeId) -> FilterAction {
        self(doc, node)
    }
}

/// Accepts elements whose tag is one of the given names, ignoring case.
#[derive(Debug, Clone)]
pub struct WithName {
    names: Vec<String>,
}

impl WithName {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_ascii_lowercase()).collect(),
        }
    }
}

impl NodeFilter for WithName {
    fn accept_node(&self, doc: &Document, node: NodeId) -> FilterAction {
        doc.tag_name(node)
            .is_some_and(|tag| self.names.iter().any(|n| n.eq_ignore_ascii_case(tag)))
            .into()
    }
}

/// Accepts elements that are not displayed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenElements;

impl NodeFilter for HiddenElements {
    fn accept_node(&self, doc: &Document, node: NodeId) -> FilterAction {
        doc.is_hidden(node).into()
    }
}

// ============ Leaves ============

pub fn first_leaf(doc: &Document, node: NodeId) -> NodeId {
    let mut descendant = node;
    while let Some(child) = doc.first_child(descendant) {
        descendant = child;
    }
    descendant
}

pub fn last_leaf(doc: &Document, node: NodeId) -> NodeId {
    let mut descendant = node;
    while let Some(child) = doc.last_child(descendant) {
        descendant = child;
    }
    descendant
}

/// The first leaf after `node`'s subtree in document order.
pub fn next_leaf(doc: &Document, node: NodeId) -> Option<NodeId> {
    let mut ancestor = node;
    loop {
        if let Some(sibling) = doc.next_sibling(ancestor) {
            return Some(first_leaf(doc, sibling));
        }
        ancestor = doc.parent(ancestor)?;
    }
}

/// The last leaf before `node`'s subtree in document order.
pub fn previous_leaf(doc: &Document, node: NodeId) -> Option<NodeId> {
    let mut ancestor = node;
    loop {
        if let Some(sibling) = doc.previous_sibling(ancestor) {
            return Some(last_leaf(doc, sibling));
        }
        ancestor = doc.parent(ancestor)?;
    }
}

// ============ Ancestors ============

/// `node` followed by each of its ancestors, ending at the root.
pub fn ancestors(doc: &Document, node: NodeId) -> Vec<NodeId> {
    let mut chain = vec![node];
    let mut current = node;
    while let Some(parent) = doc.parent(current) {
        chain.push(parent);
        current = parent;
    }
    chain
}

/// The closest inclusive ancestor accepted by the filter.
pub fn first_ancestor(doc: &Document, node: NodeId, filter: &impl NodeFilter) -> Option<NodeId> {
    let mut ancestor = Some(node);
    while let Some(current) = ancestor {
        if filter.accept_node(doc, current) == FilterAction::Accept {
            return Some(current);
        }
        ancestor = doc.parent(current);
    }
    None
}

/// The farthest inclusive ancestor accepted by the filter.
pub fn last_ancestor(doc: &Document, node: NodeId, filter: &impl NodeFilter) -> Option<NodeId> {
    let mut ancestor = Some(node);
    let mut last = None;
    while let Some(current) = ancestor {
        if filter.accept_node(doc, current) == FilterAction::Accept {
            last = Some(current);
        }
        ancestor = doc.parent(current);
    }
    last
}

pub fn first_ancestor_with_name(doc: &Document, node: NodeId, names: &[&str]) -> Option<NodeId> {
    first_ancestor(doc, node, &WithName::new(names))
}

/// The deepest node that is an inclusive ancestor of both `a` and `b`, or
/// `None` when they live in different trees.
pub fn nearest_common_ancestor(doc: &Document, a: NodeId, b: NodeId) -> Option<NodeId> {
    if a == b {
        return Some(a);
    }
    let a_chain = ancestors(doc, a);
    let b_chain = ancestors(doc, b);
    a_chain
        .iter()
        .rev()
        .zip(b_chain.iter().rev())
        .take_while(|(x, y)| x == y)
        .last()
        .map(|(common, _)| *common)
}

/// The outermost ancestor reached while every visited node is inline.
pub fn farthest_inline_ancestor(doc: &Document, node: NodeId) -> Option<NodeId> {
    let mut ancestor = Some(node);
    let mut inline_ancestor = None;
    while let Some(current) = ancestor {
        if !doc.is_inline(current) {
            break;
        }
        inline_ancestor = Some(current);
        ancestor = doc.parent(current);
    }
    inline_ancestor
}

pub fn nearest_flow_container(doc: &Document, node: NodeId) -> Option<NodeId> {
    first_ancestor(doc, node, &|d: &Document, n: NodeId| d.is_flow_container(n).into())
}

/// The block that holds `node`'s inline run, or `node` itself when it is
/// already block-level.
pub fn nearest_block_container(doc: &Document, node: NodeId) -> Option<NodeId> {
    match farthest_inline_ancestor(doc, node) {
        None => Some(node),
        Some(ancestor) => doc.parent(ancestor),
    }
}

// ============ Descendants ============

/// Pre-order traversal of the subtree rooted at `start`, `start` included.
pub fn depth_first(doc: &Document, start: NodeId) -> DepthFirst<'_> {
    DepthFirst {
        doc,
        start,
        next: Some(start),
    }
}

pub struct DepthFirst<'a> {
    doc: &'a Document,
    start: NodeId,
    next: Option<NodeId>,
}

impl DepthFirst<'_> {
    fn advance(&self, current: NodeId) -> Option<NodeId> {
        if let Some(child) = self.doc.first_child(current) {
            return Some(child);
        }
        let mut node = current;
        loop {
            if node == self.start {
                return None;
            }
            if let Some(sibling) = self.doc.next_sibling(node) {
                return Some(sibling);
            }
            node = self.doc.parent(node)?;
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current)
    }
}

/// The first element in `node`'s subtree (itself included) with the given tag.
pub fn first_descendant(doc: &Document, node: NodeId, tag: &str) -> Option<NodeId> {
    depth_first(doc, node)
        .find(|&n| doc.tag_name(n).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
}

/// Concatenation of all descendant text nodes, depth first.
pub fn inner_text(doc: &Document, node: NodeId) -> String {
    depth_first(doc, node)
        .filter(|&n| doc.is_text(n))
        .filter_map(|n| doc.text(n))
        .collect()
}

pub fn is_or_contains_line_break(doc: &Document, node: NodeId) -> bool {
    depth_first(doc, node).any(|n| doc.is_line_break(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{container, node_at};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_and_last_leaf() {
        let (doc, div) = container("<ins><del>a</del>b</ins><em>c<strong>d</strong></em>");

        assert_eq!(first_leaf(&doc, div), node_at(&doc, div, &[0, 0, 0]));
        assert_eq!(last_leaf(&doc, div), node_at(&doc, div, &[1, 1, 0]));
        let b = node_at(&doc, div, &[0, 1]);
        assert_eq!(first_leaf(&doc, b), b);
    }

    #[test]
    fn test_next_and_previous_leaf() {
        let (doc, div) = container("our<span>xwiki<strong></strong></span><br>");
        let our = node_at(&doc, div, &[0]);
        let xwiki = node_at(&doc, div, &[1, 0]);
        let strong = node_at(&doc, div, &[1, 1]);
        let br = node_at(&doc, div, &[2]);

        assert_eq!(next_leaf(&doc, our), Some(xwiki));
        assert_eq!(next_leaf(&doc, xwiki), Some(strong));
        assert_eq!(next_leaf(&doc, strong), Some(br));
        assert_eq!(next_leaf(&doc, br), None);

        assert_eq!(previous_leaf(&doc, br), Some(strong));
        assert_eq!(previous_leaf(&doc, xwiki), Some(our));
        assert_eq!(previous_leaf(&doc, our), None);
    }

    #[test]
    fn test_ancestors() {
        let (doc, div) = container("<em>x</em>");
        let em = node_at(&doc, div, &[0]);
        let x = node_at(&doc, div, &[0, 0]);

        assert_eq!(ancestors(&doc, x), vec![x, em, div]);
        assert_eq!(ancestors(&doc, div), vec![div]);
    }

    #[test]
    fn test_first_ancestor_with_name() {
        let (doc, div) = container(
            "<div>our<!--startwikilink:Reference--><span class=\"wikilink\">\
             <a>x<strong>wiki</strong></a></span><!--stopwikilink-->rox</div>",
        );
        let inner_div = node_at(&doc, div, &[0]);
        let wrapping_span = node_at(&doc, div, &[0, 2]);
        let anchor = node_at(&doc, div, &[0, 2, 0]);
        let bold = node_at(&doc, div, &[0, 2, 0, 1]);
        let label = node_at(&doc, div, &[0, 2, 0, 1, 0]);

        assert_eq!(first_ancestor_with_name(&doc, bold, &["a"]), Some(anchor));
        assert_eq!(first_ancestor_with_name(&doc, label, &["a"]), Some(anchor));
        assert_eq!(first_ancestor_with_name(&doc, wrapping_span, &["a"]), None);
        assert_eq!(first_ancestor_with_name(&doc, anchor, &["a"]), Some(anchor));
        assert_eq!(first_ancestor_with_name(&doc, anchor, &["div"]), Some(inner_div));
        assert_eq!(first_ancestor_with_name(&doc, label, &["span", "a"]), Some(anchor));
        assert_eq!(first_ancestor_with_name(&doc, label, &["A", "UL"]), Some(anchor));
    }

    #[test]
    fn test_last_ancestor_with_closure_filter() {
        let (doc, div) = container("<span><em><span>x</span></em></span>");
        let x = node_at(&doc, div, &[0, 0, 0, 0]);
        let outer_span = node_at(&doc, div, &[0]);

        let is_span = |d: &Document, n: NodeId| (d.tag_name(n) == Some("span")).into();
        assert_eq!(last_ancestor(&doc, x, &is_span), Some(outer_span));
        assert_eq!(last_ancestor(&doc, x, &WithName::new(&["table"])), None);
    }

    #[test]
    fn test_last_hidden_ancestor() {
        let (doc, div) = container("<span hidden><em style=\"display:none\">x</em></span>");
        let x = node_at(&doc, div, &[0, 0, 0]);
        let em = node_at(&doc, div, &[0, 0]);
        let span = node_at(&doc, div, &[0]);

        assert_eq!(first_ancestor(&doc, x, &HiddenElements), Some(em));
        assert_eq!(last_ancestor(&doc, x, &HiddenElements), Some(span));
    }

    #[test]
    fn test_nearest_common_ancestor() {
        let (mut doc, div) = container("<em>x</em>y<del>z</del>");
        let x = node_at(&doc, div, &[0, 0]);
        let z = node_at(&doc, div, &[2, 0]);
        let em = node_at(&doc, div, &[0]);

        assert_eq!(nearest_common_ancestor(&doc, x, z), Some(div));
        assert_eq!(nearest_common_ancestor(&doc, x, em), Some(em));
        assert_eq!(nearest_common_ancestor(&doc, x, x), Some(x));

        let orphan = doc.create_text("o");
        assert_eq!(nearest_common_ancestor(&doc, x, orphan), None);
    }

    #[test]
    fn test_farthest_inline_ancestor() {
        let (doc, div) = container("#<em>$</em>#");
        let em = node_at(&doc, div, &[1]);
        let dollar = node_at(&doc, div, &[1, 0]);

        assert_eq!(farthest_inline_ancestor(&doc, dollar), Some(em));
        assert_eq!(farthest_inline_ancestor(&doc, em), Some(em));
        assert_eq!(farthest_inline_ancestor(&doc, div), None);
        assert_eq!(nearest_block_container(&doc, dollar), Some(div));
        assert_eq!(nearest_block_container(&doc, div), Some(div));
    }

    #[test]
    fn test_nearest_flow_container() {
        let (doc, div) = container("<ul><li>foo</li></ul>x<del>y</del>z");
        let li = node_at(&doc, div, &[0, 0]);
        let foo = node_at(&doc, div, &[0, 0, 0]);
        let y = node_at(&doc, div, &[2, 0]);

        assert_eq!(nearest_flow_container(&doc, foo), Some(li));
        assert_eq!(nearest_flow_container(&doc, y), Some(div));
    }

    #[test]
    fn test_depth_first_stays_in_subtree() {
        let (doc, div) = container("a<b>c<i>d</i></b>e");
        let b = node_at(&doc, div, &[1]);

        let visited: Vec<NodeId> = depth_first(&doc, b).collect();

        assert_eq!(
            visited,
            vec![
                b,
                node_at(&doc, div, &[1, 0]),
                node_at(&doc, div, &[1, 1]),
                node_at(&doc, div, &[1, 1, 0]),
            ]
        );
        let a = node_at(&doc, div, &[0]);
        assert_eq!(depth_first(&doc, a).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_first_descendant() {
        let (doc, div) = container(
            "<div>my<!--startwikilink:Reference--><span class=\"wikilink\">\
             <a>x<span>wiki</span></a></span><!--stopwikilink-->rules</div>",
        );
        let inner_div = node_at(&doc, div, &[0]);
        let wrapping_span = node_at(&doc, div, &[0, 2]);
        let anchor = node_at(&doc, div, &[0, 2, 0]);
        let preamble = node_at(&doc, div, &[0, 0]);

        assert_eq!(first_descendant(&doc, inner_div, "A"), Some(anchor));
        assert_eq!(first_descendant(&doc, anchor, "a"), Some(anchor));
        assert_eq!(first_descendant(&doc, wrapping_span, "strong"), None);
        assert_eq!(first_descendant(&doc, div, "span"), Some(wrapping_span));
        assert_eq!(first_descendant(&doc, preamble, "a"), None);
    }

    #[test]
    fn test_inner_text() {
        let (doc, div) = container("x<em>y<!--no--></em><del>z<b>w</b></del>");
        assert_eq!(inner_text(&doc, div), "xyzw");
    }

    #[test]
    fn test_is_or_contains_line_break() {
        let (doc, div) = container(
            "a<strong></strong><del>x</del><br/><span><br/></span><ins><em><br/></em></ins>",
        );
        let expected = [false, false, false, true, true, true];
        for (index, expected) in expected.into_iter().enumerate() {
            let child = node_at(&doc, div, &[index]);
            assert_eq!(is_or_contains_line_break(&doc, child), expected, "child {index}");
        }
    }
}
