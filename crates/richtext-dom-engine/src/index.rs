//! Sibling positions, plain and normalized.
//!
//! The normalized index is the position a node would have after the tree is
//! written with [`crate::markup::serializable_inner_markup`] and read back:
//! non-serializable siblings vanish and runs of adjacent text collapse into
//! one node.

use crate::dom::{Document, NodeId};

/// Position of `node` among its siblings; 0 for a parentless node.
///
/// Walks outwards in both directions at once. Reaching the left edge first
/// answers directly, so nodes near the start of a long child list are cheap.
/// The arena keeps no child counts, so reaching the right edge first means
/// finishing the walk to the left: nodes near the end cost their full index.
pub fn sibling_index(doc: &Document, node: NodeId) -> usize {
    let mut left = node;
    let mut right = node;
    let mut steps = 0;
    while let (Some(previous), Some(next)) = (doc.previous_sibling(left), doc.next_sibling(right)) {
        left = previous;
        right = next;
        steps += 1;
    }
    while let Some(previous) = doc.previous_sibling(left) {
        left = previous;
        steps += 1;
    }
    steps
}

/// Index of `node` counting a run of adjacent text siblings as one and
/// ignoring siblings that are not serializable.
pub fn normalized_sibling_index(doc: &Document, node: NodeId) -> usize {
    let mut count = 0;
    let mut sibling = node;
    loop {
        let merges_with_text = doc.is_text(sibling);
        let mut left = doc.previous_sibling(sibling);
        while let Some(candidate) = left {
            let skip =
                !doc.is_serializable(candidate) || (merges_with_text && doc.is_text(candidate));
            if !skip {
                break;
            }
            left = doc.previous_sibling(candidate);
        }
        match left {
            Some(candidate) => {
                count += 1;
                sibling = candidate;
            }
            None => return count,
        }
    }
}

/// Number of children `node` would have after a serialize/reparse round trip.
pub fn normalized_child_count(doc: &Document, node: NodeId) -> usize {
    match doc.last_child(node) {
        None => 0,
        Some(last) => usize::from(doc.is_serializable(last)) + normalized_sibling_index(doc, last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{container, node_at};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn test_sibling_index(#[case] index: usize) {
        let (doc, div) = container("a<b>c</b><!--d--><i></i>e");
        let child = node_at(&doc, div, &[index]);

        assert_eq!(sibling_index(&doc, child), index);
    }

    #[test]
    fn test_sibling_index_near_right_edge_of_long_list() {
        let (mut doc, div) = container(&"<br>".repeat(40));
        let last = doc.last_child(div).unwrap();
        doc.detach(last);

        for (expected, child) in doc.children(div).enumerate() {
            assert_eq!(sibling_index(&doc, child), expected);
        }
        assert_eq!(sibling_index(&doc, doc.last_child(div).unwrap()), 38);
    }

    #[test]
    fn test_sibling_index_of_orphan() {
        let (mut doc, _) = container("");
        let orphan = doc.create_element("em");

        assert_eq!(sibling_index(&doc, orphan), 0);
    }

    #[test]
    fn test_normalized_sibling_index() {
        let (mut doc, div) = container("");
        let text = doc.create_text("void");
        doc.append_child(div, text).unwrap();
        assert_eq!(normalized_sibling_index(&doc, text), 0);

        doc.set_text(text, "").unwrap();
        assert_eq!(normalized_sibling_index(&doc, text), 0);

        let span = doc.create_element("span");
        doc.append_child(div, span).unwrap();
        assert_eq!(normalized_sibling_index(&doc, span), 0);

        doc.set_text(text, "null").unwrap();
        assert_eq!(normalized_sibling_index(&doc, span), 1);

        let last = doc.create_text("int");
        doc.append_child(div, last).unwrap();
        assert_eq!(normalized_sibling_index(&doc, last), 2);

        doc.set_attribute(span, "metadata", "").unwrap();
        assert_eq!(normalized_sibling_index(&doc, last), 0);
    }

    #[test]
    fn test_normalized_child_count() {
        let (mut doc, div) = container("");
        assert_eq!(normalized_child_count(&doc, div), 0);

        let text = doc.create_text("");
        doc.append_child(div, text).unwrap();
        assert_eq!(normalized_child_count(&doc, div), 0);

        doc.set_text(text, "double").unwrap();
        assert_eq!(normalized_child_count(&doc, div), 1);

        let span = doc.create_element("span");
        doc.append_child(div, span).unwrap();
        assert_eq!(normalized_child_count(&doc, div), 2);

        doc.set_attribute(span, "metadata", "").unwrap();
        assert_eq!(normalized_child_count(&doc, div), 1);

        doc.set_text(text, "").unwrap();
        assert_eq!(normalized_child_count(&doc, div), 0);
    }
}
