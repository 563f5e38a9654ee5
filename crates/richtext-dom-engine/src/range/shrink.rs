//! Narrowing a range onto the content it actually selects.

use std::cmp::Ordering;

use super::{Position, Range, compare_points, first_leaf_of_range, last_leaf_of_range};
use crate::dom::{Document, NodeId};
use crate::index::sibling_index;
use crate::navigator::{first_leaf, last_leaf, next_leaf, previous_leaf};

/// The largest sub-range whose boundaries both sit in text nodes.
///
/// The first leaf moves forward and the last leaf moves backward until each
/// reaches a text node or they meet. A boundary is only rewritten when its
/// leaf is a text node different from the current container, so offsets
/// inside a text container are kept. Ranges without leaves come back as is.
pub fn text_range(doc: &Document, range: &Range) -> Range {
    let mut text_range = *range;
    let Some(mut first) = first_leaf_of_range(doc, range) else {
        return text_range;
    };
    let Some(mut last) = last_leaf_of_range(doc, range) else {
        return text_range;
    };

    while first != last && !doc.is_text(first) {
        match next_leaf(doc, first) {
            Some(leaf) => first = leaf,
            None => break,
        }
    }
    if doc.is_text(first) && first != text_range.start_container() {
        text_range.start = Position::new(first, 0);
    }

    while last != first && !doc.is_text(last) {
        match previous_leaf(doc, last) {
            Some(leaf) => last = leaf,
            None => break,
        }
    }
    if doc.is_text(last) && last != text_range.end_container() {
        text_range.end = Position::new(last, doc.length(last));
    }
    text_range
}

/// Move the boundaries of a range inwards, past element edges, onto the
/// leaves they enclose.
///
/// The result is used only if at least one boundary moved to another
/// container and the new start is not after the new end; otherwise the
/// input comes back unchanged. Collapsed ranges are never shrunk.
pub fn shrink_range(doc: &Document, range: &Range) -> Range {
    if range.is_collapsed() {
        return *range;
    }
    let start = shrunken_start(doc, range);
    let end = shrunken_end(doc, range);
    if start.is_none() && end.is_none() {
        return *range;
    }

    let start = start.unwrap_or(range.start());
    let end = end.unwrap_or(range.end());
    match compare_points(doc, start, end) {
        Ok(Ordering::Less | Ordering::Equal) => Range::new(start, end),
        _ => *range,
    }
}

fn shrunken_start(doc: &Document, range: &Range) -> Option<Position> {
    let container = range.start_container();
    let leaf = leaf_after_start(doc, container, range.start_offset())?;
    let position = if is_void_element(doc, leaf) {
        Position::new(doc.parent(leaf)?, sibling_index(doc, leaf))
    } else {
        Position::new(leaf, 0)
    };
    moved(position, container)
}

fn shrunken_end(doc: &Document, range: &Range) -> Option<Position> {
    let container = range.end_container();
    let leaf = leaf_before_end(doc, container, range.end_offset())?;
    let position = if is_void_element(doc, leaf) {
        Position::new(doc.parent(leaf)?, sibling_index(doc, leaf) + 1)
    } else {
        Position::new(leaf, doc.length(leaf))
    };
    moved(position, container)
}

/// The leaf the start boundary would land on when pushed forward.
fn leaf_after_start(doc: &Document, container: NodeId, offset: usize) -> Option<NodeId> {
    if doc.has_children(container) {
        return match doc.child_at(container, offset) {
            Some(child) => Some(first_leaf(doc, child)),
            None => next_leaf(doc, container),
        };
    }
    if offset > 0 && offset == doc.length(container) {
        return next_leaf(doc, container);
    }
    Some(container)
}

/// The leaf the end boundary would land on when pulled back.
fn leaf_before_end(doc: &Document, container: NodeId, offset: usize) -> Option<NodeId> {
    if doc.has_children(container) {
        return match offset.checked_sub(1) {
            Some(index) => doc.child_at(container, index).map(|child| last_leaf(doc, child)),
            None => previous_leaf(doc, container),
        };
    }
    if offset == 0 && doc.length(container) > 0 {
        return previous_leaf(doc, container);
    }
    Some(container)
}

/// Elements that can never hold content are addressed from their parent.
fn is_void_element(doc: &Document, node: NodeId) -> bool {
    doc.is_element(node) && !doc.can_have_children(node)
}

fn moved(position: Position, original: NodeId) -> Option<Position> {
    (position.node != original).then_some(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{container, node_at};
    use pretty_assertions::assert_eq;

    fn range(start: (NodeId, usize), end: (NodeId, usize)) -> Range {
        Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn test_shrink_range_same_result() {
        let (doc, div) = container("four");
        let four = node_at(&doc, div, &[0]);

        let caret = Range::collapsed(Position::new(four, 4));
        assert_eq!(shrink_range(&doc, &caret), caret);
        let inner = range((four, 1), (four, 3));
        assert_eq!(shrink_range(&doc, &inner), inner);

        let (doc, div) = container("before<em>center</em>after");
        let before = node_at(&doc, div, &[0]);
        let em = node_at(&doc, div, &[1]);
        let after = node_at(&doc, div, &[2]);

        let across = range((before, 2), (after, 4));
        assert_eq!(shrink_range(&doc, &across), across);
        // Both candidates exist but would cross.
        let crossing = range((em, 1), (div, 2));
        assert_eq!(shrink_range(&doc, &crossing), crossing);
    }

    #[test]
    fn test_shrink_range_onto_text() {
        let (doc, div) = container("one<em>two</em>three");
        let one = node_at(&doc, div, &[0]);
        let two = node_at(&doc, div, &[1, 0]);

        let shrunk = shrink_range(&doc, &range((one, 3), (div, 2)));

        assert_eq!(shrunk, range((two, 0), (two, 3)));
    }

    #[test]
    fn test_shrink_range_around_void_element() {
        let (mut doc, div) = container("before<img/>after");
        let empty = doc.create_text("");
        let after = node_at(&doc, div, &[2]);
        doc.insert_before(empty, after).unwrap();
        let before = node_at(&doc, div, &[0]);

        let shrunk = shrink_range(&doc, &range((before, 6), (after, 0)));

        assert_eq!(shrunk, range((div, 1), (empty, 0)));
    }

    #[test]
    fn test_text_range() {
        let (doc, div) = container("<em></em><b>ab</b><!--c--><i>de</i><br>");
        let ab = node_at(&doc, div, &[1, 0]);
        let de = node_at(&doc, div, &[3, 0]);

        let text = text_range(&doc, &range((div, 0), (div, 5)));

        assert_eq!(text, range((ab, 0), (de, 2)));
    }

    #[test]
    fn test_text_range_keeps_offsets_in_text() {
        let (doc, div) = container("abc<br>def");
        let abc = node_at(&doc, div, &[0]);
        let def = node_at(&doc, div, &[2]);
        let selection = range((abc, 1), (def, 2));

        assert_eq!(text_range(&doc, &selection), selection);
    }

    #[test]
    fn test_text_range_ending_in_comment() {
        let (doc, div) = container("x<em>y</em><!--z-->");
        let y = node_at(&doc, div, &[1, 0]);
        let comment = node_at(&doc, div, &[2]);

        let text = text_range(&doc, &range((div, 1), (comment, 1)));

        assert_eq!(text, range((y, 0), (y, 1)));
    }

    #[test]
    fn test_text_range_without_text() {
        let (doc, div) = container("<br><hr>");
        let selection = range((div, 0), (div, 2));

        assert_eq!(text_range(&doc, &selection), selection);
    }
}
