use std::cmp::Ordering;

use super::Position;
use crate::dom::Document;
use crate::error::DomError;
use crate::index::sibling_index;
use crate::navigator::ancestors;

/// Document order of two boundary points.
///
/// Points in the same node compare by offset. Otherwise the ancestor chains
/// are walked down from the shared root; where they fork, the forking
/// siblings decide. When one node contains the other, the offset in the
/// container is compared against the index of the child holding the other
/// point, and a point right before that child counts as earlier.
pub fn compare_points(doc: &Document, a: Position, b: Position) -> Result<Ordering, DomError> {
    if a.node == b.node {
        return Ok(a.offset.cmp(&b.offset));
    }

    let mut a_chain = ancestors(doc, a.node);
    let mut b_chain = ancestors(doc, b.node);
    if a_chain.last() != b_chain.last() {
        return Err(DomError::DisconnectedNodes);
    }
    a_chain.reverse();
    b_chain.reverse();
    let shared = a_chain
        .iter()
        .zip(&b_chain)
        .take_while(|(x, y)| x == y)
        .count();

    let ordering = match (a_chain.get(shared), b_chain.get(shared)) {
        (Some(&a_fork), Some(&b_fork)) => {
            if sibling_index(doc, a_fork) < sibling_index(doc, b_fork) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        // `a.node` contains `b.node`.
        (None, Some(&b_child)) => {
            if a.offset <= sibling_index(doc, b_child) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        // `b.node` contains `a.node`.
        (Some(&a_child), None) => {
            if sibling_index(doc, a_child) < b.offset {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (None, None) => a.offset.cmp(&b.offset),
    };
    Ok(ordering)
}
