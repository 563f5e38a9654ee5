//! # Range algebra
//!
//! A [`Range`] is a pair of [`Position`]s. Positions address the tree the
//! same way the editor does: a character offset inside text-like nodes, a
//! child index inside elements.
//!
//! Ranges are plain values. Nothing re-anchors them when the tree changes,
//! so a range taken before a split, extract or delete that touched its
//! containers must be considered stale.

mod compare;
mod shrink;
mod traverse;

pub use compare::compare_points;
pub use shrink::{shrink_range, text_range};
pub use traverse::{
    first_leaf_of_range, last_leaf_of_range, next_leaf_of_range, next_node,
    previous_leaf_of_range, previous_node, scroll_target,
};

use std::cmp::Ordering;

use crate::dom::{Document, NodeId};
use crate::error::DomError;
use crate::index::sibling_index;

/// A boundary point: `offset` inside `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub node: NodeId,
    pub offset: usize,
}

impl Position {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Which boundary of a range to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Unchecked: the caller guarantees `start` is not after `end`.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn collapsed(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn start_container(&self) -> NodeId {
        self.start.node
    }

    pub fn start_offset(&self) -> usize {
        self.start.offset
    }

    pub fn end_container(&self) -> NodeId {
        self.end.node
    }

    pub fn end_offset(&self) -> usize {
        self.end.offset
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Collapse onto one of the boundaries.
    pub fn collapse(&mut self, to: Boundary) {
        match to {
            Boundary::Start => self.end = self.start,
            Boundary::End => self.start = self.end,
        }
    }

    /// Move the start. If it ends up after the end, the range collapses onto
    /// the new start.
    pub fn set_start(&mut self, doc: &Document, start: Position) -> Result<(), DomError> {
        check_position(doc, start)?;
        if compare_points(doc, start, self.end)? == Ordering::Greater {
            self.end = start;
        }
        self.start = start;
        Ok(())
    }

    /// Move the end. If it ends up before the start, the range collapses onto
    /// the new end.
    pub fn set_end(&mut self, doc: &Document, end: Position) -> Result<(), DomError> {
        check_position(doc, end)?;
        if compare_points(doc, self.start, end)? == Ordering::Greater {
            self.start = end;
        }
        self.end = end;
        Ok(())
    }

    /// Range around `node`, expressed in its parent.
    pub fn select_node(doc: &Document, node: NodeId) -> Result<Self, DomError> {
        let parent = doc.parent(node).ok_or(DomError::DetachedNode)?;
        let index = sibling_index(doc, node);
        Ok(Self::new(
            Position::new(parent, index),
            Position::new(parent, index + 1),
        ))
    }

    /// Range over the whole content of `node`.
    pub fn select_node_contents(doc: &Document, node: NodeId) -> Self {
        Self::new(
            Position::new(node, 0),
            Position::new(node, doc.length(node)),
        )
    }

    /// Order of one of this range's boundaries against one of `other`'s.
    pub fn compare_boundary_points(
        &self,
        doc: &Document,
        this: Boundary,
        other: &Range,
        that: Boundary,
    ) -> Result<Ordering, DomError> {
        compare_points(doc, self.boundary(this), other.boundary(that))
    }

    fn boundary(&self, which: Boundary) -> Position {
        match which {
            Boundary::Start => self.start,
            Boundary::End => self.end,
        }
    }
}

fn check_position(doc: &Document, position: Position) -> Result<(), DomError> {
    let length = doc.length(position.node);
    if position.offset > length {
        return Err(DomError::InvalidOffset {
            offset: position.offset,
            length,
        });
    }
    Ok(())
}
