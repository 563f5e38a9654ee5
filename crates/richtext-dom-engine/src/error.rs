use crate::dom::NodeKind;

/// Precondition failures reported by the editing operations.
///
/// All of them are raised before the first mutation of the tree, so a failed
/// call leaves the document exactly as it found it.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Offset {offset} is outside [0, {length}]")]
    InvalidOffset { offset: usize, length: usize },
    #[error("Range start {start} is after range end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("Unsupported node kind: {0}")]
    UnsupportedNodeKind(NodeKind),
    #[error("Points belong to disconnected trees")]
    DisconnectedNodes,
    #[error("Node has no parent")]
    DetachedNode,
    #[error("Invalid tree structure: {0}")]
    Hierarchy(#[from] indextree::NodeError),
}

impl DomError {
    /// True for both offset-shaped failures (`InvalidOffset` and `InvalidRange`).
    pub fn is_invalid_offset(&self) -> bool {
        matches!(
            self,
            DomError::InvalidOffset { .. } | DomError::InvalidRange { .. }
        )
    }
}
