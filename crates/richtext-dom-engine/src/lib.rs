//! # Rich-text DOM editing engine
//!
//! Position-aware editing of an ordered document tree: the primitives a
//! rich-text editor needs to implement "split here", "delete selection" or
//! "pull this node out of its siblings".
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐
//! │ range        │   │ isolate     │   range algebra, node isolation
//! └──────┬───────┘   └──────┬──────┘
//!        │                  │
//! ┌──────▼──────────────────▼──────┐
//! │ editor                         │   clone / extract / delete / split
//! └──────┬─────────────────────────┘
//!        │
//! ┌──────▼───────┐   ┌─────────────┐
//! │ navigator    │   │ index       │   read-only traversal and indexing
//! └──────┬───────┘   └──────┬──────┘
//!        │                  │
//! ┌──────▼──────────────────▼──────┐
//! │ dom                            │   arena-backed host tree
//! └────────────────────────────────┘
//! ```
//!
//! Calls flow downwards only. [`markup`] sits beside the stack and is used to
//! build trees from HTML-like source and to write them back out.
//!
//! Every operation is synchronous and takes the [`Document`] explicitly;
//! nothing keeps node handles or ranges between calls.

pub mod dom;
pub mod editor;
pub mod error;
pub mod index;
pub mod isolate;
pub mod markup;
pub mod navigator;
pub mod range;

#[cfg(test)]
mod test_support;

pub use dom::{Document, NodeData, NodeId, NodeKind};
pub use editor::Side;
pub use error::DomError;
pub use range::{Boundary, Position, Range};
pub use richtext_dom_config::EngineConfig;
