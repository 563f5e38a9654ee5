//! # Markup reader and writer
//!
//! A tolerant HTML-like reader used to build document trees and a writer to
//! observe them. The pipeline mirrors a classic lexer/parser split:
//!
//! ```text
//! Markup → Lexer → Tokens → Reader → Document nodes
//!          (Logos)          (open-element stack)
//! ```
//!
//! The reader never fails on malformed input: unmatched end tags are
//! dropped and unclosed elements are closed at the end.
//!
//! The writer has two modes. [`inner_markup`] / [`outer_markup`] write the
//! live tree. [`serializable_inner_markup`] writes the *derived*
//! serialization, leaving out every node for which
//! [`Document::is_serializable`] is false. Reading that output back merges
//! adjacent text, which is why [`crate::index::normalized_sibling_index`]
//! treats text runs as one unit.
//!
//! ```
//! use richtext_dom_engine::{Document, markup};
//!
//! let mut doc = Document::new();
//! let fragment = markup::parse_fragment(&mut doc, "a<em>b</em>c").unwrap();
//! assert_eq!(markup::inner_markup(&doc, fragment), "a<em>b</em>c");
//! ```
//!
//! [`Document::is_serializable`]: crate::dom::Document::is_serializable

pub mod lexer;
mod reader;
mod writer;

pub use reader::{parse_fragment, parse_into};
pub use writer::{inner_markup, outer_markup, serializable_inner_markup};
