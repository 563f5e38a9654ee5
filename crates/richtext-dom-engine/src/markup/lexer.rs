//! # Lexer - Tokenizing Markup Source
//!
//! Breaks HTML-like markup into a flat token stream using [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! Like the reader built on top of it, the lexer is **total**: every byte of
//! the input lands in exactly one token and nothing is reported as an error.
//! Bytes Logos cannot match (which only happens for a stray `<`) are emitted as
//! [`TokenKind::Text`].
//!
//! ```
//! use richtext_dom_engine::markup::lexer::{lex, TokenKind};
//!
//! let tokens = lex("a<em>b</em>");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Text, TokenKind::StartTag, TokenKind::Text, TokenKind::EndTag]
//! );
//! ```

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<!-- ... -->`; an unterminated comment runs to the end of input.
    #[token("<!--", |lex| bump_past(lex, "-->"))]
    Comment,

    /// `<![CDATA[ ... ]]>`
    #[token("<![CDATA[", |lex| bump_past(lex, "]]>"))]
    CData,

    /// `<name attr="value">` or `<name/>`; quoted values may contain `>`.
    #[regex(r"<[a-zA-Z]", bump_tag)]
    StartTag,

    /// `</name>`
    #[regex(r"</[a-zA-Z][^>]*>")]
    EndTag,

    /// Run of characters outside any tag.
    #[regex(r"[^<]+")]
    Text,

    /// A `<` that does not open anything; read back as text.
    #[token("<")]
    Lt,
}

/// Advance past the next occurrence of `terminator`, or to the end of input.
fn bump_past(lex: &mut Lexer<TokenKind>, terminator: &str) -> bool {
    let remainder = lex.remainder();
    let consumed = remainder
        .find(terminator)
        .map(|i| i + terminator.len())
        .unwrap_or(remainder.len());
    lex.bump(consumed);
    true
}

/// Advance to the `>` closing a start tag, skipping over quoted attribute values.
fn bump_tag(lex: &mut Lexer<TokenKind>) -> bool {
    let mut quote: Option<char> = None;
    let mut consumed = lex.remainder().len();
    for (i, c) in lex.remainder().char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => {
                consumed = i + 1;
                break;
            }
            (None, _) => {}
        }
    }
    lex.bump(consumed);
    true
}

/// A token with its kind and source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub text: &'input str,
}

/// Tokenize markup. Concatenating the token texts gives back the input.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(kind, span)| Token {
            kind: kind.unwrap_or(TokenKind::Text),
            text: &input[span],
        })
        .collect()
}
