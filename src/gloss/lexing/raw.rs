//! Raw character classes for one logical line.
//!
//! The classes carry no bracket or escape semantics of their own; the fold
//! in [tokenizer](super::tokenizer) owns that state. Every character of a
//! line belongs to exactly one class, so lexing never fails here.

use logos::Logos;

/// Character-class tokens produced by the first tokenization pass.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    /// `^` plus the character it escapes.
    #[regex(r"\^.")]
    Escape,

    /// A `^` with nothing after it; dropped by the fold.
    #[token("^")]
    DanglingCaret,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    /// A run of spaces and tabs.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// A run of characters with no lexical meaning of their own.
    #[regex(r"[^ \t\[\]\^]+")]
    Text,
}
