//! Error types for gloss lexing and parsing.
//!
//! Every variant renders to the exact diagnostic text shown to users; the
//! parser catches each error at its line's boundary and stores the rendered
//! text, so nothing here ever escapes a `parse` call.

use std::fmt;

/// Errors raised while tokenizing one logical line.
///
/// Each carries the context around the fault: the last completed token plus
/// the partially built fragment, space-joined.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// `[` opened while a bracket was already open.
    NestedBracket { context: String },
    /// `]` with no bracket open.
    StrayClose { context: String },
    /// End of line with a bracket still open.
    UnterminatedBracket { context: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NestedBracket { context } => {
                write!(f, "invalid “[” found around “{}”", context)
            }
            LexError::StrayClose { context } => {
                write!(f, "invalid “]” found around “{}”", context)
            }
            LexError::UnterminatedBracket { context } => {
                write!(f, "a “[” without matching “]” found around “{}”", context)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised while dispatching one logical line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed for the whole line.
    Lex(LexError),
    /// The command keyword is not one of the known commands.
    UnknownCommand { text: String },
    /// The option word in a `\set` body is not one of the known options.
    UnknownOption { text: String },
    /// A fixed-tier command while the parser runs in nlevel mode.
    UsedInNlevelMode { text: String },
    /// The combined command while the parser runs in regular mode.
    UsedInRegularMode { text: String },
    /// A value command with no parameters.
    MissingValue { key: String },
    /// A style option with no values.
    MissingValues { section: String },
    /// A style value outside the allowed class-name alphabet.
    InvalidStyleName { name: String },
    /// Tokens left over after command scanning at the line's top level.
    TrailingTokens { preview: String },
    /// Tokens left over inside a command's own unit scan.
    Unrecognized { preview: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(error) => write!(f, "{}", error),
            ParseError::UnknownCommand { text } => {
                write!(f, "command “{}” is not known", text)
            }
            ParseError::UnknownOption { text } => {
                write!(f, "option “{}” is not known", text)
            }
            ParseError::UsedInNlevelMode { text } => {
                write!(f, "command “{}” can't be used in nlevel mode", text)
            }
            ParseError::UsedInRegularMode { text } => {
                write!(f, "command “{}” can't be used in regular mode", text)
            }
            ParseError::MissingValue { key } => {
                write!(f, "no value provided for “{}”", key)
            }
            ParseError::MissingValues { section } => {
                write!(f, "no values provided for “{}”", section)
            }
            ParseError::InvalidStyleName { name } => {
                write!(f, "“{}” isn't a valid style name", name)
            }
            ParseError::TrailingTokens { preview } => {
                write!(f, "don't know what to do with “{}”", preview)
            }
            ParseError::Unrecognized { preview } => {
                write!(f, "don't know how to parse {}", preview)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError::Lex(error)
    }
}
