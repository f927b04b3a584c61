//! Token types shared by the lexer and parser.
//!
//! A tokenized logical line is a flat run of two token kinds: `Simple`
//! (whitespace-delimited word) and `Bracketed` (a `[...]` group whose inner
//! whitespace is preserved). Command recognition happens later, purely on
//! token text: a Simple token whose text starts with the command marker
//! opens a command unit.

/// Marker character that introduces a command keyword.
pub const COMMAND_MARKER: char = '\\';

/// Number of characters an error preview may show before truncation.
const PREVIEW_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A whitespace-delimited word.
    Simple,
    /// A `[...]` group; the text is everything between the brackets.
    Bracketed,
}

/// One token of a logical line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn simple(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Simple,
            text: text.into(),
        }
    }

    pub fn bracketed(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Bracketed,
            text: text.into(),
        }
    }

    /// Whether this token opens a command unit. Only a plain word can; a
    /// bracketed token starting with the marker is an ordinary parameter.
    pub fn is_command(&self) -> bool {
        self.kind == TokenKind::Simple && self.text.starts_with(COMMAND_MARKER)
    }
}

/// Short display preview of a token run for error messages: the first two
/// token texts space-joined, truncated to a fixed character budget with an
/// ellipsis.
pub fn preview(tokens: &[Token]) -> String {
    let text = tokens
        .iter()
        .take(2)
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if text.chars().count() > PREVIEW_MAX_CHARS {
        let cut: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}…", cut.trim())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_detection() {
        assert!(Token::simple("\\gla").is_command());
        assert!(Token::simple("\\").is_command());
        assert!(!Token::simple("gla").is_command());
        // A bracketed token is never a command, whatever its text.
        assert!(!Token::bracketed("\\gla").is_command());
    }

    #[test]
    fn test_preview_short_run() {
        let tokens = vec![Token::simple("foo"), Token::simple("bar")];
        assert_eq!(preview(&tokens), "foo bar");
    }

    #[test]
    fn test_preview_uses_first_two_tokens() {
        let tokens = vec![
            Token::simple("one"),
            Token::bracketed("two"),
            Token::simple("three"),
        ];
        assert_eq!(preview(&tokens), "one two");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let tokens = vec![Token::simple("abcdefghij"), Token::simple("klmnopqrstuvwxyz")];
        // 21 characters joined; cut at 20 lands after a full word boundary.
        assert_eq!(preview(&tokens), "abcdefghij klmnopqrs…");
    }

    #[test]
    fn test_preview_trims_before_ellipsis() {
        let tokens = vec![Token::simple("abcdefghijklmnopqrs"), Token::simple("xy")];
        // The cut point falls on the joining space, which gets trimmed away.
        assert_eq!(preview(&tokens), "abcdefghijklmnopqrs…");
    }

    #[test]
    fn test_preview_empty_run() {
        assert_eq!(preview(&[]), "");
    }
}
