//! Line tokenizer.
//!
//! Folds the raw character classes of one logical line through the bracket
//! and escape rules, producing the Simple / Bracketed tokens the parser
//! consumes. The fold keeps one text buffer and one bracket flag: outside a
//! bracket, whitespace and `[` flush the buffer as a Simple token; inside,
//! everything up to the matching `]` accumulates verbatim into one Bracketed
//! token. Escapes are resolved before the bracket dispatch, so they work the
//! same on both sides of a `[`.

use logos::Logos;

use crate::gloss::error::LexError;
use crate::gloss::lexing::raw::RawToken;
use crate::gloss::token::Token;

/// Tokenize one logical line.
pub fn tokenize_line(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut buffer = String::new();
    let mut inside_bracket = false;

    let mut lexer = RawToken::lexer(line);
    while let Some(result) = lexer.next() {
        let raw = match result {
            Ok(raw) => raw,
            Err(()) => continue,
        };
        let slice = lexer.slice();
        match raw {
            RawToken::Escape => {
                // The slice is the caret plus the escaped character. Only
                // the three special characters lose the caret; anything
                // else keeps it, so a stray escape stays visible.
                let escaped = &slice[1..];
                match escaped {
                    "[" | "]" | "^" => buffer.push_str(escaped),
                    _ => buffer.push_str(slice),
                }
            }
            RawToken::DanglingCaret => {}
            RawToken::OpenBracket => {
                if inside_bracket {
                    return Err(LexError::NestedBracket {
                        context: error_context(&tokens, &buffer),
                    });
                }
                flush_simple(&mut tokens, &mut buffer);
                inside_bracket = true;
            }
            RawToken::CloseBracket => {
                if !inside_bracket {
                    return Err(LexError::StrayClose {
                        context: error_context(&tokens, &buffer),
                    });
                }
                // Unlike Simple tokens, an empty bracket still emits.
                tokens.push(Token::bracketed(std::mem::take(&mut buffer)));
                inside_bracket = false;
            }
            RawToken::Whitespace => {
                if inside_bracket {
                    buffer.push_str(slice);
                } else {
                    flush_simple(&mut tokens, &mut buffer);
                }
            }
            RawToken::Text => buffer.push_str(slice),
        }
    }

    if inside_bracket {
        return Err(LexError::UnterminatedBracket {
            context: error_context(&tokens, &buffer),
        });
    }
    flush_simple(&mut tokens, &mut buffer);
    Ok(tokens)
}

fn flush_simple(tokens: &mut Vec<Token>, buffer: &mut String) {
    if !buffer.is_empty() {
        tokens.push(Token::simple(std::mem::take(buffer)));
    }
}

/// Context shown in lex errors: the last completed token plus the partially
/// built fragment, space-joined.
fn error_context(tokens: &[Token], buffer: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(last) = tokens.last() {
        if !last.text.is_empty() {
            parts.push(&last.text);
        }
    }
    if !buffer.is_empty() {
        parts.push(buffer);
    }
    parts.join(" ")
}
