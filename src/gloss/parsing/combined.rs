//! Combined element recognition for `\gl` bodies (nlevel mode).
//!
//! One column is written as a headword followed by its deeper tiers in
//! brackets, in order:
//!
//!     \gl katze [cat] [NOUN] schläft [sleeps] [VERB]
//!
//! Columns may carry differing tier counts; the renderer pads the short
//! ones. All tiers of a column live in `nlevels`, headword first.

use crate::gloss::ast::GlossElement;
use crate::gloss::token::{Token, TokenKind};

/// Recognize one combined element at the front of `tokens`: a plain word,
/// then every immediately following bracketed token.
pub fn get_combined_element(tokens: &[Token]) -> Option<(GlossElement, &[Token])> {
    let first = tokens.first()?;
    if first.kind != TokenKind::Simple {
        return None;
    }
    let tier_count = tokens[1..]
        .iter()
        .take_while(|token| token.kind == TokenKind::Bracketed)
        .count();
    let end = 1 + tier_count;
    let mut element = GlossElement::new();
    element.nlevels = tokens[..end].iter().map(|token| token.text.clone()).collect();
    Some((element, &tokens[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headword_alone() {
        let tokens = [Token::simple("katze")];
        let (element, rest) = get_combined_element(&tokens).unwrap();
        assert_eq!(element.nlevels, vec!["katze"]);
        assert!(element.level_a.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_headword_with_tiers() {
        let tokens = vec![
            Token::simple("katze"),
            Token::bracketed("cat"),
            Token::bracketed("NOUN"),
            Token::simple("schläft"),
        ];
        let (element, rest) = get_combined_element(&tokens).unwrap();
        assert_eq!(element.nlevels, vec!["katze", "cat", "NOUN"]);
        // The next headword starts the next element.
        assert_eq!(rest, &tokens[3..]);
    }

    #[test]
    fn test_leading_bracket_is_not_an_element() {
        let tokens = vec![Token::bracketed("cat"), Token::simple("katze")];
        assert!(get_combined_element(&tokens).is_none());
    }

    #[test]
    fn test_empty_bracket_is_an_empty_tier() {
        let tokens = vec![Token::simple("katze"), Token::bracketed("")];
        let (element, _) = get_combined_element(&tokens).unwrap();
        assert_eq!(element.nlevels, vec!["katze", ""]);
    }
}
