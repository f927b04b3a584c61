//! Tokenizer case grids: escapes, brackets and the three lex failures.

use ling_gloss::gloss::error::LexError;
use ling_gloss::gloss::lexing::tokenize_line;
use ling_gloss::gloss::token::Token;
use rstest::rstest;

#[rstest]
#[case("foo", vec![Token::simple("foo")])]
#[case("foo bar", vec![Token::simple("foo"), Token::simple("bar")])]
#[case("foo \t  bar", vec![Token::simple("foo"), Token::simple("bar")])]
#[case("  foo  ", vec![Token::simple("foo")])]
fn test_simple_tokens(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize_line(line).unwrap(), expected);
}

#[rstest]
#[case("[foo bar]", vec![Token::bracketed("foo bar")])]
#[case("[foo  \t bar]", vec![Token::bracketed("foo  \t bar")])]
#[case("[]", vec![Token::bracketed("")])]
#[case("a[b]c", vec![Token::simple("a"), Token::bracketed("b"), Token::simple("c")])]
#[case("[a][b]", vec![Token::bracketed("a"), Token::bracketed("b")])]
fn test_bracketed_tokens(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize_line(line).unwrap(), expected);
}

#[rstest]
#[case("^[", vec![Token::simple("[")])]
#[case("^]", vec![Token::simple("]")])]
#[case("^^", vec![Token::simple("^")])]
#[case("^q", vec![Token::simple("^q")])]
#[case("a^[b", vec![Token::simple("a[b")])]
#[case("[a^]b]", vec![Token::bracketed("a]b")])]
#[case("[^^]", vec![Token::bracketed("^")])]
#[case("x^", vec![Token::simple("x")])]
fn test_escapes(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize_line(line).unwrap(), expected);
}

#[rstest]
#[case("[a [b]", LexError::NestedBracket { context: "a ".to_string() })]
#[case("a]", LexError::StrayClose { context: "a".to_string() })]
#[case("]", LexError::StrayClose { context: String::new() })]
#[case("[a b", LexError::UnterminatedBracket { context: "a b".to_string() })]
#[case("x [", LexError::UnterminatedBracket { context: "x".to_string() })]
fn test_lex_failures(#[case] line: &str, #[case] expected: LexError) {
    assert_eq!(tokenize_line(line).unwrap_err(), expected);
}

#[test]
fn test_error_context_joins_last_token_and_fragment() {
    let error = tokenize_line("one two [thr").unwrap_err();
    assert_eq!(
        error.to_string(),
        "a “[” without matching “]” found around “two thr”"
    );
}
