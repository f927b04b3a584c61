//! Test support shared by unit and integration tests.

use crate::gloss::ast::GlossData;
use crate::gloss::parsing::{GlossParser, ParserOptions};

/// Parse in fixed three-tier mode, returning the model and diagnostics.
pub fn parse_fixed(source: &str) -> (GlossData, Vec<String>) {
    let mut parser = GlossParser::new(ParserOptions::default());
    let gloss = parser.parse(source);
    (gloss, parser.errors().to_vec())
}

/// Parse in nlevel mode, returning the model and diagnostics.
pub fn parse_nlevel(source: &str) -> (GlossData, Vec<String>) {
    let mut parser = GlossParser::new(ParserOptions { nlevel: true });
    let gloss = parser.parse(source);
    (gloss, parser.errors().to_vec())
}
