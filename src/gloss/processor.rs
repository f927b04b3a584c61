//! Processing entry points.
//!
//! The one-call boundary for hosts embedding the parser: hand in a block of
//! markup and the parser options, get back either rendered HTML or the
//! document model with its diagnostics. Hosts that need finer control can
//! drive [parsing](super::parsing) and [render](super::render) themselves.

use crate::gloss::ast::GlossData;
use crate::gloss::parsing::{GlossParser, ParserOptions};
use crate::gloss::render::{render_errors, render_gloss};

/// A parsed block: the document model plus the diagnostics of the parse that
/// produced it, in line order. Serializes to JSON for programmatic hosts.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseOutcome {
    pub gloss: GlossData,
    pub diagnostics: Vec<String>,
}

/// Parse one block of markup, returning the model and diagnostics.
pub fn parse_text(source: &str, options: ParserOptions) -> ParseOutcome {
    let mut parser = GlossParser::new(options);
    let gloss = parser.parse(source);
    ParseOutcome {
        gloss,
        diagnostics: parser.errors().to_vec(),
    }
}

/// Parse and render one block of markup: the gloss container followed by one
/// error block per diagnostic.
pub fn process_text(source: &str, options: ParserOptions) -> String {
    let outcome = parse_text(source, options);
    let mut out = render_gloss(&outcome.gloss);
    out.push_str(&render_errors(&outcome.diagnostics));
    out
}
