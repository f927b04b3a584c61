//! Renderer
//!
//!     Turns a parsed document model into presentational HTML: one container
//!     per gloss, one sub-container per section, each carrying the style
//!     classes its `\set` directives attached. Blank cells render as a
//!     non-breaking space so the columns keep their width. See [html].
//!
//!     Diagnostics render separately, one error block per message, so the
//!     host decides how model and errors compose on the page.

pub mod html;

pub use html::{render_errors, render_gloss};
