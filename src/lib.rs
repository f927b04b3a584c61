//! # ling-gloss
//!
//! A parser and HTML renderer for a compact, line-oriented interlinear gloss
//! markup: the linguistic presentation of a phrase broken into words, each
//! aligned against one or more annotation tiers, with an optional label,
//! preamble and free translation.
//!
//! A gloss block looks like this:
//!
//!     \num (12)
//!     \ex Dunkler wird es schon
//!     \gla dunkler wird es schon
//!     \glb darker becomes it already
//!     \ft It is already getting darker
//!
//! Commands start with `\`; parameters are whitespace-separated words, with
//! `[...]` grouping a parameter that contains spaces and `^` escaping the
//! three special characters. Indented lines continue the command above them,
//! and lines starting with `#` are comments.
//!
//! Processing Pipeline
//!
//!     The pipeline is line based. Raw text is first dedented and folded into
//!     logical lines, each logical line is tokenized by a bracket and escape
//!     state machine, and the token run is segmented into command units that
//!     a mode-aware parser dispatches into the document model. Every failure
//!     is caught at its line's boundary and recorded as one diagnostic, so a
//!     bad line never takes down the rest of the block.
//!
//!     The model can then be rendered to HTML or serialized to JSON;
//!     [gloss::processor] bundles the whole run into one call for hosts.

#![allow(rustdoc::invalid_html_tags)]

pub mod gloss;
