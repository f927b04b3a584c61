//! Document model for parsed glosses.
//!
//! The model is plain data: a handful of owned structs the parser fills in
//! and hands back by value. [document] holds the gloss itself (label,
//! preamble, translation, and the interlinear columns); [style] holds the
//! presentation options a `\set` directive can attach to it.

pub mod document;
pub mod style;

pub use document::{GlossData, GlossElement, Tier};
pub use style::{is_valid_style_name, GlossLineStyle, GlossOptions, OptionSection};
