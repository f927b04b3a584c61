//! HTML rendering of the document model.
//!
//! The output is a flat div structure, so the renderer is a string builder:
//! open a container, emit the section divs that have content, close it. Text
//! goes through `html-escape`; style classes never need escaping because the
//! parser only admits letters, digits and dashes into them.
//!
//! Alignment relies on non-breaking spaces: a blank tier cell renders as one
//! `U+00A0` so the column keeps its width, and whitespace runs inside cell
//! text collapse to one `U+00A0` so a cell never wraps.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::gloss::ast::{GlossData, GlossLineStyle, OptionSection};

const NBSP: &str = "\u{00A0}";

/// Message shown when a gloss parses to nothing displayable.
const EMPTY_GLOSS: &str = "the gloss is empty, there's nothing to display";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Collapse every whitespace run into a single non-breaking space.
fn with_nbsp(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, NBSP).into_owned()
}

/// Cell text for one tier row: blank becomes a lone non-breaking space, and
/// a levelA style with `alt_spaces` turns underscore runs into one too.
fn text_or_nbsp(text: &str, style: Option<&GlossLineStyle>) -> String {
    if text.is_empty() {
        return NBSP.to_string();
    }
    if style.is_some_and(|style| style.alt_spaces) {
        with_nbsp(&UNDERSCORE_RUN.replace_all(text, NBSP))
    } else {
        with_nbsp(text)
    }
}

/// Prefixed class names of one section's style record; empty names are
/// filtered out.
fn style_classes(style: Option<&GlossLineStyle>) -> Vec<String> {
    let Some(style) = style else {
        return Vec::new();
    };
    style
        .classes
        .iter()
        .filter(|class| !class.is_empty())
        .map(|class| format!("ling-style-{}", class))
        .collect()
}

fn open_div(out: &mut String, base: &str, extra: &[String]) {
    out.push_str("<div class=\"");
    out.push_str(base);
    for class in extra {
        out.push(' ');
        out.push_str(class);
    }
    out.push_str("\">");
}

fn close_div(out: &mut String) {
    out.push_str("</div>");
}

fn text_div(out: &mut String, base: &str, extra: &[String], text: &str) {
    open_div(out, base, extra);
    out.push_str(&html_escape::encode_text(text));
    close_div(out);
}

/// Render one parsed gloss as HTML.
///
/// The container always carries a label div and a body div; the body holds
/// only the sections that have content. A gloss whose body ends up empty
/// still emits its container, followed by an empty-gloss error block.
pub fn render_gloss(gloss: &GlossData) -> String {
    let mut body = String::new();
    if !gloss.preamble.is_empty() {
        text_div(
            &mut body,
            "ling-gloss-preamble",
            &style_classes(gloss.options.section(OptionSection::Preamble)),
            &gloss.preamble,
        );
    }
    if !gloss.elements.is_empty() {
        render_elements(&mut body, gloss);
    }
    if !gloss.translation.is_empty() {
        text_div(
            &mut body,
            "ling-gloss-translation",
            &style_classes(gloss.options.section(OptionSection::Translation)),
            &gloss.translation,
        );
    }

    let mut out = String::new();
    open_div(&mut out, "ling-gloss", &[]);
    text_div(&mut out, "ling-gloss-label", &[], &with_nbsp(&gloss.label));
    open_div(
        &mut out,
        "ling-gloss-body",
        &style_classes(gloss.options.section(OptionSection::Global)),
    );
    out.push_str(&body);
    close_div(&mut out);
    close_div(&mut out);
    if body.is_empty() {
        text_div(&mut out, "ling-gloss-error", &[], EMPTY_GLOSS);
    }
    out
}

/// One row per tier inside each element div. A document is nlevel-shaped
/// when any element carries `nlevels` entries; the two shapes never mix
/// because the parser's mode is fixed at construction.
fn render_elements(out: &mut String, gloss: &GlossData) {
    open_div(out, "ling-gloss-elements", &[]);
    let nlevel_shaped = gloss.elements.iter().any(|element| !element.nlevels.is_empty());
    if nlevel_shaped {
        let depth = gloss
            .elements
            .iter()
            .map(|element| element.nlevels.len())
            .max()
            .unwrap_or(0);
        let classes = style_classes(gloss.options.section(OptionSection::Nlevels));
        for element in &gloss.elements {
            open_div(out, "ling-gloss-element", &[]);
            for ix in 0..depth {
                let text = element.nlevels.get(ix).map(String::as_str).unwrap_or("");
                text_div(out, "ling-gloss-level-x", &classes, &text_or_nbsp(text, None));
            }
            close_div(out);
        }
    } else {
        let has_level_b = gloss.elements.iter().any(|element| !element.level_b.is_empty());
        let has_level_c = gloss.elements.iter().any(|element| !element.level_c.is_empty());
        let level_a_style = gloss.options.section(OptionSection::LevelA);
        let level_a_classes = style_classes(level_a_style);
        let level_b_classes = style_classes(gloss.options.section(OptionSection::LevelB));
        let level_c_classes = style_classes(gloss.options.section(OptionSection::LevelC));
        for element in &gloss.elements {
            open_div(out, "ling-gloss-element", &[]);
            text_div(
                out,
                "ling-gloss-level-a",
                &level_a_classes,
                &text_or_nbsp(&element.level_a, level_a_style),
            );
            if has_level_b {
                text_div(
                    out,
                    "ling-gloss-level-b",
                    &level_b_classes,
                    &text_or_nbsp(&element.level_b, None),
                );
            }
            if has_level_c {
                text_div(
                    out,
                    "ling-gloss-level-c",
                    &level_c_classes,
                    &text_or_nbsp(&element.level_c, None),
                );
            }
            close_div(out);
        }
    }
    close_div(out);
}

/// Render parse diagnostics: one error block per message, in order.
pub fn render_errors(messages: &[String]) -> String {
    let mut out = String::new();
    for message in messages {
        text_div(&mut out, "ling-gloss-error", &[], message);
    }
    out
}
