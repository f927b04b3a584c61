//! Gloss document and element types.

use crate::gloss::ast::style::GlossOptions;

/// One of the three fixed annotation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    A,
    B,
    C,
}

/// One interlinear column.
///
/// In regular mode the three fixed tier fields hold the column's texts and
/// `nlevels` stays empty; in nlevel mode every tier lives in `nlevels`
/// (starting with the headword) and the fixed fields stay empty. The two
/// shapes never mix within one document.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossElement {
    pub level_a: String,
    pub level_b: String,
    pub level_c: String,
    pub nlevels: Vec<String>,
}

impl GlossElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of one fixed tier.
    pub fn level(&self, tier: Tier) -> &str {
        match tier {
            Tier::A => &self.level_a,
            Tier::B => &self.level_b,
            Tier::C => &self.level_c,
        }
    }

    pub fn set_level(&mut self, tier: Tier, text: String) {
        match tier {
            Tier::A => self.level_a = text,
            Tier::B => self.level_b = text,
            Tier::C => self.level_c = text,
        }
    }
}

/// One parsed gloss document.
///
/// Created fresh at the start of every parse and returned by value; the
/// diagnostics of the parse that produced it live on the parser, not here.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct GlossData {
    pub label: String,
    pub preamble: String,
    pub translation: String,
    pub elements: Vec<GlossElement>,
    pub options: GlossOptions,
}

impl GlossData {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_accessors() {
        let mut element = GlossElement::new();
        element.set_level(Tier::B, "cat".to_string());
        assert_eq!(element.level(Tier::A), "");
        assert_eq!(element.level(Tier::B), "cat");
    }

    #[test]
    fn test_fresh_document_is_empty() {
        let gloss = GlossData::new();
        assert_eq!(gloss.label, "");
        assert!(gloss.elements.is_empty());
        assert_eq!(gloss.options, GlossOptions::default());
    }
}
