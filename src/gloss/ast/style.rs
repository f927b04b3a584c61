//! Presentation options attached to a gloss.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Style class names are plain words: letters, digits and dashes.
static STYLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Whether `name` is usable as a style class name.
pub fn is_valid_style_name(name: &str) -> bool {
    STYLE_NAME.is_match(name)
}

/// The sections a style directive can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSection {
    Global,
    Preamble,
    Translation,
    LevelA,
    LevelB,
    LevelC,
    Nlevels,
}

impl OptionSection {
    /// The section name as shown in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            OptionSection::Global => "global",
            OptionSection::Preamble => "preamble",
            OptionSection::Translation => "translation",
            OptionSection::LevelA => "levelA",
            OptionSection::LevelB => "levelB",
            OptionSection::LevelC => "levelC",
            OptionSection::Nlevels => "nlevels",
        }
    }
}

impl fmt::Display for OptionSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presentation record for one section.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossLineStyle {
    /// Style class names, applied wholesale by each directive.
    pub classes: Vec<String>,
    /// Replace underscore runs with non-breaking spaces when rendering.
    /// Only meaningful on the levelA section.
    pub alt_spaces: bool,
}

/// Per-section style records, created lazily by the first directive that
/// targets each section.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossOptions {
    pub global: Option<GlossLineStyle>,
    pub preamble: Option<GlossLineStyle>,
    pub translation: Option<GlossLineStyle>,
    pub level_a: Option<GlossLineStyle>,
    pub level_b: Option<GlossLineStyle>,
    pub level_c: Option<GlossLineStyle>,
    pub nlevels: Option<GlossLineStyle>,
}

impl GlossOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style record for a section, if any directive has created it.
    pub fn section(&self, section: OptionSection) -> Option<&GlossLineStyle> {
        match section {
            OptionSection::Global => self.global.as_ref(),
            OptionSection::Preamble => self.preamble.as_ref(),
            OptionSection::Translation => self.translation.as_ref(),
            OptionSection::LevelA => self.level_a.as_ref(),
            OptionSection::LevelB => self.level_b.as_ref(),
            OptionSection::LevelC => self.level_c.as_ref(),
            OptionSection::Nlevels => self.nlevels.as_ref(),
        }
    }

    /// Style record for a section, created on first use.
    pub fn section_mut(&mut self, section: OptionSection) -> &mut GlossLineStyle {
        let slot = match section {
            OptionSection::Global => &mut self.global,
            OptionSection::Preamble => &mut self.preamble,
            OptionSection::Translation => &mut self.translation,
            OptionSection::LevelA => &mut self.level_a,
            OptionSection::LevelB => &mut self.level_b,
            OptionSection::LevelC => &mut self.level_c,
            OptionSection::Nlevels => &mut self.nlevels,
        };
        slot.get_or_insert_with(GlossLineStyle::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_name_validation() {
        assert!(is_valid_style_name("big"));
        assert!(is_valid_style_name("Strong-2"));
        assert!(!is_valid_style_name(""));
        assert!(!is_valid_style_name("bad!name"));
        assert!(!is_valid_style_name("two words"));
        assert!(!is_valid_style_name("ünïcode"));
    }

    #[test]
    fn test_sections_are_created_on_demand() {
        let mut options = GlossOptions::new();
        assert!(options.section(OptionSection::LevelA).is_none());

        options.section_mut(OptionSection::LevelA).alt_spaces = true;
        let style = options.section(OptionSection::LevelA).unwrap();
        assert!(style.alt_spaces);
        assert!(style.classes.is_empty());

        // Other sections stay untouched.
        assert!(options.section(OptionSection::Global).is_none());
    }

    #[test]
    fn test_section_names() {
        assert_eq!(OptionSection::Global.name(), "global");
        assert_eq!(OptionSection::LevelA.name(), "levelA");
        assert_eq!(OptionSection::Nlevels.to_string(), "nlevels");
    }
}
