//! Option recognition for `\set` bodies.

use crate::gloss::ast::OptionSection;
use crate::gloss::token::{Token, TokenKind};

/// What an option word means to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOptionKind {
    /// Replace a section's style class list.
    Classes(OptionSection),
    /// `glaspaces`: render underscores in the levelA tier as spaces.
    AltSpaces,
    Unknown,
}

impl SetOptionKind {
    fn from_keyword(word: &str) -> Self {
        match word {
            "style" => SetOptionKind::Classes(OptionSection::Global),
            "exstyle" => SetOptionKind::Classes(OptionSection::Preamble),
            "ftstyle" => SetOptionKind::Classes(OptionSection::Translation),
            "glastyle" => SetOptionKind::Classes(OptionSection::LevelA),
            "glbstyle" => SetOptionKind::Classes(OptionSection::LevelB),
            "glcstyle" => SetOptionKind::Classes(OptionSection::LevelC),
            "glxstyle" => SetOptionKind::Classes(OptionSection::Nlevels),
            "glaspaces" => SetOptionKind::AltSpaces,
            _ => SetOptionKind::Unknown,
        }
    }

    fn is_keyword(word: &str) -> bool {
        !matches!(Self::from_keyword(word), SetOptionKind::Unknown)
    }
}

/// One recognized option: its kind, the original word for diagnostics, and
/// the value texts up to the next option keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOption {
    pub kind: SetOptionKind,
    pub text: String,
    pub values: Vec<String>,
}

/// Recognize one option at the front of `tokens`. Any plain word opens an
/// option unit (unknown words are rejected later, with their spelling);
/// values run up to the next word that is a known option keyword.
pub fn get_set_option(tokens: &[Token]) -> Option<(SetOption, &[Token])> {
    let first = tokens.first()?;
    if first.kind != TokenKind::Simple {
        return None;
    }
    let end = tokens[1..]
        .iter()
        .position(|token| token.kind == TokenKind::Simple && SetOptionKind::is_keyword(&token.text))
        .map(|pos| pos + 1)
        .unwrap_or(tokens.len());
    let option = SetOption {
        kind: SetOptionKind::from_keyword(&first.text),
        text: first.text.clone(),
        values: tokens[1..end].iter().map(|token| token.text.clone()).collect(),
    };
    Some((option, &tokens[end..]))
}
