//! Command recognition.

use crate::gloss::ast::Tier;
use crate::gloss::token::Token;

/// What a command keyword means to the dispatcher.
///
/// Unknown keywords still produce a command unit, so the dispatcher can
/// reject them with the original spelling; recognition itself never fails on
/// a marker-bearing word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `\ex` sets the preamble.
    Preamble,
    /// `\ft` sets the free translation.
    Translation,
    /// `\num` sets the label.
    Label,
    /// `\gla`, `\glb`, `\glc` assign one fixed tier.
    Tier(Tier),
    /// `\gl` rebuilds the elements from combined per-column units.
    Combined,
    /// `\set` applies an options list.
    Options,
    Unknown,
}

impl CommandKind {
    fn from_keyword(word: &str) -> Self {
        match word {
            "ex" => CommandKind::Preamble,
            "ft" => CommandKind::Translation,
            "num" => CommandKind::Label,
            "gla" => CommandKind::Tier(Tier::A),
            "glb" => CommandKind::Tier(Tier::B),
            "glc" => CommandKind::Tier(Tier::C),
            "gl" => CommandKind::Combined,
            "set" => CommandKind::Options,
            _ => CommandKind::Unknown,
        }
    }
}

/// One recognized command: its kind, the original keyword token text for
/// diagnostics, and the parameter tokens up to the next command.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub text: String,
    pub params: Vec<Token>,
}

/// Recognize one command at the front of `tokens`: a marker-bearing word,
/// then every following token up to (but excluding) the next marker-bearing
/// word.
pub fn get_command(tokens: &[Token]) -> Option<(Command, &[Token])> {
    let first = tokens.first()?;
    if !first.is_command() {
        return None;
    }
    let end = tokens[1..]
        .iter()
        .position(Token::is_command)
        .map(|pos| pos + 1)
        .unwrap_or(tokens.len());
    let command = Command {
        kind: CommandKind::from_keyword(&first.text[1..]),
        text: first.text.clone(),
        params: tokens[1..end].to_vec(),
    };
    Some((command, &tokens[end..]))
}
