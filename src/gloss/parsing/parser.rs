//! Gloss parser.
//!
//! Drives line gathering, tokenization and unit scanning over one markup
//! block, dispatching recognized commands into a fresh document model. Every
//! failure is caught at its line's boundary and recorded as one diagnostic,
//! so parsing always runs to the end of the input and always returns a
//! model.
//!
//! The fixed tiers are not written into elements as commands arrive.
//! Instead each `\gla`/`\glb`/`\glc` records its parameter list (and raises
//! the column count), and one finalization step at the end of the parse
//! materializes the columns, padding short tiers with empty strings. The
//! result is the same as growing the element array in place, without the
//! step-order coupling between the three commands.

use crate::gloss::ast::{GlossData, GlossElement, OptionSection, Tier};
use crate::gloss::error::ParseError;
use crate::gloss::lexing::{gather_lines, tokenize_line};
use crate::gloss::parsing::combined::get_combined_element;
use crate::gloss::parsing::command::{get_command, Command, CommandKind};
use crate::gloss::parsing::scan::scan_units;
use crate::gloss::parsing::set_option::{get_set_option, SetOption, SetOptionKind};
use crate::gloss::token::{self, Token, TokenKind};
use crate::gloss::ast::style::is_valid_style_name;

/// Construction-time parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Accept the single `\gl` command with per-column tiers instead of the
    /// fixed `\gla`/`\glb`/`\glc` commands.
    pub nlevel: bool,
}

/// Latest parameter list per fixed tier, plus the column count: the maximum
/// parameter count any tier command has supplied so far (it never shrinks).
#[derive(Debug, Default)]
struct TierAssignments {
    level_a: Vec<String>,
    level_b: Vec<String>,
    level_c: Vec<String>,
    columns: usize,
}

impl TierAssignments {
    fn record(&mut self, tier: Tier, texts: Vec<String>) {
        self.columns = self.columns.max(texts.len());
        match tier {
            Tier::A => self.level_a = texts,
            Tier::B => self.level_b = texts,
            Tier::C => self.level_c = texts,
        }
    }

    fn level(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::A => &self.level_a,
            Tier::B => &self.level_b,
            Tier::C => &self.level_c,
        }
    }

    /// Materialize the recorded assignments: one element per column, with
    /// every tier cell a command never reached left empty.
    fn into_elements(self) -> Vec<GlossElement> {
        (0..self.columns)
            .map(|ix| {
                let mut element = GlossElement::new();
                for tier in [Tier::A, Tier::B, Tier::C] {
                    let text = self.level(tier).get(ix).cloned().unwrap_or_default();
                    element.set_level(tier, text);
                }
                element
            })
            .collect()
    }
}

/// Parser for one operating mode, reusable across inputs.
///
/// The mode is fixed at construction; the document model and diagnostics
/// reset at the start of every [parse](GlossParser::parse) call. A single
/// instance mutates both throughout a call, so sequential reuse is fine but
/// concurrent calls on one instance are not.
#[derive(Debug, Default)]
pub struct GlossParser {
    options: ParserOptions,
    gloss: GlossData,
    tiers: TierAssignments,
    diagnostics: Vec<String>,
}

impl GlossParser {
    pub fn new(options: ParserOptions) -> Self {
        GlossParser {
            options,
            ..Default::default()
        }
    }

    /// Diagnostics recorded by the most recent parse, in line order.
    pub fn errors(&self) -> &[String] {
        &self.diagnostics
    }

    /// Parse one block of gloss markup into a fresh document model.
    pub fn parse(&mut self, source: &str) -> GlossData {
        self.reset();
        for line in gather_lines(source) {
            if let Err(error) = self.process_line(&line) {
                self.diagnostics.push(error.to_string());
            }
        }
        self.finalize()
    }

    fn reset(&mut self) {
        self.gloss = GlossData::new();
        self.tiers = TierAssignments::default();
        self.diagnostics.clear();
    }

    fn finalize(&mut self) -> GlossData {
        if !self.options.nlevel {
            let tiers = std::mem::take(&mut self.tiers);
            self.gloss.elements = tiers.into_elements();
        }
        std::mem::take(&mut self.gloss)
    }

    /// Process one logical line; any error is this line's single diagnostic.
    fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        let tokens = tokenize_line(line)?;
        if is_comment(&tokens) {
            return Ok(());
        }
        let rest = scan_units(&tokens, get_command, |command| {
            self.dispatch_command(command)
        })?;
        if !rest.is_empty() {
            return Err(ParseError::TrailingTokens {
                preview: token::preview(rest),
            });
        }
        Ok(())
    }

    fn dispatch_command(&mut self, command: Command) -> Result<(), ParseError> {
        match command.kind {
            CommandKind::Preamble => {
                self.gloss.preamble = string_field(&command, "preamble")?;
            }
            CommandKind::Translation => {
                self.gloss.translation = string_field(&command, "translation")?;
            }
            CommandKind::Label => {
                self.gloss.label = string_field(&command, "label")?;
            }
            CommandKind::Tier(tier) => self.assign_tier(tier, &command)?,
            CommandKind::Combined => self.parse_combined(&command)?,
            CommandKind::Options => self.apply_options(&command)?,
            CommandKind::Unknown => {
                return Err(ParseError::UnknownCommand { text: command.text });
            }
        }
        Ok(())
    }

    fn assign_tier(&mut self, tier: Tier, command: &Command) -> Result<(), ParseError> {
        if self.options.nlevel {
            return Err(ParseError::UsedInNlevelMode {
                text: command.text.clone(),
            });
        }
        // Zero parameters is legal and clears the tier.
        let texts = command.params.iter().map(|t| t.text.clone()).collect();
        self.tiers.record(tier, texts);
        Ok(())
    }

    fn parse_combined(&mut self, command: &Command) -> Result<(), ParseError> {
        if !self.options.nlevel {
            return Err(ParseError::UsedInRegularMode {
                text: command.text.clone(),
            });
        }
        // Each `\gl` discards the previous columns wholesale.
        self.gloss.elements.clear();
        let elements = &mut self.gloss.elements;
        let rest = scan_units(
            &command.params,
            get_combined_element,
            |element| -> Result<(), ParseError> {
                elements.push(element);
                Ok(())
            },
        )?;
        if !rest.is_empty() {
            return Err(ParseError::Unrecognized {
                preview: token::preview(rest),
            });
        }
        Ok(())
    }

    fn apply_options(&mut self, command: &Command) -> Result<(), ParseError> {
        // Gather the full options list first: a malformed tail voids the
        // whole directive, even its well-formed leading options.
        let mut options: Vec<SetOption> = Vec::new();
        let rest = scan_units(
            &command.params,
            get_set_option,
            |option| -> Result<(), ParseError> {
                options.push(option);
                Ok(())
            },
        )?;
        if !rest.is_empty() {
            return Err(ParseError::Unrecognized {
                preview: token::preview(rest),
            });
        }
        for option in options {
            self.apply_set_option(option)?;
        }
        Ok(())
    }

    fn apply_set_option(&mut self, option: SetOption) -> Result<(), ParseError> {
        match option.kind {
            SetOptionKind::Classes(section) => self.set_style_classes(section, &option.values),
            SetOptionKind::AltSpaces => {
                let style = self.gloss.options.section_mut(OptionSection::LevelA);
                style.alt_spaces = true;
                Ok(())
            }
            SetOptionKind::Unknown => Err(ParseError::UnknownOption { text: option.text }),
        }
    }

    /// Replace a section's class list; every name must validate or the
    /// whole directive is rejected with the section untouched.
    fn set_style_classes(
        &mut self,
        section: OptionSection,
        values: &[String],
    ) -> Result<(), ParseError> {
        if values.is_empty() {
            return Err(ParseError::MissingValues {
                section: section.name().to_string(),
            });
        }
        if let Some(bad) = values.iter().find(|value| !is_valid_style_name(value)) {
            return Err(ParseError::InvalidStyleName { name: bad.clone() });
        }
        self.gloss.options.section_mut(section).classes = values.to_vec();
        Ok(())
    }
}

/// Space-joined parameter text of a value command; at least one parameter is
/// required.
fn string_field(command: &Command, key: &str) -> Result<String, ParseError> {
    if command.params.is_empty() {
        return Err(ParseError::MissingValue {
            key: key.to_string(),
        });
    }
    Ok(command
        .params
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}

/// A comment line's first token is a plain word starting with `#`.
fn is_comment(tokens: &[Token]) -> bool {
    tokens
        .first()
        .map_or(false, |t| t.kind == TokenKind::Simple && t.text.starts_with('#'))
}
