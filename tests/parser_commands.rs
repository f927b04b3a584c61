//! End-to-end parsing behavior over whole markup blocks.

use ling_gloss::gloss::ast::OptionSection;
use ling_gloss::gloss::testing::{parse_fixed, parse_nlevel};

#[test]
fn test_full_fixed_document() {
    let source = "\
\\num (12)
\\ex Dunkler wird es schon
\\gla dunkler wird es schon
\\glb darker becomes it already
\\ft It is already getting darker";
    let (gloss, errors) = parse_fixed(source);
    assert!(errors.is_empty());
    assert_eq!(gloss.label, "(12)");
    assert_eq!(gloss.preamble, "Dunkler wird es schon");
    assert_eq!(gloss.translation, "It is already getting darker");
    assert_eq!(gloss.elements.len(), 4);
    assert_eq!(gloss.elements[0].level_a, "dunkler");
    assert_eq!(gloss.elements[3].level_b, "already");
    assert_eq!(gloss.elements[0].level_c, "");
}

#[test]
fn test_last_value_command_wins() {
    let (gloss, errors) = parse_fixed("\\ft first\n\\ft second try");
    assert!(errors.is_empty());
    assert_eq!(gloss.translation, "second try");
}

#[test]
fn test_column_growth_pads_short_tiers() {
    let (gloss, errors) = parse_fixed("\\gla a b c\n\\glb x y");
    assert!(errors.is_empty());
    assert_eq!(gloss.elements.len(), 3);
    assert_eq!(gloss.elements[2].level_a, "c");
    assert_eq!(gloss.elements[2].level_b, "");
}

#[test]
fn test_bracketed_parameter_keeps_its_spaces() {
    let (gloss, errors) = parse_fixed("\\gla [le petit] chat\n\\glb [the small] cat");
    assert!(errors.is_empty());
    assert_eq!(gloss.elements.len(), 2);
    assert_eq!(gloss.elements[0].level_a, "le petit");
    assert_eq!(gloss.elements[0].level_b, "the small");
}

#[test]
fn test_escapes_reach_the_model() {
    let (gloss, errors) = parse_fixed("\\ex a ^[b^] ^^c ^q");
    assert!(errors.is_empty());
    assert_eq!(gloss.preamble, "a [b] ^c ^q");
}

#[test]
fn test_continuation_feeds_the_command_above() {
    let (gloss, errors) = parse_fixed("\\ex foo\n  bar");
    assert!(errors.is_empty());
    assert_eq!(gloss.preamble, "foo bar");
}

#[test]
fn test_mode_exclusivity_fixed_command_under_nlevel() {
    let (gloss, errors) = parse_nlevel("\\gla le chat");
    assert_eq!(errors, vec!["command “\\gla” can't be used in nlevel mode"]);
    assert!(gloss.elements.is_empty());
}

#[test]
fn test_mode_exclusivity_combined_command_under_fixed() {
    let (gloss, errors) = parse_fixed("\\gl katze [cat]");
    assert_eq!(errors, vec!["command “\\gl” can't be used in regular mode"]);
    assert!(gloss.elements.is_empty());
}

#[test]
fn test_unknown_command_leaves_other_lines_intact() {
    let (gloss, errors) = parse_fixed("\\ex chat\n\\xyz val\n\\ft cat");
    assert_eq!(errors, vec!["command “\\xyz” is not known"]);
    assert_eq!(gloss.preamble, "chat");
    assert_eq!(gloss.translation, "cat");
}

#[test]
fn test_failing_line_is_isolated() {
    let (gloss, errors) = parse_fixed("\\gla a b\n\\glb [x y\n\\glc p q");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("without matching"));
    assert_eq!(gloss.elements.len(), 2);
    assert_eq!(gloss.elements[0].level_b, "");
    assert_eq!(gloss.elements[0].level_c, "p");
}

#[test]
fn test_style_directive_validation_is_all_or_nothing() {
    let (gloss, errors) = parse_fixed("\\set style bad!name");
    assert_eq!(errors, vec!["“bad!name” isn't a valid style name"]);
    assert!(gloss.options.section(OptionSection::Global).is_none());
}

#[test]
fn test_style_directives_accumulate_across_sections() {
    let (gloss, errors) = parse_fixed("\\set style big\n\\set glastyle words glaspaces");
    assert!(errors.is_empty());
    let global = gloss.options.section(OptionSection::Global).unwrap();
    assert_eq!(global.classes, vec!["big"]);
    let level_a = gloss.options.section(OptionSection::LevelA).unwrap();
    assert_eq!(level_a.classes, vec!["words"]);
    assert!(level_a.alt_spaces);
}

#[test]
fn test_nlevel_elements_carry_their_own_depth() {
    let (gloss, errors) = parse_nlevel("\\gl foo [NOM] bar [ACC] [x]");
    assert!(errors.is_empty());
    assert_eq!(gloss.elements.len(), 2);
    assert_eq!(gloss.elements[0].nlevels, vec!["foo", "NOM"]);
    assert_eq!(gloss.elements[1].nlevels, vec!["bar", "ACC", "x"]);
}

#[test]
fn test_repeated_combined_command_replaces_elements() {
    let (gloss, errors) = parse_nlevel("\\gl a [1] b [2]\n\\gl c [3]");
    assert!(errors.is_empty());
    assert_eq!(gloss.elements.len(), 1);
    assert_eq!(gloss.elements[0].nlevels, vec!["c", "3"]);
}

#[test]
fn test_determinism_across_modes() {
    let source = "\\num (1)\n\\ex a b\n\\gla a b\n\\glb x\n\\set style big\n\\oops";
    assert_eq!(parse_fixed(source), parse_fixed(source));
    let source = "\\gl a [1]\n\\oops";
    assert_eq!(parse_nlevel(source), parse_nlevel(source));
}
