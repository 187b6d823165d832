//! Primitive rule tests.

use barkeep_peg::{Rule, any, any_of, end_of_input, literal, literal_ignore_case, recognize};

fn consumed(rule: &Rule<()>, input: &str) -> Option<usize> {
    recognize(rule, input).map(|m| m.consumed())
}

#[test]
fn literal_is_case_sensitive() {
    let rule = literal("of");
    assert_eq!(consumed(&rule, "of beer"), Some(2));
    assert_eq!(consumed(&rule, "OF beer"), None);
}

#[test]
fn literal_ignore_case_matches_any_case() {
    let rule = literal_ignore_case("of");
    assert_eq!(consumed(&rule, "OF beer"), Some(2));
    assert_eq!(consumed(&rule, "oF"), Some(2));
    assert_eq!(consumed(&rule, "o"), None);
}

#[test]
fn any_of_takes_one_character_from_set() {
    let rule = any_of(".!?");
    assert_eq!(consumed(&rule, "!!"), Some(1));
    assert_eq!(consumed(&rule, ","), None);
    assert_eq!(consumed(&rule, ""), None);
}

#[test]
fn any_takes_one_character() {
    let rule = any();
    assert_eq!(consumed(&rule, "é"), Some(2));
    assert_eq!(consumed(&rule, ""), None);
}

#[test]
fn end_of_input_only_at_end() {
    let rule = end_of_input();
    assert_eq!(consumed(&rule, ""), Some(0));
    assert_eq!(consumed(&rule, " "), None);
}

#[test]
fn recognition_reports_matched_prefix() {
    let m = recognize(&literal::<()>("pint"), "pint of ale").unwrap();
    assert_eq!(m.matched(), "pint");
    assert!(!m.is_complete());
}
