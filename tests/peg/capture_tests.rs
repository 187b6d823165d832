//! Capture and fold tests.

use barkeep_peg::{
    Rule, any_of, capture, end_of_input, first_of, literal, one_or_more, optional, recognize,
    sequence, whitespace,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tag {
    Count,
    Unit,
}

fn quantity() -> Rule<Tag> {
    sequence([
        capture(Tag::Count, one_or_more(any_of("0123456789"))),
        whitespace(),
        capture(Tag::Unit, first_of([literal("pints"), literal("cups")])),
        end_of_input(),
    ])
}

#[test]
fn captures_record_text_and_span() {
    let m = recognize(&quantity(), "12 pints").unwrap();
    let count = m.capture(&Tag::Count).unwrap();
    assert_eq!(count.text, "12");
    assert_eq!(count.span, 0..2);
    assert_eq!(m.capture(&Tag::Unit).unwrap().text, "pints");
}

#[test]
fn fold_replays_captures_in_order() {
    let m = recognize(&quantity(), "3 cups").unwrap();
    let summary = m.fold(String::new(), |mut acc, c| {
        acc.push_str(&format!("{:?}={};", c.tag, c.text));
        acc
    });
    assert_eq!(summary, "Count=3;Unit=cups;");
}

#[test]
fn failed_match_yields_nothing() {
    assert!(recognize(&quantity(), "3 bowls").is_none());
}

#[test]
fn abandoned_optional_leaves_no_capture() {
    let rule = sequence([
        optional(sequence([capture(Tag::Count, literal("2")), literal("x")])),
        capture(Tag::Unit, literal("2y")),
    ]);
    let m = recognize(&rule, "2y").unwrap();
    assert_eq!(m.captures().len(), 1);
    assert_eq!(m.captures()[0].tag, Tag::Unit);
}

#[test]
fn repeated_capture_records_each_pass() {
    let rule = one_or_more(sequence([
        capture(Tag::Count, any_of("0123456789")),
        optional(literal(",")),
    ]));
    let m = recognize(&rule, "1,2,3").unwrap();
    let digits: Vec<_> = m.captures().iter().map(|c| c.text).collect();
    assert_eq!(digits, vec!["1", "2", "3"]);
}
