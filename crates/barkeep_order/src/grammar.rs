//! The drink order grammar.
//!
//! ```text
//! ORDER       = ws* (DRINK / CANCEL) POLITENESS? TERMINAL
//! DRINK       = ARTICLE? VESSEL SEPARATOR DESCRIPTION
//! ARTICLE     = ("a" / "an" / "the") ws+
//! VESSEL      = <vessel keyword>                      -> vessel
//! SEPARATOR   = ws* "," ws*  /  ws+ "of" ws+
//! DESCRIPTION = !(COURTESY TERMINAL) (!(POLITENESS? TERMINAL) ANY)+   -> description
//! POLITENESS  = ws* "," ws* COURTESY  /  ws+ COURTESY
//! COURTESY    = "please" / "pls" / "okay" / "ok" / "yo"
//! TERMINAL    = ws* [.!?]? ws* EOI
//! CANCEL      = ("nothing" / "nada" / "zilch" / "done") EOI   -> terminal
//! ```
//!
//! Keywords match case-insensitively, longest alternative first. The
//! description runs up to the point where the rest of the line is a
//! courtesy/punctuation tail, so "pinot noir, 1986" keeps its comma while
//! "pinot noir, 1986, ok?" loses the tail. A courtesy word must start a word
//! of its own, so "tokay" stays whole.

use std::sync::OnceLock;

use barkeep_peg::{
    Capture, Rule, any, any_of, capture, end_of_input, first_of, literal, literal_ignore_case,
    one_of, one_or_more, optional, recognize, sequence, test, test_not, whitespace, zero_or_more,
};

use crate::config::RecognizerConfig;
use crate::error::{RecognizeError, Result};
use crate::order::{Order, OrderBuilder};
use crate::vocabulary::{ARTICLES, CANCELLATIONS, POLITENESS, TERMINAL_PUNCTUATION, vessel_names};

/// What a capture in the order grammar stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderTag {
    /// The vessel keyword
    Vessel,
    /// The raw drink description
    Description,
    /// A cancellation word
    Cancel,
}

type OrderRule = Rule<OrderTag>;

fn article() -> OrderRule {
    sequence([one_of(ARTICLES.iter().copied()), one_or_more(whitespace())])
}

fn vessel() -> OrderRule {
    capture(OrderTag::Vessel, one_of(vessel_names()))
}

fn separator() -> OrderRule {
    first_of([
        sequence([
            zero_or_more(whitespace()),
            literal(","),
            zero_or_more(whitespace()),
        ]),
        sequence([
            one_or_more(whitespace()),
            literal_ignore_case("of"),
            one_or_more(whitespace()),
        ]),
    ])
}

fn courtesy() -> OrderRule {
    one_of(POLITENESS.iter().copied())
}

fn politeness() -> OrderRule {
    first_of([
        sequence([
            zero_or_more(whitespace()),
            literal(","),
            zero_or_more(whitespace()),
            courtesy(),
        ]),
        sequence([one_or_more(whitespace()), courtesy()]),
    ])
}

fn terminal_mark() -> OrderRule {
    sequence([
        zero_or_more(whitespace()),
        optional(any_of(TERMINAL_PUNCTUATION)),
        zero_or_more(whitespace()),
        end_of_input(),
    ])
}

/// The tail that may follow a description.
fn suffix() -> OrderRule {
    sequence([optional(politeness()), terminal_mark()])
}

/// The separator ends on a word boundary, so a courtesy word may open the
/// description with nothing in front of it.
fn description() -> OrderRule {
    capture(
        OrderTag::Description,
        sequence([
            test_not(sequence([courtesy(), terminal_mark()])),
            one_or_more(sequence([test_not(suffix()), any()])),
        ]),
    )
}

fn drink() -> OrderRule {
    sequence([optional(article()), vessel(), separator(), description()])
}

fn cancel(lenient: bool) -> OrderRule {
    let word = capture(OrderTag::Cancel, one_of(CANCELLATIONS.iter().copied()));
    if lenient {
        sequence([word, test(suffix())])
    } else {
        sequence([word, end_of_input()])
    }
}

/// Semantic action for one capture.
fn apply(builder: OrderBuilder, capture: Capture<'_, OrderTag>) -> OrderBuilder {
    match capture.tag {
        OrderTag::Vessel => builder.vessel(capture.text.parse().ok()),
        OrderTag::Description => builder.description(capture.text),
        OrderTag::Cancel => builder.terminal(),
    }
}

/// A compiled order grammar.
///
/// Immutable once built: one instance can serve any number of threads, each
/// call to [`recognize`](Self::recognize) uses its own cursor and result.
#[derive(Clone, Debug)]
pub struct OrderGrammar {
    config: RecognizerConfig,
    top: OrderRule,
}

impl Default for OrderGrammar {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl OrderGrammar {
    /// Builds the grammar for the given configuration.
    #[must_use]
    pub fn new(config: RecognizerConfig) -> Self {
        let top = sequence([
            zero_or_more(whitespace()),
            first_of([drink(), cancel(config.lenient_cancellation)]),
            optional(politeness()),
            terminal_mark(),
        ]);
        Self { config, top }
    }

    /// The configuration this grammar was built with.
    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Recognizes one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`RecognizeError::NotUnderstood`] if the whole line is not an
    /// order.
    pub fn recognize(&self, line: &str) -> Result<Order> {
        if !self.config.accepts_len(line) {
            log::debug!("rejected line of {} bytes: over length limit", line.len());
            return Err(RecognizeError::NotUnderstood);
        }

        let order = recognize(&self.top, line)
            .and_then(|m| m.fold(OrderBuilder::default(), apply).finish());

        match order {
            Some(order) => {
                log::trace!("recognized {line:?} as {order:?}");
                Ok(order)
            }
            None => {
                log::debug!("not understood: {line:?}");
                Err(RecognizeError::NotUnderstood)
            }
        }
    }
}

/// Recognizes one line with the default grammar.
///
/// The grammar is built on first use and shared afterwards.
///
/// # Errors
///
/// Returns [`RecognizeError::NotUnderstood`] if the whole line is not an
/// order.
pub fn recognize_order(line: &str) -> Result<Order> {
    static GRAMMAR: OnceLock<OrderGrammar> = OnceLock::new();
    GRAMMAR.get_or_init(OrderGrammar::default).recognize(line)
}
