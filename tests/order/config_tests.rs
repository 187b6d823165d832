//! Recognizer configuration tests.

use barkeep_order::{Order, OrderGrammar, RecognizeError, RecognizerConfig};

#[test]
fn default_grammar_keeps_cancellation_strict() {
    let grammar = OrderGrammar::default();
    assert_eq!(grammar.recognize("done"), Ok(Order::terminal()));
    assert_eq!(
        grammar.recognize("done, please"),
        Err(RecognizeError::NotUnderstood)
    );
}

#[test]
fn lenient_cancellation_accepts_courtesy_tail() {
    let grammar = OrderGrammar::new(RecognizerConfig::new().with_lenient_cancellation(true));
    assert_eq!(grammar.recognize("done"), Ok(Order::terminal()));
    assert_eq!(grammar.recognize("done, please"), Ok(Order::terminal()));
    assert_eq!(grammar.recognize("Zilch pls."), Ok(Order::terminal()));
    assert!(grammar.config().lenient_cancellation);
}

#[test]
fn lenient_cancellation_rejects_other_tails() {
    let grammar = OrderGrammar::new(RecognizerConfig::new().with_lenient_cancellation(true));
    assert_eq!(
        grammar.recognize("nothing, thanks"),
        Err(RecognizeError::NotUnderstood)
    );
    assert_eq!(grammar.recognize("doneyo"), Err(RecognizeError::NotUnderstood));
    assert_eq!(grammar.recognize("nadaok!"), Err(RecognizeError::NotUnderstood));
}

#[test]
fn lenient_cancellation_leaves_drinks_alone() {
    let strict = OrderGrammar::default();
    let lenient = OrderGrammar::new(RecognizerConfig::new().with_lenient_cancellation(true));
    let line = "a pint of duck vomit, please";
    assert_eq!(strict.recognize(line), lenient.recognize(line));
}

#[test]
fn length_limit_rejects_long_lines() {
    let grammar = OrderGrammar::new(RecognizerConfig::new().with_max_input_len(Some(16)));
    assert!(grammar.recognize("a cup of tea").is_ok());
    assert_eq!(
        grammar.recognize("a cup of tea with milk and two sugars"),
        Err(RecognizeError::NotUnderstood)
    );
}

#[test]
fn length_limit_can_be_lifted() {
    let grammar = OrderGrammar::new(RecognizerConfig::new().with_max_input_len(None));
    let line = format!("a bottle of {}", "rum ".repeat(1_000));
    let order = grammar.recognize(&line).unwrap();
    assert!(order.description().starts_with("rum rum"));
    assert!(!order.description().ends_with(' '));
}
