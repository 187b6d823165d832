//! Vessel vocabulary tests.

use barkeep_order::vocabulary::{CANCELLATIONS, POLITENESS, vessel_names};
use barkeep_order::{ParseVesselError, Vessel};

#[test]
fn all_vessels_are_listed_once() {
    let names: Vec<_> = vessel_names().collect();
    assert_eq!(
        names,
        vec![
            "pint", "bowl", "spoon", "glass", "cup", "pitcher", "magnum", "bottle"
        ]
    );
}

#[test]
fn parse_vessel_ignores_case() {
    assert_eq!("GLASS".parse::<Vessel>(), Ok(Vessel::Glass));
    assert_eq!("sPoOn".parse::<Vessel>(), Ok(Vessel::Spoon));
}

#[test]
fn parse_unknown_vessel_fails() {
    assert_eq!(
        "hatful".parse::<Vessel>(),
        Err(ParseVesselError("hatful".to_string()))
    );
}

#[test]
fn vessel_displays_lowercase() {
    assert_eq!(format!("Here's your {}", Vessel::Pitcher), "Here's your pitcher");
}

#[test]
fn courtesy_and_cancel_words_are_not_vessels() {
    for word in POLITENESS.iter().chain(CANCELLATIONS) {
        assert!(word.parse::<Vessel>().is_err(), "{word}");
    }
}
