//! Tests for level ordering, parsing, labels, and the color mapping.

use dumplog::Level;
use dumplog::fmt::{GREEN, RED, RESET, YELLOW, colorize, level_color};

#[test]
fn ordering_is_ascending_verbosity() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::None);
}

#[test]
fn default_is_the_suppress_all_sentinel() {
    assert_eq!(Level::default(), Level::None);
}

#[test]
fn parse_known_levels() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("none".parse::<Level>().unwrap(), Level::None);
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("TRACE".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
}

#[test]
fn parse_unknown_level_reports_the_input() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn display_round_trips_through_parse() {
    for level in Level::all() {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn labels() {
    assert_eq!(Level::Trace.label(), "TRACE: ");
    assert_eq!(Level::Debug.label(), "DEBUG: ");
    assert_eq!(Level::Info.label(), "INFO: ");
    assert_eq!(Level::None.label(), "");
}

#[test]
fn historical_color_mapping_is_preserved() {
    assert_eq!(level_color(Level::Trace), Some(GREEN));
    assert_eq!(level_color(Level::Debug), Some(YELLOW));
    assert_eq!(level_color(Level::Info), Some(RED));
    assert_eq!(level_color(Level::None), None);
}

#[test]
fn colorize_wraps_and_resets() {
    assert_eq!(colorize("boom", RED), format!("{RED}boom{RESET}"));
}

#[test]
fn only_the_sentinel_is_not_a_message_level() {
    assert!(Level::Trace.is_message_level());
    assert!(Level::Debug.is_message_level());
    assert!(Level::Info.is_message_level());
    assert!(!Level::None.is_message_level());
}
