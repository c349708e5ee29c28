//! Color normalization rules.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::color::{ColorSpec, DEFAULT_BACKGROUND, DEFAULT_TEXT};

fn fallback() -> ColorSpec {
    ColorSpec::default_background()
}

#[test]
fn shorthand_expands_by_duplication() {
    let c = ColorSpec::normalize("fff", &fallback());
    assert_eq!(c.as_str(), "#ffffff");
}

#[test]
fn six_digit_form_preserved_with_case() {
    let c = ColorSpec::normalize("#12AB3C", &fallback());
    assert_eq!(c.as_str(), "#12AB3C");
}

#[test]
fn hash_prefix_is_optional() {
    let c = ColorSpec::normalize("00FF13", &fallback());
    assert_eq!(c.as_str(), "#00FF13");
}

#[test]
fn shorthand_preserves_case() {
    let c = ColorSpec::normalize("A0f", &fallback());
    assert_eq!(c.as_str(), "#AA00ff");
}

#[test]
fn junk_falls_back() {
    let c = ColorSpec::normalize("not-a-color", &fallback());
    assert_eq!(c, fallback());
}

#[test]
fn empty_falls_back() {
    let c = ColorSpec::normalize("", &fallback());
    assert_eq!(c, fallback());
}

#[test]
fn four_hex_digits_are_invalid() {
    let c = ColorSpec::normalize("abcd", &fallback());
    assert_eq!(c, fallback());
}

#[test]
fn five_hex_digits_are_invalid() {
    let c = ColorSpec::normalize("#abcde", &fallback());
    assert_eq!(c, fallback());
}

#[test]
fn defaults_are_well_formed() {
    assert_eq!(ColorSpec::default_background().as_str(), DEFAULT_BACKGROUND);
    assert_eq!(ColorSpec::default_text().as_str(), DEFAULT_TEXT);
}
