//! Digit strip rendering.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::color::ColorSpec;
use tally_core::render::render_svg;

/// Collect the glyphs of a rendered strip, left to right.
fn strip_digits(svg: &str) -> String {
    svg.split("<tspan")
        .skip(1)
        .map(|seg| {
            let inner = seg.split_once('>').unwrap().1;
            inner.split_once('<').unwrap().0.trim().to_string()
        })
        .collect()
}

#[test]
fn seven_cells_zero_padded() {
    let bg = ColorSpec::default_background();
    let fg = ColorSpec::default_text();
    let svg = render_svg(7, &bg, &fg);

    assert_eq!(svg.matches("<rect").count(), 7);
    assert_eq!(strip_digits(&svg), "0000007");
    assert_eq!(svg.matches("fill=\"#000000\"").count(), 7);
    assert_eq!(svg.matches("fill=\"#00FF13\"").count(), 7);
}

#[test]
fn eight_digits_are_not_truncated() {
    let bg = ColorSpec::default_background();
    let fg = ColorSpec::default_text();
    let svg = render_svg(12_345_678, &bg, &fg);

    assert_eq!(svg.matches("<rect").count(), 8);
    assert_eq!(strip_digits(&svg), "12345678");
    // nominal width stays fixed; the extra cell overflows it
    assert!(svg.contains("width=\"224px\""));
}

#[test]
fn custom_colors_flow_into_every_cell() {
    let bg = ColorSpec::normalize("fff", &ColorSpec::default_background());
    let fg = ColorSpec::normalize("000", &ColorSpec::default_text());
    let svg = render_svg(42, &bg, &fg);

    assert_eq!(svg.matches("fill=\"#ffffff\"").count(), 7);
    assert_eq!(svg.matches("fill=\"#000000\"").count(), 7);
    assert_eq!(strip_digits(&svg), "0000042");
}

#[test]
fn output_is_a_standalone_document() {
    let svg = render_svg(0, &ColorSpec::default_background(), &ColorSpec::default_text());

    assert!(svg.starts_with("<?xml version=\"1.0\""));
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(!svg.contains("href"));
}

#[test]
fn cells_advance_by_fixed_offset() {
    let svg = render_svg(
        0,
        &ColorSpec::default_background(),
        &ColorSpec::default_text(),
    );
    for i in 0..7 {
        let x = i * 32;
        assert!(svg.contains(&format!("x=\"{x}\" width=\"29\"")));
    }
}

#[test]
fn deterministic_for_equal_inputs() {
    let bg = ColorSpec::default_background();
    let fg = ColorSpec::default_text();
    assert_eq!(render_svg(123, &bg, &fg), render_svg(123, &bg, &fg));
}
