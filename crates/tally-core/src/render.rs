//! Digit-strip SVG rendering.
//!
//! Pure and deterministic: a count plus two normalized colors fully determine
//! the markup. The output is a standalone SVG document with no external
//! resources.

use std::fmt::Write;

use crate::color::ColorSpec;

/// Number of digit cells in the nominal strip.
pub const PLACES: usize = 7;
/// Horizontal advance per cell, px.
const CELL_ADVANCE: usize = 32;
/// Cell rectangle edge, px.
const CELL_SIZE: usize = 29;
/// Glyph font size, px.
const FONT_SIZE: usize = 24;
/// Glyph x offset inside a cell, px.
const GLYPH_X_OFFSET: usize = 7;
/// Glyph baseline, px.
const GLYPH_BASELINE: usize = 22;
/// Overall strip height, px.
const HEIGHT: usize = 30;

/// Render `count` as a standalone SVG digit strip.
///
/// The count is zero-padded on the left to [`PLACES`] digits. Larger counts
/// are not truncated: extra cells simply run past the nominal strip width.
pub fn render_svg(count: u64, background: &ColorSpec, text: &ColorSpec) -> String {
    let digits = format!("{count:0width$}", width = PLACES);

    let mut cells = String::new();
    for (i, digit) in digits.chars().enumerate() {
        let x = i * CELL_ADVANCE;
        let _ = write!(
            cells,
            "\n       <rect fill=\"{bg}\" x=\"{x}\" width=\"{size}\" height=\"{size}\"></rect>\n       \
             <text font-family=\"Courier\" font-size=\"{font}\" font-weight=\"normal\" fill=\"{fg}\">\n           \
             <tspan x=\"{gx}\" y=\"{gy}\">{digit}</tspan>\n       </text>\n",
            bg = background.as_str(),
            size = CELL_SIZE,
            font = FONT_SIZE,
            fg = text.as_str(),
            gx = x + GLYPH_X_OFFSET,
            gy = GLYPH_BASELINE,
        );
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg width=\"{width}px\" height=\"{height}px\" version=\"1.1\" \
         xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n    \
         <title>Count</title>\n    \
         <g stroke=\"none\" stroke-width=\"1\" fill=\"none\" fill-rule=\"evenodd\">{cells}    </g>\n</svg>\n",
        width = PLACES * CELL_ADVANCE,
        height = HEIGHT,
    )
}
