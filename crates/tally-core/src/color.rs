//! Hex color validation and normalization.
//!
//! Malformed color input never fails a request: it degrades to the
//! caller-supplied fallback with a warning.

use std::fmt;

/// Default cell background.
pub const DEFAULT_BACKGROUND: &str = "#000000";
/// Default glyph color.
pub const DEFAULT_TEXT: &str = "#00FF13";

/// A normalized `#RRGGBB` color.
///
/// Values of this type are always a `#`-prefixed 6-hex-digit string; the only
/// public constructors are [`ColorSpec::normalize`] and the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec(String);

impl ColorSpec {
    /// Normalize raw user input against a fallback.
    ///
    /// Empty input yields the fallback. A missing `#` is prepended. Anything
    /// that is not `#` followed by exactly 3 or 6 hex digits degrades to the
    /// fallback. 3-digit shorthand expands by duplicating each digit; case is
    /// preserved throughout.
    pub fn normalize(input: &str, fallback: &ColorSpec) -> ColorSpec {
        if input.is_empty() {
            return fallback.clone();
        }
        let candidate = if input.starts_with('#') {
            input.to_string()
        } else {
            format!("#{input}")
        };
        match Self::expand(&candidate) {
            Some(spec) => spec,
            None => {
                tracing::warn!(input, fallback = %fallback, "invalid color, using fallback");
                fallback.clone()
            }
        }
    }

    fn expand(candidate: &str) -> Option<ColorSpec> {
        let hex = candidate.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(ColorSpec(candidate.to_string())),
            3 => {
                let mut out = String::with_capacity(7);
                out.push('#');
                for c in hex.chars() {
                    out.push(c);
                    out.push(c);
                }
                Some(ColorSpec(out))
            }
            _ => None,
        }
    }

    /// The normalized `#RRGGBB` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Default background color.
    pub fn default_background() -> ColorSpec {
        ColorSpec(DEFAULT_BACKGROUND.to_string())
    }

    /// Default text color.
    pub fn default_text() -> ColorSpec {
        ColorSpec(DEFAULT_TEXT.to_string())
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
