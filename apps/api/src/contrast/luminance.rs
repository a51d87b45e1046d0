//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Colours arrive as CSS colour strings and are parsed with `csscolorparser`,
//! so hex, named colours, `rgb()` and `hsl()` notations all work. Alpha is
//! ignored: the ratio is defined on opaque sRGB.

use thiserror::Error;

/// Luminance weights for linear R, G, B (WCAG 2.1 / ITU-R BT.709).
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

pub const MIN_RATIO: f64 = 1.0;
pub const MAX_RATIO: f64 = 21.0;

/// A palette entry that could not be read as a colour.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason}")]
pub struct ParseError {
    pub reason: String,
}

/// Opaque sRGB colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Parses any CSS colour notation.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseError {
                reason: "colour value is empty".to_string(),
            });
        }

        let parsed = csscolorparser::parse(trimmed).map_err(|e| ParseError {
            reason: e.to_string(),
        })?;
        let [r, g, b, _alpha] = parsed.to_rgba8();

        Ok(Srgb {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        })
    }

    /// Relative luminance in `0.0..=1.0` (0 = black, 1 = white).
    pub fn relative_luminance(&self) -> f64 {
        let linear = [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ];
        linear
            .iter()
            .zip(LUMINANCE_WEIGHTS.iter())
            .map(|(c, w)| c * w)
            .sum()
    }
}

/// sRGB transfer function inverse: gamma-encoded channel → linear light.
fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colours, always in `[1, 21]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; argument order does not matter.
pub fn contrast_ratio(a: &Srgb, b: &Srgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(MIN_RATIO, MAX_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(value: &str) -> Srgb {
        Srgb::parse(value).unwrap()
    }

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast_ratio(&rgb("#000000"), &rgb("#ffffff"));
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_value_is_exactly_1() {
        let ratio = contrast_ratio(&rgb("#3472d8"), &rgb("#3472D8"));
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = rgb("#ff0000");
        let b = rgb("#fef1e3");
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn test_known_grey_on_white() {
        // #767676 is the darkest grey commonly cited as passing AA on white (4.54:1).
        let ratio = contrast_ratio(&rgb("#767676"), &rgb("#ffffff"));
        assert!((ratio - 4.54).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_named_and_functional_notations_parse() {
        assert_eq!(rgb("white"), rgb("#fff"));
        assert_eq!(rgb("rgb(0, 0, 0)"), rgb("black"));
        assert_eq!(rgb("hsl(0, 100%, 50%)"), rgb("#ff0000"));
    }

    #[test]
    fn test_alpha_is_ignored() {
        assert_eq!(rgb("#00000080"), rgb("#000000"));
    }

    #[test]
    fn test_luminance_range() {
        assert_eq!(rgb("#000").relative_luminance(), 0.0);
        assert!((rgb("#fff").relative_luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_and_empty_values_are_rejected() {
        assert!(Srgb::parse("not-a-colour").is_err());
        assert!(Srgb::parse("#12345").is_err());
        assert!(Srgb::parse("   ").is_err());
    }
}
