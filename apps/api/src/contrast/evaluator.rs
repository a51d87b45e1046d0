//! Contrast Evaluator: palette → full pairwise compliance matrix.
//!
//! Every palette entry is compared, as a background, against every other entry
//! by *position*. Two equal colour strings at different positions are still
//! compared (ratio 1, not safe). The WCAG level is an explicit argument; there is
//! no state shared between calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contrast::luminance::{contrast_ratio, Srgb};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A palette colour exactly as submitted. Equality is by string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color(value.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// WCAG conformance level used for thresholds and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    AA,
    AAA,
}

impl WcagLevel {
    pub fn from_aaa_flag(level_aaa: bool) -> Self {
        if level_aaa {
            WcagLevel::AAA
        } else {
            WcagLevel::AA
        }
    }

    /// Minimum ratio for normal-size text.
    pub fn normal_text_threshold(self) -> f64 {
        match self {
            WcagLevel::AA => 4.5,
            WcagLevel::AAA => 7.0,
        }
    }

    /// Minimum ratio for large text (18pt, or 14pt bold).
    pub fn large_text_threshold(self) -> f64 {
        match self {
            WcagLevel::AA => 3.0,
            WcagLevel::AAA => 4.5,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }

    /// Classifies a contrast ratio against this level's thresholds.
    pub fn classify(self, ratio: f64) -> ComplianceTier {
        if ratio >= self.normal_text_threshold() {
            ComplianceTier::Safe
        } else if ratio >= self.large_text_threshold() {
            ComplianceTier::LargeOnly
        } else {
            ComplianceTier::NotSafe
        }
    }
}

/// Compliance of one foreground/background pair at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceTier {
    /// Meets the normal-text threshold.
    Safe,
    /// Meets the large-text threshold only.
    LargeOnly,
    /// Meets neither threshold.
    NotSafe,
}

impl ComplianceTier {
    /// Whether the pair is shown as a usable combination. Packer and document
    /// plan both filter on this, so they always agree on what gets a tile.
    pub fn is_compliant(self) -> bool {
        !matches!(self, ComplianceTier::NotSafe)
    }

    pub fn label(self, level: WcagLevel) -> String {
        match self {
            ComplianceTier::Safe => format!("{} Safe", level.tag()),
            ComplianceTier::LargeOnly => "Large only".to_string(),
            ComplianceTier::NotSafe => format!("Not {} Safe", level.tag()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    #[serde(rename = "color")]
    pub foreground: Color,
    pub ratio: f64,
    #[serde(rename = "result")]
    pub tier: ComplianceTier,
    pub label: String,
}

/// All results for one background colour, in palette order minus the background itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRow {
    #[serde(rename = "color")]
    pub background: Color,
    pub results: Vec<PairResult>,
}

impl ColorRow {
    pub fn compliant_results(&self) -> impl Iterator<Item = &PairResult> {
        self.results.iter().filter(|r| r.tier.is_compliant())
    }

    pub fn safe_count(&self) -> usize {
        self.compliant_results().count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceMatrix {
    pub level: WcagLevel,
    pub rows: Vec<ColorRow>,
}

impl ComplianceMatrix {
    pub fn total_pairs(&self) -> usize {
        self.rows.iter().map(|row| row.results.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    #[error("Palette entry {index} ('{value}') is not a valid colour: {reason}")]
    InvalidColor {
        index: usize,
        value: String,
        reason: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Core function
// ────────────────────────────────────────────────────────────────────────────

/// Builds the compliance matrix for `palette` at `level`.
///
/// All entries are parsed before any pair is evaluated, so an invalid colour
/// fails the whole call and no partial matrix is produced.
pub fn evaluate(palette: &[Color], level: WcagLevel) -> Result<ComplianceMatrix, ContrastError> {
    let parsed = palette
        .iter()
        .enumerate()
        .map(|(index, color)| {
            Srgb::parse(color.as_str()).map_err(|e| ContrastError::InvalidColor {
                index,
                value: color.0.clone(),
                reason: e.reason,
            })
        })
        .collect::<Result<Vec<Srgb>, ContrastError>>()?;

    let rows = palette
        .iter()
        .zip(parsed.iter())
        .enumerate()
        .map(|(bg_index, (background, bg_rgb))| {
            let results = palette
                .iter()
                .zip(parsed.iter())
                .enumerate()
                .filter(|(fg_index, _)| *fg_index != bg_index)
                .map(|(_, (foreground, fg_rgb))| {
                    let ratio = contrast_ratio(bg_rgb, fg_rgb);
                    let tier = level.classify(ratio);
                    PairResult {
                        foreground: foreground.clone(),
                        ratio,
                        tier,
                        label: tier.label(level),
                    }
                })
                .collect();

            ColorRow {
                background: background.clone(),
                results,
            }
        })
        .collect();

    Ok(ComplianceMatrix { level, rows })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
