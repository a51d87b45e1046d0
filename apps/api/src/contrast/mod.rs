// Contrast evaluation: WCAG luminance math, the pairwise compliance matrix,
// and the HTTP handlers that expose it.

pub mod evaluator;
pub mod handlers;
pub mod luminance;

pub use evaluator::{
    evaluate, Color, ColorRow, ComplianceMatrix, ContrastError, PairResult, WcagLevel,
};
