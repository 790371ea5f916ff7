//! Decision stumps: axis-aligned, single-feature threshold rules.
pub mod dstump;
pub mod dstump_classifier;

pub use dstump::DecisionStump;
pub use dstump_classifier::{PositiveSide, StumpClassifier};
