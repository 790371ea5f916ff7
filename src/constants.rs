//! Numeric constants used across the crate.

/// Default early-stopping threshold on the weighted error.
pub const DEFAULT_EPS: f64 = 1e-5;

/// Tolerance for `sum(dist) == 1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// Offset of the initial threshold below the minimum feature value.
pub const THRESHOLD_MARGIN: f64 = 0.5;
