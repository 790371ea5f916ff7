//! Provides the boosting algorithms.

mod core;

// ------------------------------------------------
// Classification
mod adaboost;


/// Booster trait
pub use self::core::Booster;

// Empirical Risk Minimization
pub use self::adaboost::{AdaBoost, FitState};
