//! The files in `weak_learner/` directory defines
//! the weak learners used by the boosting algorithms.

/// Defines the decision stump.
pub mod decision_stump;


pub use self::decision_stump::{
    DecisionStump,
    StumpClassifier,
    PositiveSide,
};
