//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // ERM boostings
    AdaBoost,
};


pub use crate::weak_learner::{
    DecisionStump,
    StumpClassifier,
    PositiveSide,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::Sample;


pub use crate::research::{
    Logger,
    CurrentHypothesis,
};


pub use crate::common::loss_functions::{
    zero_one_loss,
    exponential_loss,
};


pub use crate::error::{BoostError, Result};
