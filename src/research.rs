//! Tools to trace the behavior of a boosting algorithm round by round.

pub(crate) mod logger;

pub use logger::{
    Logger,
    CurrentHypothesis,
};
