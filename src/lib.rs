#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost over decision stumps
//! for binary classification.
//!
//! [`AdaBoost`] fits one [`DecisionStump`] per feature on the training
//! sample, then repeatedly selects the stump with the smallest weighted
//! error and reweights the examples toward the misclassified ones.
//! The result is a [`WeightedMajority`] of stumps.
//!
//! ```
//! use stumpboost::prelude::*;
//!
//! let rows = vec![
//!     vec![0.0, 3.0],
//!     vec![1.0, 2.0],
//!     vec![2.0, 1.0],
//!     vec![3.0, 0.0],
//! ];
//! let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0])
//!     .unwrap();
//!
//! let mut booster = AdaBoost::new(20);
//! let f = booster.fit(&sample).unwrap();
//! assert_eq!(f.predict_all(&sample), vec![-1, -1, 1, 1]);
//! ```

pub mod error;
pub mod constants;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{BoostError, Result};

pub use sample::{Sample, Feature};

pub use hypothesis::{Classifier, WeightedMajority};

pub use weak_learner::{DecisionStump, StumpClassifier, PositiveSide};

pub use booster::{Booster, AdaBoost, FitState};
