//! Provides the decision stump class.
use crate::{Classifier, Sample};

use serde::{Serialize, Deserialize};


/// Defines the ray that are predicted as +1.0.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PositiveSide {
    /// The right-hand-side ray is predicted as +1.0
    RHS,
    /// The left-hand-side ray is predicted as +1.0
    LHS
}


impl PositiveSide {
    /// Returns the polarity of the stump,
    /// `+1.0` for [`PositiveSide::RHS`], `-1.0` for [`PositiveSide::LHS`].
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Self::RHS =>  1.0,
            Self::LHS => -1.0,
        }
    }
}


/// The struct `StumpClassifier` defines the decision stump class.
/// Given a point over the `d`-dimensional space,
/// a classifier predicts its label as
/// `sign` if `x[feature_index] > threshold` and `-sign` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StumpClassifier {
    /// The intercept of the stump
    pub threshold: f64,

    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// A ray to be predicted as +1.0
    pub positive_side: PositiveSide,
}


impl StumpClassifier {
    /// Construct a stump from its parameters.
    pub fn new(
        feature_index: usize,
        threshold: f64,
        positive_side: PositiveSide,
    ) -> Self
    {
        Self { threshold, feature_index, positive_side }
    }


    /// Predicts the label of a single value of feature `feature_index`.
    #[inline]
    pub fn predict_value(&self, value: f64) -> f64 {
        let sign = self.positive_side.sign();
        if value > self.threshold { sign } else { -sign }
    }
}


impl Classifier for StumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let value = sample.feature(self.feature_index)[row];
        self.predict_value(value)
    }


    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        sample.feature(self.feature_index)
            .iter()
            .map(|&value| self.predict_value(value))
            .collect()
    }
}
