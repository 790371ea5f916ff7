//! Provides the decision stump learner.
use crate::{Feature, Sample};
use crate::constants::THRESHOLD_MARGIN;

use super::{StumpClassifier, PositiveSide};


pub(self) type IndicesByValue = Vec<usize>;


/// The struct `DecisionStump` is bound to a single feature
/// and produces the [`StumpClassifier`] on that feature
/// that classifies the most training examples correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionStump {
    feature_index: usize,
}


impl DecisionStump {
    /// Construct a decision stump learner for the `feature_index`-th feature.
    pub fn new(feature_index: usize) -> Self {
        Self { feature_index }
    }


    /// Returns the index of the feature this learner splits on.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// Returns the stump on `self.feature_index()` that maximizes
    /// the number of correctly classified examples in `sample`.
    ///
    /// The search sorts the examples by feature value once
    /// and sweeps the split point from left to right,
    /// so the cost is `O(m log m)` for `m` examples.
    /// Improvements with `+1` on the right ray are tested
    /// before improvements with `-1` on the right ray,
    /// and only strict improvements replace the current best.
    ///
    /// # Panics
    /// Panics if `sample` is unlabeled or
    /// has no feature `self.feature_index()`.
    pub fn fit(&self, sample: &Sample) -> StumpClassifier {
        let feature = sample.feature(self.feature_index);
        let target = sample.target();
        let n_sample = feature.len() as i64;

        let n_pos = target.iter().filter(|&&y| y > 0.0).count() as i64;
        let n_neg = n_sample - n_pos;


        // Start from the constant rule that puts every example
        // on the right ray.
        let min = feature.min().unwrap_or(0.0);
        let mut stump = StumpClassifier::new(
            self.feature_index,
            min - THRESHOLD_MARGIN,
            PositiveSide::RHS,
        );
        let mut best = n_pos;
        if n_neg > n_pos {
            stump.positive_side = PositiveSide::LHS;
            best = n_neg;
        }
        if best == n_sample {
            return stump;
        }


        // `pos_correct`: # of correct examples if the right ray is +1.
        // `neg_correct`: # of correct examples if the right ray is -1.
        let mut pos_correct = n_pos;
        let mut neg_correct = n_neg;

        let groups = group_by_value(feature);
        let mut groups = groups.iter().peekable();
        while let Some((value, indices)) = groups.next() {
            // Moving the last group to the left ray
            // is the opposite constant rule.
            let Some((next_value, _)) = groups.peek() else { break; };

            for &i in indices {
                let y = if target[i] > 0.0 { 1 } else { -1 };
                pos_correct -= y;
                neg_correct += y;
            }

            if pos_correct > best {
                stump.positive_side = PositiveSide::RHS;
                best = pos_correct;
            } else if neg_correct > best {
                stump.positive_side = PositiveSide::LHS;
                best = neg_correct;
            } else {
                continue;
            }
            stump.threshold = (value + next_value) / 2.0;

            if best == n_sample {
                break;
            }
        }

        stump
    }
}


/// Sort the example indices by feature value
/// and group the indices that share the same value.
fn group_by_value(feature: &Feature) -> Vec<(f64, IndicesByValue)> {
    let mut indices = (0..feature.len()).collect::<Vec<usize>>();
    indices.sort_by(|&i, &j| feature[i].total_cmp(&feature[j]));

    let mut groups: Vec<(f64, IndicesByValue)> = Vec::new();
    for i in indices {
        let v = feature[i];
        if let Some((value, group)) = groups.last_mut() {
            if *value == v {
                group.push(i);
                continue;
            }
        }
        groups.push((v, vec![i]));
    }
    groups
}
