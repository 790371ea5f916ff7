use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    Sample,
};


/// The ensemble that [`AdaBoost`](crate::AdaBoost) returns.
/// `weights[k]` is the weight on `hypotheses[k]`,
/// and the order of both vectors is the order of selection.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority`.
    /// An empty ensemble has zero confidence everywhere.
    #[inline]
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Remove every hypothesis.
    #[inline]
    pub fn clear(&mut self) {
        self.weights.clear();
        self.hypotheses.clear();
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if there is no hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Iterate over `(weight, hypothesis)` pairs in selection order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> + '_ {
        self.weights.iter().copied().zip(&self.hypotheses)
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.iter()
            .map(|(w, h)| w * h.confidence(sample, row))
            .sum::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Classifier for Constant {
        fn confidence(&self, _sample: &Sample, _row: usize) -> f64 {
            self.0
        }
    }

    fn sample() -> Sample {
        Sample::from_rows_unlabeled(&[[0.0], [1.0]]).unwrap()
    }

    #[test]
    fn empty_ensemble_predicts_negative() {
        let f = WeightedMajority::<Constant>::new();
        assert_eq!(f.predict_all(&sample()), vec![-1, -1]);
    }

    #[test]
    fn weighted_vote() {
        let mut f = WeightedMajority::new();
        f.push(0.4, Constant(1.0));
        f.push(0.7, Constant(-1.0));
        assert_eq!(f.len(), 2);
        assert!((f.confidence(&sample(), 0) + 0.3).abs() < 1e-12);
        assert_eq!(f.predict_all(&sample()), vec![-1, -1]);

        f.push(0.5, Constant(1.0));
        assert_eq!(f.predict_all(&sample()), vec![1, 1]);
    }

    #[test]
    fn zero_vote_maps_to_negative() {
        let mut f = WeightedMajority::new();
        f.push(0.5, Constant(1.0));
        f.push(0.5, Constant(-1.0));
        assert_eq!(f.predict(&sample(), 0), -1);
    }
}
