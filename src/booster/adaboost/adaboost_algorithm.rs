//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use rayon::prelude::*;


use crate::{
    Booster,
    Classifier,
    DecisionStump,
    Sample,
    StumpClassifier,
    WeightedMajority,

    common::{checker, utils},
    constants::DEFAULT_EPS,
    error::Result,
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines `AdaBoost` over decision stumps.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// `AdaBoost` fits one [`DecisionStump`] per feature, once,
/// on the unweighted sample.
/// Each round then picks the stump with the smallest weighted error `e`,
/// appends it with weight `alpha = 0.5 ln((1 - e) / e)`,
/// and reweights the examples so that misclassified ones gain mass.
/// If the smallest weighted error is below `eps`,
/// the stump is appended and the boosting stops.
///
/// # Example
/// ```
/// use stumpboost::prelude::*;
///
/// let rows = vec![[0.0], [1.0], [2.0], [3.0]];
/// let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0])
///     .unwrap();
///
/// let mut booster = AdaBoost::new(10)
///     .eps(1e-5);
/// booster.fit(&sample).unwrap();
///
/// let test = Sample::from_rows_unlabeled(&[[0.0], [3.0]]).unwrap();
/// assert_eq!(booster.predict(&test).unwrap(), vec![-1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct AdaBoost {
    // Maximal number of rounds.
    n_estimators: usize,

    // Early-stopping threshold on the weighted error.
    eps: f64,

    // Number of features of the training sample.
    // `None` until `preprocess` succeeds.
    n_feature: Option<usize>,

    // Selected stumps and their weights.
    ensemble: WeightedMajority<StumpClassifier>,

    // Terminated iteration.
    terminated: usize,
}


/// The transient state of a single [`AdaBoost`] run.
/// It is created by [`Booster::preprocess`]
/// and consumed by [`Booster::postprocess`].
#[derive(Debug, Clone)]
pub struct FitState {
    // Labels of the training sample.
    target: Vec<f64>,

    // Distribution on sample.
    dist: Vec<f64>,

    // One fitted stump per feature.
    candidates: Vec<StumpClassifier>,

    // `predictions[j][i]` is the prediction of `candidates[j]`
    // on the `i`-th example.
    predictions: Vec<Vec<f64>>,

    // Weighted errors of the candidates in the latest round.
    errors: Vec<f64>,

    // Index of the candidate selected in the latest round.
    selected: Option<usize>,
}


impl FitState {
    /// Returns the current distribution over the training examples.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the candidate stumps, one per feature.
    pub fn candidates(&self) -> &[StumpClassifier] {
        &self.candidates[..]
    }


    /// Returns the weighted errors computed in the latest round.
    /// Empty before the first round.
    pub fn errors(&self) -> &[f64] {
        &self.errors[..]
    }


    /// Returns the index of the candidate selected in the latest round.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }


    /// `w_i <- w_i exp(-alpha y_i h(x_i)) / Z`.
    fn update_distribution(&mut self, k: usize, alpha: f64) {
        let factors = self.target.iter()
            .zip(&self.predictions[k])
            .map(|(y, p)| (-alpha * y * p).exp())
            .collect::<Vec<_>>();

        let normalizer = utils::inner_product(&self.dist, &factors);

        self.dist.iter_mut()
            .zip(factors)
            .for_each(|(d, f)| { *d = *d * f / normalizer; });

        debug_assert!(checker::is_distribution(&self.dist));
    }
}


impl AdaBoost {
    /// Initialize the `AdaBoost` that runs at most `n_estimators` rounds.
    /// The early-stopping threshold `eps` is set to `1e-5`.
    pub fn new(n_estimators: usize) -> Self {
        Self {
            n_estimators,
            eps: DEFAULT_EPS,

            n_feature: None,
            ensemble: WeightedMajority::new(),
            terminated: 0,
        }
    }


    /// Set the early-stopping threshold.
    /// `eps` must be a positive finite number;
    /// otherwise [`AdaBoost::fit`] returns an error.
    pub fn eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }


    /// Trains `self` on `sample` from scratch
    /// and returns the resulting ensemble.
    /// The previous ensemble, if any, is discarded.
    pub fn fit(&mut self, sample: &Sample)
        -> Result<&WeightedMajority<StumpClassifier>>
    {
        let mut state = self.preprocess(sample)?;

        let _ = (1..).try_for_each(|iter| {
            self.boost(&mut state, iter)
        });

        Ok(&self.ensemble)
    }


    /// Predicts the labels of `sample`.
    /// Every prediction is `+1` or `-1`.
    /// An untrained booster predicts `-1` for every example.
    ///
    /// Returns an error if `self` is trained
    /// and a non-empty `sample` has a different number of features.
    pub fn predict(&self, sample: &Sample) -> Result<Vec<i64>> {
        let n_sample = sample.shape().0;
        if let Some(n_feature) = self.n_feature.filter(|_| n_sample > 0) {
            checker::check_n_feature(sample, n_feature)?;
        }
        Ok(self.ensemble.predict_all(sample))
    }


    /// Returns the current ensemble.
    pub fn ensemble(&self) -> &WeightedMajority<StumpClassifier> {
        &self.ensemble
    }


    /// Returns `true` if `self` holds at least one stump.
    pub fn is_trained(&self) -> bool {
        !self.ensemble.is_empty()
    }


    /// Returns the round at which the last run stopped.
    pub fn terminated(&self) -> usize {
        self.terminated
    }


    /// Returns the weight on a stump with weighted error `error`.
    /// The error is clamped to `[lo, 1 - lo]`
    /// with `lo = min(eps, 1 - eps)`, kept above `f64::EPSILON`,
    /// so that the weight stays finite for any positive `eps`.
    #[inline]
    fn alpha(&self, error: f64) -> f64 {
        let lo = self.eps.min(1.0 - self.eps).max(f64::EPSILON);
        let e = error.clamp(lo, 1.0 - lo);
        0.5 * ((1.0 - e) / e).ln()
    }
}


impl Booster for AdaBoost {
    type Output = WeightedMajority<StumpClassifier>;
    type State = FitState;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = vec![
            ("# of estimators", format!("{}", self.n_estimators)),
            ("Eps", format!("{}", self.eps)),
        ];
        Some(info)
    }


    fn preprocess(&mut self, sample: &Sample) -> Result<FitState> {
        checker::check_n_estimators(self.n_estimators)?;
        checker::check_eps(self.eps)?;
        checker::check_sample(sample)?;

        let (n_sample, n_feature) = sample.shape();

        self.n_feature = Some(n_feature);
        self.ensemble.clear();
        self.terminated = 0;


        let candidates = (0..n_feature).into_par_iter()
            .map(|j| DecisionStump::new(j).fit(sample))
            .collect::<Vec<_>>();

        let predictions = candidates.par_iter()
            .map(|h| h.confidence_all(sample))
            .collect::<Vec<_>>();

        let uni = 1.0 / n_sample as f64;
        let state = FitState {
            target: sample.target().to_vec(),
            dist: vec![uni; n_sample],
            candidates,
            predictions,
            errors: Vec::with_capacity(n_feature),
            selected: None,
        };
        Ok(state)
    }


    fn boost(
        &mut self,
        state: &mut FitState,
        iteration: usize,
    ) -> ControlFlow<usize>
    {
        if self.n_estimators < iteration {
            self.terminated = self.n_estimators;
            return ControlFlow::Break(self.n_estimators);
        }


        state.errors = state.predictions.iter()
            .map(|p| utils::weighted_error(&state.target, p, &state.dist))
            .collect();

        let Some(k) = utils::argmin(&state.errors) else {
            self.terminated = iteration - 1;
            return ControlFlow::Break(iteration - 1);
        };
        state.selected = Some(k);


        let error = state.errors[k];
        let alpha = self.alpha(error);
        self.ensemble.push(alpha, state.candidates[k].clone());


        // The selected stump is (almost) perfect on the current distribution.
        if error < self.eps {
            self.terminated = iteration;
            return ControlFlow::Break(iteration);
        }


        state.update_distribution(k, alpha);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self, _state: FitState) -> Self::Output {
        self.ensemble.clone()
    }
}


impl CurrentHypothesis for AdaBoost {
    type Output = WeightedMajority<StumpClassifier>;

    fn current_hypothesis(&self) -> Self::Output {
        self.ensemble.clone()
    }
}
