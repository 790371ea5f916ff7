//! Loss functions evaluated on a labeled sample.
use crate::{Sample, Classifier};
use super::utils;


/// Returns the fraction of examples misclassified by `f`.
/// Returns `0.0` for an empty sample.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0.0; }

    let mistakes = sample.target()
        .iter()
        .zip(f.predict_all(sample))
        .filter(|(y, p)| **y != *p as f64)
        .count();
    mistakes as f64 / n_sample as f64
}


/// Returns the exponential loss `(1/m) sum_i exp(-y_i f(x_i))`,
/// the objective minimized by AdaBoost.
pub fn exponential_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0.0; }

    utils::margins_of_hypothesis(sample, f)
        .into_iter()
        .map(|yf| (-yf).exp())
        .sum::<f64>()
        / n_sample as f64
}
