//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::constants::SIMPLEX_TOLERANCE;
use crate::error::{BoostError, Result};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 {
        return Err(BoostError::invalid_input("the sample has no examples"));
    }

    if n_feature == 0 {
        return Err(BoostError::invalid_input("the sample has no features"));
    }

    sample.is_valid_binary_instance()
}


/// Check the maximal number of boosting rounds.
#[inline(always)]
pub(crate) fn check_n_estimators(n_estimators: usize) -> Result<()> {
    if n_estimators == 0 {
        return Err(BoostError::invalid_input(
            "`n_estimators` must be positive"
        ));
    }
    Ok(())
}


/// Check the early-stopping threshold.
/// `eps` must be a positive finite number.
#[inline(always)]
pub(crate) fn check_eps(eps: f64) -> Result<()> {
    if !(eps > 0.0 && eps.is_finite()) {
        return Err(BoostError::invalid_input(format!(
            "`eps` must be a positive finite number. got {eps}"
        )));
    }
    Ok(())
}


/// Check that the number of features matches the trained dimension.
#[inline(always)]
pub(crate) fn check_n_feature(sample: &Sample, expected: usize) -> Result<()>
{
    let n_feature = sample.shape().1;
    if n_feature != expected {
        return Err(BoostError::invalid_input(format!(
            "expected {expected} features, got {n_feature}"
        )));
    }
    Ok(())
}


/// Returns `true` if `dist` is a probability vector.
#[inline(always)]
pub(crate) fn is_distribution(dist: &[f64]) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
        && dist.iter().all(|d| *d >= 0.0)
}
