//! This file provides some common functions
//! such as edge calculation.
use crate::{Sample, Classifier};


/// Returns the margin vector `y_i h(x_i)` of a single hypothesis.
#[inline(always)]
pub fn margins_of_hypothesis<H>(sample: &Sample, h: &H) -> Vec<f64>
    where H: Classifier,
{
    sample.target()
        .iter()
        .enumerate()
        .map(|(i, y)| y * h.confidence(sample, i))
        .collect()
}


/// Returns the weighted error: the total mass of `dist`
/// on which `predictions` disagree with `target`.
#[inline(always)]
pub fn weighted_error(target: &[f64], predictions: &[f64], dist: &[f64])
    -> f64
{
    target.iter()
        .zip(predictions)
        .zip(dist)
        .filter(|((y, p), _)| y != p)
        .map(|(_, d)| d)
        .sum::<f64>()
}


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Returns the index of the first minimum of `items`.
/// Returns `None` if `items` is empty.
#[inline(always)]
pub fn argmin(items: &[f64]) -> Option<usize> {
    items.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| {
            match best {
                Some((_, b)) if b <= v => best,
                _ => Some((i, v)),
            }
        })
        .map(|(i, _)| i)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_error_sums_mistakes() {
        let target = [1.0, -1.0, 1.0, -1.0];
        let predictions = [1.0, 1.0, -1.0, -1.0];
        let dist = [0.1, 0.2, 0.3, 0.4];

        let err = weighted_error(&target, &predictions, &dist);
        assert!((err - 0.5).abs() < 1e-12);
    }

    #[test]
    fn argmin_returns_first_minimum() {
        assert_eq!(argmin(&[0.3, 0.1, 0.2, 0.1]), Some(1));
        assert_eq!(argmin(&[]), None);
    }

    #[test]
    fn inner_product_of_slices() {
        assert_eq!(inner_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }
}
