use std::collections::HashMap;
use std::ops::Index;

use rayon::prelude::*;
use super::feature_struct::*;

use crate::error::{BoostError, Result};


/// Struct `Sample` holds a batch sample with dense format.
/// Features are stored column-wise,
/// so the `j`-th [`Feature`] holds the `j`-th value of every example.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a labeled sample from row-major data.
    /// `rows[i]` is the `i`-th example and `target[i]` its label.
    ///
    /// Returns [`BoostError::InvalidInput`] if the rows are ragged
    /// or `rows.len() != target.len()`.
    /// Label values are checked by [`Sample::is_valid_binary_instance`].
    pub fn from_rows<R>(rows: &[R], target: Vec<f64>) -> Result<Self>
        where R: AsRef<[f64]> + Sync,
    {
        if rows.len() != target.len() {
            return Err(BoostError::invalid_input(format!(
                "the number of rows ({}) does not match \
                 the number of labels ({})",
                rows.len(),
                target.len(),
            )));
        }
        let mut sample = Self::from_rows_unlabeled(rows)?;
        sample.target = target;
        Ok(sample)
    }


    /// Construct an unlabeled sample from row-major data.
    /// Use this to build the input of a prediction.
    pub fn from_rows_unlabeled<R>(rows: &[R]) -> Result<Self>
        where R: AsRef<[f64]> + Sync,
    {
        let n_sample = rows.len();
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);

        if let Some(i) = rows.iter().position(|r| r.as_ref().len() != n_feature) {
            return Err(BoostError::invalid_input(format!(
                "row {i} has {} features, expected {n_feature}",
                rows[i].as_ref().len(),
            )));
        }

        let features = (0..n_feature).into_par_iter()
            .map(|j| {
                let values = rows.iter()
                    .map(|row| row.as_ref()[j])
                    .collect::<Vec<_>>();
                Feature::with_values(default_name(j), values)
            })
            .collect::<Vec<_>>();

        let name_to_index = name_to_index(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Returns a slice of type `f64`.
    /// The slice is empty if `self` is unlabeled.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th feature.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns `true` if every example has a label.
    pub fn is_labeled(&self) -> bool {
        self.target.len() == self.n_sample
    }


    /// Set the feature (column) names.
    /// Returns the old names.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString + std::fmt::Display,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        let n_names = names.len();
        if self.n_feature != n_names {
            return Err(BoostError::invalid_input(format!(
                "got {n_names} names for {} features",
                self.n_feature,
            )));
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name))
            .collect();

        self.name_to_index = name_to_index(&self.features);
        Ok(old_names)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    /// `y` is `None` if `self` is unlabeled.
    pub fn at(&self, idx: usize) -> (Vec<f64>, Option<f64>) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target.get(idx).copied();

        (x, y)
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    /// Every label must be `+1.0` or `-1.0`.
    /// A sample with a single class is valid.
    pub fn is_valid_binary_instance(&self) -> Result<()> {
        if !self.is_labeled() {
            return Err(BoostError::invalid_input(
                "the sample has no target values"
            ));
        }

        let invalid = self.target.iter()
            .filter(|&&y| y != 1.0 && y != -1.0)
            .take(5)
            .map(|y| y.to_string())
            .collect::<Vec<_>>();
        if !invalid.is_empty() {
            let line = invalid.join(", ");
            return Err(BoostError::invalid_input(format!(
                "labels must be +1 or -1. Ex. [{line}, ...]"
            )));
        }
        Ok(())
    }
}


fn default_name(j: usize) -> String {
    format!("Feat. [{}]", j + 1)
}


fn name_to_index(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    /// Panics if no feature is named `name`.
    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = self.name_to_index[name];
        &self.features[k]
    }
}
