use std::ops::Index;
use std::slice::Iter;


/// Dense, column-wise representation of a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values.
    pub(crate) sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), sample: Vec::new() }
    }


    /// Construct a feature from the given values.
    pub fn with_values<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self { name: name.to_string(), sample }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(super) fn replace_name<S: ToString>(&mut self, name: S) -> String {
        std::mem::replace(&mut self.name, name.to_string())
    }


    /// Returns the feature values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    /// Returns an iterator over the feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if this feature has no items.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns the minimum value of this feature.
    /// Returns `None` if the feature is empty.
    pub fn min(&self) -> Option<f64> {
        self.sample.iter()
            .copied()
            .min_by(|a, b| a.total_cmp(b))
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
