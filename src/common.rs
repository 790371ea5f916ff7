//! Defines some common functions used in this library.

/// Defines loss functions that evaluate a classifier on a sample.
pub mod loss_functions;

/// Defines some useful functions such as edge calculation.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
