//! Provides `Booster` trait.

use crate::Sample;
use crate::error::Result;

use std::ops::ControlFlow;


/// The trait [`Booster`](Booster) defines the standard framework of Boosting.
///
/// A run is split into three steps.
/// [`Booster::preprocess`](Booster::preprocess) validates the sample and
/// builds the transient [`Booster::State`](Booster::State),
/// [`Booster::boost`](Booster::boost) runs a single round,
/// and [`Booster::postprocess`](Booster::postprocess)
/// consumes the state and returns the combined hypothesis.
pub trait Booster {
    /// The final hypothesis output by a boosting algorithm.
    type Output;

    /// The state that lives only during a single run,
    /// e.g., the distribution over the training examples.
    type State;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the boosting algorithm.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    fn run(&mut self, sample: &Sample) -> Result<Self::Output> {
        let mut state = self.preprocess(sample)?;

        let _ = (1..).try_for_each(|iter| {
            self.boost(&mut state, iter)
        });

        Ok(self.postprocess(state))
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`](Booster::run),
    /// This method is called before the boosting process.
    fn preprocess(&mut self, sample: &Sample) -> Result<Self::State>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` if the boosting should go on,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost(
        &mut self,
        state: &mut Self::State,
        iteration: usize,
    ) -> ControlFlow<usize>;


    /// Post-processing.
    fn postprocess(&mut self, state: Self::State) -> Self::Output;
}
