use colored::{ColoredString, Colorize};

use crate::{
    Booster,
    Classifier,
    Sample,
    error::{BoostError, Result},
};

use std::fs::File;
use std::io::prelude::*;
use std::ops::ControlFlow;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const HEADER: &str = "Round,ObjectiveValue,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The hypothesis at the current round.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each step of boosting.
pub struct Logger<'a, B, F, G> {
    booster: B,
    objective_func: F,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    time_limit: u128,
    round: usize,
}


impl<'a, B, F, G> Logger<'a, B, F, G> {
    /// Create a new instance of `Logger`.
    /// `objective_func` and `loss_func` are evaluated
    /// on the current hypothesis after every round.
    pub fn new(
        booster: B,
        objective_func: F,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            objective_func,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Returns the wrapped booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Consumes `self` and returns the wrapped booster.
    pub fn into_booster(self) -> B {
        self.booster
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`. An interval of `0` is rejected by `run`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }
}


/// One row of the trace written by [`Logger::run`].
struct Record {
    round: usize,
    objective: f64,
    train_loss: f64,
    test_loss: f64,
    time: u128,
}


impl Record {
    fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}\n",
            self.round,
            self.objective,
            self.train_loss,
            self.test_loss,
            self.time,
        )
    }


    fn print(&self, tag: ColoredString) {
        println!(
            "{tag} {}\t\t{}\t{}\t{}\t{}",
            format!("{:>WIDTH$}", self.round).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", self.objective).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$}", self.train_loss).green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", self.test_loss).yellow(),
            time_format(self.time).bold().cyan(),
        );
    }
}


impl<B, F, G, S> Logger<'_, B, F, G>
    where B: Booster + CurrentHypothesis<Output = S>,
          S: Classifier,
          F: Fn(&Sample, &S) -> f64,
          G: Fn(&Sample, &S) -> f64,
{
    fn verbose(&self) -> bool {
        self.round != usize::MAX
    }


    /// Prints the booster, its parameters, and the column names.
    fn print_header(&self) {
        let params = self.booster.info()
            .unwrap_or_default()
            .into_iter()
            .map(|(key, val)| format!("{key} = {}", val.yellow()))
            .collect::<Vec<_>>()
            .join(", ");
        let (n_sample, n_feature) = self.train.shape();
        println!(
            "{} [{params}] on {n_sample} x {n_feature}",
            self.booster.name().bold().green(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "OBJ.".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// This method drives `preprocess`, `boost` and `postprocess`
    /// like [`Booster::run`] does,
    /// and writes one CSV line to `filename` per round the booster ran.
    ///
    /// Returns [`BoostError::InvalidInput`] if the print interval is `0`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<<B as Booster>::Output>
    {
        if self.round == 0 {
            return Err(BoostError::invalid_input(
                "the print interval must be positive"
            ));
        }

        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        let mut state = self.booster.preprocess(self.train)?;
        if self.verbose() { self.print_header(); }


        let mut time_acc = 0;
        let mut last = None;
        let mut timed_out = false;
        for iter in 1.. {
            let now = Instant::now();
            let flow = self.booster.boost(&mut state, iter);
            time_acc += now.elapsed().as_millis();

            // The booster stopped without running round `iter`.
            if matches!(flow, ControlFlow::Break(t) if t < iter) { break; }

            let f = self.booster.current_hypothesis();
            let record = Record {
                round: iter,
                objective: (self.objective_func)(self.train, &f),
                train_loss: (self.loss_func)(self.train, &f),
                test_loss: (self.loss_func)(self.test, &f),
                time: time_acc,
            };
            file.write_all(record.csv_line().as_bytes())?;

            timed_out = time_acc > self.time_limit;
            if self.verbose() && !timed_out && iter % self.round == 0 {
                record.print("[LOG]".bold().magenta());
            }
            last = Some(record);

            if timed_out || flow.is_break() { break; }
        }

        if let Some(record) = last.filter(|_| self.verbose()) {
            if timed_out {
                record.print("[TLE]".bold().bright_red());
            } else {
                record.print("[FIN]".bold().bright_green());
            }
        }

        Ok(self.booster.postprocess(state))
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_line_has_every_column() {
        let record = Record {
            round: 3,
            objective: 0.5,
            train_loss: 0.25,
            test_loss: 0.0,
            time: 12,
        };
        assert_eq!(record.csv_line(), "3,0.5,0.25,0,12\n");
        assert_eq!(HEADER.trim_end().split(',').count(), 5);
    }

    #[test]
    fn time_format_units() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(3_500), " 03.500s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(7_260_000), " 02h 01m");
    }
}
