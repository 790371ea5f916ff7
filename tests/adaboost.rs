use rand::prelude::*;
use rand::rngs::StdRng;

use stumpboost::prelude::*;


/// Random sample whose label mostly follows `x[0] + x[1] > 0`,
/// with `noise` of the labels flipped.
fn noisy_sample(n_sample: usize, n_feature: usize, noise: f64, seed: u64)
    -> Sample
{
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..n_sample)
        .map(|_| {
            (0..n_feature)
                .map(|_| rng.gen_range(-1.0..1.0))
                .collect::<Vec<f64>>()
        })
        .collect::<Vec<_>>();
    let target = rows.iter()
        .map(|row| {
            let y = if row[0] + row[1] > 0.0 { 1.0 } else { -1.0 };
            if rng.gen_bool(noise) { -y } else { y }
        })
        .collect::<Vec<_>>();
    Sample::from_rows(&rows, target).unwrap()
}


fn accuracy(predictions: &[i64], target: &[f64]) -> f64 {
    let correct = predictions.iter()
        .zip(target)
        .filter(|(p, y)| **p as f64 == **y)
        .count();
    correct as f64 / target.len() as f64
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn distribution_stays_on_the_simplex() {
        let sample = noisy_sample(60, 4, 0.1, 1234);
        let mut booster = AdaBoost::new(30);
        let mut state = booster.preprocess(&sample).unwrap();

        for iter in 1..=30 {
            let flow = booster.boost(&mut state, iter);
            let dist = state.distribution();
            let sum = dist.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1e-9, "round {iter}: sum = {sum}");
            assert!(dist.iter().all(|d| *d >= 0.0));
            if flow.is_break() { break; }
        }
    }

    #[test]
    fn selected_stump_has_minimum_weighted_error() {
        let sample = noisy_sample(80, 5, 0.2, 42);
        let mut booster = AdaBoost::new(25);
        let mut state = booster.preprocess(&sample).unwrap();

        for iter in 1..=25 {
            let flow = booster.boost(&mut state, iter);
            let k = state.selected().unwrap();
            let errors = state.errors();
            assert_eq!(errors.len(), 5);
            assert!(errors.iter().all(|e| errors[k] <= *e));
            if flow.is_break() { break; }
        }
    }

    #[test]
    fn single_threshold_separable_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = (0..40)
            .map(|_| vec![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect::<Vec<_>>();
        let target = rows.iter()
            .map(|row| if row[1] > 0.2 { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        let sample = Sample::from_rows(&rows, target).unwrap();

        let mut booster = AdaBoost::new(10);
        let f = booster.fit(&sample).unwrap();

        assert_eq!(f.len(), 1);
        assert_eq!(booster.terminated(), 1);
        let predictions = booster.predict(&sample).unwrap();
        assert_eq!(accuracy(&predictions, sample.target()), 1.0);
    }

    #[test]
    fn four_points_one_round() {
        let rows = vec![[0.0], [1.0], [2.0], [3.0]];
        let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0])
            .unwrap();

        let mut booster = AdaBoost::new(1).eps(1e-5);
        let f = booster.fit(&sample).unwrap();

        assert_eq!(f.len(), 1);
        let h = &f.hypotheses[0];
        assert_eq!(h.feature_index, 0);
        assert_eq!(h.positive_side.sign(), 1.0);
        assert!((h.threshold - 1.5).abs() < 1e-12);

        let test = Sample::from_rows_unlabeled(&[[0.0], [3.0]]).unwrap();
        assert_eq!(booster.predict(&test).unwrap(), vec![-1, 1]);
    }

    #[test]
    fn all_positive_labels() {
        let rows = vec![[0.3, -2.0], [1.0, 0.0], [2.5, 4.0]];
        let sample = Sample::from_rows(&rows, vec![1.0; 3]).unwrap();

        let mut booster = AdaBoost::new(5);
        let f = booster.fit(&sample).unwrap();
        assert_eq!(f.len(), 1);

        let test = Sample::from_rows_unlabeled(
            &[[0.3, -2.0], [1.7, 3.0], [100.0, 100.0]]
        ).unwrap();
        assert_eq!(booster.predict(&test).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn large_eps_stops_early() {
        let rows = (0..10).map(|i| [i as f64]).collect::<Vec<_>>();
        let mut target = vec![-1.0; 5];
        target.extend([1.0; 5]);
        target[2] = 1.0;
        let sample = Sample::from_rows(&rows, target).unwrap();

        let mut booster = AdaBoost::new(10).eps(0.45);
        let f = booster.fit(&sample).unwrap();

        assert!(f.len() < 10);
        let predictions = booster.predict(&sample).unwrap();
        assert!(predictions.iter().all(|p| *p == 1 || *p == -1));
        assert!(accuracy(&predictions, sample.target()) >= 0.9);
    }

    #[test]
    fn runs_all_rounds_without_perfect_stump() {
        // Label is the majority vote of three binary features.
        let rows = (0..8)
            .map(|b| (0..3).map(|j| ((b >> j) & 1) as f64).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let target = rows.iter()
            .map(|row| if row.iter().sum::<f64>() >= 2.0 { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        let sample = Sample::from_rows(&rows, target).unwrap();

        let mut booster = AdaBoost::new(10);
        let f = booster.fit(&sample).unwrap();
        assert_eq!(f.len(), 10);
        assert_eq!(booster.terminated(), 10);

        let predictions = booster.predict(&sample).unwrap();
        assert_eq!(accuracy(&predictions, sample.target()), 1.0);
    }

    #[test]
    fn stump_can_be_selected_repeatedly() {
        let rows = (0..5).map(|i| [i as f64]).collect::<Vec<_>>();
        let target = vec![1.0, -1.0, 1.0, -1.0, 1.0];
        let sample = Sample::from_rows(&rows, target).unwrap();

        let mut booster = AdaBoost::new(4);
        let f = booster.fit(&sample).unwrap();

        assert_eq!(f.len(), 4);
        assert!(f.hypotheses.iter().all(|h| *h == f.hypotheses[0]));
    }

    #[test]
    fn predict_is_idempotent() {
        let train = noisy_sample(50, 3, 0.1, 99);
        let test = noisy_sample(20, 3, 0.0, 100);

        let mut booster = AdaBoost::new(15);
        booster.fit(&train).unwrap();

        let first = booster.predict(&test).unwrap();
        let second = booster.predict(&test).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn refit_starts_from_scratch() {
        let sample = noisy_sample(50, 3, 0.1, 5);
        let mut booster = AdaBoost::new(8);

        let first = booster.fit(&sample).unwrap().clone();
        let second = booster.fit(&sample).unwrap().clone();
        assert_eq!(first, second);
        assert!(second.len() <= 8);

        let other = noisy_sample(30, 2, 0.0, 6);
        booster.fit(&other).unwrap();
        assert!(booster.ensemble().hypotheses.iter().all(|h| h.feature_index < 2));
    }

    #[test]
    fn untrained_booster_predicts_negative() {
        let booster = AdaBoost::new(3);
        assert!(!booster.is_trained());

        let test = Sample::from_rows_unlabeled(&[[1.0, 2.0], [-1.0, 0.0]])
            .unwrap();
        assert_eq!(booster.predict(&test).unwrap(), vec![-1, -1]);
    }

    #[test]
    fn feature_count_mismatch_is_invalid_input() {
        let sample = noisy_sample(20, 3, 0.0, 11);
        let mut booster = AdaBoost::new(3);
        booster.fit(&sample).unwrap();

        let test = Sample::from_rows_unlabeled(&[[1.0, 2.0]]).unwrap();
        let err = booster.predict(&test).unwrap_err();
        assert!(matches!(err, BoostError::InvalidInput(_)));
    }

    #[test]
    fn invalid_labels_are_invalid_input() {
        let rows = vec![[0.0], [1.0]];
        let sample = Sample::from_rows(&rows, vec![0.0, 1.0]).unwrap();
        let err = AdaBoost::new(3).fit(&sample).unwrap_err();
        assert!(matches!(err, BoostError::InvalidInput(_)));

        let unlabeled = Sample::from_rows_unlabeled(&rows).unwrap();
        assert!(AdaBoost::new(3).fit(&unlabeled).is_err());
    }

    #[test]
    fn failed_refit_keeps_previous_model() {
        let sample = noisy_sample(20, 2, 0.0, 3);
        let mut booster = AdaBoost::new(3);
        let before = booster.fit(&sample).unwrap().clone();

        let bad = Sample::from_rows(&[[0.0, 0.0]], vec![2.0]).unwrap();
        assert!(booster.fit(&bad).is_err());
        assert_eq!(booster.ensemble(), &before);
    }

    #[test]
    fn ensemble_survives_json_round_trip() {
        let sample = noisy_sample(40, 3, 0.1, 17);
        let mut booster = AdaBoost::new(12);
        let f = booster.fit(&sample).unwrap().clone();

        let json = serde_json::to_string(&f).unwrap();
        let g: WeightedMajority<StumpClassifier> = serde_json::from_str(&json)
            .unwrap();

        assert_eq!(f.predict_all(&sample), g.predict_all(&sample));
    }

    #[test]
    fn boosting_fits_the_training_sample() {
        let sample = noisy_sample(200, 2, 0.0, 2024);
        let mut booster = AdaBoost::new(100);
        let f = booster.fit(&sample).unwrap();

        let loss = zero_one_loss(&sample, f);
        assert!(loss < 0.35, "training loss = {loss}");
        assert!(exponential_loss(&sample, f) < 1.0);
    }
}
