use rand::prelude::*;
use rand::rngs::StdRng;

use stumpboost::prelude::*;


/// Counts the examples in `sample` that `h` classifies correctly.
fn n_correct(h: &StumpClassifier, sample: &Sample) -> usize {
    h.predict_all(sample)
        .into_iter()
        .zip(sample.target())
        .filter(|(p, y)| *p as f64 == **y)
        .count()
}


/// Exhaustive search over every midpoint and both polarities.
fn brute_force_best(sample: &Sample, j: usize) -> usize {
    let mut values = sample.feature(j).values().to_vec();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    let mut thresholds = vec![values[0] - 1.0];
    thresholds.extend(values.windows(2).map(|w| (w[0] + w[1]) / 2.0));

    thresholds.into_iter()
        .flat_map(|t| {
            [PositiveSide::RHS, PositiveSide::LHS]
                .map(|side| StumpClassifier::new(j, t, side))
        })
        .map(|h| n_correct(&h, sample))
        .max()
        .unwrap()
}


#[test]
fn produce() {
    let examples = vec![
        vec![  1.2, 0.5, -1.0,  2.0],
        vec![  0.1, 0.2,  0.3, -9.0],
        vec![-21.0, 2.0,  1.9,  7.1]
    ];
    let labels = vec![1.0, -1.0, 1.0];
    let sample = Sample::from_rows(&examples, labels).unwrap();

    // Features 1 and 3 separate the sample, features 0 and 2 do not.
    for (j, expected) in [(0, 2), (1, 3), (2, 2), (3, 3)] {
        let h = DecisionStump::new(j).fit(&sample);
        assert_eq!(h.feature_index, j);
        assert_eq!(n_correct(&h, &sample), expected);
    }
}


#[test]
fn matches_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..20 {
        let n_sample = rng.gen_range(2..40);
        let rows = (0..n_sample)
            .map(|_| vec![rng.gen_range(0..6) as f64, rng.gen_range(-1.0..1.0)])
            .collect::<Vec<_>>();
        let target = (0..n_sample)
            .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
            .collect::<Vec<_>>();
        let sample = Sample::from_rows(&rows, target).unwrap();

        for j in 0..2 {
            let h = DecisionStump::new(j).fit(&sample);
            assert_eq!(n_correct(&h, &sample), brute_force_best(&sample, j));
        }
    }
}


#[test]
fn fit_ignores_other_features() {
    let rows = vec![
        vec![5.0, 0.0],
        vec![-3.0, 1.0],
        vec![9.0, 2.0],
        vec![0.0, 3.0],
    ];
    let sample = Sample::from_rows(&rows, vec![-1.0, -1.0, 1.0, 1.0]).unwrap();

    let h = DecisionStump::new(1).fit(&sample);
    assert_eq!(h.feature_index, 1);
    assert_eq!(h.positive_side, PositiveSide::RHS);
    assert!((h.threshold - 1.5).abs() < 1e-12);
    assert_eq!(n_correct(&h, &sample), 4);
}
