use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use statplot_rs::core::SummaryStatistics;

#[test]
fn summary_of_classic_sample() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let mut rng = StdRng::seed_from_u64(11);
    let summary = SummaryStatistics::from_values(&values, &mut rng).expect("summary");

    assert_eq!(summary.count, 8);
    assert_relative_eq!(summary.mean, 5.0);
    assert_relative_eq!(
        summary.std_dev.expect("std dev"),
        4.571_428_571_428_571_f64.sqrt(),
        max_relative = 1e-12
    );
    assert_eq!(summary.min, 2.0);
    assert_eq!(summary.median, 4.5);
    assert_eq!(summary.max, 9.0);
    assert_eq!(summary.range(), 7.0);
}

#[test]
fn single_observation_has_no_std_dev() {
    let mut rng = StdRng::seed_from_u64(11);
    let summary = SummaryStatistics::from_values(&[3.5], &mut rng).expect("summary");
    assert_eq!(summary.std_dev, None);
    assert_eq!(summary.median, 3.5);
}

#[test]
fn summary_rejects_empty_and_non_finite() {
    let mut rng = StdRng::seed_from_u64(11);
    assert!(SummaryStatistics::from_values(&[], &mut rng).is_err());
    assert!(SummaryStatistics::from_values(&[1.0, f64::INFINITY], &mut rng).is_err());
}
