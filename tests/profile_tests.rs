use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smartsort::prelude::*;

fn brute_force_presortedness(data: &[i64]) -> f64 {
    let n = data.len();
    if n <= 1 {
        return 1.0;
    }
    let mut inversions = 0u64;
    for i in 0..n {
        for j in i + 1..n {
            if data[i] > data[j] {
                inversions += 1;
            }
        }
    }
    let max_inversions = (n * (n - 1) / 2) as u64;
    1.0 - inversions as f64 / max_inversions as f64
}

#[test]
fn test_presortedness_extremes() {
    assert_eq!(profile(&[1, 2, 3, 4, 5]).presortedness, 1.0);
    assert_eq!(profile(&[5, 4, 3, 2, 1]).presortedness, 0.0);
    assert_eq!(profile::<i64>(&[]).presortedness, 1.0);
    assert_eq!(profile(&[7]).presortedness, 1.0);
}

#[test]
fn test_presortedness_nearly_sorted() {
    // One adjacent swap out of 21 pairs.
    let p = profile(&[1, 2, 3, 5, 4, 6, 7]);
    assert_relative_eq!(p.presortedness, 1.0 - 1.0 / 21.0, epsilon = 1e-12);
    assert!(p.presortedness > 0.7);
}

#[test]
fn test_presortedness_equal_values_are_not_inversions() {
    assert_eq!(profile(&[3, 3, 3, 3]).presortedness, 1.0);
}

#[test]
fn test_presortedness_matches_pairwise_count() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let len = rng.random_range(0..150);
        let data: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        assert_eq!(profile(&data).presortedness, brute_force_presortedness(&data));
    }
}

#[test]
fn test_range_density() {
    assert_eq!(profile(&[3, 3, 3]).range_density, 1.0);
    assert_eq!(profile(&[1, 5]).range_density, 0.4);
    assert_eq!(profile::<i64>(&[]).range_density, 0.0);

    let dense: Vec<i64> = (1..=10).collect();
    assert!(profile(&dense).range_density > 0.9);

    let sparse = profile(&[1, 100, 200, 300, 400]);
    assert!(sparse.range_density < 0.1);
}

#[test]
fn test_range_density_counts_distinct_values() {
    // 3 distinct values over [0, 9].
    let p = profile(&[0, 9, 4, 4, 0]);
    assert_relative_eq!(p.range_density, 0.3, epsilon = 1e-12);
    assert_eq!(p.distinct, 3);
}

#[test]
fn test_duplicates() {
    assert!(profile(&[1, 2, 3, 2, 4]).has_duplicates);
    assert!(!profile(&[1, 2, 3, 4, 5]).has_duplicates);
    assert!(!profile::<i64>(&[]).has_duplicates);
}

#[test]
fn test_range() {
    let p = profile(&[4, -7, 12, 0]);
    assert_eq!(p.range, Some((-7, 12)));
    assert_eq!(p.min(), Some(-7));
    assert_eq!(p.max(), Some(12));
}

#[test]
fn test_empty_profile() {
    let p = profile::<i64>(&[]);
    assert!(p.is_empty());
    assert_eq!(p.size, 0);
    assert_eq!(p.range, None);
    assert_eq!(p.distinct, 0);
    assert_eq!(p.distribution, Distribution::Small);
}

#[test]
fn test_extreme_values_do_not_overflow() {
    let p = profile(&[i64::MAX, i64::MIN, 0]);
    assert_eq!(p.range, Some((i64::MIN, i64::MAX)));
    assert!(p.range_density > 0.0);
    assert!(p.range_density < 1e-15);
}

#[test]
fn test_distribution_classes() {
    assert_eq!(profile(&[5, 5, 5, 5, 5]).distribution, Distribution::Uniform);
    assert_eq!(profile(&[3, 1, 2]).distribution, Distribution::Small);

    let even: Vec<i64> = (0..100).collect();
    assert_eq!(profile(&even).distribution, Distribution::Normal);

    // Quartiles 3, 6, 8: spreads 3 and 2 over an IQR of 5.
    let ramp: Vec<i64> = (1..=10).collect();
    assert_eq!(profile(&ramp).distribution, Distribution::SlightlySkewed);

    let skewed = [0, 0, 0, 1, 1, 1, 1, 1, 1, 10, 10, 10];
    assert_eq!(profile(&skewed).distribution, Distribution::HighlySkewed);

    // Zero IQR with several distinct values.
    let spiked = [1, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 9];
    assert_eq!(profile(&spiked).distribution, Distribution::Uniform);
}

#[test]
fn test_profile_of_keyed_records() {
    #[derive(Clone)]
    struct Row(i64, &'static str);

    impl SortKey for Row {
        fn sort_key(&self) -> i64 {
            self.0
        }
    }

    let rows = [Row(2, "b"), Row(1, "a"), Row(2, "c")];
    let p = profile(&rows);
    assert_eq!(p.size, 3);
    assert!(p.has_duplicates);
    assert_eq!(p.range, Some((1, 2)));
    // One inversion (2 > 1) out of three pairs.
    assert_relative_eq!(p.presortedness, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_profile_display() {
    let text = profile(&[5, 4, 3, 2, 1]).to_string();
    assert!(text.contains("size=5"));
    assert!(text.contains("presortedness=0.00"));
    assert!(text.contains("duplicates=false"));
}
