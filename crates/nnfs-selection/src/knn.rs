//! Squared-Euclidean distance kernel and the 1-nearest-neighbor rule.
//!
//! This is the hot path of the whole crate: every search round calls the
//! LOOCV evaluator once per candidate feature, and the evaluator calls
//! [`nearest_neighbor`] once per instance, so the kernel runs
//! O(instances² · features) times per evaluation. It stays allocation-free
//! and works directly on instance slices.

use crate::data_handling::{Dataset, FeatureSet, Instance};
use crate::error::SelectionError;

/// Sum of squared differences over exactly the features in `features`.
///
/// The square root of the Euclidean distance is deliberately skipped: for
/// non-negative x and y, `sqrt(x) < sqrt(y)` iff `x < y`, so squared
/// distances rank neighbors identically while costing less and avoiding the
/// precision loss of the root. Returns 0 for an empty feature set.
///
/// Panics if a feature index is out of bounds for either instance; the
/// checked entry points in this module and in [`crate::validation`] validate
/// indices before reaching the kernel.
pub fn squared_distance(features: &FeatureSet, a: &Instance, b: &Instance) -> f64 {
    let mut total = 0.0;
    for &index in features {
        let diff = a.value(index) - b.value(index);
        total += diff * diff;
    }
    total
}

/// Index of the instance closest to `query` under `features`, excluding
/// `query` itself.
///
/// Ties go to the first (lowest) index encountered: the scan compares with
/// strict `<`, so an equally-distant later instance never displaces an
/// earlier one. With an empty feature set every distance is 0 and the result
/// degenerates to the first instance other than the query; callers must
/// treat empty-subset accuracy as a baseline, not a signal.
pub fn nearest_neighbor(
    features: &FeatureSet,
    dataset: &Dataset,
    query: usize,
) -> Result<usize, SelectionError> {
    if dataset.len() < 2 {
        return Err(SelectionError::NotEnoughInstances { len: dataset.len() });
    }
    if query >= dataset.len() {
        return Err(SelectionError::QueryIndexOutOfRange {
            index: query,
            len: dataset.len(),
        });
    }
    check_features(features, dataset.width())?;
    Ok(nearest_neighbor_unchecked(features, dataset, query))
}

/// The scan itself, with preconditions already validated.
pub(crate) fn nearest_neighbor_unchecked(
    features: &FeatureSet,
    dataset: &Dataset,
    query: usize,
) -> usize {
    debug_assert!(dataset.len() >= 2 && query < dataset.len());

    let query_instance = dataset.instance(query);
    let mut nearest = if query == 0 { 1 } else { 0 };
    let mut nearest_distance = f64::INFINITY;
    for (index, instance) in dataset.instances().iter().enumerate() {
        if index == query {
            continue;
        }
        let distance = squared_distance(features, instance, query_instance);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = index;
        }
    }
    nearest
}

/// Reject feature indices outside [1, width).
///
/// Index 0 is the class label column and never a valid feature.
pub(crate) fn check_features(features: &FeatureSet, width: usize) -> Result<(), SelectionError> {
    if let Some(&highest) = features.iter().next_back() {
        if highest >= width {
            return Err(SelectionError::FeatureIndexOutOfRange {
                index: highest,
                width,
            });
        }
    }
    if features.contains(&0) {
        return Err(SelectionError::FeatureIndexOutOfRange { index: 0, width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::Instance;

    fn features(indices: &[usize]) -> FeatureSet {
        indices.iter().copied().collect()
    }

    #[test]
    fn squared_distance_is_symmetric_and_zero_on_self() {
        let a = Instance::new(vec![1.0, 0.2, 0.9]);
        let b = Instance::new(vec![2.0, 0.7, 0.1]);
        let set = features(&[1, 2]);

        assert_eq!(squared_distance(&set, &a, &b), squared_distance(&set, &b, &a));
        assert_eq!(squared_distance(&set, &a, &a), 0.0);
    }

    #[test]
    fn squared_distance_over_empty_set_is_zero() {
        let a = Instance::new(vec![1.0, 0.2]);
        let b = Instance::new(vec![2.0, 0.8]);
        assert_eq!(squared_distance(&FeatureSet::new(), &a, &b), 0.0);
    }

    #[test]
    fn check_features_rejects_label_column_and_out_of_range() {
        assert!(check_features(&features(&[1, 2]), 3).is_ok());
        assert_eq!(
            check_features(&features(&[3]), 3),
            Err(SelectionError::FeatureIndexOutOfRange { index: 3, width: 3 })
        );
        assert_eq!(
            check_features(&features(&[0, 1]), 3),
            Err(SelectionError::FeatureIndexOutOfRange { index: 0, width: 3 })
        );
    }
}
