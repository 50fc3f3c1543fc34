//! Leave-one-out cross-validation of the 1-NN rule.

use crate::data_handling::{Dataset, FeatureSet};
use crate::error::SelectionError;
use crate::knn::{check_features, nearest_neighbor_unchecked};

/// LOOCV accuracy of 1-NN classification under `features`.
///
/// Every instance is classified by its nearest neighbor among all the other
/// instances; the result is the fraction whose predicted label matches their
/// true label, always in [0, 1]. This is the dominant cost center of every
/// search: O(instances² · features) per call.
///
/// Fails on an empty dataset (the ratio is undefined), on a single-instance
/// dataset (no neighbor exists to classify with), and on feature indices
/// outside the instance width. Preconditions are validated once up front;
/// the scan itself runs unchecked.
pub fn accuracy(features: &FeatureSet, dataset: &Dataset) -> Result<f64, SelectionError> {
    if dataset.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }
    if dataset.len() < 2 {
        return Err(SelectionError::NotEnoughInstances { len: dataset.len() });
    }
    check_features(features, dataset.width())?;

    let mut correct = 0usize;
    for index in 0..dataset.len() {
        let neighbor = nearest_neighbor_unchecked(features, dataset, index);
        if dataset.instance(neighbor).label() == dataset.instance(index).label() {
            correct += 1;
        }
    }
    Ok(correct as f64 / dataset.len() as f64)
}
