//! Integration tests for the distance kernel, the 1-NN classifier, and the
//! LOOCV evaluator.

use nnfs_selection::data_handling::{Dataset, FeatureSet, Instance};
use nnfs_selection::error::SelectionError;
use nnfs_selection::knn::{nearest_neighbor, squared_distance};
use nnfs_selection::preprocessing::normalize;
use nnfs_selection::validation::accuracy;

fn dataset(rows: &[&[f64]]) -> Dataset {
    Dataset::from_instances(rows.iter().map(|row| Instance::new(row.to_vec())).collect()).unwrap()
}

fn features(indices: &[usize]) -> FeatureSet {
    indices.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// Distance kernel
// ---------------------------------------------------------------------------

#[test]
fn distance_is_symmetric_over_any_subset() {
    let a = Instance::new(vec![1.0, 0.3, 0.8, 0.1]);
    let b = Instance::new(vec![2.0, 0.9, 0.2, 0.7]);
    for subset in [features(&[1]), features(&[2, 3]), features(&[1, 2, 3])] {
        assert_eq!(
            squared_distance(&subset, &a, &b),
            squared_distance(&subset, &b, &a)
        );
        assert_eq!(squared_distance(&subset, &a, &a), 0.0);
    }
}

#[test]
fn distance_sums_squared_differences_without_root() {
    let a = Instance::new(vec![1.0, 0.0, 0.0]);
    let b = Instance::new(vec![2.0, 3.0, 4.0]);
    // 3² + 4² = 25, not 5.
    assert!((squared_distance(&features(&[1, 2]), &a, &b) - 25.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Nearest neighbor
// ---------------------------------------------------------------------------

#[test]
fn nearest_neighbor_excludes_the_query() {
    let ds = dataset(&[&[1.0, 0.5], &[2.0, 0.6], &[1.0, 0.9]]);
    // Instance 0's nearest non-self neighbor is instance 1.
    assert_eq!(nearest_neighbor(&features(&[1]), &ds, 0).unwrap(), 1);
}

#[test]
fn nearest_neighbor_ties_go_to_the_lowest_index() {
    // Instances 1 and 2 are equidistant from instance 0.
    let ds = dataset(&[&[1.0, 0.5], &[2.0, 0.4], &[2.0, 0.6]]);
    assert_eq!(nearest_neighbor(&features(&[1]), &ds, 0).unwrap(), 1);
}

#[test]
fn nearest_neighbor_with_empty_subset_degenerates_to_first_other() {
    let ds = dataset(&[&[1.0, 0.5], &[2.0, 0.6], &[1.0, 0.9]]);
    assert_eq!(nearest_neighbor(&FeatureSet::new(), &ds, 0).unwrap(), 1);
    assert_eq!(nearest_neighbor(&FeatureSet::new(), &ds, 2).unwrap(), 0);
}

#[test]
fn nearest_neighbor_validates_preconditions() {
    let lonely = dataset(&[&[1.0, 0.5]]);
    assert_eq!(
        nearest_neighbor(&features(&[1]), &lonely, 0),
        Err(SelectionError::NotEnoughInstances { len: 1 })
    );

    let ds = dataset(&[&[1.0, 0.5], &[2.0, 0.6]]);
    assert_eq!(
        nearest_neighbor(&features(&[1]), &ds, 7),
        Err(SelectionError::QueryIndexOutOfRange { index: 7, len: 2 })
    );
    assert_eq!(
        nearest_neighbor(&features(&[2]), &ds, 0),
        Err(SelectionError::FeatureIndexOutOfRange { index: 2, width: 2 })
    );
}

// ---------------------------------------------------------------------------
// LOOCV accuracy
// ---------------------------------------------------------------------------

#[test]
fn accuracy_stays_within_unit_interval() {
    let ds = dataset(&[
        &[1.0, 0.1, 0.7],
        &[2.0, 0.8, 0.2],
        &[1.0, 0.3, 0.9],
        &[2.0, 0.6, 0.1],
    ]);
    let value = accuracy(&ds.full_feature_set(), &ds).unwrap();
    assert!((0.0..=1.0).contains(&value));
}

#[test]
fn accuracy_rejects_empty_and_singleton_datasets() {
    let empty = Dataset::from_instances(Vec::new()).unwrap();
    assert_eq!(
        accuracy(&FeatureSet::new(), &empty),
        Err(SelectionError::EmptyDataset)
    );

    let lonely = dataset(&[&[1.0, 0.5]]);
    assert_eq!(
        accuracy(&features(&[1]), &lonely),
        Err(SelectionError::NotEnoughInstances { len: 1 })
    );
}

#[test]
fn empty_subset_accuracy_is_a_fixed_baseline() {
    // With no features every distance is 0, so each instance is "classified"
    // by the first other instance: predictions are label(1), label(0),
    // label(0), label(0) -> correct, correct, wrong, wrong.
    let ds = dataset(&[&[1.0, 0.2], &[1.0, 0.9], &[2.0, 0.4], &[2.0, 0.7]]);
    let first = accuracy(&FeatureSet::new(), &ds).unwrap();
    let second = accuracy(&FeatureSet::new(), &ds).unwrap();
    assert_eq!(first, 0.5);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn separable_single_feature_dataset_classifies_perfectly() {
    let mut ds = dataset(&[&[1.0, 0.0], &[1.0, 1.0], &[2.0, 5.0], &[2.0, 6.0]]);
    normalize(&mut ds);

    // Min-max over [0, 6]: 0, 1/6, 5/6, 1; each point's nearest neighbor
    // shares its label.
    let expected = [0.0, 1.0 / 6.0, 5.0 / 6.0, 1.0];
    for (instance, want) in ds.instances().iter().zip(expected) {
        assert!((instance.value(1) - want).abs() < 1e-12);
    }
    assert_eq!(accuracy(&features(&[1]), &ds).unwrap(), 1.0);
}

#[test]
fn identical_features_reduce_to_the_tie_break_baseline() {
    // Every instance looks the same, so each one's neighbor is the first
    // other instance; accuracy follows purely from the label order.
    let ds = dataset(&[&[1.0, 0.4], &[1.0, 0.4], &[2.0, 0.4], &[2.0, 0.4]]);
    assert_eq!(accuracy(&features(&[1]), &ds).unwrap(), 0.5);
}
