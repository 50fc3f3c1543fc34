//! Data structures for labeled instances and the datasets that hold them.
//!
//! An [`Instance`] is one row of numeric values: index 0 is the class label
//! (an integer-valued double), indices 1 and up are feature values. A
//! [`Dataset`] owns the rows and guarantees they all have the same width.
//! Instances are created at load time, mutated in place only by
//! normalization, and read-only for the rest of their life.
use std::collections::BTreeSet;

use crate::error::SelectionError;

/// A set of feature indices used to compute distances.
///
/// `BTreeSet` keeps iteration in ascending index order, which makes every
/// first-found tie-break in the search strategies deterministic.
pub type FeatureSet = BTreeSet<usize>;

/// One labeled row: the class label at index 0, feature values after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    values: Vec<f64>,
}

impl Instance {
    pub fn new(values: Vec<f64>) -> Self {
        Instance { values }
    }

    /// The class label, stored at index 0.
    pub fn label(&self) -> f64 {
        self.values[0]
    }

    /// The value at `index` (0 is the label, 1.. are features).
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Total number of values, label included.
    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// An equal-width collection of instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    instances: Vec<Instance>,
}

impl Dataset {
    /// Build a dataset, rejecting rows whose width differs from the first
    /// row (or rows with no values at all, which would have no label).
    pub fn from_instances(instances: Vec<Instance>) -> Result<Self, SelectionError> {
        if let Some(first) = instances.first() {
            let expected = first.width().max(1);
            for (index, instance) in instances.iter().enumerate() {
                if instance.width() != expected {
                    return Err(SelectionError::RaggedInstance {
                        index,
                        expected,
                        found: instance.width(),
                    });
                }
            }
        }
        Ok(Dataset { instances })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Width shared by every instance; 0 for an empty dataset.
    pub fn width(&self) -> usize {
        self.instances.first().map_or(0, Instance::width)
    }

    /// Number of feature columns (width minus the label column).
    pub fn feature_count(&self) -> usize {
        self.width().saturating_sub(1)
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn instance(&self, index: usize) -> &Instance {
        &self.instances[index]
    }

    pub(crate) fn instances_mut(&mut self) -> &mut [Instance] {
        &mut self.instances
    }

    /// Every valid feature index, 1 through width-1.
    pub fn full_feature_set(&self) -> FeatureSet {
        (1..self.width()).collect()
    }
}
