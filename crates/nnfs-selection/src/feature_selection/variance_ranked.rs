//! Variance-ranked selection for binary {1, 2} class labels.
//!
//! Features that separate the classes with little spread inside each class
//! are hypothesized to be the discriminative ones, so this strategy ranks
//! every feature once by within-class sample variance and grows the subset
//! in that fixed order, O(features) evaluator calls per ordering instead of
//! forward selection's O(features²), at the cost of never re-ranking as the
//! subset grows. Three orderings are tried (class-1 variance, class-2
//! variance, and the per-feature minimum of the two) and the best subset
//! across all three wins.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use ordered_float::OrderedFloat;

use crate::data_handling::{Dataset, FeatureSet};
use crate::error::SelectionError;
use crate::feature_selection::{format_feature_set, SelectionResult, TraceEvent, TraceSink};
use crate::stats::FeatureMoments;
use crate::validation::accuracy;

/// Which per-class variance an ordering ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceOrdering {
    ClassOne,
    ClassTwo,
    /// The smaller of the two class variances, per feature.
    AnyClass,
}

impl fmt::Display for VarianceOrdering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VarianceOrdering::ClassOne => write!(f, "class-1 variance"),
            VarianceOrdering::ClassTwo => write!(f, "class-2 variance"),
            VarianceOrdering::AnyClass => write!(f, "any-class variance"),
        }
    }
}

/// Rank features by ascending within-class variance and grow the subset in
/// that order, keeping the peak-accuracy subset across all three orderings.
///
/// Fails before any evaluation if the dataset is empty, if any label is not
/// exactly 1 or 2, or if either class has fewer than two members (the
/// Bessel-corrected variance would divide by zero, so it is reported instead of
/// silently propagating a non-finite rank).
pub fn variance_ranked_selection(
    dataset: &Dataset,
    sink: &mut dyn TraceSink,
) -> Result<SelectionResult, SelectionError> {
    if dataset.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }
    for (index, instance) in dataset.instances().iter().enumerate() {
        let label = instance.label();
        if label != 1.0 && label != 2.0 {
            return Err(SelectionError::NonBinaryLabel { index, label });
        }
    }

    let (class_one, class_two) = per_class_variances(dataset)?;
    let any_class: Vec<f64> = class_one
        .iter()
        .zip(&class_two)
        .map(|(one, two)| one.min(*two))
        .collect();

    let orderings = [
        (VarianceOrdering::ClassOne, class_one),
        (VarianceOrdering::ClassTwo, class_two),
        (VarianceOrdering::AnyClass, any_class),
    ];

    let mut overall: Option<SelectionResult> = None;
    for (ordering, variances) in orderings {
        log::debug!("ranking features by {}", ordering);
        sink.record(TraceEvent::OrderingStarted { ordering });
        let best = walk_ordering(dataset, &variances, sink)?;
        let improved = overall
            .as_ref()
            .map_or(true, |previous| best.accuracy > previous.accuracy);
        if improved {
            overall = Some(best);
        }
    }

    Ok(overall.expect("all three orderings produce a result"))
}

/// Per-feature Bessel-corrected sample variances for class 1 and class 2,
/// indexed by feature position (feature index minus one).
fn per_class_variances(dataset: &Dataset) -> Result<(Vec<f64>, Vec<f64>), SelectionError> {
    let mut class_one = Vec::with_capacity(dataset.feature_count());
    let mut class_two = Vec::with_capacity(dataset.feature_count());

    for feature in 1..dataset.width() {
        for (class, label, column) in [
            (1u8, 1.0, &mut class_one),
            (2u8, 2.0, &mut class_two),
        ] {
            let values: Vec<f64> = dataset
                .instances()
                .iter()
                .filter(|instance| instance.label() == label)
                .map(|instance| instance.value(feature))
                .collect();
            let moments = FeatureMoments::from_values(&values).ok_or(
                SelectionError::UndefinedVariance {
                    feature,
                    class,
                    count: values.len(),
                },
            )?;
            column.push(moments.variance);
        }
    }

    Ok((class_one, class_two))
}

/// Grow a subset by repeated extraction of the lowest-variance remaining
/// feature, evaluating after every addition and remembering the peak.
fn walk_ordering(
    dataset: &Dataset,
    variances: &[f64],
    sink: &mut dyn TraceSink,
) -> Result<SelectionResult, SelectionError> {
    // Min-heap keyed by (variance, feature index): equal variances extract
    // in ascending index order.
    let mut ranked: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = variances
        .iter()
        .enumerate()
        .map(|(position, &variance)| Reverse((OrderedFloat(variance), position + 1)))
        .collect();

    let mut current = FeatureSet::new();
    let mut best = SelectionResult {
        features: FeatureSet::new(),
        accuracy: 0.0,
    };

    while let Some(Reverse((_, feature))) = ranked.pop() {
        current.insert(feature);
        let candidate_accuracy = accuracy(&current, dataset)?;
        log::trace!(
            "accuracy with {} is {:.3}",
            format_feature_set(&current),
            candidate_accuracy
        );
        sink.record(TraceEvent::Evaluated {
            features: current.clone(),
            accuracy: candidate_accuracy,
        });
        sink.record(TraceEvent::Committed {
            feature,
            added: true,
            accuracy: candidate_accuracy,
        });
        if candidate_accuracy > best.accuracy {
            best = SelectionResult {
                features: current.clone(),
                accuracy: candidate_accuracy,
            };
        }
    }

    Ok(best)
}
