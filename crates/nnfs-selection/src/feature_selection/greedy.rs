//! Forward selection and backward elimination.
//!
//! Both strategies evaluate every candidate single-feature change each
//! round, commit the round's best change unconditionally, and remember the
//! best subset ever observed. The working subset therefore walks the entire
//! add/remove order even through accuracy dips; only the recorded best is
//! monotone.

use crate::data_handling::{Dataset, FeatureSet};
use crate::error::SelectionError;
use crate::feature_selection::{format_feature_set, SelectionResult, TraceEvent, TraceSink};
use crate::validation::accuracy;

/// Greedy growth: start empty, add the most helpful feature each round.
///
/// Each round tentatively adds every remaining feature to the working
/// subset and evaluates LOOCV accuracy; the strictly best candidate wins,
/// with ties kept by the first (lowest-index) candidate examined. The
/// winner is committed whether or not it improved on the best accuracy
/// seen so far, and the search runs until no features remain. Returns the
/// peak subset of the whole run, possibly empty if no round ever exceeded
/// accuracy 0.
pub fn forward_selection(
    dataset: &Dataset,
    sink: &mut dyn TraceSink,
) -> Result<SelectionResult, SelectionError> {
    if dataset.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }

    let mut remaining = dataset.full_feature_set();
    let mut current = FeatureSet::new();
    let mut best = SelectionResult {
        features: FeatureSet::new(),
        accuracy: 0.0,
    };

    while !remaining.is_empty() {
        let mut round_best: Option<(usize, f64)> = None;
        for &candidate in &remaining {
            current.insert(candidate);
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
            if round_best.map_or(true, |(_, best_accuracy)| candidate_accuracy > best_accuracy) {
                round_best = Some((candidate, candidate_accuracy));
            }
            current.remove(&candidate);
        }

        let (feature, round_accuracy) =
            round_best.expect("a non-empty round evaluates at least one candidate");
        current.insert(feature);
        remaining.remove(&feature);
        log::debug!("adding feature {} (accuracy {:.3})", feature, round_accuracy);
        sink.record(TraceEvent::Committed {
            feature,
            added: true,
            accuracy: round_accuracy,
        });

        if round_accuracy > best.accuracy {
            best = SelectionResult {
                features: current.clone(),
                accuracy: round_accuracy,
            };
        }
    }

    Ok(best)
}

/// Greedy shrink: start full, remove the least useful feature each round.
///
/// The recorded best starts as the *empty* set paired with the full-set
/// accuracy, so the empty set is returned only when no single-feature
/// removal round ever strictly exceeded the full-set accuracy. Rounds run
/// down to a single remaining feature regardless of improvement.
pub fn backward_elimination(
    dataset: &Dataset,
    sink: &mut dyn TraceSink,
) -> Result<SelectionResult, SelectionError> {
    if dataset.is_empty() {
        return Err(SelectionError::EmptyDataset);
    }

    let mut current = dataset.full_feature_set();
    let full_accuracy = accuracy(&current, dataset)?;
    sink.record(TraceEvent::Evaluated {
        features: current.clone(),
        accuracy: full_accuracy,
    });
    let mut best = SelectionResult {
        features: FeatureSet::new(),
        accuracy: full_accuracy,
    };

    while current.len() > 1 {
        let mut round_best: Option<(usize, f64)> = None;
        let candidates: Vec<usize> = current.iter().copied().collect();
        for candidate in candidates {
            current.remove(&candidate);
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
            if round_best.map_or(true, |(_, best_accuracy)| candidate_accuracy > best_accuracy) {
                round_best = Some((candidate, candidate_accuracy));
            }
            current.insert(candidate);
        }

        let (feature, round_accuracy) =
            round_best.expect("a round over a non-empty subset evaluates at least one removal");
        current.remove(&feature);
        log::debug!(
            "removing feature {} (accuracy {:.3})",
            feature,
            round_accuracy
        );
        sink.record(TraceEvent::Committed {
            feature,
            added: false,
            accuracy: round_accuracy,
        });

        if round_accuracy > best.accuracy {
            best = SelectionResult {
                features: current.clone(),
                accuracy: round_accuracy,
            };
        }
    }

    Ok(best)
}
