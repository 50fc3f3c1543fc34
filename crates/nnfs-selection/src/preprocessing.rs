//! Min-max normalization of feature columns.
//!
//! Feature values are rescaled to [0, 1] column by column before any search
//! runs, so no single feature dominates the distance kernel by sheer
//! magnitude. The label column is never touched.

use itertools::Itertools;

use crate::data_handling::Dataset;

/// Rescale every feature column in place with `(x - min) / (max - min)`.
///
/// A no-op when the dataset has no feature columns. A constant column makes
/// the divisor zero and leaves non-finite values behind; that is the
/// documented behavior of this value-range scheme, not something this
/// function guards. Callers that cannot tolerate it must drop constant
/// columns first. Run this once, before searching: a second pass over
/// already-scaled data would rescale against the new min/max.
pub fn normalize(dataset: &mut Dataset) {
    if dataset.width() <= 1 {
        return;
    }

    for column in 1..dataset.width() {
        let Some((min, max)) = dataset
            .instances()
            .iter()
            .map(|instance| instance.value(column))
            .minmax()
            .into_option()
        else {
            return;
        };
        if max == min {
            log::warn!(
                "feature column {} is constant ({}); normalization will produce non-finite values",
                column,
                min
            );
        }
        for instance in dataset.instances_mut() {
            let values = instance.values_mut();
            values[column] = (values[column] - min) / (max - min);
        }
    }
}
