//! Sample moments used by the variance-ranked strategy.

/// Mean and Bessel-corrected sample variance of one feature column within
/// one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureMoments {
    pub mean: f64,
    pub variance: f64,
}

impl FeatureMoments {
    /// Two-pass mean and sample variance (divide by `count - 1`).
    ///
    /// Returns `None` for fewer than two values, where the corrected
    /// variance would divide by zero.
    pub fn from_values(values: &[f64]) -> Option<FeatureMoments> {
        if values.len() < 2 {
            return None;
        }
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let variance = values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count - 1.0);
        Some(FeatureMoments { mean, variance })
    }
}
