use std::error::Error;
use std::fmt;

/// Custom error type for search and evaluation failures
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The dataset holds no instances; every search fails before evaluating.
    EmptyDataset,
    /// An instance's width differs from the rest of the dataset.
    RaggedInstance {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A feature index falls outside the valid range [1, width).
    FeatureIndexOutOfRange { index: usize, width: usize },
    /// The query index passed to the classifier names no instance.
    QueryIndexOutOfRange { index: usize, len: usize },
    /// The classifier needs at least two instances to pick a neighbor.
    NotEnoughInstances { len: usize },
    /// Variance-ranked selection requires class labels of exactly 1 or 2.
    NonBinaryLabel { index: usize, label: f64 },
    /// Bessel-corrected sample variance is undefined for classes with
    /// fewer than two members.
    UndefinedVariance {
        feature: usize,
        class: u8,
        count: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::EmptyDataset => write!(f, "Dataset holds no instances"),
            SelectionError::RaggedInstance {
                index,
                expected,
                found,
            } => write!(
                f,
                "Instance {} has {} values but the dataset expects {}",
                index, found, expected
            ),
            SelectionError::FeatureIndexOutOfRange { index, width } => write!(
                f,
                "Feature index {} is out of range for instances of width {} (valid feature indices are 1..{})",
                index, width, width
            ),
            SelectionError::QueryIndexOutOfRange { index, len } => write!(
                f,
                "Query index {} is out of range for {} instances",
                index, len
            ),
            SelectionError::NotEnoughInstances { len } => write!(
                f,
                "Nearest-neighbor classification needs at least 2 instances, got {}",
                len
            ),
            SelectionError::NonBinaryLabel { index, label } => write!(
                f,
                "Instance {} has class label {}, but variance-ranked selection requires labels 1 or 2",
                index, label
            ),
            SelectionError::UndefinedVariance {
                feature,
                class,
                count,
            } => write!(
                f,
                "Sample variance of feature {} is undefined for class {} with {} member(s)",
                feature, class, count
            ),
        }
    }
}

impl Error for SelectionError {}
