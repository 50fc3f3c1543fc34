use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_handling::Dataset;
use crate::error::SelectionError;
use crate::feature_selection::{
    backward_elimination, forward_selection, variance_ranked_selection, SelectionResult, TraceSink,
};

/// The available search strategies.
///
/// Resolved once at the tool boundary (from a CLI flag or a config file);
/// the strategies themselves stay free of dispatch logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    Forward,
    Backward,
    VarianceRanked,
}

impl SearchStrategy {
    /// Run this strategy over `dataset`, streaming progress into `sink`.
    pub fn run(
        &self,
        dataset: &Dataset,
        sink: &mut dyn TraceSink,
    ) -> Result<SelectionResult, SelectionError> {
        match self {
            SearchStrategy::Forward => forward_selection(dataset, sink),
            SearchStrategy::Backward => backward_elimination(dataset, sink),
            SearchStrategy::VarianceRanked => variance_ranked_selection(dataset, sink),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(SearchStrategy::Forward),
            "backward" => Ok(SearchStrategy::Backward),
            "variance-ranked" | "variance" => Ok(SearchStrategy::VarianceRanked),
            _ => Err(format!(
                "Unknown search strategy: {}. Valid strategies are forward, backward and variance-ranked",
                s
            )),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchStrategy::Forward => write!(f, "forward"),
            SearchStrategy::Backward => write!(f, "backward"),
            SearchStrategy::VarianceRanked => write!(f, "variance-ranked"),
        }
    }
}
