//! Greedy search strategies over feature subsets.
//!
//! All strategies share the same contract: fail fast on an empty dataset,
//! evaluate candidate subsets with LOOCV accuracy, emit a [`TraceEvent`] for
//! every evaluation performed, and return the best subset observed over the
//! whole run: the searches deliberately keep going past the first
//! non-improving step instead of stopping early, so one bad greedy step
//! cannot hide a later peak.
pub mod greedy;
pub mod variance_ranked;

pub use greedy::{backward_elimination, forward_selection};
pub use variance_ranked::{variance_ranked_selection, VarianceOrdering};

use crate::data_handling::FeatureSet;

/// Outcome of one search: the best subset seen and its LOOCV accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    pub features: FeatureSet,
    pub accuracy: f64,
}

/// One step of search progress.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A candidate subset was evaluated with LOOCV.
    Evaluated { features: FeatureSet, accuracy: f64 },
    /// The round's best single addition or removal was committed to the
    /// working subset (unconditionally; commits happen even when the round
    /// did not improve on the best subset seen so far).
    Committed {
        feature: usize,
        added: bool,
        accuracy: f64,
    },
    /// Variance-ranked selection started walking one of its orderings.
    OrderingStarted { ordering: VarianceOrdering },
}

/// Receives search progress; the core never formats or prints events itself.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Collecting sink, mostly for tests and callers that post-process traces.
impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Sink that discards every event.
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Render a feature set as `{1, 2, 3}`.
pub fn format_feature_set(features: &FeatureSet) -> String {
    let items: Vec<String> = features.iter().map(|index| index.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}
