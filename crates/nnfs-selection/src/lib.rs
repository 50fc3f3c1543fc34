//! nnfs-selection: greedy feature-subset search for a 1-NN classifier.
//!
//! This crate provides the search-and-evaluation engine behind the `nnfs`
//! tool: a squared-Euclidean distance kernel, a leave-one-out
//! cross-validation (LOOCV) accuracy estimator, a min-max normalizer, and
//! three greedy search strategies (forward selection, backward elimination,
//! variance-ranked selection) built on top of them, plus a loader for
//! whitespace-delimited dataset files.
//!
//! The core never prints; search progress is emitted as [`feature_selection::TraceEvent`]s
//! through a caller-supplied sink so the surrounding tool decides how to
//! render them.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod io;
pub mod knn;
pub mod preprocessing;
pub mod stats;
pub mod validation;
