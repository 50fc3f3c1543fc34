//! Dataset file loading.
pub mod dataset;
