//! Support modules for the `nnfs` binary.
pub mod generate;
pub mod select;
