//! Seams for external collaborators.

pub mod label_generator;

pub use label_generator::{ILabelGenerator, NoOpLabelGenerator};
