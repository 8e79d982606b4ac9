//! Error types for the Inkling protocol layer.

mod transform;

pub use transform::*;
