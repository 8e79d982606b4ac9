//! # Inkling Core
//!
//! The interaction controller and its default collaborators.
//!
//! A controller watches one host text element. Text changes are debounced,
//! then analyzed under a [`QualificationPolicy`]; qualifying spans are
//! highlighted, hovering them shows a hint, and the trigger key walks the
//! span through `Ready -> Loading -> Result` before the result is applied.
//!
//! [`QualificationPolicy`]: inkling_protocols::QualificationPolicy

pub mod analyzer;
pub mod controller;
pub mod memory;

pub use analyzer::PolicyAnalyzer;
pub use controller::{
    ActionMode, ControllerEvent, ControllerSettings, InteractionController, InteractionState,
};
pub use memory::MemoryHost;
