//! # Inkling Protocols
//!
//! Core protocol definitions for the Inkling interaction controller.
//! Contains only types and interface definitions - no implementations.
//!
//! ## Collaborator Traits
//!
//! - [`HostTextSource`] - Text and identity of the watched input element
//! - [`Highlighter`] - Draws and erases span emphasis
//! - [`BoundsProvider`] - Screen rectangles occupied by a span
//! - [`TooltipSurface`] - Positioned hint overlay
//! - [`Applier`] - Text substitution in the host document
//! - [`Analyzer`] - Pure text analysis under a qualification policy
//! - [`AsyncTextService`] - Remote text transform (e.g. a language model)

pub mod analyzer;
pub mod error;
pub mod host;
pub mod service;
pub mod types;

pub use analyzer::{Analyzer, QualificationPolicy};
pub use error::{ServiceStage, TransformError};
pub use host::{
    Applier, BoundsProvider, Highlighter, HostBindings, HostTextSource, TooltipContent,
    TooltipSurface,
};
pub use service::AsyncTextService;
pub use types::*;
