//! Common types shared by the controller and its collaborators.

mod analysis;
mod event;
mod geometry;
mod span;

pub use analysis::*;
pub use event::*;
pub use geometry::*;
pub use span::*;
