//! Host collaborator traits.
//!
//! The host owns the real document: text storage, rendering, geometry and
//! editing. The controller only talks to it through these traits.

use std::sync::Arc;

use crate::types::{NodeId, NodeRef, Point, Rect, Span};

/// The watched text input.
pub trait HostTextSource: Send + Sync {
    /// Current visible text.
    fn text(&self) -> String;

    /// Reference to the element at its current revision.
    fn node(&self) -> NodeRef;

    /// Whether a change originating at `target` belongs to the watched element.
    fn contains(&self, target: NodeId) -> bool;
}

/// Draws visual emphasis over spans.
pub trait Highlighter: Send + Sync {
    /// Render `spans`, replacing anything previously drawn. Empty means clear.
    fn render(&self, spans: &[Span]);

    fn clear(&self);
}

/// Screen geometry of spans.
pub trait BoundsProvider: Send + Sync {
    /// Rectangles covered by `span`, one per rendered line, in order.
    fn rectangles_for(&self, span: &Span) -> Vec<Rect>;
}

/// What the tooltip should say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipContent {
    /// Text qualifies; pressing the key starts the action.
    Ready { trigger_key: String },
    /// Waiting for the text service.
    Loading,
    /// Result preview; pressing the key applies it.
    Review {
        text: String,
        failed: bool,
        trigger_key: String,
    },
}

/// Positioned, non-interactive overlay.
pub trait TooltipSurface: Send + Sync {
    fn show_at(&self, point: Point, content: &TooltipContent);

    fn hide(&self);
}

/// Performs the text substitution in the host.
pub trait Applier: Send + Sync {
    /// Replace the text covered by `span` with `new_text`, leaving focus and
    /// selection in the edited element.
    fn replace(&self, span: &Span, new_text: &str);
}

/// The full set of host collaborators a controller needs.
#[derive(Clone)]
pub struct HostBindings {
    pub text: Arc<dyn HostTextSource>,
    pub highlighter: Arc<dyn Highlighter>,
    pub bounds: Arc<dyn BoundsProvider>,
    pub tooltip: Arc<dyn TooltipSurface>,
    pub applier: Arc<dyn Applier>,
}

impl HostBindings {
    /// Bind every collaborator to one host object.
    pub fn from_host<H>(host: Arc<H>) -> Self
    where
        H: HostTextSource + Highlighter + BoundsProvider + TooltipSurface + Applier + 'static,
    {
        Self {
            text: host.clone(),
            highlighter: host.clone(),
            bounds: host.clone(),
            tooltip: host.clone(),
            applier: host,
        }
    }
}
