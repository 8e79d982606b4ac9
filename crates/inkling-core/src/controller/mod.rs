//! Interaction controller.
//!
//! Host events (`on_text_changed`, `on_pointer_move`, `on_key_down`) are
//! plain `&mut self` calls. Timer firings and transform resolutions arrive as
//! [`ControllerEvent`]s on an internal channel and are applied by
//! [`InteractionController::tick`] or [`InteractionController::handle_event`].
//! Either way exactly one event is processed at a time.

mod debounce;
mod pending;
mod state;

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace, warn};

use inkling_protocols::{
    AnalysisResult, Analyzer, HostBindings, KeyDisposition, KeyPress, Point, Span, TextChange,
    TooltipContent, TransformError,
};

use crate::analyzer::PolicyAnalyzer;
use debounce::Debounce;
use pending::PendingRequest;

pub use state::{ActionMode, ControllerEvent, ControllerSettings, InteractionState};

/// Drives one host text element through
/// `Idle -> Ready -> Loading -> Result -> Idle`.
pub struct InteractionController {
    settings: ControllerSettings,
    host: HostBindings,
    analyzer: Arc<dyn Analyzer>,
    action: ActionMode,

    state: InteractionState,
    analysis: Option<AnalysisResult>,
    derived_failed: bool,
    hover: Option<usize>,
    target: Option<usize>,
    tooltip_at: Option<Point>,

    debounce: Debounce,
    pending: Option<PendingRequest>,
    next_request_id: u64,

    events_tx: UnboundedSender<ControllerEvent>,
    events_rx: UnboundedReceiver<ControllerEvent>,
}

impl InteractionController {
    /// Create a controller using the built-in [`PolicyAnalyzer`].
    ///
    /// Must be called inside a tokio runtime; timers and transform calls are
    /// spawned onto it.
    pub fn new(settings: ControllerSettings, host: HostBindings, action: ActionMode) -> Self {
        Self::with_analyzer(settings, host, Arc::new(PolicyAnalyzer), action)
    }

    pub fn with_analyzer(
        settings: ControllerSettings,
        host: HostBindings,
        analyzer: Arc<dyn Analyzer>,
        action: ActionMode,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            debounce: Debounce::new(settings.debounce),
            settings,
            host,
            analyzer,
            action,
            state: InteractionState::Idle,
            analysis: None,
            derived_failed: false,
            hover: None,
            target: None,
            tooltip_at: None,
            pending: None,
            next_request_id: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Spans of the current analysis, in text order.
    pub fn spans(&self) -> &[Span] {
        self.analysis.as_ref().map(|a| a.spans.as_slice()).unwrap_or(&[])
    }

    /// Index into [`spans`](Self::spans) of the span under the pointer.
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Stored result text (or failure reason) once in `Result`.
    pub fn derived_text(&self) -> Option<&str> {
        self.analysis.as_ref().and_then(|a| a.derived_text.as_deref())
    }

    /// Whether the stored result is a failure reason.
    pub fn derived_failed(&self) -> bool {
        self.derived_failed
    }

    pub fn is_tooltip_visible(&self) -> bool {
        self.tooltip_at.is_some()
    }

    pub fn is_debounce_armed(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Id of the outstanding transform request, if any.
    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending.as_ref().map(PendingRequest::id)
    }

    // ------------------------------------------------------------------
    // Host events
    // ------------------------------------------------------------------

    /// The host text changed.
    pub fn on_text_changed(&mut self, change: TextChange) {
        if !self.host.text.contains(change.target) {
            trace!("Ignoring change outside watched element: {:?}", change.target);
            return;
        }

        self.debounce.cancel();
        if self.state != InteractionState::Idle || self.analysis.is_some() {
            self.reset();
        }
        self.debounce.arm(&self.events_tx);
    }

    /// The pointer moved. Recomputes hover and tooltip from scratch.
    pub fn on_pointer_move(&mut self, point: Point) {
        self.hover = self.hit_test(point);
        match self.hover {
            Some(_) => self.show_tooltip(point),
            None => self.hide_tooltip(),
        }
    }

    /// A key was pressed. `Consumed` means the host must prevent the default
    /// action and stop propagation.
    pub fn on_key_down(&mut self, key: &KeyPress) -> KeyDisposition {
        if !key.is(&self.settings.trigger_key) || self.tooltip_at.is_none() || self.hover.is_none() {
            return KeyDisposition::Ignored;
        }

        match self.state {
            InteractionState::Idle => KeyDisposition::Ignored,
            InteractionState::Ready => {
                self.begin_action();
                KeyDisposition::Consumed
            }
            // Swallowed so the host does not move focus while the hint says loading.
            InteractionState::Loading => KeyDisposition::Consumed,
            InteractionState::Result => {
                self.apply();
                KeyDisposition::Consumed
            }
        }
    }

    /// Return to `Idle`, dropping spans, hover, tooltip, highlights and any
    /// pending request.
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("Cancelling transform request {}", pending.id());
            pending.cancel();
        }

        self.state = InteractionState::Idle;
        self.analysis = None;
        self.derived_failed = false;
        self.hover = None;
        self.target = None;
        self.hide_tooltip();
        self.host.highlighter.clear();
    }

    // ------------------------------------------------------------------
    // Internal events
    // ------------------------------------------------------------------

    /// Wait for the next internal event and apply it.
    ///
    /// Cancel safe: the event is only taken off the channel when it is also
    /// applied.
    pub async fn tick(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }
    }

    /// Apply every internal event that is already queued. Returns how many.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::DebounceFired { generation } => {
                if self.debounce.accept(generation) {
                    self.run_analysis();
                } else {
                    trace!("Dropping superseded debounce firing {}", generation);
                }
            }
            ControllerEvent::TransformResolved {
                request_id,
                outcome,
            } => self.on_transform_resolved(request_id, outcome),
        }
    }

    fn run_analysis(&mut self) {
        if self.state != InteractionState::Idle {
            debug!("Analysis skipped in state {:?}", self.state);
            return;
        }

        let text = self.host.text.text();
        let source = self.host.text.node();
        let result = self.analyzer.analyze(&text, &self.settings.policy, source);

        if !result.qualifies() {
            debug!("Analysis did not qualify");
            self.analysis = None;
            self.host.highlighter.clear();
            return;
        }

        debug!("Analysis qualified with {} span(s)", result.spans.len());
        self.host.highlighter.render(&result.spans);
        self.analysis = Some(result);
        self.state = InteractionState::Ready;
    }

    fn on_transform_resolved(&mut self, request_id: u64, outcome: Result<String, TransformError>) {
        let current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.matches(request_id));
        if !current || self.state != InteractionState::Loading {
            debug!("Discarding stale transform resolution {}", request_id);
            return;
        }
        self.pending = None;

        let (text, failed) = match outcome {
            Ok(text) => (text, false),
            Err(e) => {
                warn!("Transform request {} failed: {}", request_id, e);
                (e.to_string(), true)
            }
        };
        self.store_result(text, failed);
    }

    // ------------------------------------------------------------------
    // Flow
    // ------------------------------------------------------------------

    fn begin_action(&mut self) {
        let Some((index, span)) = self.hovered_span() else {
            return;
        };
        self.target = Some(index);

        match self.action.clone() {
            ActionMode::Replace(replacement) => self.store_result(replacement, false),
            ActionMode::Transform(service) => {
                let text = self.host.text.text();
                let current = self.host.text.node();
                let Some(slice) = span
                    .source()
                    .is_current(&current)
                    .then(|| span.slice(&text))
                    .flatten()
                else {
                    warn!("Span no longer matches host text, resetting");
                    self.reset();
                    return;
                };

                if let Some(previous) = self.pending.take() {
                    previous.cancel();
                }
                self.next_request_id += 1;
                self.pending = Some(PendingRequest::spawn(
                    self.next_request_id,
                    service,
                    slice.to_string(),
                    self.events_tx.clone(),
                ));
                self.state = InteractionState::Loading;
                self.refresh_tooltip();
            }
        }
    }

    fn store_result(&mut self, text: String, failed: bool) {
        if let Some(analysis) = self.analysis.as_mut() {
            analysis.derived_text = Some(text);
        }
        self.derived_failed = failed;
        self.state = InteractionState::Result;
        self.refresh_tooltip();
    }

    fn apply(&mut self) {
        if self.derived_failed {
            debug!("Result is a failure reason, resetting without applying");
            self.reset();
            return;
        }

        let per_occurrence = self.settings.policy.is_per_occurrence();
        // Transform results stay with the span they were computed from.
        let index = match &self.action {
            ActionMode::Replace(_) if per_occurrence => self.hover,
            _ => self.target,
        };
        let span = index.and_then(|i| self.spans().get(i).copied());
        let replacement = self.derived_text().map(str::to_string);

        match (span, replacement) {
            (Some(span), Some(replacement)) => {
                if span.source().is_current(&self.host.text.node()) {
                    debug!("Applying replacement over {:?}", span.range());
                    self.host.applier.replace(&span, &replacement);
                } else {
                    warn!("Span no longer matches host text, not applying");
                }
            }
            _ => warn!("Nothing to apply"),
        }

        self.reset();
        if per_occurrence {
            // Re-highlight the remaining occurrences once the host settles.
            self.debounce.arm(&self.events_tx);
        }
    }

    // ------------------------------------------------------------------
    // Hover and tooltip
    // ------------------------------------------------------------------

    fn hit_test(&self, point: Point) -> Option<usize> {
        self.spans().iter().position(|span| {
            self.host
                .bounds
                .rectangles_for(span)
                .iter()
                .any(|rect| rect.contains(point))
        })
    }

    fn hovered_span(&self) -> Option<(usize, Span)> {
        let index = self.hover?;
        self.spans().get(index).map(|span| (index, *span))
    }

    fn tooltip_content(&self) -> Option<TooltipContent> {
        let trigger_key = self.settings.trigger_key.clone();
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Ready => Some(TooltipContent::Ready { trigger_key }),
            InteractionState::Loading => Some(TooltipContent::Loading),
            InteractionState::Result => Some(TooltipContent::Review {
                text: self.derived_text().unwrap_or_default().to_string(),
                failed: self.derived_failed,
                trigger_key,
            }),
        }
    }

    fn show_tooltip(&mut self, point: Point) {
        let [dx, dy] = self.settings.tooltip_offset;
        let at = point.offset(dx, dy);
        match self.tooltip_content() {
            Some(content) => {
                self.host.tooltip.show_at(at, &content);
                self.tooltip_at = Some(at);
            }
            None => self.hide_tooltip(),
        }
    }

    fn refresh_tooltip(&mut self) {
        let Some(at) = self.tooltip_at else {
            return;
        };
        if let Some(content) = self.tooltip_content() {
            self.host.tooltip.show_at(at, &content);
        }
    }

    fn hide_tooltip(&mut self) {
        self.tooltip_at = None;
        self.host.tooltip.hide();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
