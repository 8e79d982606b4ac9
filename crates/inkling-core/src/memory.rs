//! In-memory host.
//!
//! Implements every host collaborator over a plain `String` with a monospace
//! layout: each char is `CHAR_WIDTH` wide and each line `LINE_HEIGHT` tall,
//! starting at the origin. Records highlights, tooltip and replacements so a
//! flow can be inspected without a real document.

use parking_lot::Mutex;

use inkling_protocols::{
    Applier, BoundsProvider, Highlighter, HostTextSource, NodeId, NodeRef, Point, Rect, Span,
    TextChange, TooltipContent, TooltipSurface,
};

pub const CHAR_WIDTH: f64 = 8.0;
pub const LINE_HEIGHT: f64 = 16.0;

#[derive(Debug, Default)]
struct HostState {
    text: String,
    revision: u64,
    highlights: Vec<Span>,
    render_count: usize,
    tooltip: Option<(Point, TooltipContent)>,
    replacements: Vec<(Span, String)>,
}

/// A text element held in memory.
#[derive(Debug)]
pub struct MemoryHost {
    node: NodeId,
    state: Mutex<HostState>,
}

impl MemoryHost {
    pub fn new(node: NodeId, text: impl Into<String>) -> Self {
        Self {
            node,
            state: Mutex::new(HostState {
                text: text.into(),
                ..Default::default()
            }),
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Replace the whole text, as if the user edited it.
    pub fn set_text(&self, text: impl Into<String>) -> TextChange {
        let mut state = self.state.lock();
        state.text = text.into();
        state.revision += 1;
        TextChange::new(self.node)
    }

    /// Append typed text.
    pub fn type_text(&self, typed: &str) -> TextChange {
        let mut state = self.state.lock();
        state.text.push_str(typed);
        state.revision += 1;
        TextChange::new(self.node)
    }

    pub fn highlights(&self) -> Vec<Span> {
        self.state.lock().highlights.clone()
    }

    /// How many times `render` was called with a non-empty span list.
    pub fn render_count(&self) -> usize {
        self.state.lock().render_count
    }

    pub fn tooltip(&self) -> Option<(Point, TooltipContent)> {
        self.state.lock().tooltip.clone()
    }

    pub fn replacements(&self) -> Vec<(Span, String)> {
        self.state.lock().replacements.clone()
    }

    /// A point inside the first rectangle of `span`.
    pub fn point_in(&self, span: &Span) -> Option<Point> {
        self.rectangles_for(span).first().map(|rect| {
            Point::new((rect.left + rect.right) / 2.0, (rect.top + rect.bottom) / 2.0)
        })
    }
}

impl HostTextSource for MemoryHost {
    fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    fn node(&self) -> NodeRef {
        NodeRef::new(self.node, self.state.lock().revision)
    }

    fn contains(&self, target: NodeId) -> bool {
        target == self.node
    }
}

impl Highlighter for MemoryHost {
    fn render(&self, spans: &[Span]) {
        let mut state = self.state.lock();
        state.highlights = spans.to_vec();
        if !spans.is_empty() {
            state.render_count += 1;
        }
    }

    fn clear(&self) {
        self.state.lock().highlights.clear();
    }
}

impl BoundsProvider for MemoryHost {
    fn rectangles_for(&self, span: &Span) -> Vec<Rect> {
        let state = self.state.lock();
        if span.slice(&state.text).is_none() {
            return Vec::new();
        }

        let mut rects = Vec::new();
        let mut line = 0usize;
        let mut column = 0usize;
        let mut segment_start: Option<usize> = None;

        for (offset, ch) in state.text.char_indices() {
            if offset >= span.end() {
                break;
            }
            if ch == '\n' {
                if let Some(start) = segment_start.take() {
                    rects.push(line_rect(line, start, column));
                }
                line += 1;
                column = 0;
                continue;
            }
            if offset >= span.start() && segment_start.is_none() {
                segment_start = Some(column);
            }
            column += 1;
        }
        if let Some(start) = segment_start {
            rects.push(line_rect(line, start, column));
        }

        rects
    }
}

fn line_rect(line: usize, start: usize, end: usize) -> Rect {
    Rect::new(
        start as f64 * CHAR_WIDTH,
        line as f64 * LINE_HEIGHT,
        end as f64 * CHAR_WIDTH,
        (line + 1) as f64 * LINE_HEIGHT,
    )
}

impl TooltipSurface for MemoryHost {
    fn show_at(&self, point: Point, content: &TooltipContent) {
        self.state.lock().tooltip = Some((point, content.clone()));
    }

    fn hide(&self) {
        self.state.lock().tooltip = None;
    }
}

impl Applier for MemoryHost {
    fn replace(&self, span: &Span, new_text: &str) {
        let mut state = self.state.lock();
        if span.slice(&state.text).is_none() {
            return;
        }
        state.text.replace_range(span.range(), new_text);
        state.revision += 1;
        state.replacements.push((*span, new_text.to_string()));
    }
}
