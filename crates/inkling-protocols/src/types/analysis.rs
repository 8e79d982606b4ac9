//! Analysis results.

use serde::Serialize;

use super::Span;

/// Output of one analyzer pass. Superseded, never merged, by the next pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub spans: Vec<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_text: Option<String>,
    pub should_highlight: bool,
}

impl AnalysisResult {
    /// A result that does not qualify.
    pub fn unqualified() -> Self {
        Self::default()
    }

    pub fn qualified(spans: Vec<Span>) -> Self {
        Self {
            should_highlight: !spans.is_empty(),
            spans,
            derived_text: None,
        }
    }

    pub fn qualifies(&self) -> bool {
        self.should_highlight && !self.spans.is_empty()
    }
}
