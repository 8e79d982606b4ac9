//! Analyzer trait and qualification policies.

use serde::{Deserialize, Serialize};

use crate::types::{AnalysisResult, NodeRef};

/// Predicate deciding whether analyzed text triggers the ready state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualificationPolicy {
    /// Qualifies when the visible character count exceeds `min_chars`.
    /// Produces one span covering the whole text.
    Length {
        #[serde(default = "default_min_chars")]
        min_chars: usize,
    },

    /// Qualifies when `keyword` occurs at least `min_count` times
    /// (case-insensitive, non-overlapping). Produces one span per occurrence.
    KeywordCount {
        keyword: String,
        #[serde(default = "default_min_count")]
        min_count: usize,
    },

    /// Every occurrence of `keyword` is its own actionable span.
    /// Qualifies when there is at least one.
    KeywordEach { keyword: String },
}

impl Default for QualificationPolicy {
    fn default() -> Self {
        Self::Length {
            min_chars: default_min_chars(),
        }
    }
}

impl QualificationPolicy {
    /// Whether each span is acted on individually (as opposed to one
    /// whole-text flow).
    pub fn is_per_occurrence(&self) -> bool {
        matches!(self, Self::KeywordEach { .. })
    }

    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Length { .. } => None,
            Self::KeywordCount { keyword, .. } | Self::KeywordEach { keyword } => Some(keyword),
        }
    }
}

fn default_min_chars() -> usize {
    15
}

fn default_min_count() -> usize {
    3
}

/// Pure, synchronous text analysis.
pub trait Analyzer: Send + Sync {
    /// Analyze `text` under `policy`. Spans reference `source`.
    fn analyze(&self, text: &str, policy: &QualificationPolicy, source: NodeRef) -> AnalysisResult;
}
