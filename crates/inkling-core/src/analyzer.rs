//! Policy-driven text analyzer.

use regex::RegexBuilder;
use tracing::{debug, warn};

use inkling_protocols::{AnalysisResult, Analyzer, NodeRef, QualificationPolicy, Span};

/// Default [`Analyzer`] implementing the built-in qualification policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyAnalyzer;

impl PolicyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for PolicyAnalyzer {
    fn analyze(&self, text: &str, policy: &QualificationPolicy, source: NodeRef) -> AnalysisResult {
        match policy {
            QualificationPolicy::Length { min_chars } => {
                let visible = text.chars().count();
                if visible <= *min_chars {
                    debug!("Text too short: {} <= {}", visible, min_chars);
                    return AnalysisResult::unqualified();
                }
                Span::new(0, text.len(), source)
                    .map(|span| AnalysisResult::qualified(vec![span]))
                    .unwrap_or_default()
            }
            QualificationPolicy::KeywordCount { keyword, min_count } => {
                let spans = find_occurrences(text, keyword, source);
                if spans.is_empty() || spans.len() < *min_count {
                    debug!("Keyword '{}' found {} times, need {}", keyword, spans.len(), min_count);
                    return AnalysisResult::unqualified();
                }
                AnalysisResult::qualified(spans)
            }
            QualificationPolicy::KeywordEach { keyword } => {
                AnalysisResult::qualified(find_occurrences(text, keyword, source))
            }
        }
    }
}

/// Case-insensitive, non-overlapping, left-to-right occurrences of `keyword`.
pub fn find_occurrences(text: &str, keyword: &str, source: NodeRef) -> Vec<Span> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let matcher = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!("Cannot build matcher for keyword '{}': {}", keyword, e);
            return Vec::new();
        }
    };

    matcher
        .find_iter(text)
        .filter_map(|m| Span::new(m.start(), m.end(), source))
        .collect()
}
