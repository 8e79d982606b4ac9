//! Spans: highlighted regions of the host text.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Borrowed reference into the host document.
///
/// The revision is bumped by the host on every text mutation, so a `NodeRef`
/// captured before an edit no longer matches the host's current reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub node: NodeId,
    pub revision: u64,
}

impl NodeRef {
    pub fn new(node: NodeId, revision: u64) -> Self {
        Self { node, revision }
    }

    /// Whether this reference still points at the host's current text.
    pub fn is_current(&self, current: &NodeRef) -> bool {
        self == current
    }
}

/// Half-open byte range `[start, end)` into the host text.
///
/// Offsets always fall on UTF-8 char boundaries of the text the span was
/// produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
    source: NodeRef,
}

impl Span {
    /// Create a span. Returns `None` for empty or inverted ranges.
    pub fn new(start: usize, end: usize, source: NodeRef) -> Option<Self> {
        (start < end).then_some(Self { start, end, source })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; spans are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn source(&self) -> NodeRef {
        self.source
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The spanned slice of `text`, if the range is valid for it.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range())
    }

    /// Whether two spans share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> NodeRef {
        NodeRef::new(NodeId(1), 0)
    }

    #[test]
    fn test_span_rejects_empty_range() {
        assert!(Span::new(3, 3, node()).is_none());
        assert!(Span::new(4, 2, node()).is_none());
    }

    #[test]
    fn test_span_slice() {
        let span = Span::new(2, 7, node()).unwrap();
        assert_eq!(span.slice("I like pie"), Some("like "));
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_span_slice_out_of_bounds() {
        let span = Span::new(2, 40, node()).unwrap();
        assert_eq!(span.slice("short"), None);
    }

    #[test]
    fn test_span_overlaps() {
        let a = Span::new(0, 5, node()).unwrap();
        let b = Span::new(5, 9, node()).unwrap();
        let c = Span::new(4, 6, node()).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_node_ref_revision() {
        let before = NodeRef::new(NodeId(7), 1);
        let after = NodeRef::new(NodeId(7), 2);
        assert!(before.is_current(&before));
        assert!(!before.is_current(&after));
    }
}
