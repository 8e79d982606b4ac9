//! Host input events.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A text mutation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    /// Element the mutation originated from.
    pub target: NodeId,
}

impl TextChange {
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}

/// A key press reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }
}

/// What the host must do with a key press after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Let the host handle the key normally.
    Ignored,
    /// Prevent the default action and stop propagation.
    Consumed,
}

impl KeyDisposition {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}
