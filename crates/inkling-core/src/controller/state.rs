//! Controller state, settings and internal events.

use std::sync::Arc;
use std::time::Duration;

use inkling_config::{ActionConfig, Config};
use inkling_protocols::{AsyncTextService, QualificationPolicy, TransformError};

/// Where a controller is in its interaction flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Nothing highlighted; waiting for text to qualify.
    #[default]
    Idle,
    /// Spans highlighted; the trigger key starts the action.
    Ready,
    /// Waiting for the text service.
    Loading,
    /// Result available; the trigger key applies it.
    Result,
}

/// What the trigger key does on a ready span.
#[derive(Clone)]
pub enum ActionMode {
    /// Send the spanned text to a text service.
    Transform(Arc<dyn AsyncTextService>),
    /// Offer a fixed replacement.
    Replace(String),
}

impl ActionMode {
    /// Build from config. `service` is only used for [`ActionConfig::Transform`].
    pub fn from_config(action: &ActionConfig, service: Arc<dyn AsyncTextService>) -> Self {
        match action {
            ActionConfig::Transform => Self::Transform(service),
            ActionConfig::Replace { replacement } => Self::Replace(replacement.clone()),
        }
    }
}

impl std::fmt::Debug for ActionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transform(service) => f.debug_tuple("Transform").field(&service.id()).finish(),
            Self::Replace(text) => f.debug_tuple("Replace").field(text).finish(),
        }
    }
}

/// Tunables of one controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub debounce: Duration,
    pub trigger_key: String,
    pub tooltip_offset: [f64; 2],
    pub policy: QualificationPolicy,
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            debounce: config.controller.debounce(),
            trigger_key: config.controller.trigger_key.clone(),
            tooltip_offset: config.controller.tooltip_offset,
            policy: config.policy.clone(),
        }
    }

    pub fn with_policy(mut self, policy: QualificationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Events the controller posts to itself.
#[derive(Debug)]
pub enum ControllerEvent {
    /// The debounce timer armed with `generation` elapsed.
    DebounceFired { generation: u64 },
    /// A text service call finished.
    TransformResolved {
        request_id: u64,
        outcome: Result<String, TransformError>,
    },
}
