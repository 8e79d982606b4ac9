//! In-flight text service request.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use inkling_protocols::AsyncTextService;

use super::ControllerEvent;

/// The controller's single outstanding transform call.
///
/// Cancelling does not abort the call; it only makes its resolution
/// irrelevant. The task skips posting a resolution once cancelled, and the
/// controller rejects any resolution whose id or token no longer matches.
pub(crate) struct PendingRequest {
    id: u64,
    token: CancellationToken,
}

impl PendingRequest {
    pub(crate) fn spawn(
        id: u64,
        service: Arc<dyn AsyncTextService>,
        text: String,
        events: UnboundedSender<ControllerEvent>,
    ) -> Self {
        let token = CancellationToken::new();
        let watch = token.clone();

        tokio::spawn(async move {
            debug!("Transform request {} sent to {}", id, service.id());
            let outcome = service.transform(&text).await;
            if watch.is_cancelled() {
                debug!("Transform request {} resolved after cancellation", id);
                return;
            }
            let _ = events.send(ControllerEvent::TransformResolved {
                request_id: id,
                outcome,
            });
        });

        Self { id, token }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether a resolution for `request_id` still belongs to this request.
    pub(crate) fn matches(&self, request_id: u64) -> bool {
        self.id == request_id && !self.token.is_cancelled()
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
