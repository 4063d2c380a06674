//! Leaderboard → card jumps.

use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::entity::RecordId;
use crate::gallery::Gallery;
use crate::host::{Host, HIGHLIGHT_CLASS};
use crate::view::card_dom_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum JumpOutcome {
    /// The card was scrolled to and highlighted.
    Highlighted { dom_id: String },
    /// No rendered card carries this id.
    NotFound { dom_id: String },
}

/// A scheduled highlight removal that a later jump can cut short.
pub struct PendingHighlight {
    dom_id: String,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PendingHighlight {
    fn spawn<H: Host>(
        host: std::sync::Arc<tokio::sync::Mutex<H>>,
        dom_id: String,
        after: Duration,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let target = dom_id.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(after) => {}
            }
            host.lock().await.remove_class(&target, HIGHLIGHT_CLASS);
        });
        Self {
            dom_id,
            cancel,
            task,
        }
    }

    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }

    /// Remove the highlight now and wait until the task is gone.
    pub async fn cancel(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

impl<H: Host> Gallery<H> {
    /// Jump from the leaderboard to a card.
    ///
    /// Clears the search box, re-renders the full catalog, closes the
    /// overlay, then after the scroll delay centers and highlights the card.
    /// An unknown id only logs a warning.
    pub async fn go_to(&mut self, id: &RecordId) -> JumpOutcome {
        self.host.lock().await.set_search_value("");
        self.render_all().await;
        self.close_leaderboard().await;

        if let Some(previous) = self.highlight.take() {
            debug!(dom_id = previous.dom_id(), "cancelling previous highlight");
            previous.cancel().await;
        }

        tokio::time::sleep(self.config.scroll_delay()).await;

        let dom_id = card_dom_id(id);
        {
            let mut host = self.host.lock().await;
            if !host.scroll_into_view(&dom_id) {
                drop(host);
                warn!(id = %id, dom_id = %dom_id, "no card to jump to");
                return JumpOutcome::NotFound { dom_id };
            }
            host.add_class(&dom_id, HIGHLIGHT_CLASS);
        }

        self.highlight = Some(PendingHighlight::spawn(
            self.host.clone(),
            dom_id.clone(),
            self.config.highlight_duration(),
        ));
        JumpOutcome::Highlighted { dom_id }
    }
}
