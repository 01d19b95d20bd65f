use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, warn};

use crate::{
    application::services::{formatter, platform::MessageClient},
    domain::{events::EventKind, models::UserProfile},
};

/// How far the announcement → thread → reply chain got. Each remote call is
/// independently fallible; a failure halts the remainder of this chain only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event kind has no announcement template; nothing was sent.
    Skipped,
    /// Announcement posted, then a thread step failed.
    Partial,
    /// Announcement and thread reply both went out.
    Delivered,
}

pub struct NotificationDispatcher {
    messages: Arc<dyn MessageClient>,
}

impl NotificationDispatcher {
    pub fn new(messages: Arc<dyn MessageClient>) -> Self {
        Self { messages }
    }

    /// Post the announcement for one profile, then the threaded follow-up.
    ///
    /// Returns an error only when nothing reached the channel (missing names
    /// or a failed primary post); thread-step failures are logged and folded
    /// into `DispatchOutcome::Partial`.
    pub async fn dispatch(
        &self,
        profile: &UserProfile,
        kind: &EventKind,
    ) -> anyhow::Result<DispatchOutcome> {
        let (first, last) = profile
            .names()
            .ok_or_else(|| anyhow::anyhow!("profile is missing name fields"))?;

        let Some(content) = formatter::announcement(kind, first, last) else {
            warn!(event = kind.as_str(), "no announcement template for event");
            return Ok(DispatchOutcome::Skipped);
        };

        let message_id = self
            .messages
            .post_announcement(&content)
            .await
            .context("posting announcement")?;
        debug!(message_id, "announcement posted");

        let thread_id = match self.messages.create_thread(message_id).await {
            Ok(id) => id,
            Err(err) => {
                warn!(message_id, error = %err, "failed to create thread");
                return Ok(DispatchOutcome::Partial);
            }
        };

        let Some(reply) = formatter::thread_text(kind, &profile.tags) else {
            return Ok(DispatchOutcome::Delivered);
        };

        if let Err(err) = self.messages.post_thread_reply(thread_id, &reply).await {
            warn!(thread_id, error = %err, "failed to post thread reply");
            return Ok(DispatchOutcome::Partial);
        }

        Ok(DispatchOutcome::Delivered)
    }
}
