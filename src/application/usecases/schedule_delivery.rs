use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::time::{Instant, sleep};
use tracing::{debug, error, info, warn};

use crate::{
    application::{
        handlers::notification_dispatcher::NotificationDispatcher,
        services::{classifier, platform::ProfileClient},
    },
    domain::{events::EventKind, models::ScheduledDelivery},
};

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// How long after event creation an invite notification may go out.
    pub delivery_delay: TimeDelta,
    /// Spacing between due-time re-checks while an invite delivery waits.
    pub poll_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            delivery_delay: TimeDelta::minutes(15),
            poll_interval: Duration::from_secs(60),
        }
    }
}

/// Decides, per (user, event) pair, whether, when and what to send.
///
/// Suspend deliveries run synchronously to completion; invite deliveries are
/// handed to detached polling tasks that fire once the delay window elapses.
/// Confirm and unrecognized events are terminal no-ops.
pub struct DeliveryScheduler {
    profiles: Arc<dyn ProfileClient>,
    dispatcher: Arc<NotificationDispatcher>,
    config: SchedulerConfig,
}

impl DeliveryScheduler {
    pub fn new(
        profiles: Arc<dyn ProfileClient>,
        dispatcher: Arc<NotificationDispatcher>,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            profiles,
            dispatcher,
            config,
        }
    }

    pub async fn schedule(
        self: &Arc<Self>,
        user_id: &str,
        kind: &EventKind,
        created_at: DateTime<Utc>,
    ) {
        match kind {
            EventKind::Confirm => {
                debug!(user_id, "confirm event, nothing to send");
            }
            EventKind::Other(name) => {
                debug!(user_id, event = %name, "event kind not handled");
            }
            EventKind::Suspend => self.deliver(user_id, kind).await,
            EventKind::Invite => {
                let delivery =
                    ScheduledDelivery::new(user_id, created_at + self.config.delivery_delay);
                info!(user_id, fire_at = %delivery.fire_at, "invite event, delivery scheduled");

                let scheduler = Arc::clone(self);
                tokio::spawn(async move {
                    scheduler.run_delayed(delivery).await;
                });
            }
        }
    }

    /// Poll loop for one invite delivery. Holds no resource but its own
    /// record while waiting and makes no remote call before the fire time;
    /// a fire time already in the past fires on the very first check.
    async fn run_delayed(&self, delivery: ScheduledDelivery) {
        let deadline = Instant::now() + delivery.remaining_from(Utc::now());
        loop {
            if Instant::now() >= deadline {
                self.deliver(&delivery.user_id, &EventKind::Invite).await;
                return;
            }
            sleep(self.config.poll_interval).await;
        }
    }

    /// Fetch, classify and dispatch exactly once. Every failure abandons
    /// this delivery only; nothing propagates to other users or events.
    async fn deliver(&self, user_id: &str, kind: &EventKind) {
        let profile = match self.profiles.fetch_profile(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(user_id, event = kind.as_str(), error = %err, "profile lookup failed, delivery abandoned");
                return;
            }
        };

        let Some((first, last)) = profile.names() else {
            warn!(user_id, event = kind.as_str(), "first or last name missing, delivery abandoned");
            return;
        };

        if classifier::is_test_account(first, last) {
            info!(user_id, event = kind.as_str(), "test account, delivery suppressed");
            return;
        }

        match self.dispatcher.dispatch(&profile, kind).await {
            Ok(outcome) => {
                info!(user_id, event = kind.as_str(), ?outcome, "delivery finished");
            }
            Err(err) => {
                error!(user_id, event = kind.as_str(), error = %err, "delivery failed");
            }
        }
    }
}
