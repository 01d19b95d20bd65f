use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    application::usecases::schedule_delivery::DeliveryScheduler,
    domain::{
        errors::IngestError,
        events::{MEMBER_OBJECT_TYPE, MembershipEvent},
    },
};

/// Validates an inbound membership event and fans it out to the scheduler,
/// one user id at a time. A failure for one user never aborts the rest; the
/// acknowledgment only reports whether the payload itself was acceptable.
pub struct ProcessEventUseCase {
    scheduler: Arc<DeliveryScheduler>,
}

impl ProcessEventUseCase {
    pub fn new(scheduler: Arc<DeliveryScheduler>) -> Self {
        Self { scheduler }
    }

    pub async fn execute(&self, event: MembershipEvent) -> Result<(), IngestError> {
        if event.object_type != MEMBER_OBJECT_TYPE {
            warn!(object_type = %event.object_type, "unsupported object type");
            return Err(IngestError::UnsupportedObjectType);
        }

        if event.user_ids.is_empty() {
            warn!(event = event.kind.as_str(), "payload carries no user ids");
            return Err(IngestError::NoUserIds);
        }

        for user_id in &event.user_ids {
            debug!(user_id = %user_id, event = event.kind.as_str(), "processing user");
            self.scheduler
                .schedule(user_id, &event.kind, event.created_at)
                .await;
        }

        Ok(())
    }
}
