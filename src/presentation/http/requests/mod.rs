use chrono::{DateTime, Utc};
use poem_openapi::Object;

use crate::domain::events::{EventKind, MembershipEvent};

#[derive(Object, Debug)]
pub struct MembershipEventDto {
    /// Webhook object type; only "company_member" is accepted.
    #[oai(rename = "type")]
    pub object_type: String,
    pub event: String,
    #[oai(default)]
    pub user_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl MembershipEventDto {
    pub fn into_event(self) -> MembershipEvent {
        MembershipEvent {
            object_type: self.object_type,
            kind: EventKind::parse(&self.event),
            user_ids: self.user_ids,
            created_at: self.created_at,
        }
    }
}
