use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Object type carried by membership webhooks; anything else is rejected.
pub const MEMBER_OBJECT_TYPE: &str = "company_member";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Invite,
    Suspend,
    Confirm,
    Other(String),
}

impl EventKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "invite" => Self::Invite,
            "suspend" => Self::Suspend,
            "confirm" => Self::Confirm,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Invite => "invite",
            Self::Suspend => "suspend",
            Self::Confirm => "confirm",
            Self::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub object_type: String,
    pub kind: EventKind,
    pub user_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}
