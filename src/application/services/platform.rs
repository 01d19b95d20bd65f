use async_trait::async_trait;

use crate::domain::models::UserProfile;

/// Identifier the platform assigns to a created message or thread.
pub type EntityId = i64;

#[async_trait]
pub trait ProfileClient: Send + Sync {
    /// Look up a user profile on the platform. Transport failures, non-2xx
    /// responses and malformed bodies all surface as errors; callers abandon
    /// the delivery and never retry within the same attempt.
    async fn fetch_profile(&self, user_id: &str) -> anyhow::Result<UserProfile>;
}

#[async_trait]
pub trait MessageClient: Send + Sync {
    /// Post the primary message into the fixed discussion channel and return
    /// the generated message id.
    async fn post_announcement(&self, content: &str) -> anyhow::Result<EntityId>;

    /// Create a thread rooted at a previously posted message.
    async fn create_thread(&self, message_id: EntityId) -> anyhow::Result<EntityId>;

    /// Post a reply into an existing thread.
    async fn post_thread_reply(&self, thread_id: EntityId, content: &str) -> anyhow::Result<()>;
}
