use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    application::services::platform::{EntityId, MessageClient, ProfileClient},
    domain::models::UserProfile,
};

/// Client for the Pachca shared API: profile lookups, discussion messages
/// and threads. Every call carries the single bearer token supplied at
/// startup.
pub struct PachcaClient {
    http: Client,
    base_url: String,
    token: String,
    discussion_id: EntityId,
}

impl PachcaClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        discussion_id: EntityId,
    ) -> Arc<Self> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("employee-notifier/pachca")
                .build()
                .expect("failed to build pachca client"),
            base_url: base_url.into(),
            token: token.into(),
            discussion_id,
        })
    }

    async fn post_message(
        &self,
        entity_type: &str,
        entity_id: EntityId,
        content: &str,
    ) -> anyhow::Result<EntityId> {
        let url = format!("{}/messages", self.base_url);
        let payload = MessagePayload {
            message: MessageBody {
                entity_type,
                entity_id,
                content,
            },
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<CreatedEntity> = response.json().await?;
        let data = envelope
            .data
            .ok_or_else(|| anyhow::anyhow!("pachca: message response missing data.id"))?;
        Ok(data.id)
    }
}

#[async_trait]
impl ProfileClient for PachcaClient {
    async fn fetch_profile(&self, user_id: &str) -> anyhow::Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<ProfileData> = response.json().await?;
        let data = envelope
            .data
            .ok_or_else(|| anyhow::anyhow!("pachca: profile response missing data"))?;

        Ok(UserProfile {
            user_id: user_id.to_string(),
            first_name: data.first_name,
            last_name: data.last_name,
            tags: data.list_tags,
        })
    }
}

#[async_trait]
impl MessageClient for PachcaClient {
    async fn post_announcement(&self, content: &str) -> anyhow::Result<EntityId> {
        self.post_message("discussion", self.discussion_id, content)
            .await
    }

    async fn create_thread(&self, message_id: EntityId) -> anyhow::Result<EntityId> {
        let url = format!("{}/messages/{}/thread", self.base_url, message_id);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<CreatedEntity> = response.json().await?;
        let data = envelope
            .data
            .ok_or_else(|| anyhow::anyhow!("pachca: thread response missing data.id"))?;
        Ok(data.id)
    }

    async fn post_thread_reply(&self, thread_id: EntityId, content: &str) -> anyhow::Result<()> {
        self.post_message("thread", thread_id, content).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    message: MessageBody<'a>,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    entity_type: &'a str,
    entity_id: EntityId,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CreatedEntity {
    id: EntityId,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    first_name: Option<String>,
    last_name: Option<String>,
    #[serde(default)]
    list_tags: Vec<String>,
}
