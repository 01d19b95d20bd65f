//! Recording fakes for the platform traits, shared by the unit tests.

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    application::services::platform::{EntityId, MessageClient, ProfileClient},
    domain::models::UserProfile,
};

pub const MESSAGE_ID: EntityId = 500;
pub const THREAD_ID: EntityId = 900;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    FetchProfile(String),
    PostAnnouncement(String),
    CreateThread(EntityId),
    PostThreadReply(EntityId, String),
}

/// In-memory stand-in for the Pachca API that records every call it sees.
/// Profiles must be registered up front; lookups for unknown users fail the
/// way a real fetch error would.
#[derive(Default)]
pub struct FakePlatform {
    profiles: Mutex<HashMap<String, UserProfile>>,
    announcement_fails: AtomicBool,
    thread_create_fails: AtomicBool,
    thread_reply_fails: AtomicBool,
    calls: Mutex<Vec<PlatformCall>>,
}

impl FakePlatform {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert_profile(&self, profile: UserProfile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
    }

    pub fn fail_announcement(&self) {
        self.announcement_fails.store(true, Ordering::SeqCst);
    }

    pub fn fail_thread_create(&self) {
        self.thread_create_fails.store(true, Ordering::SeqCst);
    }

    pub fn fail_thread_reply(&self) {
        self.thread_reply_fails.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ProfileClient for FakePlatform {
    async fn fetch_profile(&self, user_id: &str) -> anyhow::Result<UserProfile> {
        self.record(PlatformCall::FetchProfile(user_id.to_string()));
        self.profiles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("user {user_id} not found"))
    }
}

#[async_trait]
impl MessageClient for FakePlatform {
    async fn post_announcement(&self, content: &str) -> anyhow::Result<EntityId> {
        self.record(PlatformCall::PostAnnouncement(content.to_string()));
        if self.announcement_fails.load(Ordering::SeqCst) {
            anyhow::bail!("announcement rejected");
        }
        Ok(MESSAGE_ID)
    }

    async fn create_thread(&self, message_id: EntityId) -> anyhow::Result<EntityId> {
        self.record(PlatformCall::CreateThread(message_id));
        if self.thread_create_fails.load(Ordering::SeqCst) {
            anyhow::bail!("thread creation rejected");
        }
        Ok(THREAD_ID)
    }

    async fn post_thread_reply(&self, thread_id: EntityId, content: &str) -> anyhow::Result<()> {
        self.record(PlatformCall::PostThreadReply(thread_id, content.to_string()));
        if self.thread_reply_fails.load(Ordering::SeqCst) {
            anyhow::bail!("thread reply rejected");
        }
        Ok(())
    }
}

pub fn profile(user_id: &str, first: &str, last: &str, tags: &[&str]) -> UserProfile {
    UserProfile {
        user_id: user_id.to_string(),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
