//! Public activity feed with a short-lived file cache.

use crate::cache::ActivityCache;
use crate::error::{Result, check_status};
use crate::{endpoint, http_client};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::ActivityItem;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Anything that can list a user's recent public events
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityItem>>;
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    repo: RawRepo,
    #[serde(default)]
    payload: RawPayload,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    commits: Vec<RawCommit>,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    message: String,
}

impl From<RawEvent> for ActivityItem {
    fn from(event: RawEvent) -> Self {
        let messages: Vec<&str> = event.payload.commits.iter().map(|c| c.message.as_str()).collect();
        ActivityItem {
            description: describe_event(&event.kind, &messages),
            url: format!("https://github.com/{}", event.repo.name),
            id: event.id,
            kind: event.kind,
            repo: event.repo.name,
            created_at: event.created_at,
        }
    }
}

/// Human-readable summary of one event
pub fn describe_event(kind: &str, commit_messages: &[&str]) -> String {
    match kind {
        "PushEvent" => {
            let count = commit_messages.len();
            let first = commit_messages.first().copied().unwrap_or("No message");
            let noun = if count > 1 { "commits" } else { "commit" };
            format!("Pushed {} {}: {}", count, noun, first)
        }
        "CreateEvent" => "Created a new repository".to_string(),
        "ForkEvent" => "Forked a repository".to_string(),
        "WatchEvent" => "Starred a repository".to_string(),
        "IssuesEvent" => "Opened an issue".to_string(),
        "PullRequestEvent" => "Created a pull request".to_string(),
        _ => "Activity on repository".to_string(),
    }
}

pub struct GitHubClient {
    client: Client,
    base: String,
}

impl GitHubClient {
    /// `base` overrides the public events API
    pub fn new(base: Option<&str>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            base: base.unwrap_or(DEFAULT_GITHUB_API).to_string(),
        })
    }
}

#[async_trait]
impl ActivitySource for GitHubClient {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityItem>> {
        let url = endpoint(&self.base, &format!("users/{}/events/public", username));
        tracing::debug!("Fetching activity from {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;
        let events: Vec<RawEvent> = check_status(response).await?.json().await?;
        Ok(events.into_iter().map(ActivityItem::from).collect())
    }
}

/// Activity for one user, served from cache while it is fresh
pub struct ActivityFeed<S: ActivitySource> {
    source: S,
    cache: Option<ActivityCache>,
    username: String,
}

impl<S: ActivitySource> ActivityFeed<S> {
    pub fn new(source: S, cache: Option<ActivityCache>, username: impl Into<String>) -> Self {
        Self {
            source,
            cache,
            username: username.into(),
        }
    }

    /// Fresh cache, else the API, else whatever was cached, else nothing
    pub async fn load(&self, now: DateTime<Utc>) -> Vec<ActivityItem> {
        let cached = match &self.cache {
            Some(cache) => cache.read().await,
            None => None,
        };
        if let Some(cached) = cached.as_ref().filter(|c| c.is_fresh(now)) {
            tracing::debug!("Using cached activity for {}", self.username);
            return cached.activities.clone();
        }

        match self.source.fetch_activity(&self.username).await {
            Ok(activities) => {
                if let Some(cache) = &self.cache {
                    if let Err(err) = cache.write(&activities, now).await {
                        tracing::warn!("Could not write activity cache: {}", err);
                    }
                }
                activities
            }
            Err(err) => {
                tracing::warn!("Activity for {} unavailable: {}", self.username, err);
                cached.map(|c| c.activities).unwrap_or_default()
            }
        }
    }
}
