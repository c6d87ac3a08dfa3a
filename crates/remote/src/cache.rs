//! File cache for the activity feed.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use folio_core::ActivityItem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key; the cache file is `<dir>/github_activities.json`
pub const CACHE_KEY: &str = "github_activities";

/// How long a cached feed is served without asking the API again
pub fn cache_ttl() -> Duration {
    Duration::minutes(30)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedActivity {
    pub activities: Vec<ActivityItem>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl CachedActivity {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() - self.timestamp < cache_ttl().num_milliseconds()
    }
}

#[derive(Debug, Clone)]
pub struct ActivityCache {
    path: PathBuf,
}

impl ActivityCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", CACHE_KEY)),
        }
    }

    /// `<user cache dir>/folio`, when the platform has one
    pub fn default_location() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self::new(dir.join("folio")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last stored feed. A missing or unreadable file counts as empty.
    pub async fn read(&self) -> Option<CachedActivity> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("Could not read {}: {}", self.path.display(), err);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(cached) => Some(cached),
            Err(err) => {
                tracing::warn!("Ignoring corrupt activity cache {}: {}", self.path.display(), err);
                None
            }
        }
    }

    pub async fn write(&self, activities: &[ActivityItem], now: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let cached = CachedActivity {
            activities: activities.to_vec(),
            timestamp: now.timestamp_millis(),
        };
        tokio::fs::write(&self.path, serde_json::to_vec(&cached)?).await?;
        Ok(())
    }
}
