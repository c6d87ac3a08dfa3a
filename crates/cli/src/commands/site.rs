//! Loading shared by `build` and `preview`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use folio_core::remote::RemoteData;
use folio_core::{ActivityItem, CodingStats, Portfolio, parse_portfolio_toml};
use folio_generator::content::load_posts;
use folio_generator::SiteData;
use folio_remote::{ActivityCache, ActivityFeed, GitHubClient, StatsClient};
use std::path::{Path, PathBuf};

/// Media directory served at `/assets` and copied into builds
pub const ASSETS_DIR: &str = "assets";

/// Check the directory layout, then parse portfolio.toml
pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    if !path.exists() {
        anyhow::bail!(
            "Portfolio directory does not exist: {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join("portfolio.toml");
    if !config_path.exists() {
        anyhow::bail!(
            "portfolio.toml not found in {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    parse_portfolio_toml(&config_path).context("Failed to parse portfolio.toml")
}

/// Portfolio plus blog posts; remote data is left idle
pub fn load_site(path: &Path) -> Result<SiteData> {
    let portfolio = load_portfolio(path)?;
    let blog_dir = path.join(&portfolio.blog.dir);
    let report = load_posts(&blog_dir, portfolio.default_author())
        .with_context(|| format!("Failed to read blog directory {}", blog_dir.display()))?;

    for skipped in &report.skipped {
        eprintln!(
            "   ⚠ Warning: Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    Ok(SiteData::new(portfolio, report.posts))
}

/// Cache location: explicit directory, else the platform cache dir
pub fn activity_cache(cache_dir: Option<&PathBuf>) -> Option<ActivityCache> {
    match cache_dir {
        Some(dir) => Some(ActivityCache::new(dir)),
        None => ActivityCache::default_location(),
    }
}

/// Recent activity, or nothing when no account is configured
pub async fn fetch_activity(
    portfolio: &Portfolio,
    cache: Option<ActivityCache>,
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    let Some(username) = portfolio.integrations.github_username.clone() else {
        return Vec::new();
    };
    let client = match GitHubClient::new(portfolio.integrations.github_api_base.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Activity client unavailable: {}", e);
            return Vec::new();
        }
    };
    ActivityFeed::new(client, cache, username).load(now).await
}

/// Coding statistics; idle when no account is configured
pub async fn fetch_stats(portfolio: &Portfolio) -> RemoteData<CodingStats> {
    let Some(username) = portfolio.integrations.leetcode_username.as_deref() else {
        return RemoteData::Idle;
    };
    match StatsClient::new(portfolio.integrations.stats_api_base.as_deref()) {
        Ok(client) => client.load(username).await,
        Err(e) => RemoteData::<CodingStats>::from_result(Err(e)),
    }
}
