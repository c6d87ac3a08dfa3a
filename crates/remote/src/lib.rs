// Clients for the third-party services the site talks to

pub mod activity;
pub mod cache;
pub mod contact;
pub mod error;
pub mod stats;

pub use activity::{ActivityFeed, ActivitySource, GitHubClient};
pub use cache::ActivityCache;
pub use contact::ContactClient;
pub use error::{RemoteError, Result};
pub use stats::StatsClient;

use reqwest::Client;
use std::time::Duration;

/// Upper bound for any single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

pub(crate) fn http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(endpoint("https://api.example.com/", "/users/x"), "https://api.example.com/users/x");
        assert_eq!(endpoint("http://127.0.0.1:9", "ada"), "http://127.0.0.1:9/ada");
    }
}
