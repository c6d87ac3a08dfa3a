//! Coding-practice statistics.

use crate::error::{RemoteError, Result, check_status};
use crate::{endpoint, http_client};
use folio_core::CodingStats;
use folio_core::remote::RemoteData;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_STATS_API: &str = "https://leetcode-stats-api.herokuapp.com";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    total_solved: Option<u32>,
    #[serde(default)]
    total_questions: Option<u32>,
    #[serde(default)]
    easy_solved: Option<u32>,
    #[serde(default)]
    medium_solved: Option<u32>,
    #[serde(default)]
    hard_solved: Option<u32>,
    #[serde(default)]
    ranking: Option<u64>,
}

impl StatsResponse {
    fn into_stats(self) -> Result<CodingStats> {
        if self.status.as_deref() == Some("error") {
            return Err(RemoteError::MissingField("totalSolved"));
        }
        let total_solved = match self.total_solved {
            Some(n) if n > 0 => n,
            _ => return Err(RemoteError::MissingField("totalSolved")),
        };
        Ok(CodingStats {
            total_solved,
            total_questions: self.total_questions.unwrap_or_default(),
            easy_solved: self.easy_solved.unwrap_or_default(),
            medium_solved: self.medium_solved.unwrap_or_default(),
            hard_solved: self.hard_solved.unwrap_or_default(),
            ranking: self.ranking.unwrap_or_default(),
        })
    }
}

pub struct StatsClient {
    client: Client,
    base: String,
}

impl StatsClient {
    /// `base` overrides the public statistics API
    pub fn new(base: Option<&str>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            base: base.unwrap_or(DEFAULT_STATS_API).to_string(),
        })
    }

    pub async fn fetch(&self, username: &str) -> Result<CodingStats> {
        let url = endpoint(&self.base, username);
        tracing::debug!("Fetching coding statistics from {}", url);

        let response = check_status(self.client.get(&url).send().await?).await?;
        let body: StatsResponse = response.json().await?;
        body.into_stats()
    }

    /// One request, walked through the loading states
    pub async fn load(&self, username: &str) -> RemoteData<CodingStats> {
        let result = self.fetch(username).await;
        if let Err(err) = &result {
            tracing::warn!("Coding statistics for {} unavailable: {}", username, err);
        }
        RemoteData::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ada"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = server_with(json!({
            "status": "success",
            "totalSolved": 321,
            "totalQuestions": 3000,
            "easySolved": 150,
            "mediumSolved": 140,
            "hardSolved": 31,
            "ranking": 98765
        }))
        .await;

        let client = StatsClient::new(Some(server.uri().as_str())).unwrap();
        let stats = client.fetch("ada").await.unwrap();
        assert_eq!(
            stats,
            CodingStats {
                total_solved: 321,
                total_questions: 3000,
                easy_solved: 150,
                medium_solved: 140,
                hard_solved: 31,
                ranking: 98765,
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_is_missing_field() {
        let server = server_with(json!({ "status": "error", "message": "user does not exist" })).await;

        let client = StatsClient::new(Some(server.uri().as_str())).unwrap();
        let err = client.fetch("ada").await.unwrap_err();
        assert!(matches!(err, RemoteError::MissingField("totalSolved")));
    }

    #[tokio::test]
    async fn test_zero_solved_is_missing_field() {
        let server = server_with(json!({ "status": "success", "totalSolved": 0 })).await;

        let client = StatsClient::new(Some(server.uri().as_str())).unwrap();
        assert!(matches!(
            client.fetch("ada").await,
            Err(RemoteError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn test_load_ends_in_error_state_on_server_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ada"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = StatsClient::new(Some(server.uri().as_str())).unwrap();
        let state = client.load("ada").await;
        let reason = state.error().unwrap();
        assert!(reason.contains("503"));
        assert!(state.data().is_none());
    }

    #[tokio::test]
    async fn test_load_success_state() {
        let server = server_with(json!({ "totalSolved": 5, "ranking": 1 })).await;

        let client = StatsClient::new(Some(server.uri().as_str())).unwrap();
        let state = client.load("ada").await;
        assert_eq!(state.data().map(|s| s.total_solved), Some(5));
    }
}
