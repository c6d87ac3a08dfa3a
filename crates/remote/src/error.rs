use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: HTTP {status} - {body}")]
    Server { status: u16, body: String },

    #[error("Response is missing {0}")]
    MissingField(&'static str),

    #[error("Cache error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RemoteError>;

/// Turn a non-2xx response into `RemoteError::Server`
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Server {
        status: status.as_u16(),
        body,
    })
}
