use reqwest::StatusCode;

/// All errors that can occur while talking to the upstream APIs.
#[derive(thiserror::Error, Debug)]
pub enum GoalflowError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The per-minute request quota of the API plan is exhausted.
    #[error("rate limit reached for {url}, retry in about a minute")]
    RateLimited { url: String },

    /// The API token is missing, invalid, or not allowed for this resource.
    #[error("access denied for {url}: check the API token")]
    Forbidden { url: String },

    /// The requested resource does not exist.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// Server returned another non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, GoalflowError>;
