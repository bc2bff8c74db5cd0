//! Client error types for the IdeaCenter API

/// Errors that can occur during IdeaCenter client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse response body {body:?}: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
