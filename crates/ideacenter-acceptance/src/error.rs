//! Error types for the acceptance scenario

use ideacenter_client::{ClientError, StatusCode};

/// Errors raised while setting up or running scenario steps
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("setup failed: {0}")]
    Setup(#[source] ClientError),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("{step}: expected status {expected}, got {actual} (body: {body:?})")]
    UnexpectedStatus {
        step: &'static str,
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    #[error("{step}: expected {expected:?}, got {actual:?}")]
    UnexpectedMessage {
        step: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{step}: expected a non-empty collection")]
    EmptyCollection { step: &'static str },

    #[error("{step}: response carried no idea identifier")]
    NoIdeaIdReturned { step: &'static str },

    #[error("{step}: no idea was created earlier in the scenario")]
    MissingIdeaId { step: &'static str },

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScenarioError::UnexpectedStatus {
            step: "create",
            expected: StatusCode::OK,
            actual: StatusCode::BAD_REQUEST,
            body: "bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "create: expected status 200 OK, got 400 Bad Request (body: \"bad\")"
        );

        let err = ScenarioError::UnexpectedMessage {
            step: "edit",
            expected: "Edited successfully".to_string(),
            actual: "Nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "edit: expected \"Edited successfully\", got \"Nope\""
        );

        let err = ScenarioError::MissingIdeaId { step: "delete" };
        assert_eq!(
            err.to_string(),
            "delete: no idea was created earlier in the scenario"
        );
    }

    #[test]
    fn test_setup_error_wraps_client_error() {
        let err = ScenarioError::Setup(ClientError::AuthFailed("status 401".to_string()));
        assert_eq!(
            err.to_string(),
            "setup failed: authentication failed: status 401"
        );
    }
}
