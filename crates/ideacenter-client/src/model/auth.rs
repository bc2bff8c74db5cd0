// Authentication model types

use serde::{Deserialize, Serialize};

/// Credentials posted to the authentication endpoint
#[derive(Clone, Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Authentication response; only the token is consumed
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_serialization() {
        let request = AuthRequest {
            email: "tester@example.com",
            password: "secret",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "tester@example.com", "password": "secret"})
        );
    }

    #[test]
    fn test_auth_response_ignores_extra_fields() {
        let json = r#"{"accessToken":"abc","email":"tester@example.com","userName":"tester"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("abc"));

        let resp: AuthResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.access_token.is_none());
    }
}
