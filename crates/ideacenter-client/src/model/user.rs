// User registration model types

use serde::Serialize;

/// Body sent to the user registration endpoint
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub accepted_agreement: bool,
}

impl UserCreateRequest {
    /// Registration for `email` with the password repeated and the agreement accepted
    pub fn new(user_name: &str, email: &str, password: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            re_password: password.to_string(),
            accepted_agreement: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_create_serialization() {
        let request = UserCreateRequest::new("testuser", "tester@example.com", "secret");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"userName\":\"testuser\""));
        assert!(json.contains("\"rePassword\":\"secret\""));
        assert!(json.contains("\"acceptedAgreement\":true"));
    }
}
