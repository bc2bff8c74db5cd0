// IdeaCenterClient - facade for the user and idea endpoints

use tracing::debug;

use crate::{
    config::IdeaCenterClientConfig,
    constants::{IDEA_ID_PARAM, api_path},
    error::Result,
    http::{HttpReply, IdeaCenterHttpClient},
    model::{IdeaRequest, UserCreateRequest},
};

/// HTTP client for the IdeaCenter API
///
/// Every operation hands back the raw [`HttpReply`]; deciding whether a
/// status or body is acceptable is left to the caller.
pub struct IdeaCenterClient {
    http_client: IdeaCenterHttpClient,
}

impl IdeaCenterClient {
    /// Create a client and authenticate with the configured credentials
    pub async fn connect(config: IdeaCenterClientConfig) -> Result<Self> {
        let http_client = IdeaCenterHttpClient::new(config).await?;
        Ok(Self { http_client })
    }

    /// Create a client that has not authenticated yet
    pub fn new_without_auth(config: IdeaCenterClientConfig) -> Result<Self> {
        let http_client = IdeaCenterHttpClient::new_without_auth(config)?;
        Ok(Self { http_client })
    }

    /// Create a client with a token obtained elsewhere, bypassing login
    pub fn new_with_token(config: IdeaCenterClientConfig, token: &str) -> Result<Self> {
        let http_client = IdeaCenterHttpClient::new_with_token(config, token)?;
        Ok(Self { http_client })
    }

    pub fn token(&self) -> Option<String> {
        self.http_client.token()
    }

    // ============================================================================
    // User APIs
    // ============================================================================

    /// Authenticate and return the bearer token now attached to every request
    pub async fn authenticate(&self) -> Result<String> {
        self.http_client.authenticate().await
    }

    pub async fn create_user(&self, user: &UserCreateRequest) -> Result<HttpReply> {
        debug!("Registering user {}", user.email);
        self.http_client.post_json(api_path::USER_CREATE, user).await
    }

    // ============================================================================
    // Idea APIs
    // ============================================================================

    pub async fn create_idea(&self, idea: &IdeaRequest) -> Result<HttpReply> {
        self.http_client.post_json(api_path::IDEA_CREATE, idea).await
    }

    pub async fn list_ideas(&self) -> Result<HttpReply> {
        self.http_client.get(api_path::IDEA_ALL).await
    }

    pub async fn edit_idea(&self, idea_id: &str, idea: &IdeaRequest) -> Result<HttpReply> {
        self.http_client
            .put_json_with_query(api_path::IDEA_EDIT, &[(IDEA_ID_PARAM, idea_id)], idea)
            .await
    }

    pub async fn delete_idea(&self, idea_id: &str) -> Result<HttpReply> {
        self.http_client
            .delete_with_query(api_path::IDEA_DELETE, &[(IDEA_ID_PARAM, idea_id)])
            .await
    }
}
