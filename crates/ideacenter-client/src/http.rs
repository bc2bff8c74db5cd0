//! HTTP transport with bearer-token authentication
//!
//! Every call returns the raw status and body so callers can assert on
//! negative outcomes as well as successful ones. Nothing is retried.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::{sync::RwLock, time::Duration};
use tracing::{debug, warn};

use crate::{
    config::IdeaCenterClientConfig,
    constants::api_path,
    error::{ClientError, Result},
    model::{AuthRequest, AuthResponse},
};

/// Status and body of a completed HTTP exchange
#[derive(Clone, Debug)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| ClientError::Serialization {
            source,
            body: self.body.clone(),
        })
    }
}

/// HTTP client holding the session's bearer token
pub struct IdeaCenterHttpClient {
    client: Client,
    config: IdeaCenterClientConfig,
    token: RwLock<Option<String>>,
}

impl IdeaCenterHttpClient {
    /// Create a client without authenticating
    pub fn new_without_auth(config: IdeaCenterClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = config.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = config.read_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            client: builder.build()?,
            config,
            token: RwLock::new(None),
        })
    }

    /// Create a client and authenticate; fails if no token is issued
    pub async fn new(config: IdeaCenterClientConfig) -> Result<Self> {
        let instance = Self::new_without_auth(config)?;
        instance.authenticate().await?;
        Ok(instance)
    }

    /// Create a client with a token obtained elsewhere
    pub fn new_with_token(config: IdeaCenterClientConfig, token: &str) -> Result<Self> {
        let instance = Self::new_without_auth(config)?;
        instance.set_token(token.to_string());
        Ok(instance)
    }

    /// Build full URL from the base URL and a relative API path
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Current bearer token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_token(&self, access_token: String) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(access_token);
    }

    /// Post the configured credentials and store the issued token
    pub async fn authenticate(&self) -> Result<String> {
        let url = self.build_url(api_path::USER_AUTHENTICATION);
        debug!("Authenticating with server: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest {
                email: &self.config.email,
                password: &self.config.password,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Authentication rejected with status {}: {}", status, body);
            return Err(ClientError::AuthFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let reply = HttpReply { status, body };
        let access_token = reply
            .json::<AuthResponse>()?
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ClientError::AuthFailed("response carried no access token".to_string()))?;

        self.set_token(access_token.clone());
        debug!("Authentication successful");
        Ok(access_token)
    }

    /// Attach the bearer token to a request when one is held
    fn add_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<HttpReply> {
        let response = self.add_auth(builder).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Received status {} ({} bytes)", status, body.len());
        Ok(HttpReply { status, body })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<HttpReply> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpReply> {
        let url = self.build_url(path);
        debug!("POST {}", url);
        self.send(self.client.post(&url).json(body)).await
    }

    /// Make a PUT request with query parameters and JSON body
    pub async fn put_json_with_query<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<HttpReply> {
        let url = self.build_url(path);
        debug!("PUT {}", url);
        self.send(self.client.put(&url).query(query).json(body)).await
    }

    /// Make a DELETE request with query parameters
    pub async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<HttpReply> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);
        self.send(self.client.delete(&url).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_url() {
        let config = IdeaCenterClientConfig::new("http://localhost:84");
        let client = IdeaCenterHttpClient::new_without_auth(config).unwrap();

        assert_eq!(
            client.build_url("api/Idea/All"),
            "http://localhost:84/api/Idea/All"
        );
        assert_eq!(
            client.build_url("/api/Idea/Edit"),
            "http://localhost:84/api/Idea/Edit"
        );
    }

    #[test]
    fn test_build_url_trailing_slash() {
        let config = IdeaCenterClientConfig::new("http://localhost:84/");
        let client = IdeaCenterHttpClient::new_without_auth(config).unwrap();

        assert_eq!(
            client.build_url("/api/Idea/All"),
            "http://localhost:84/api/Idea/All"
        );
    }

    #[test]
    fn test_reply_json_error_keeps_body() {
        let reply = HttpReply {
            status: StatusCode::BAD_REQUEST,
            body: "There is no such idea!".to_string(),
        };
        assert!(!reply.is_success());
        match reply.json::<serde_json::Value>() {
            Err(ClientError::Serialization { body, .. }) => {
                assert_eq!(body, "There is no such idea!")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_stores_token_and_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/User/Authentication"))
            .and(body_json(serde_json::json!({
                "email": "tester@example.com",
                "password": "secret"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "tok"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/Idea/All"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let config =
            IdeaCenterClientConfig::new(&server.uri()).with_credentials("tester@example.com", "secret");
        let client = IdeaCenterHttpClient::new(config).await.unwrap();
        assert_eq!(client.token().as_deref(), Some("tok"));

        let reply = client.get(api_path::IDEA_ALL).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, "[]");
    }

    #[tokio::test]
    async fn test_authenticate_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/User/Authentication"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
            .mount(&server)
            .await;

        let config = IdeaCenterClientConfig::new(&server.uri()).with_credentials("a@b.c", "x");
        let result = IdeaCenterHttpClient::new(config).await;
        assert!(matches!(result, Err(ClientError::AuthFailed(_))));
    }

    #[tokio::test]
    async fn test_authenticate_without_token_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/User/Authentication"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": ""})),
            )
            .mount(&server)
            .await;

        let config = IdeaCenterClientConfig::new(&server.uri()).with_credentials("a@b.c", "x");
        let client = IdeaCenterHttpClient::new_without_auth(config).unwrap();
        assert!(matches!(
            client.authenticate().await,
            Err(ClientError::AuthFailed(_))
        ));
        assert!(client.token().is_none());
    }
}
