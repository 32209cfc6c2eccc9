//! HTTP session provider

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use stayhub_core::{
    ClientError, ClientResult, CurrentUser, RegisterRequest, SessionProvider, SignInRequest,
};
use tokio::sync::RwLock;

use super::{create_http_client, join_url};

/// Session provider backed by the marketplace REST API.
///
/// Owns a cached snapshot of the current user. `current_user` serves from the
/// cache once populated; `refresh` re-fetches from `GET /api/session` so the
/// favorite set reflects server truth again after a mutation.
pub struct HttpSessionProvider {
    client: Client,
    base_url: String,
    /// Outer None = never fetched; inner None = anonymous
    snapshot: RwLock<Option<Option<CurrentUser>>>,
}

impl HttpSessionProvider {
    /// Create a provider against `base_url`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Ok(Self {
            client: create_http_client()?,
            base_url: base_url.into(),
            snapshot: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn fetch_snapshot(&self) -> ClientResult<Option<CurrentUser>> {
        let url = self.url("/api/session");
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        // An anonymous session is a normal state, not an error.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(ClientError::SessionError(message));
        }

        response
            .json::<Option<CurrentUser>>()
            .await
            .map_err(|e| ClientError::SerializationError(e.to_string()))
    }

    async fn post_json<T: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&T>,
    ) -> ClientResult<reqwest::Response> {
        let url = self.url(path);
        log::debug!("POST {url}");

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    async fn current_user(&self) -> ClientResult<Option<CurrentUser>> {
        if let Some(cached) = self.snapshot.read().await.clone() {
            return Ok(cached);
        }

        let fetched = self.fetch_snapshot().await?;
        *self.snapshot.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    async fn refresh(&self) {
        match self.fetch_snapshot().await {
            Ok(fetched) => {
                *self.snapshot.write().await = Some(fetched);
            }
            Err(e) => {
                // Keep the stale snapshot; the next refresh will retry.
                log::warn!("Session refresh failed: {e}");
            }
        }
    }

    async fn sign_in(&self, request: &SignInRequest) -> ClientResult<()> {
        let response = self.post_json("/api/auth/login", Some(request)).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "invalid email or password".to_string());
            return Err(ClientError::InvalidCredentials(message));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(ClientError::ApiError {
                endpoint: self.url("/api/auth/login"),
                message,
            });
        }
        Ok(())
    }

    async fn sign_out(&self) -> ClientResult<()> {
        let response = self.post_json::<()>("/api/auth/logout", None).await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(ClientError::ApiError {
                endpoint: self.url("/api/auth/logout"),
                message,
            });
        }

        *self.snapshot.write().await = Some(None);
        Ok(())
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let response = self.post_json("/api/register", Some(request)).await?;

        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY || status == StatusCode::CONFLICT {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "registration rejected".to_string());
            return Err(ClientError::ValidationError(message));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(ClientError::ApiError {
                endpoint: self.url("/api/register"),
                message,
            });
        }
        Ok(())
    }
}
