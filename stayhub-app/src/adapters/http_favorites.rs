//! HTTP favorites gateway

use async_trait::async_trait;
use reqwest::Client;
use stayhub_core::{ClientError, ClientResult, FavoritesGateway};

use super::{create_http_client, join_url};

/// Favorites gateway backed by the marketplace REST API.
///
/// `POST /api/favorites/{listingId}` adds a favorite,
/// `DELETE /api/favorites/{listingId}` removes it. Neither endpoint returns a
/// payload the core consumes; the updated favorite set arrives through the
/// session refresh.
pub struct HttpFavoritesGateway {
    client: Client,
    base_url: String,
}

impl HttpFavoritesGateway {
    /// Create a gateway against `base_url`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Ok(Self {
            client: create_http_client()?,
            base_url: base_url.into(),
        })
    }

    fn favorite_url(&self, listing_id: &str) -> String {
        join_url(&self.base_url, &format!("/api/favorites/{listing_id}"))
    }

    async fn check(
        response: reqwest::Response,
        endpoint: &str,
        listing_id: &str,
    ) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::ListingNotFound(listing_id.to_string()));
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {status}"));
        Err(ClientError::ApiError {
            endpoint: endpoint.to_string(),
            message,
        })
    }
}

#[async_trait]
impl FavoritesGateway for HttpFavoritesGateway {
    async fn add_favorite(&self, listing_id: &str) -> ClientResult<()> {
        let url = self.favorite_url(listing_id);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        Self::check(response, &url, listing_id).await
    }

    async fn remove_favorite(&self, listing_id: &str) -> ClientResult<()> {
        let url = self.favorite_url(listing_id);
        log::debug!("DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        Self::check(response, &url, listing_id).await
    }
}
