//! Concrete collaborator adapters

mod http_favorites;
mod http_session;
mod log_notifier;

pub use http_favorites::HttpFavoritesGateway;
pub use http_session::HttpSessionProvider;
pub use log_notifier::LogNotifier;

use std::time::Duration;

use reqwest::Client;
use stayhub_core::{ClientError, ClientResult};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with timeout configuration.
pub(crate) fn create_http_client() -> ClientResult<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ClientError::NetworkError(format!("failed to build HTTP client: {e}")))
}

/// Join a base URL and a path without doubling the separator.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
