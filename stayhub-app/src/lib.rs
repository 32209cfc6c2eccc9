//! Platform-agnostic application bootstrap for the StayHub client core.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (collaborator
//! injection), plus HTTP adapters for the session and favorites collaborators.

pub mod adapters;

use std::sync::Arc;

use stayhub_core::services::{FavoriteService, ModalCoordinator, ServiceContext, SessionService};
use stayhub_core::state::SharedModals;
use stayhub_core::traits::{FavoritesGateway, Notifier, SessionProvider};
use stayhub_core::{ClientError, ClientResult};

use adapters::LogNotifier;

/// Platform-agnostic application state.
///
/// Holds the modal stores, all services and the `ServiceContext`. Every
/// frontend constructs this once at session start via `AppStateBuilder` and
/// tears it down at session end; the modal stores live exactly as long as the
/// `AppState` that owns them.
pub struct AppState {
    /// Service context (holds all collaborators)
    pub ctx: Arc<ServiceContext>,
    /// Shared modal store handle
    pub modals: SharedModals,
    /// Modal coordinator
    pub coordinator: ModalCoordinator,
    /// Favorite toggle service
    pub favorite_service: Arc<FavoriteService>,
    /// Session flow service
    pub session_service: Arc<SessionService>,
}

/// Builder for constructing `AppState` with platform-specific collaborators.
///
/// # Required collaborators
/// - `session_provider` — where the current-user snapshot comes from
/// - `favorites_gateway` — how favorite mutations reach the server
///
/// # Optional
/// - `notifier` — defaults to `LogNotifier`
pub struct AppStateBuilder {
    session_provider: Option<Arc<dyn SessionProvider>>,
    favorites_gateway: Option<Arc<dyn FavoritesGateway>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_provider: None,
            favorites_gateway: None,
            notifier: None,
        }
    }

    #[must_use]
    pub fn session_provider(mut self, provider: Arc<dyn SessionProvider>) -> Self {
        self.session_provider = Some(provider);
        self
    }

    #[must_use]
    pub fn favorites_gateway(mut self, gateway: Arc<dyn FavoritesGateway>) -> Self {
        self.favorites_gateway = Some(gateway);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `ClientError::ValidationError` if required collaborators are
    /// missing.
    pub fn build(self) -> ClientResult<AppState> {
        let session_provider = self.session_provider.ok_or_else(|| {
            ClientError::ValidationError("session_provider is required".to_string())
        })?;
        let favorites_gateway = self.favorites_gateway.ok_or_else(|| {
            ClientError::ValidationError("favorites_gateway is required".to_string())
        })?;
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(LogNotifier::new()));

        let ctx = Arc::new(ServiceContext::new(
            session_provider,
            favorites_gateway,
            notifier,
        ));

        let modals = SharedModals::new();
        let coordinator = ModalCoordinator::new(modals.clone());
        let favorite_service = Arc::new(FavoriteService::new(Arc::clone(&ctx), modals.clone()));
        let session_service = Arc::new(SessionService::new(Arc::clone(&ctx), modals.clone()));

        Ok(AppState {
            ctx,
            modals,
            coordinator,
            favorite_service,
            session_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
