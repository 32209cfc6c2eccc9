//! Interaction service layer

mod auth_gate;
mod favorite_service;
mod modal_coordinator;
mod session_service;

pub use auth_gate::AuthGate;
pub use favorite_service::FavoriteService;
pub use modal_coordinator::ModalCoordinator;
pub use session_service::SessionService;

use std::sync::Arc;

use crate::traits::{FavoritesGateway, Notifier, SessionProvider};

/// Service context - holds all external collaborators
///
/// The platform layer creates this context once and injects its
/// platform-specific collaborator implementations.
pub struct ServiceContext {
    session: Arc<dyn SessionProvider>,
    favorites: Arc<dyn FavoritesGateway>,
    notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        session: Arc<dyn SessionProvider>,
        favorites: Arc<dyn FavoritesGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            favorites,
            notifier,
        }
    }

    /// Session collaborator.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    /// Favorites gateway.
    #[must_use]
    pub fn favorites(&self) -> &Arc<dyn FavoritesGateway> {
        &self.favorites
    }

    /// Notification sink.
    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }
}
