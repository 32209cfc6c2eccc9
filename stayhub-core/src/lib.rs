//! StayHub Client Core Library
//!
//! Provides the interaction-state core for the StayHub rental marketplace
//! front end, including:
//! - Modal stores and coordination (Login / Register / Rent)
//! - Authentication gating
//! - Optimistic favorite toggling
//!
//! This library is designed to be platform-independent, abstracting the
//! session, favorites API and notification collaborators through traits.
//! Rendering, search, payments and booking logic live elsewhere.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ClientError, ClientResult};
pub use services::{AuthGate, FavoriteService, ModalCoordinator, ServiceContext, SessionService};
pub use state::{ModalKind, ModalSnapshot, ModalStates, ModalStore, SharedModals};
pub use traits::{FavoritesGateway, Notifier, SessionProvider};
pub use types::{
    CurrentUser, FavoriteAction, FavoriteToggleRequest, RegisterRequest, SessionFlowOutcome,
    SignInRequest, ToggleOutcome,
};
