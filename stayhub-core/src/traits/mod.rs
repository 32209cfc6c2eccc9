//! External collaborator abstraction traits

mod favorites_gateway;
mod notifier;
mod session_provider;

pub use favorites_gateway::FavoritesGateway;
pub use notifier::Notifier;
pub use session_provider::SessionProvider;
