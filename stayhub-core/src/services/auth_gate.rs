//! Authentication gate

use crate::state::{ModalKind, SharedModals};
use crate::types::CurrentUser;

/// Check-and-redirect policy applied before any action that requires an
/// authenticated user.
///
/// Holds no state of its own beyond the shared modal handle. An absent user is
/// routed into the Login modal; it is a normal control-flow outcome, never an
/// error.
#[derive(Clone)]
pub struct AuthGate {
    modals: SharedModals,
}

impl AuthGate {
    /// Create a gate over the session's modal stores.
    #[must_use]
    pub fn new(modals: SharedModals) -> Self {
        Self { modals }
    }

    /// Pass the user through, or open the Login modal and return `None`.
    ///
    /// The Login transition goes through `switch_to`, so any other open modal
    /// closes first.
    pub fn require_user<'a>(&self, user: Option<&'a CurrentUser>) -> Option<&'a CurrentUser> {
        match user {
            Some(user) => Some(user),
            None => {
                log::debug!("Unauthenticated action, redirecting to login modal");
                self.modals.write().switch_to(ModalKind::Login);
                None
            }
        }
    }
}
