//! Modal coordination

use crate::services::AuthGate;
use crate::state::{ModalKind, ModalSnapshot, SharedModals};
use crate::types::CurrentUser;

/// Policy layer sequencing cross-modal transitions so that at most one modal
/// is visible.
///
/// All transitions are total functions over local memory; there are no error
/// conditions.
#[derive(Clone)]
pub struct ModalCoordinator {
    modals: SharedModals,
    gate: AuthGate,
}

impl ModalCoordinator {
    /// Create a coordinator over the session's modal stores.
    #[must_use]
    pub fn new(modals: SharedModals) -> Self {
        let gate = AuthGate::new(modals.clone());
        Self { modals, gate }
    }

    /// Close every modal except `target`, then open `target`.
    pub fn switch_to(&self, target: ModalKind) {
        self.modals.write().switch_to(target);
    }

    /// Open `kind`.
    ///
    /// Routed through `switch_to` so mutual exclusivity cannot be bypassed
    /// by a direct open.
    pub fn open(&self, kind: ModalKind) {
        self.switch_to(kind);
    }

    /// Close `kind`. Idempotent.
    pub fn close(&self, kind: ModalKind) {
        self.modals.write().store_mut(kind).close();
    }

    /// The "become a host" entry point, gated on authentication.
    ///
    /// An absent user lands in the Login modal instead of the Rent flow.
    pub fn request_rent_flow(&self, current_user: Option<&CurrentUser>) {
        if self.gate.require_user(current_user).is_some() {
            self.switch_to(ModalKind::Rent);
        }
    }

    /// In-modal "switch to register" link.
    pub fn login_to_register(&self) {
        self.switch_to(ModalKind::Register);
    }

    /// In-modal "switch to login" link.
    pub fn register_to_login(&self) {
        self.switch_to(ModalKind::Login);
    }

    /// Whether the store for `kind` is open.
    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.modals.read().is_open(kind)
    }

    /// Snapshot of all three flags for the render layer.
    #[must_use]
    pub fn snapshot(&self) -> ModalSnapshot {
        self.modals.read().snapshot()
    }
}
