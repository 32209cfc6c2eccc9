//! Session flow service

use std::sync::Arc;

use crate::services::{ModalCoordinator, ServiceContext};
use crate::state::{ModalKind, SharedModals};
use crate::types::{RegisterRequest, SessionFlowOutcome, SignInRequest};

/// Drives the sign-in, registration and sign-out flows behind the Login and
/// Register modals.
///
/// The authentication provider itself stays behind the session collaborator;
/// this service only sequences the surrounding transitions: notification,
/// snapshot refresh, and the modal that closes or switches on success.
pub struct SessionService {
    ctx: Arc<ServiceContext>,
    coordinator: ModalCoordinator,
}

impl SessionService {
    /// Create a session service.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, modals: SharedModals) -> Self {
        Self {
            ctx,
            coordinator: ModalCoordinator::new(modals),
        }
    }

    /// Submit the Login modal.
    ///
    /// Success closes the Login modal and requests a snapshot refresh;
    /// failure leaves the modal open so the user can retry.
    pub async fn sign_in(&self, request: &SignInRequest) -> SessionFlowOutcome {
        match self.ctx.session().sign_in(request).await {
            Ok(()) => {
                self.ctx.session().refresh().await;
                self.ctx.notifier().success("Logged in");
                self.coordinator.close(ModalKind::Login);
                SessionFlowOutcome::Completed
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Sign-in rejected: {e}");
                } else {
                    log::error!("Sign-in failed: {e}");
                }
                self.ctx.notifier().failure(&e.to_string());
                SessionFlowOutcome::Failed
            }
        }
    }

    /// Submit the Register modal.
    ///
    /// Success switches Register to Login so the new account can sign in.
    pub async fn register(&self, request: &RegisterRequest) -> SessionFlowOutcome {
        match self.ctx.session().register(request).await {
            Ok(()) => {
                self.ctx.notifier().success("Account created");
                self.coordinator.register_to_login();
                SessionFlowOutcome::Completed
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Registration rejected: {e}");
                } else {
                    log::error!("Registration failed: {e}");
                }
                self.ctx.notifier().failure(&e.to_string());
                SessionFlowOutcome::Failed
            }
        }
    }

    /// Sign out the current session.
    pub async fn sign_out(&self) -> SessionFlowOutcome {
        match self.ctx.session().sign_out().await {
            Ok(()) => {
                self.ctx.session().refresh().await;
                self.ctx.notifier().success("Logged out");
                SessionFlowOutcome::Completed
            }
            Err(e) => {
                log::error!("Sign-out failed: {e}");
                self.ctx.notifier().failure(&e.to_string());
                SessionFlowOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_session_service;

    fn sign_in_request() -> SignInRequest {
        SignInRequest {
            email: "guest@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_success_closes_login_modal() {
        let (svc, modals, session, notifier) = create_test_session_service();
        modals.write().switch_to(ModalKind::Login);

        let outcome = svc.sign_in(&sign_in_request()).await;

        assert_eq!(outcome, SessionFlowOutcome::Completed);
        assert!(!modals.read().is_open(ModalKind::Login));
        assert_eq!(session.refresh_count(), 1);
        assert_eq!(notifier.successes(), vec!["Logged in".to_string()]);
    }

    #[tokio::test]
    async fn sign_in_failure_leaves_login_modal_open() {
        let (svc, modals, session, notifier) = create_test_session_service();
        modals.write().switch_to(ModalKind::Login);
        session.set_sign_in_error("bad password").await;

        let outcome = svc.sign_in(&sign_in_request()).await;

        assert_eq!(outcome, SessionFlowOutcome::Failed);
        assert!(modals.read().is_open(ModalKind::Login));
        assert_eq!(session.refresh_count(), 0);
        assert_eq!(notifier.failures().len(), 1);
        assert!(notifier.failures()[0].contains("bad password"));
    }

    #[tokio::test]
    async fn register_success_switches_to_login() {
        let (svc, modals, _, notifier) = create_test_session_service();
        modals.write().switch_to(ModalKind::Register);

        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            name: "New Guest".to_string(),
            password: "hunter2".to_string(),
        };
        let outcome = svc.register(&request).await;

        assert_eq!(outcome, SessionFlowOutcome::Completed);
        let snap = modals.read().snapshot();
        assert!(snap.login);
        assert!(!snap.register);
        assert_eq!(notifier.successes().len(), 1);
    }

    #[tokio::test]
    async fn register_failure_leaves_register_modal_open() {
        let (svc, modals, session, notifier) = create_test_session_service();
        modals.write().switch_to(ModalKind::Register);
        session.set_register_error("email already taken").await;

        let request = RegisterRequest {
            email: "taken@example.com".to_string(),
            name: "Guest".to_string(),
            password: "hunter2".to_string(),
        };
        let outcome = svc.register(&request).await;

        assert_eq!(outcome, SessionFlowOutcome::Failed);
        assert!(modals.read().is_open(ModalKind::Register));
        assert!(notifier.failures()[0].contains("email already taken"));
    }

    #[tokio::test]
    async fn sign_out_refreshes_and_notifies() {
        let (svc, _, session, notifier) = create_test_session_service();

        let outcome = svc.sign_out().await;

        assert_eq!(outcome, SessionFlowOutcome::Completed);
        assert_eq!(session.refresh_count(), 1);
        assert_eq!(notifier.successes(), vec!["Logged out".to_string()]);
    }
}
