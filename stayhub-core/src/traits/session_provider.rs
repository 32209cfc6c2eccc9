//! Session collaborator abstract Trait

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::types::{CurrentUser, RegisterRequest, SignInRequest};

/// Session collaborator Trait
///
/// Owns the authoritative session snapshot. The core only reads the snapshot
/// and asks for refreshes; the authentication provider integration behind
/// `sign_in`/`sign_out` is the platform's concern.
///
/// Platform implementation:
/// - Web frontend: `HttpSessionProvider` (stayhub-app, `reqwest`)
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Get the current user snapshot, or `None` when unauthenticated.
    ///
    /// An absent user is a normal state, not an error.
    async fn current_user(&self) -> ClientResult<Option<CurrentUser>>;

    /// Request a re-fetch of the authoritative snapshot.
    ///
    /// Fire-and-forget: the core consumes no return value. After a refresh
    /// settles, `current_user` reflects server truth again.
    async fn refresh(&self);

    /// Sign in with credentials.
    ///
    /// # Arguments
    /// * `request` - Email and password from the Login modal
    async fn sign_in(&self, request: &SignInRequest) -> ClientResult<()>;

    /// Sign out the current session.
    async fn sign_out(&self) -> ClientResult<()>;

    /// Create a new account.
    ///
    /// # Arguments
    /// * `request` - Sign-up data from the Register modal
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;
}
