//! Session flow request types

use serde::{Deserialize, Serialize};

/// Credentials submitted from the Login modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Email address
    pub email: String,
    /// Plain-text password (forwarded to the auth provider, never stored)
    pub password: String,
}

/// Sign-up data submitted from the Register modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Plain-text password
    pub password: String,
}

/// Terminal outcome of a session flow (sign-in, register, sign-out).
///
/// Like favorite toggles, session flows absorb collaborator errors and speak
/// through the notifier; the outcome only tells the caller whether the flow
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlowOutcome {
    /// The flow completed and any follow-up transitions were applied
    Completed,
    /// The collaborator rejected the request; a failure was reported
    Failed,
}
