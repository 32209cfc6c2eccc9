//! Favorite toggle types

use serde::{Deserialize, Serialize};

/// Direction of a favorite mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    /// Add the listing to the user's favorites
    Add,
    /// Remove the listing from the user's favorites
    Remove,
}

/// Per-invocation toggle request.
///
/// Ephemeral: constructed from the membership read at the start of a toggle
/// and discarded once the mutation settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleRequest {
    /// Listing ID
    #[serde(rename = "listingId")]
    pub listing_id: String,
    /// Derived mutation direction
    pub action: FavoriteAction,
}

/// Terminal outcome of a favorite toggle.
///
/// `toggle` never surfaces an error to the caller — failures are absorbed and
/// reported through the notifier. The outcome tells the invoking handler what
/// happened so it can treat the originating click as consumed either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// An add mutation was sent and acknowledged
    Added,
    /// A remove mutation was sent and acknowledged
    Removed,
    /// No user present; the Login modal was opened instead
    LoginRequired,
    /// A mutation for this listing is still in flight; nothing was sent
    AlreadyPending,
    /// The mutation failed; the failure was reported via the notifier
    Failed,
}
