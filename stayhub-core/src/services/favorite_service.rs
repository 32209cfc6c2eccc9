//! Favorite toggle service

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::ClientResult;
use crate::services::{AuthGate, ServiceContext};
use crate::state::SharedModals;
use crate::types::{CurrentUser, FavoriteAction, FavoriteToggleRequest, ToggleOutcome};

/// Toggles a listing's favorite membership for the current user.
///
/// The authoritative favorite set lives server-side; this service only reads
/// the membership from the supplied user snapshot, sends exactly one mutation,
/// and asks the session collaborator to refresh. It never keeps a local copy
/// of membership, so the UI can never drift from server truth after a refresh.
///
/// Overlapping toggles for the same listing are rejected locally with
/// `ToggleOutcome::AlreadyPending` rather than dispatched against a stale
/// membership read.
pub struct FavoriteService {
    ctx: Arc<ServiceContext>,
    gate: AuthGate,
    in_flight: Mutex<HashSet<String>>,
}

impl FavoriteService {
    /// Create a favorite service.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, modals: SharedModals) -> Self {
        Self {
            ctx,
            gate: AuthGate::new(modals),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Whether `listing_id` is in the user's favorite set.
    ///
    /// Pure read of the snapshot; `false` for an absent user.
    #[must_use]
    pub fn has_favorited(current_user: Option<&CurrentUser>, listing_id: &str) -> bool {
        current_user.is_some_and(|user| user.has_favorited(listing_id))
    }

    /// Toggle `listing_id` for `current_user`.
    ///
    /// Terminal outcomes, in order of evaluation:
    /// 1. absent user - the Login modal opens, no network call is made;
    /// 2. a mutation for this listing has not settled - nothing is sent;
    /// 3. one add/remove mutation, direction derived from the snapshot;
    ///    success triggers a session refresh and a success notification,
    ///    failure is absorbed and surfaced only through the notifier.
    ///
    /// The invoking handler must treat the originating click as consumed for
    /// every outcome, so a single click cannot also fire a container's own
    /// click action (e.g. navigating into the listing).
    pub async fn toggle(
        &self,
        listing_id: &str,
        current_user: Option<&CurrentUser>,
    ) -> ToggleOutcome {
        let Some(user) = self.gate.require_user(current_user) else {
            return ToggleOutcome::LoginRequired;
        };

        {
            let mut in_flight = self.in_flight.lock().await;
            if !in_flight.insert(listing_id.to_string()) {
                log::debug!("Favorite toggle for {listing_id} still in flight, ignoring");
                return ToggleOutcome::AlreadyPending;
            }
        }

        let action = if user.has_favorited(listing_id) {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        };
        let request = FavoriteToggleRequest {
            listing_id: listing_id.to_string(),
            action,
        };

        let result = self.dispatch(&request).await;
        self.in_flight.lock().await.remove(listing_id);

        match result {
            Ok(()) => {
                // Server truth changed; re-derive the snapshot before the
                // next membership read.
                self.ctx.session().refresh().await;
                match action {
                    FavoriteAction::Add => {
                        self.ctx.notifier().success("Added to favorites");
                        ToggleOutcome::Added
                    }
                    FavoriteAction::Remove => {
                        self.ctx.notifier().success("Removed from favorites");
                        ToggleOutcome::Removed
                    }
                }
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Favorite toggle for {listing_id} rejected: {e}");
                } else {
                    log::error!("Favorite toggle for {listing_id} failed: {e}");
                }
                self.ctx.notifier().failure(&e.to_string());
                ToggleOutcome::Failed
            }
        }
    }

    async fn dispatch(&self, request: &FavoriteToggleRequest) -> ClientResult<()> {
        match request.action {
            FavoriteAction::Add => self.ctx.favorites().add_favorite(&request.listing_id).await,
            FavoriteAction::Remove => {
                self.ctx
                    .favorites()
                    .remove_favorite(&request.listing_id)
                    .await
            }
        }
    }
}
