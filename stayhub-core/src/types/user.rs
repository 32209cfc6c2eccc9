//! Session user types

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user snapshot.
///
/// Owned by the session collaborator; the core treats it as read-only derived
/// data and never mutates it. Favorite membership is always re-derived from
/// `favorite_ids` at read time — the core keeps no second copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User ID
    pub id: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// IDs of listings the user has favorited
    #[serde(rename = "favoriteIds", default)]
    pub favorite_ids: HashSet<String>,
    /// Account creation time
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl CurrentUser {
    /// Whether `listing_id` is in the user's favorite set.
    #[must_use]
    pub fn has_favorited(&self, listing_id: &str) -> bool {
        self.favorite_ids.contains(listing_id)
    }
}
