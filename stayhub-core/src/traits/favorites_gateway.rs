//! Favorites API abstract Trait

use async_trait::async_trait;

use crate::error::ClientResult;

/// Favorites mutation gateway Trait
///
/// Two mutation endpoints keyed by listing ID. The core consumes nothing from
/// a success beyond the acknowledgement itself; the updated favorite set
/// arrives through the subsequent session refresh.
#[async_trait]
pub trait FavoritesGateway: Send + Sync {
    /// Add a listing to the current user's favorites.
    ///
    /// # Arguments
    /// * `listing_id` - Listing ID
    async fn add_favorite(&self, listing_id: &str) -> ClientResult<()>;

    /// Remove a listing from the current user's favorites.
    ///
    /// # Arguments
    /// * `listing_id` - Listing ID
    async fn remove_favorite(&self, listing_id: &str) -> ClientResult<()>;
}
