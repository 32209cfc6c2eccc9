//! Test helper module
//!
//! Mock collaborator implementations and convenient test factory methods.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{RwLock, Semaphore};

use crate::error::{ClientError, ClientResult};
use crate::services::{FavoriteService, ServiceContext, SessionService};
use crate::state::SharedModals;
use crate::traits::{FavoritesGateway, Notifier, SessionProvider};
use crate::types::{CurrentUser, RegisterRequest, SignInRequest};

/// Build a user snapshot with the given favorite listing IDs.
pub fn test_user(id: &str, favorites: &[&str]) -> CurrentUser {
    CurrentUser {
        id: id.to_string(),
        name: Some("Test Guest".to_string()),
        email: Some(format!("{id}@example.com")),
        favorite_ids: favorites.iter().map(ToString::to_string).collect(),
        created_at: Utc::now(),
    }
}

// ===== MockSessionProvider =====

pub struct MockSessionProvider {
    user: RwLock<Option<CurrentUser>>,
    refreshes: AtomicUsize,
    /// If Some, sign_in returns this error message as InvalidCredentials
    sign_in_error: RwLock<Option<String>>,
    register_error: RwLock<Option<String>>,
}

impl MockSessionProvider {
    pub fn new() -> Self {
        Self {
            user: RwLock::new(None),
            refreshes: AtomicUsize::new(0),
            sign_in_error: RwLock::new(None),
            register_error: RwLock::new(None),
        }
    }

    pub async fn set_sign_in_error(&self, message: &str) {
        *self.sign_in_error.write().await = Some(message.to_string());
    }

    pub async fn set_register_error(&self, message: &str) {
        *self.register_error.write().await = Some(message.to_string());
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn current_user(&self) -> ClientResult<Option<CurrentUser>> {
        Ok(self.user.read().await.clone())
    }

    async fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }

    async fn sign_in(&self, _request: &SignInRequest) -> ClientResult<()> {
        match self.sign_in_error.read().await.clone() {
            Some(msg) => Err(ClientError::InvalidCredentials(msg)),
            None => Ok(()),
        }
    }

    async fn sign_out(&self) -> ClientResult<()> {
        *self.user.write().await = None;
        Ok(())
    }

    async fn register(&self, _request: &RegisterRequest) -> ClientResult<()> {
        match self.register_error.read().await.clone() {
            Some(msg) => Err(ClientError::ValidationError(msg)),
            None => Ok(()),
        }
    }
}

// ===== MockFavoritesGateway =====

pub struct MockFavoritesGateway {
    adds: RwLock<Vec<String>>,
    removes: RwLock<Vec<String>>,
    /// If Some, the next mutation fails with this message
    fail_next: RwLock<Option<String>>,
    /// When holding, mutations park on this semaphore until released
    holding: RwLock<bool>,
    barrier: Semaphore,
}

impl MockFavoritesGateway {
    pub fn new() -> Self {
        Self {
            adds: RwLock::new(Vec::new()),
            removes: RwLock::new(Vec::new()),
            fail_next: RwLock::new(None),
            holding: RwLock::new(false),
            barrier: Semaphore::new(0),
        }
    }

    pub async fn adds(&self) -> Vec<String> {
        self.adds.read().await.clone()
    }

    pub async fn removes(&self) -> Vec<String> {
        self.removes.read().await.clone()
    }

    pub async fn set_fail_next(&self, message: &str) {
        *self.fail_next.write().await = Some(message.to_string());
    }

    /// Park subsequent mutations until `release_mutations` is called.
    pub async fn hold_mutations(&self) {
        *self.holding.write().await = true;
    }

    pub fn release_mutations(&self) {
        self.barrier.add_permits(Semaphore::MAX_PERMITS / 2);
    }

    async fn settle(&self) -> ClientResult<()> {
        if *self.holding.read().await {
            let permit = self.barrier.acquire().await.unwrap();
            permit.forget();
        }
        if let Some(msg) = self.fail_next.write().await.take() {
            return Err(ClientError::NetworkError(msg));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesGateway for MockFavoritesGateway {
    async fn add_favorite(&self, listing_id: &str) -> ClientResult<()> {
        self.settle().await?;
        self.adds.write().await.push(listing_id.to_string());
        Ok(())
    }

    async fn remove_favorite(&self, listing_id: &str) -> ClientResult<()> {
        self.settle().await?;
        self.removes.write().await.push(listing_id.to_string());
        Ok(())
    }
}

// ===== RecordingNotifier =====

#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

// ===== Factories =====

pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockFavoritesGateway>,
    Arc<MockSessionProvider>,
    Arc<RecordingNotifier>,
) {
    let gateway = Arc::new(MockFavoritesGateway::new());
    let session = Arc::new(MockSessionProvider::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = Arc::new(ServiceContext::new(
        Arc::clone(&session) as Arc<dyn SessionProvider>,
        Arc::clone(&gateway) as Arc<dyn FavoritesGateway>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    ));
    (ctx, gateway, session, notifier)
}

pub fn create_test_favorite_service() -> (
    FavoriteService,
    SharedModals,
    Arc<MockFavoritesGateway>,
    Arc<MockSessionProvider>,
    Arc<RecordingNotifier>,
) {
    let (ctx, gateway, session, notifier) = create_test_context();
    let modals = SharedModals::new();
    let svc = FavoriteService::new(ctx, modals.clone());
    (svc, modals, gateway, session, notifier)
}

pub fn create_test_session_service() -> (
    SessionService,
    SharedModals,
    Arc<MockSessionProvider>,
    Arc<RecordingNotifier>,
) {
    let (ctx, _, session, notifier) = create_test_context();
    let modals = SharedModals::new();
    let svc = SessionService::new(ctx, modals.clone());
    (svc, modals, session, notifier)
}
