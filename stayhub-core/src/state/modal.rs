//! Modal store state
//!
//! Three independently owned open/closed flags (Login, Register, Rent),
//! created once at session start. Mutual exclusivity is not a property of the
//! individual stores — it is enforced by `ModalStates::switch_to`, which is
//! the single transition both the coordinator and the auth gate go through.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Modal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Login modal
    Login,
    /// Register modal
    Register,
    /// Rent ("become a host") modal
    Rent,
}

impl ModalKind {
    /// All modal kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Login, Self::Register, Self::Rent]
    }
}

/// A single modal's open/closed flag.
///
/// `open` and `close` are total and idempotent; there are no error conditions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModalStore {
    is_open: bool,
}

impl ModalStore {
    /// Create a closed store.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_open: false }
    }

    /// Open the modal. No-op if already open.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the modal. No-op if already closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether the modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Read-only projection of all three flags for a render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSnapshot {
    pub login: bool,
    pub register: bool,
    pub rent: bool,
}

/// The three modal stores for one client session.
#[derive(Debug, Default)]
pub struct ModalStates {
    login: ModalStore,
    register: ModalStore,
    rent: ModalStore,
}

impl ModalStates {
    /// Create all stores closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the store for `kind`.
    #[must_use]
    pub fn store(&self, kind: ModalKind) -> &ModalStore {
        match kind {
            ModalKind::Login => &self.login,
            ModalKind::Register => &self.register,
            ModalKind::Rent => &self.rent,
        }
    }

    /// Mutably borrow the store for `kind`.
    pub fn store_mut(&mut self, kind: ModalKind) -> &mut ModalStore {
        match kind {
            ModalKind::Login => &mut self.login,
            ModalKind::Register => &mut self.register,
            ModalKind::Rent => &mut self.rent,
        }
    }

    /// Whether the store for `kind` is open.
    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.store(kind).is_open()
    }

    /// Close every store except `target`, then open `target`.
    ///
    /// Close-before-open: no observer can ever see two open flags, not even
    /// transiently within the transition.
    pub fn switch_to(&mut self, target: ModalKind) {
        for kind in ModalKind::all() {
            if kind != target {
                self.store_mut(kind).close();
            }
        }
        self.store_mut(target).open();
    }

    /// Snapshot of all three flags.
    #[must_use]
    pub fn snapshot(&self) -> ModalSnapshot {
        ModalSnapshot {
            login: self.login.is_open(),
            register: self.register.is_open(),
            rent: self.rent.is_open(),
        }
    }
}

/// Shared handle to one session's modal stores.
///
/// A plain `std` lock keeps every transition synchronous: a flag change is
/// observable the moment the mutating call returns, which the render layer
/// relies on. Critical sections never cross an await point.
#[derive(Clone, Default)]
pub struct SharedModals {
    inner: Arc<RwLock<ModalStates>>,
}

impl SharedModals {
    /// Create a handle with all modals closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the stores.
    pub fn read(&self) -> RwLockReadGuard<'_, ModalStates> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the stores.
    pub fn write(&self) -> RwLockWriteGuard<'_, ModalStates> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
