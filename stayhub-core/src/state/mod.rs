//! Client interaction state

mod modal;

pub use modal::{ModalKind, ModalSnapshot, ModalStates, ModalStore, SharedModals};
