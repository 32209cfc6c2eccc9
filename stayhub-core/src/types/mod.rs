//! Type definitions

mod favorite;
mod session;
mod user;

pub use favorite::{FavoriteAction, FavoriteToggleRequest, ToggleOutcome};
pub use session::{RegisterRequest, SessionFlowOutcome, SignInRequest};
pub use user::CurrentUser;
