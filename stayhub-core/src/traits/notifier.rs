//! User notification abstract Trait

/// Toast-style notification sink Trait
///
/// Fire-and-forget; implementations must not block. This is the only channel
/// through which favorite/session flow failures reach the user.
pub trait Notifier: Send + Sync {
    /// Surface a success message.
    fn success(&self, message: &str);

    /// Surface a failure message.
    fn failure(&self, message: &str);
}
