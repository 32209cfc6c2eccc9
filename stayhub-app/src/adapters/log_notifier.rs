//! Log-backed notification sink

use stayhub_core::Notifier;

/// Routes notifications to the `log` facade.
///
/// The default notifier for frontends that have not wired a toast layer yet;
/// headless harnesses also use it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log::info!("notification: {message}");
    }

    fn failure(&self, message: &str) {
        log::warn!("notification: {message}");
    }
}
