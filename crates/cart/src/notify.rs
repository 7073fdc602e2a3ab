//! User-facing error notification.
//!
//! Cart operations report failures through a single-method capability so
//! the UI layer decides how to show them (toast, banner, log line). The
//! messages are the storefront's literal strings; which one applies is
//! decided by the store per operation.

/// The storefront's literal user-facing error messages.
pub mod messages {
    /// Requested quantity exceeds available stock (or is not positive).
    pub const OUT_OF_STOCK: &str = "quantity requested out of stock";
    /// Adding a product failed for any other reason.
    pub const ADD_FAILED: &str = "error adding product";
    /// Removing a product failed.
    pub const REMOVE_FAILED: &str = "error removing product";
    /// Updating a product's quantity failed for any other reason.
    pub const UPDATE_FAILED: &str = "error updating product quantity";
}

/// Capability to surface a user-visible error message.
///
/// Fire-and-forget: the store never waits on or inspects the outcome.
pub trait Notifier {
    /// Display an error message to the user.
    fn error(&self, message: &str);
}

/// Notifier that routes messages to the tracing pipeline.
///
/// Useful for headless callers (the CLI) where there is no toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(user_message = %message, "cart notification");
    }
}
