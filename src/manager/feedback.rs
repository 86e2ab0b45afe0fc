//! Host-facing feedback channel.
//!
//! The controller never returns errors to its caller; it reports them here.
//! A host wires this to its analytics pipeline and toast/notification UI.

use std::sync::Arc;

/// Sink for controller-originated signals.
///
/// All methods are fire-and-forget and must not block.
pub trait Feedback: Send + Sync {
    /// An operation failed. `kind` is a stable classifier for analytics,
    /// `description` the human-readable message.
    fn exception(&self, kind: &str, description: &str);

    /// Show a transient user-visible message.
    fn toast(&self, message: &str);

    /// An export to a cloud provider completed.
    fn cloud_save_confirmed(&self) {}

    /// The list shrank under the view; any selection is stale.
    fn selection_cleared(&self) {}
}

/// Feedback sink that drops every signal. The default for controllers
/// constructed without an explicit sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {
    fn exception(&self, _kind: &str, _description: &str) {}

    fn toast(&self, _message: &str) {}
}

/// Blanket implementation for Arc-wrapped sinks.
impl<F: Feedback + ?Sized> Feedback for Arc<F> {
    fn exception(&self, kind: &str, description: &str) {
        (**self).exception(kind, description)
    }

    fn toast(&self, message: &str) {
        (**self).toast(message)
    }

    fn cloud_save_confirmed(&self) {
        (**self).cloud_save_confirmed()
    }

    fn selection_cleared(&self) {
        (**self).selection_cleared()
    }
}
