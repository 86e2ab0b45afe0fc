//! External store notifications.
//!
//! The cookie store reports mutations that happened outside this controller
//! (another window, another process) as [`StoreEvent`] values. A host pushes
//! them through a `tokio::sync::mpsc` channel the controller subscribes to,
//! or calls the handler methods directly. Events are applied synchronously
//! in delivery order; two events never interleave with each other, though an
//! event can land between the await points of an in-flight operation.

use crate::cookie::session::SessionCookie;

/// A mutation the store performed outside this controller.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A cookie was removed from the store.
    ///
    /// `cancelable` marks a removal that is still being negotiated and not
    /// yet final; the controller ignores those.
    Removed {
        cookie: SessionCookie,
        cancelable: bool,
    },
    /// A cookie was created or updated in the store.
    Changed { cookie: SessionCookie },
}

impl StoreEvent {
    /// A finalized removal.
    pub fn removed(cookie: SessionCookie) -> Self {
        StoreEvent::Removed {
            cookie,
            cancelable: false,
        }
    }

    /// A create-or-update.
    pub fn changed(cookie: SessionCookie) -> Self {
        StoreEvent::Changed { cookie }
    }
}
