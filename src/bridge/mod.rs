//! The cookie storage collaborator interface.
//!
//! The controller never touches cookie storage directly. An application
//! injects an implementation of [`CookieBridge`] that forwards requests to
//! whatever owns the actual store (an OS session, a browser process, a test
//! double). The dependency is optional: a controller constructed without a
//! bridge reports [`ManagerError::BridgeUnavailable`] on the first operation
//! that needs one.

use crate::base::error::ManagerError;
use crate::cookie::session::SessionCookie;
use std::{future::Future, pin::Pin, sync::Arc};

/// Alias for the `Future` type returned by a listing request.
pub type Listing = Pin<Box<dyn Future<Output = Result<Vec<SessionCookie>, ManagerError>> + Send>>;

/// Alias for the `Future` type returned by a mutation request.
pub type Ack = Pin<Box<dyn Future<Output = Result<(), ManagerError>> + Send>>;

/// Trait for the external cookie store.
///
/// # Design Notes
///
/// - Uses `&self` so one bridge can serve concurrent requests.
/// - Returns boxed futures for trait object compatibility.
/// - Implementations reject with [`ManagerError::Rejected`] carrying their
///   own message; the controller surfaces it verbatim.
pub trait CookieBridge: Send + Sync {
    /// List every session cookie in the store.
    fn list_cookies(&self) -> Listing;

    /// Remove the given cookies from the store.
    ///
    /// The store is expected to emit a removed notification for each record
    /// it actually drops; the controller updates its list from those, not
    /// from this acknowledgement.
    fn remove_cookies(&self, cookies: Vec<SessionCookie>) -> Ack;

    /// Create or update a single cookie in the store.
    ///
    /// As with removal, the store's changed notification is what lands the
    /// record in the displayed list.
    fn update_cookie(&self, cookie: SessionCookie) -> Ack;
}

/// Blanket implementation for Arc-wrapped bridges.
impl<B: CookieBridge + ?Sized> CookieBridge for Arc<B> {
    fn list_cookies(&self) -> Listing {
        (**self).list_cookies()
    }

    fn remove_cookies(&self, cookies: Vec<SessionCookie>) -> Ack {
        (**self).remove_cookies(cookies)
    }

    fn update_cookie(&self, cookie: SessionCookie) -> Ack {
        (**self).update_cookie(cookie)
    }
}
