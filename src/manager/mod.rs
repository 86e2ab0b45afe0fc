//! The cookie list controller.
//!
//! [`CookieManager`] owns the displayed list and sequences every operation
//! against the injected collaborators:
//!
//! - querying and reconciling the list ([`controller`])
//! - surfacing failures and confirmations to the host ([`feedback`])
//! - consuming external store notifications ([`events`])

pub mod controller;
pub mod events;
pub mod feedback;

pub use controller::CookieManager;
pub use events::StoreEvent;
pub use feedback::{Feedback, NoopFeedback};
