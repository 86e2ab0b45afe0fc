//! The session cookie record, identity semantics, and list filtering.
//!
//! A [`SessionCookie`](session::SessionCookie) is identified by the exact
//! `(domain, path, name)` triple. The identity comparison is case-sensitive
//! while the list search in [`filter`] is case-insensitive; the asymmetry is
//! deliberate and mirrors how cookie stores key their records.

pub mod filter;
pub mod session;

pub use filter::{filter_cookies, matches_query};
pub use session::{index_of, SessionCookie};
