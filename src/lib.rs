//! # cookiedeck
//!
//! A controller library for managing a displayed list of session cookies.
//!
//! `cookiedeck` owns the list state of a cookie manager view: which cookies
//! are shown, how a search narrows them, and how the list is reconciled when
//! the surrounding application reports that a cookie changed elsewhere. It
//! owns no storage of its own; listing, removal, updates, and export are
//! delegated to collaborators injected at construction.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cookiedeck::manager::CookieManager;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut manager = CookieManager::new()
//!         .with_bridge(Arc::new(MyBridge::connect()))
//!         .with_exporter(Arc::new(MyExporter::default()));
//!     manager.query_cookies().await;
//!     println!("cookies: {}", manager.items().map_or(0, |i| i.len()));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`cookie`] - The session cookie record, identity, and list filtering
//! - [`bridge`] - The cookie storage collaborator interface
//! - [`export`] - Export payloads, options, and the export collaborator
//! - [`manager`] - The list controller and its feedback/event channels
//!
//! ## Collaborator model
//!
//! Collaborators are optional. An operation that needs a missing collaborator
//! does not fail the caller; it reports the condition through the injected
//! [`manager::Feedback`] sink and leaves the controller in a consistent
//! state. A collaborator that never resolves leaves the operation pending;
//! there is no timeout or cancellation.

pub mod base;
pub mod bridge;
pub mod cookie;
pub mod export;
pub mod manager;
