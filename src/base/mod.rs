//! Base types and error handling.
//!
//! Provides the foundational types shared by every module:
//! - [`ManagerError`]: the unified failure taxonomy for collaborator calls

pub mod error;

pub use error::ManagerError;
