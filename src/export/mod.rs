//! Export payloads, options, and the export collaborator interface.
//!
//! Exporting a cookie set is delegated to an injected [`DataExporter`]; the
//! controller only assembles the payload and stamps the fixed `kind` tag so
//! receivers can recognize what they are being handed. The provider field is
//! opaque to the controller except for one question: is it a cloud target
//! that deserves a "saved" confirmation.

pub mod file;
pub mod options;

pub use file::JsonFileExporter;
pub use options::{ExportOptions, ExportProvider, ExportRequest, ProviderOptions};

use crate::base::error::ManagerError;
use crate::cookie::session::SessionCookie;
use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin, sync::Arc};

/// The `kind` tag stamped on every export this controller produces.
pub const SESSION_COOKIES_KIND: &str = "cookiedeck#session-cookies";

/// Default file name offered for a cookie export.
pub const DEFAULT_EXPORT_FILE: &str = "session-cookies.json";

/// The data section of an export payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub cookies: Vec<SessionCookie>,
}

/// Everything an export collaborator needs to persist a cookie set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub options: ExportOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_options: Option<ProviderOptions>,
    pub data: ExportData,
}

/// Alias for the `Future` type returned by an export request.
pub type Exporting = Pin<Box<dyn Future<Output = Result<(), ManagerError>> + Send>>;

/// Trait for the external export service.
///
/// Implementations write the payload to a file, upload it to cloud storage,
/// or hand it to another process. Rejections carry the implementation's own
/// message via [`ManagerError::Rejected`].
pub trait DataExporter: Send + Sync {
    fn export_data(&self, payload: ExportPayload) -> Exporting;
}

/// Blanket implementation for Arc-wrapped exporters.
impl<E: DataExporter + ?Sized> DataExporter for Arc<E> {
    fn export_data(&self, payload: ExportPayload) -> Exporting {
        (**self).export_data(payload)
    }
}
