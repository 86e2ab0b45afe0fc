use serde::{Deserialize, Serialize};

use crate::export::{DEFAULT_EXPORT_FILE, SESSION_COOKIES_KIND};

/// Destination for an export.
///
/// Interpreted by the controller only to decide whether a cloud-saved
/// confirmation should be shown; everything else about the provider belongs
/// to the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportProvider {
    File,
    Drive,
}

impl ExportProvider {
    /// `true` for providers that upload to cloud storage.
    pub fn is_cloud(&self) -> bool {
        matches!(self, ExportProvider::Drive)
    }
}

/// Export configuration as collected from the export options panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub file: String,
    pub provider: ExportProvider,
    /// Fixed by the controller before dispatch; panels leave it unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file: DEFAULT_EXPORT_FILE.to_string(),
            provider: ExportProvider::File,
            kind: None,
        }
    }
}

impl ExportOptions {
    /// Stamp the fixed session-cookies `kind` tag.
    pub fn stamped(mut self) -> Self {
        self.kind = Some(SESSION_COOKIES_KIND.to_string());
        self
    }
}

/// Provider-specific settings forwarded untouched to the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// Parent folders for cloud destinations.
    #[serde(default)]
    pub parents: Vec<String>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            parents: vec!["My Drive".to_string()],
        }
    }
}

/// An accepted export configuration: options plus provider settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    pub options: ExportOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_options: Option<ProviderOptions>,
}

impl ExportRequest {
    /// A request targeting the default file destination.
    pub fn to_default_file() -> Self {
        Self {
            options: ExportOptions::default(),
            provider_options: None,
        }
    }
}
