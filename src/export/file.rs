//! File-based export collaborator.
//!
//! Writes the export payload as pretty-printed JSON into a target directory,
//! using the file name from the export options.

use crate::base::error::ManagerError;
use crate::export::{DataExporter, ExportPayload, Exporting};
use std::fs;
use std::path::PathBuf;

/// A [`DataExporter`] that saves payloads to local JSON files.
///
/// # Example
/// ```rust,no_run
/// use cookiedeck::export::JsonFileExporter;
///
/// let exporter = JsonFileExporter::new("/tmp/exports");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileExporter {
    directory: PathBuf,
}

impl JsonFileExporter {
    /// Create an exporter writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn write(&self, payload: &ExportPayload) -> Result<PathBuf, ManagerError> {
        let path = self.directory.join(&payload.options.file);
        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| ManagerError::rejected(e.to_string()))?;
        fs::write(&path, json).map_err(|e| ManagerError::rejected(e.to_string()))?;
        Ok(path)
    }
}

impl DataExporter for JsonFileExporter {
    fn export_data(&self, payload: ExportPayload) -> Exporting {
        let exporter = self.clone();
        Box::pin(async move {
            let path = exporter.write(&payload)?;
            tracing::debug!(path = %path.display(), cookies = payload.data.cookies.len(), "export written");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::session::SessionCookie;
    use crate::export::{ExportData, ExportOptions, ExportProvider, SESSION_COOKIES_KIND};
    use tempfile::tempdir;

    fn payload(file: &str) -> ExportPayload {
        ExportPayload {
            options: ExportOptions {
                file: file.to_string(),
                provider: ExportProvider::File,
                kind: Some(SESSION_COOKIES_KIND.to_string()),
            },
            provider_options: None,
            data: ExportData {
                cookies: vec![SessionCookie::new("sid", "abc", "example.com", "/")],
            },
        }
    }

    #[tokio::test]
    async fn test_writes_payload_json() {
        let dir = tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path());

        exporter.export_data(payload("out.json")).await.unwrap();

        let written = fs::read_to_string(dir.path().join("out.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["options"]["kind"], SESSION_COOKIES_KIND);
        assert_eq!(value["data"]["cookies"][0]["domain"], "example.com");
    }

    #[tokio::test]
    async fn test_missing_directory_rejects() {
        let dir = tempdir().unwrap();
        let exporter = JsonFileExporter::new(dir.path().join("does-not-exist"));

        let err = exporter.export_data(payload("out.json")).await.unwrap_err();
        assert!(matches!(err, ManagerError::Rejected { .. }));
    }
}
