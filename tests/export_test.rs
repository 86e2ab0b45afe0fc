use cookiedeck::base::ManagerError;
use cookiedeck::cookie::SessionCookie;
use cookiedeck::export::{
    DataExporter, ExportOptions, ExportPayload, ExportProvider, ExportRequest, Exporting,
    JsonFileExporter, ProviderOptions, DEFAULT_EXPORT_FILE, SESSION_COOKIES_KIND,
};
use cookiedeck::manager::{CookieManager, Feedback};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn cookie(name: &str, domain: &str) -> SessionCookie {
    SessionCookie::new(name, "value", domain, "/")
}

/// Exporter double recording every payload.
#[derive(Default)]
struct StubExporter {
    payloads: Mutex<Vec<ExportPayload>>,
    fail_with: Mutex<Option<ManagerError>>,
}

impl StubExporter {
    fn failing(message: &str) -> Arc<Self> {
        let exporter = Arc::new(Self::default());
        *exporter.fail_with.lock().unwrap() = Some(ManagerError::rejected(message));
        exporter
    }

    fn payloads(&self) -> Vec<ExportPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

impl DataExporter for StubExporter {
    fn export_data(&self, payload: ExportPayload) -> Exporting {
        self.payloads.lock().unwrap().push(payload);
        let result = match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        };
        Box::pin(std::future::ready(result))
    }
}

#[derive(Default)]
struct RecordingFeedback {
    exceptions: Mutex<Vec<(String, String)>>,
    toasts: Mutex<Vec<String>>,
    cloud_saves: AtomicUsize,
}

impl Feedback for RecordingFeedback {
    fn exception(&self, kind: &str, description: &str) {
        self.exceptions
            .lock()
            .unwrap()
            .push((kind.to_string(), description.to_string()));
    }

    fn toast(&self, message: &str) {
        self.toasts.lock().unwrap().push(message.to_string());
    }

    fn cloud_save_confirmed(&self) {
        self.cloud_saves.fetch_add(1, Ordering::SeqCst);
    }
}

fn file_request(file: &str) -> ExportRequest {
    ExportRequest {
        options: ExportOptions {
            file: file.to_string(),
            provider: ExportProvider::File,
            kind: None,
        },
        provider_options: None,
    }
}

fn drive_request() -> ExportRequest {
    ExportRequest {
        options: ExportOptions {
            file: "cookies.json".to_string(),
            provider: ExportProvider::Drive,
            kind: None,
        },
        provider_options: Some(ProviderOptions::default()),
    }
}

#[tokio::test]
async fn test_export_stamps_kind_tag() {
    let exporter = Arc::new(StubExporter::default());
    let mut manager = CookieManager::new().with_exporter(exporter.clone());

    manager
        .export_items(vec![cookie("sid", "example.com")], file_request("test.json"))
        .await;

    let payloads = exporter.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].options.kind.as_deref(), Some(SESSION_COOKIES_KIND));
    assert_eq!(payloads[0].options.file, "test.json");
    assert_eq!(payloads[0].data.cookies.len(), 1);
}

#[tokio::test]
async fn test_export_without_exporter_reports_unavailable() {
    let feedback = Arc::new(RecordingFeedback::default());
    let mut manager = CookieManager::new().with_feedback(feedback.clone());
    manager.begin_export(vec![cookie("sid", "example.com")]);

    manager
        .accept_export_options(file_request("test.json"))
        .await;

    let exceptions = feedback.exceptions.lock().unwrap().clone();
    assert_eq!(exceptions[0].0, "export-unavailable");
    // The captured selection is cleared even on failure.
    assert!(manager.pending_export().is_none());
}

#[tokio::test]
async fn test_cloud_export_raises_confirmation() {
    let exporter = Arc::new(StubExporter::default());
    let feedback = Arc::new(RecordingFeedback::default());
    let mut manager = CookieManager::new()
        .with_exporter(exporter)
        .with_feedback(feedback.clone());

    manager
        .export_items(vec![cookie("sid", "example.com")], drive_request())
        .await;

    assert_eq!(feedback.cloud_saves.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_file_export_has_no_cloud_confirmation() {
    let exporter = Arc::new(StubExporter::default());
    let feedback = Arc::new(RecordingFeedback::default());
    let mut manager = CookieManager::new()
        .with_exporter(exporter)
        .with_feedback(feedback.clone());

    manager
        .export_items(vec![cookie("sid", "example.com")], file_request("a.json"))
        .await;

    assert_eq!(feedback.cloud_saves.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_export_failure_is_reported_and_selection_cleared() {
    let exporter = StubExporter::failing("disk full");
    let feedback = Arc::new(RecordingFeedback::default());
    let mut manager = CookieManager::new()
        .with_exporter(exporter)
        .with_feedback(feedback.clone());
    manager.begin_export(vec![cookie("sid", "example.com")]);

    manager
        .accept_export_options(file_request("test.json"))
        .await;

    let toasts = feedback.toasts.lock().unwrap().clone();
    assert_eq!(toasts, vec!["disk full".to_string()]);
    assert!(manager.pending_export().is_none());
}

#[tokio::test]
async fn test_export_all_to_file_uses_default_destination() {
    let exporter = Arc::new(StubExporter::default());
    let mut manager = CookieManager::new().with_exporter(exporter.clone());
    manager.on_cookie_changed(cookie("a", "a.com"));
    manager.on_cookie_changed(cookie("b", "b.com"));

    manager.export_all_to_file().await;

    let payloads = exporter.payloads();
    assert_eq!(payloads[0].options.file, DEFAULT_EXPORT_FILE);
    assert_eq!(payloads[0].options.provider, ExportProvider::File);
    assert_eq!(payloads[0].data.cookies.len(), 2);
}

#[tokio::test]
async fn test_export_all_captures_displayed_list() {
    let exporter = Arc::new(StubExporter::default());
    let mut manager = CookieManager::new().with_exporter(exporter.clone());
    manager.on_cookie_changed(cookie("a", "a.com"));

    manager.export_all();
    assert_eq!(manager.pending_export().unwrap().len(), 1);

    manager
        .accept_export_options(file_request("all.json"))
        .await;
    assert_eq!(exporter.payloads()[0].data.cookies.len(), 1);
    assert!(manager.pending_export().is_none());
}

#[tokio::test]
async fn test_file_exporter_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Arc::new(JsonFileExporter::new(dir.path()));
    let mut manager = CookieManager::new().with_exporter(exporter);
    manager.on_cookie_changed(cookie("sid", "example.com"));

    manager.export_all();
    manager
        .accept_export_options(file_request("session.json"))
        .await;

    let written = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["options"]["kind"], SESSION_COOKIES_KIND);
    assert_eq!(value["data"]["cookies"][0]["name"], "sid");
}
