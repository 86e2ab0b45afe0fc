//! The list controller state machine.

use crate::base::error::ManagerError;
use crate::bridge::CookieBridge;
use crate::cookie::filter::filter_cookies;
use crate::cookie::session::{index_of, SessionCookie};
use crate::export::{DataExporter, ExportData, ExportPayload, ExportRequest};
use crate::manager::events::StoreEvent;
use crate::manager::feedback::{Feedback, NoopFeedback};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Controller for a displayed list of session cookies.
///
/// Owns the list state and sequences queries, searches, deletions, exports,
/// and edit saves against the injected collaborators. Consumers read the
/// list through [`items`](CookieManager::items) and learn about failures and
/// confirmations through the [`Feedback`] sink; no operation returns an
/// error to its caller.
///
/// At most one query is meaningfully in flight. A second `query_cookies`
/// call while one is outstanding races on `loading` and `items`; this is a
/// documented limitation, not a guarded path.
pub struct CookieManager {
    bridge: Option<Arc<dyn CookieBridge>>,
    exporter: Option<Arc<dyn DataExporter>>,
    feedback: Arc<dyn Feedback>,
    store_events: Option<mpsc::UnboundedReceiver<StoreEvent>>,
    /// `None` means not yet loaded or cleared; `Some(vec![])` means loaded
    /// with zero records.
    items: Option<Vec<SessionCookie>>,
    loading: bool,
    is_search: bool,
    /// Pre-filter snapshot, present exactly while `is_search` is set.
    saved_items: Option<Vec<SessionCookie>>,
    /// Identity of a cookie whose upcoming removal should record its index,
    /// so the replacement lands at the same position. Set by `save_edit`,
    /// consumed by the removed handler.
    reinsert_anchor: Option<SessionCookie>,
    /// One-shot position hint consumed by the next changed notification for
    /// an unknown cookie.
    next_insert_position: Option<usize>,
    /// Selection captured while the export options panel is open.
    pending_export: Option<Vec<SessionCookie>>,
    default_export: ExportRequest,
}

impl Default for CookieManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieManager {
    /// Create a controller with no collaborators attached.
    pub fn new() -> Self {
        Self {
            bridge: None,
            exporter: None,
            feedback: Arc::new(NoopFeedback),
            store_events: None,
            items: None,
            loading: false,
            is_search: false,
            saved_items: None,
            reinsert_anchor: None,
            next_insert_position: None,
            pending_export: None,
            default_export: ExportRequest::to_default_file(),
        }
    }

    /// Attach the cookie storage collaborator.
    pub fn with_bridge(mut self, bridge: Arc<dyn CookieBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Attach the export collaborator.
    pub fn with_exporter(mut self, exporter: Arc<dyn DataExporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Attach the feedback sink (default: [`NoopFeedback`]).
    pub fn with_feedback(mut self, feedback: Arc<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Seed the export options panel with a non-default configuration.
    pub fn with_default_export(mut self, request: ExportRequest) -> Self {
        self.default_export = request;
        self
    }

    /// Subscribe to external store notifications. The subscription lives as
    /// long as the controller and is dropped with it.
    pub fn subscribe_store_events(&mut self, events: mpsc::UnboundedReceiver<StoreEvent>) {
        self.store_events = Some(events);
    }

    /// Drop the store notification subscription.
    pub fn unsubscribe_store_events(&mut self) {
        self.store_events = None;
    }

    /// The displayed list, if one has been loaded.
    pub fn items(&self) -> Option<&[SessionCookie]> {
        self.items.as_deref()
    }

    /// True while a listing request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a filtered view is displayed.
    pub fn is_search(&self) -> bool {
        self.is_search
    }

    /// The pre-filter snapshot, present only during a search.
    pub fn search_snapshot(&self) -> Option<&[SessionCookie]> {
        self.saved_items.as_deref()
    }

    /// The selection captured for the export options panel.
    pub fn pending_export(&self) -> Option<&[SessionCookie]> {
        self.pending_export.as_deref()
    }

    /// The configuration the export options panel should open with.
    pub fn default_export_request(&self) -> &ExportRequest {
        &self.default_export
    }

    /// `true` if a list is loaded and has at least one cookie.
    pub fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }

    /// `true` when the view should hide the list entirely. Never true while
    /// a search is displayed, even an empty one.
    pub fn list_hidden(&self) -> bool {
        if self.is_search {
            return false;
        }
        !self.has_items()
    }

    /// `true` once a query completed with no records. Only meaningful
    /// outside of search and loading phases.
    pub fn data_unavailable(&self) -> bool {
        !self.is_search && !self.loading && !self.has_items()
    }

    /// Clear the list and query the bridge from scratch.
    pub async fn reset(&mut self) {
        self.loading = false;
        self.items = None;
        self.query_cookies().await;
    }

    /// Ask the bridge for the full cookie list and replace `items` with the
    /// result. `loading` is cleared on every path out of this method.
    pub async fn query_cookies(&mut self) {
        self.loading = true;
        let Some(bridge) = self.bridge.clone() else {
            self.loading = false;
            self.report_failure(&ManagerError::BridgeUnavailable);
            return;
        };
        tracing::debug!("querying cookie bridge");
        match bridge.list_cookies().await {
            Ok(cookies) => {
                tracing::debug!(count = cookies.len(), "cookie listing complete");
                self.items = Some(cookies);
            }
            Err(err) => {
                self.items = None;
                self.report_failure(&err);
            }
        }
        self.loading = false;
    }

    /// Filter the displayed list by a case-insensitive substring match on
    /// name, domain, value, and path.
    ///
    /// The filter always runs against the pre-search snapshot, so repeated
    /// queries refine from the original list, not from each other. An empty
    /// `text` reverts the search. A query with no list loaded is a no-op.
    pub async fn query(&mut self, text: &str) {
        if text.is_empty() {
            self.reset_search().await;
            return;
        }
        let filtered = {
            let source = self.saved_items.as_deref().or(self.items.as_deref());
            let Some(source) = source else { return };
            if source.is_empty() {
                return;
            }
            filter_cookies(source, text)
        };
        self.is_search = true;
        if self.saved_items.is_none() {
            self.saved_items = self.items.take();
        }
        tracing::debug!(query = %text, matches = filtered.len(), "cookie list filtered");
        self.items = Some(filtered);
    }

    /// Restore the pre-search list. Queries the bridge again when the
    /// restored list is absent or empty.
    async fn reset_search(&mut self) {
        self.items = self.saved_items.take();
        self.is_search = false;
        if !self.has_items() {
            self.query_cookies().await;
        }
    }

    /// Ask the bridge to remove the given cookies.
    ///
    /// The displayed list is not touched here; the store's removed
    /// notifications are what shrink it. This is the single removal
    /// primitive behind bulk delete, detail-panel delete, delete-all, and
    /// the delete-before-reinsert step of [`save_edit`](Self::save_edit).
    pub async fn delete(&mut self, cookies: Vec<SessionCookie>) {
        let Some(bridge) = self.bridge.clone() else {
            self.report_failure(&ManagerError::BridgeUnavailable);
            return;
        };
        tracing::debug!(count = cookies.len(), "removing cookies");
        if let Err(err) = bridge.remove_cookies(cookies).await {
            self.report_failure(&err);
        }
    }

    /// Delete every displayed cookie, gated on an explicit confirmation.
    /// A no-op when unconfirmed or when the list is absent or empty.
    pub async fn delete_all(&mut self, confirmed: bool) {
        if !confirmed {
            return;
        }
        let Some(items) = self.items.clone() else {
            return;
        };
        if items.is_empty() {
            return;
        }
        self.delete(items).await;
    }

    /// Capture a selection for the export options panel.
    pub fn begin_export(&mut self, items: Vec<SessionCookie>) {
        self.pending_export = Some(items);
    }

    /// Capture the whole displayed list for the export options panel.
    pub fn export_all(&mut self) {
        self.pending_export = Some(self.items.clone().unwrap_or_default());
    }

    /// Discard the captured export selection.
    pub fn cancel_export(&mut self) {
        self.pending_export = None;
    }

    /// Export the captured selection with the configuration accepted in the
    /// export options panel.
    pub async fn accept_export_options(&mut self, request: ExportRequest) {
        let cookies = self.pending_export.clone().unwrap_or_default();
        self.export_items(cookies, request).await;
    }

    /// Export the whole displayed list straight to the default file
    /// destination, skipping the options panel.
    pub async fn export_all_to_file(&mut self) {
        let cookies = self.items.clone().unwrap_or_default();
        self.export_items(cookies, ExportRequest::to_default_file())
            .await;
    }

    /// Hand a cookie set to the export collaborator.
    ///
    /// Stamps the fixed session-cookies `kind` tag onto the options first.
    /// A completed export to a cloud provider raises the cloud-saved
    /// confirmation. The captured export selection is cleared on every path
    /// out of this method.
    pub async fn export_items(&mut self, cookies: Vec<SessionCookie>, request: ExportRequest) {
        let options = request.options.stamped();
        let is_cloud = options.provider.is_cloud();
        let Some(exporter) = self.exporter.clone() else {
            self.pending_export = None;
            self.report_failure(&ManagerError::ExportUnavailable);
            return;
        };
        tracing::debug!(count = cookies.len(), file = %options.file, "exporting cookies");
        let payload = ExportPayload {
            options,
            provider_options: request.provider_options,
            data: ExportData { cookies },
        };
        match exporter.export_data(payload).await {
            Ok(()) => {
                if is_cloud {
                    self.feedback.cloud_save_confirmed();
                }
            }
            Err(err) => self.report_failure(&err),
        }
        self.pending_export = None;
    }

    /// Persist an edited cookie through the bridge.
    ///
    /// `old_cookie` is the record that was loaded into the editor, `None`
    /// for a newly created one. When the edit changed the identity triple,
    /// the stale record is deleted first (awaited), and its removal records
    /// the list position the replacement should re-enter at. The displayed
    /// list is updated by the store's later changed notification, not here.
    pub async fn save_edit(&mut self, cookie: SessionCookie, old_cookie: Option<SessionCookie>) {
        if let Some(old) = old_cookie {
            if !old.same_identity(&cookie) {
                self.reinsert_anchor = Some(old.clone());
                self.delete(vec![old]).await;
            }
        }
        let Some(bridge) = self.bridge.clone() else {
            self.report_failure(&ManagerError::BridgeUnavailable);
            return;
        };
        tracing::debug!(name = %cookie.name, domain = %cookie.domain, "saving cookie");
        if let Err(err) = bridge.update_cookie(cookie).await {
            self.report_failure(&ManagerError::rejected(format!("Cookie save error: {err}")));
        }
    }

    /// Apply a removed notification from the store.
    ///
    /// Cancelable removals are still being negotiated and are ignored. A
    /// cookie not on the list is a no-op. When the removed cookie matches
    /// the reinsert anchor set by [`save_edit`](Self::save_edit), its index
    /// becomes the one-shot insert position for the upcoming replacement.
    pub fn on_cookie_removed(&mut self, cookie: &SessionCookie, cancelable: bool) {
        if cancelable {
            return;
        }
        let Some(items) = self.items.as_mut() else {
            return;
        };
        let Some(index) = index_of(items, cookie) else {
            return;
        };
        if self
            .reinsert_anchor
            .as_ref()
            .is_some_and(|anchor| anchor.same_identity(cookie))
        {
            self.reinsert_anchor = None;
            self.next_insert_position = Some(index);
        }
        items.remove(index);
        tracing::debug!(name = %cookie.name, domain = %cookie.domain, index, "cookie removed from list");
        self.feedback.selection_cleared();
    }

    /// Apply a changed notification from the store.
    ///
    /// A known cookie is replaced in place. An unknown one lands at the
    /// pending insert position when one is armed, otherwise at the end; with
    /// no list loaded it becomes a fresh single-element list.
    pub fn on_cookie_changed(&mut self, cookie: SessionCookie) {
        match self.items.as_mut() {
            None => {
                self.items = Some(vec![cookie]);
            }
            Some(items) => match index_of(items, &cookie) {
                Some(index) => items[index] = cookie,
                None => {
                    if let Some(position) = self.next_insert_position.take() {
                        let position = position.min(items.len());
                        items.insert(position, cookie);
                    } else {
                        items.push(cookie);
                    }
                }
            },
        }
    }

    /// Dispatch one store notification to its handler.
    pub fn apply_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Removed { cookie, cancelable } => {
                self.on_cookie_removed(&cookie, cancelable)
            }
            StoreEvent::Changed { cookie } => self.on_cookie_changed(cookie),
        }
    }

    /// Drain the store-event subscription, applying every queued event
    /// synchronously in delivery order.
    pub fn pump_store_events(&mut self) {
        let Some(events) = self.store_events.as_mut() else {
            return;
        };
        let mut batch = Vec::new();
        while let Ok(event) = events.try_recv() {
            batch.push(event);
        }
        for event in batch {
            self.apply_store_event(event);
        }
    }

    /// Convert a failure into an analytics report and a transient user
    /// message. Failures never propagate to the operation's caller.
    fn report_failure(&self, err: &ManagerError) {
        let message = err.to_string();
        tracing::warn!(kind = err.kind(), error = %message, "cookie manager operation failed");
        self.feedback.exception(err.kind(), &message);
        self.feedback.toast(&message);
    }
}

impl fmt::Debug for CookieManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieManager")
            .field("items", &self.items.as_ref().map(|i| i.len()))
            .field("loading", &self.loading)
            .field("is_search", &self.is_search)
            .field("has_bridge", &self.bridge.is_some())
            .field("has_exporter", &self.exporter.is_some())
            .finish_non_exhaustive()
    }
}
