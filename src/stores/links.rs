//! Short link list and the controller that drives it
//!
//! `LinkList` is the view model the home page renders. `LinkController`
//! binds the shorten form to the backend: it validates input, calls the API,
//! updates the list and reports the outcome. The controller only talks to
//! the page through the `LinkView` trait, so its behavior can be driven
//! without a browser.

use dioxus::prelude::*;

use crate::services::{Notifier, ShortLinkRecord, ShortenerApi};
use crate::services::notifier::ToastKind;
use crate::utils::time::{format_datetime, is_expired};
use crate::utils::validation::{parse_submission, SubmissionInput};

/// Build the public short URL for a code
pub fn build_short_url(origin: &str, short_code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), short_code)
}

/// One rendered row of the results list
#[derive(Clone, Debug, PartialEq)]
pub struct LinkEntry {
    pub short_code: String,
    /// `<origin>/<short_code>`, computed on the client
    pub short_url: String,
    pub original_url: String,
    /// Absolute short URL as reported by the backend, if it sent one
    pub backend_short_url: Option<String>,
    pub click_count: Option<u64>,
    pub created_at: Option<String>,
    pub expires_at: Option<String>,
    pub active: bool,
}

impl LinkEntry {
    pub fn from_record(record: &ShortLinkRecord, origin: &str) -> Self {
        let expired = record.expires_at.as_ref().map(is_expired).unwrap_or(false);

        Self {
            short_code: record.short_code.clone(),
            short_url: build_short_url(origin, &record.short_code),
            original_url: record.original_url.clone(),
            backend_short_url: record.short_url.clone(),
            click_count: record.click_count,
            created_at: record.created_at.as_ref().map(format_datetime),
            expires_at: record.expires_at.as_ref().map(format_datetime),
            active: record.is_active.unwrap_or(true) && !expired,
        }
    }
}

/// Results list, index 0 is shown on top
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkList {
    entries: Vec<LinkEntry>,
}

impl LinkList {
    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The results section is shown exactly when there is something to show
    pub fn results_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn prepend(&mut self, entry: LinkEntry) {
        self.entries.insert(0, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the list with the backend collection, newest first
    ///
    /// The collection arrives oldest first; prepending each record in turn
    /// leaves the last one on top.
    pub fn rebuild(&mut self, records: &[ShortLinkRecord], origin: &str) {
        self.clear();
        for record in records {
            self.prepend(LinkEntry::from_record(record, origin));
        }
    }

    /// Update the counter of every entry with this code. Returns false if none matched.
    pub fn set_click_count(&mut self, short_code: &str, clicks: u64) -> bool {
        let mut found = false;
        for entry in self.entries.iter_mut().filter(|e| e.short_code == short_code) {
            entry.click_count = Some(clicks);
            found = true;
        }
        found
    }
}

/// The parts of the page the controller writes to
pub trait LinkView {
    /// Disable (true) or re-enable (false) the submit button
    fn set_submitting(&self, submitting: bool);

    /// Empty the URL field and the advanced options
    fn clear_input(&self);

    fn update_links<F: FnOnce(&mut LinkList)>(&self, f: F);
}

/// Holds the submit button disabled until dropped
///
/// Dropping also covers a submission future that is abandoned mid-flight.
struct SubmittingGuard<'a, V: LinkView> {
    view: &'a V,
}

impl<'a, V: LinkView> SubmittingGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_submitting(true);
        Self { view }
    }
}

impl<V: LinkView> Drop for SubmittingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submitting(false);
    }
}

/// Drives the shorten form and the results list
pub struct LinkController<A, N, V> {
    api: A,
    notifier: N,
    view: V,
    origin: String,
}

impl<A, N, V> LinkController<A, N, V>
where
    A: ShortenerApi,
    N: Notifier,
    V: LinkView,
{
    pub fn new(api: A, notifier: N, view: V, origin: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            view,
            origin: origin.into(),
        }
    }

    /// Shorten a URL with no advanced options
    pub async fn submit_url(&self, raw_input: &str) {
        self.submit(&SubmissionInput::from_url(raw_input)).await
    }

    /// Validate the form, create the link, and reconcile the list
    ///
    /// Invalid input is reported with an alert and never reaches the network.
    /// The submit button is re-enabled on every exit path.
    pub async fn submit(&self, input: &SubmissionInput) {
        let request = match parse_submission(input) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Rejected submission {:?}: {}", input.url, e);
                self.notifier.alert(&e.to_string());
                return;
            }
        };

        let _submitting = SubmittingGuard::engage(&self.view);

        match self.api.create(&request).await {
            Ok(record) => {
                log::info!("Shortened {} to {}", record.original_url, record.short_code);
                self.view.clear_input();
                self.render_record(&record);
                self.refresh_list().await;
                self.notifier.notify("URL shortened successfully!", ToastKind::Success);
            }
            Err(e) => {
                log::error!("Failed to shorten URL: {}", e);
                self.notifier.notify("Failed to shorten URL", ToastKind::Error);
            }
        }
    }

    /// Reload the full collection; failures leave the current list in place
    pub async fn refresh_list(&self) {
        match self.api.list().await {
            Ok(records) => {
                log::info!("Loaded {} short links", records.len());
                self.view.update_links(|links| links.rebuild(&records, &self.origin));
            }
            Err(e) => {
                log::error!("Failed to load short links: {}", e);
            }
        }
    }

    /// Put one record on top of the list
    pub fn render_record(&self, record: &ShortLinkRecord) {
        let entry = LinkEntry::from_record(record, &self.origin);
        self.view.update_links(|links| links.prepend(entry));
    }

    /// Fetch the latest click counter for one link
    pub async fn refresh_clicks(&self, short_code: &str) {
        match self.api.click_count(short_code).await {
            Ok(clicks) => {
                self.view.update_links(|links| {
                    if !links.set_click_count(short_code, clicks) {
                        log::debug!("Link {} left the list before its clicks arrived", short_code);
                    }
                });
            }
            Err(e) => {
                log::warn!("Failed to load clicks for {}: {}", short_code, e);
            }
        }
    }
}

/// `LinkView` over the home page's signals
#[derive(Clone, Copy, PartialEq)]
pub struct PageSignals {
    pub form: Signal<SubmissionInput>,
    pub submitting: Signal<bool>,
    pub links: Signal<LinkList>,
}

impl LinkView for PageSignals {
    fn set_submitting(&self, submitting: bool) {
        let mut signal = self.submitting;
        signal.set(submitting);
    }

    fn clear_input(&self) {
        let mut form = self.form;
        form.set(SubmissionInput::default());
    }

    fn update_links<F: FnOnce(&mut LinkList)>(&self, f: F) {
        let mut links = self.links;
        let mut guard = links.write();
        f(&mut *guard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifier::testing::RecordingNotifier;
    use crate::services::shortener_api::ApiError;
    use crate::services::CreateShortLinkRequest;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    const ORIGIN: &str = "https://sho.rt";

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Create(CreateShortLinkRequest),
        List,
        Clicks(String),
    }

    #[derive(Default)]
    struct FakeApi {
        stored: RefCell<Vec<ShortLinkRecord>>,
        calls: RefCell<Vec<Call>>,
        fail_create: bool,
        fail_list: bool,
        hang_create: bool,
        next_code: Cell<u32>,
    }

    impl FakeApi {
        fn with_records(records: Vec<ShortLinkRecord>) -> Self {
            Self {
                stored: RefCell::new(records),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ShortenerApi for FakeApi {
        async fn create(&self, request: &CreateShortLinkRequest) -> Result<ShortLinkRecord, ApiError> {
            self.calls.borrow_mut().push(Call::Create(request.clone()));
            if self.hang_create {
                futures::future::pending::<()>().await;
            }
            if self.fail_create {
                return Err(ApiError::Status { status: 400, status_text: "Bad Request".to_string() });
            }
            let code = request.custom_code.clone().unwrap_or_else(|| {
                self.next_code.set(self.next_code.get() + 1);
                format!("code{}", self.next_code.get())
            });
            let record = ShortLinkRecord::new(request.original_url.clone(), code);
            self.stored.borrow_mut().push(record.clone());
            Ok(record)
        }

        async fn list(&self) -> Result<Vec<ShortLinkRecord>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list {
                return Err(ApiError::Request("offline".to_string()));
            }
            Ok(self.stored.borrow().clone())
        }

        async fn click_count(&self, short_code: &str) -> Result<u64, ApiError> {
            self.calls.borrow_mut().push(Call::Clicks(short_code.to_string()));
            if short_code == "missing" {
                return Err(ApiError::Status { status: 404, status_text: "Not Found".to_string() });
            }
            Ok(7)
        }
    }

    #[derive(Default)]
    struct FakeView {
        links: RefCell<LinkList>,
        submitting: RefCell<Vec<bool>>,
        cleared: Cell<usize>,
    }

    impl FakeView {
        fn codes(&self) -> Vec<String> {
            self.links.borrow().entries().iter().map(|e| e.short_code.clone()).collect()
        }

        fn is_submitting(&self) -> bool {
            self.submitting.borrow().last().copied().unwrap_or(false)
        }
    }

    impl LinkView for &FakeView {
        fn set_submitting(&self, submitting: bool) {
            self.submitting.borrow_mut().push(submitting);
        }

        fn clear_input(&self) {
            self.cleared.set(self.cleared.get() + 1);
        }

        fn update_links<F: FnOnce(&mut LinkList)>(&self, f: F) {
            f(&mut *self.links.borrow_mut());
        }
    }

    fn records(codes: &[&str]) -> Vec<ShortLinkRecord> {
        codes
            .iter()
            .map(|c| ShortLinkRecord::new(format!("https://example.com/{}", c), *c))
            .collect()
    }

    #[test]
    fn test_short_url_is_origin_slash_code() {
        assert_eq!(build_short_url("https://sho.rt", "abc"), "https://sho.rt/abc");
        assert_eq!(build_short_url("https://sho.rt/", "abc"), "https://sho.rt/abc");

        let entry = LinkEntry::from_record(&ShortLinkRecord::new("https://example.com", "Xy9"), ORIGIN);
        assert_eq!(entry.short_url, "https://sho.rt/Xy9");
        assert_eq!(entry.original_url, "https://example.com");
        assert!(entry.active);
    }

    #[test]
    fn test_inactive_record() {
        let mut record = ShortLinkRecord::new("https://example.com", "abc");
        record.is_active = Some(false);
        assert!(!LinkEntry::from_record(&record, ORIGIN).active);
    }

    #[test]
    fn test_rebuild_newest_first() {
        let mut list = LinkList::default();
        list.rebuild(&records(&["a", "b", "c"]), ORIGIN);
        let codes: Vec<_> = list.entries().iter().map(|e| e.short_code.as_str()).collect();
        assert_eq!(codes, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_results_visible_iff_non_empty() {
        let mut list = LinkList::default();
        assert!(!list.results_visible());

        list.rebuild(&records(&["a"]), ORIGIN);
        assert!(list.results_visible());

        list.rebuild(&[], ORIGIN);
        assert!(!list.results_visible());
        assert!(list.is_empty());
    }

    #[test]
    fn test_set_click_count() {
        let mut list = LinkList::default();
        list.rebuild(&records(&["a", "b"]), ORIGIN);
        assert!(list.set_click_count("a", 12));
        assert!(!list.set_click_count("zzz", 1));
        assert_eq!(list.entries()[1].click_count, Some(12));
        assert_eq!(list.entries()[0].click_count, None);
    }

    #[test]
    fn test_invalid_input_makes_no_calls() {
        let api = FakeApi::with_records(records(&["a"]));
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.refresh_list());
        let before = view.links.borrow().clone();
        let calls_before = api.calls().len();

        for raw in ["not a url", "", "   ", "example.com", "ftp://example.com/file"] {
            block_on(controller.submit_url(raw));
        }

        assert_eq!(api.calls().len(), calls_before);
        assert_eq!(*view.links.borrow(), before);
        assert_eq!(notifier.alerts().len(), 5);
        assert_eq!(notifier.alerts()[0], "Invalid URL. Use http:// or https://");
        assert_eq!(notifier.alerts()[1], "Please enter a URL");
        assert!(view.submitting.borrow().is_empty());
    }

    #[test]
    fn test_successful_submit_posts_then_refreshes() {
        let api = FakeApi::with_records(records(&["old1", "old2"]));
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.submit_url("  https://example.com/a "));

        assert_eq!(
            api.calls(),
            vec![
                Call::Create(CreateShortLinkRequest::new("https://example.com/a")),
                Call::List,
            ]
        );
        assert_eq!(view.codes(), vec!["code1", "old2", "old1"]);

        let top = view.links.borrow().entries()[0].clone();
        assert_eq!(top.short_url, "https://sho.rt/code1");
        assert_eq!(top.original_url, "https://example.com/a");

        assert_eq!(view.cleared.get(), 1);
        assert_eq!(*view.submitting.borrow(), vec![true, false]);
        assert_eq!(
            notifier.toasts(),
            vec![("URL shortened successfully!".to_string(), ToastKind::Success)]
        );
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_submit_with_options() {
        let api = FakeApi::default();
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        let input = SubmissionInput {
            url: "https://example.com".to_string(),
            custom_code: "promo".to_string(),
            expires_in_days: "7".to_string(),
        };
        block_on(controller.submit(&input));

        match &api.calls()[0] {
            Call::Create(request) => {
                assert_eq!(request.custom_code.as_deref(), Some("promo"));
                assert_eq!(request.expires_in_days, Some(7));
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(view.codes(), vec!["promo"]);
    }

    #[test]
    fn test_failed_create_reports_and_reenables() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::with_records(records(&["a"]))
        };
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.refresh_list());
        block_on(controller.submit_url("https://example.com/a"));

        assert_eq!(view.codes(), vec!["a"]);
        assert_eq!(view.cleared.get(), 0);
        assert!(!view.is_submitting());
        assert_eq!(*view.submitting.borrow(), vec![true, false]);
        assert_eq!(
            notifier.toasts(),
            vec![("Failed to shorten URL".to_string(), ToastKind::Error)]
        );
    }

    #[test]
    fn test_create_ok_but_refresh_fails_keeps_new_entry() {
        let api = FakeApi {
            fail_list: true,
            ..FakeApi::default()
        };
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.submit_url("https://example.com/a"));

        assert_eq!(view.codes(), vec!["code1"]);
        assert!(view.links.borrow().results_visible());
        assert_eq!(notifier.toasts()[0].1, ToastKind::Success);
        assert!(!view.is_submitting());
    }

    #[test]
    fn test_abandoned_submit_reenables() {
        let api = FakeApi {
            hang_create: true,
            ..FakeApi::default()
        };
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        // Polls once, hits the pending request, then drops the future
        assert!(controller.submit_url("https://example.com/a").now_or_never().is_none());

        assert_eq!(*view.submitting.borrow(), vec![true, false]);
        assert!(view.codes().is_empty());
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn test_refresh_failure_is_silent() {
        let api = FakeApi::with_records(records(&["a", "b"]));
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();

        {
            let controller = LinkController::new(&api, &notifier, &view, ORIGIN);
            block_on(controller.refresh_list());
        }
        assert_eq!(view.codes(), vec!["b", "a"]);

        let failing = FakeApi {
            fail_list: true,
            ..FakeApi::default()
        };
        let controller = LinkController::new(&failing, &notifier, &view, ORIGIN);
        block_on(controller.refresh_list());

        assert_eq!(view.codes(), vec!["b", "a"]);
        assert!(notifier.toasts().is_empty());
        assert!(notifier.alerts().is_empty());
    }

    #[test]
    fn test_refresh_empty_hides_results() {
        let api = FakeApi::default();
        let view = FakeView::default();
        view.links.borrow_mut().prepend(LinkEntry::from_record(&records(&["stale"])[0], ORIGIN));
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.refresh_list());

        assert!(!view.links.borrow().results_visible());
    }

    #[test]
    fn test_refresh_clicks() {
        let api = FakeApi::with_records(records(&["a", "missing"]));
        let view = FakeView::default();
        let notifier = RecordingNotifier::default();
        let controller = LinkController::new(&api, &notifier, &view, ORIGIN);

        block_on(controller.refresh_list());
        block_on(controller.refresh_clicks("a"));
        block_on(controller.refresh_clicks("missing"));

        let links = view.links.borrow();
        let a = links.entries().iter().find(|e| e.short_code == "a").unwrap();
        let missing = links.entries().iter().find(|e| e.short_code == "missing").unwrap();
        assert_eq!(a.click_count, Some(7));
        assert_eq!(missing.click_count, None);
        assert!(notifier.toasts().is_empty());
    }
}
