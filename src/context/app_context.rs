/// Application Context
///
/// Process-wide services shared by every page: the backend configuration and
/// the copy-to-clipboard capability. Provided once at the app root so that
/// any component can copy a link without prop drilling.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::services::{copy_link, Clipboard, Notifier, ToastNotifier, WebClipboard};

/// AppContext gives components access to shared services
///
/// # Example
/// ```rust
/// let ctx = use_context::<AppContext>();
/// ctx.copy_link("https://sho.rt/abc123".to_string());
/// ```
#[derive(Clone)]
pub struct AppContext {
    config: ApiConfig,
    clipboard: Rc<dyn Clipboard>,
    notifier: Rc<dyn Notifier>,
}

impl AppContext {
    pub fn new(config: ApiConfig, clipboard: Rc<dyn Clipboard>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            config,
            clipboard,
            notifier,
        }
    }

    /// Context wired to the browser clipboard and the nearest toast provider
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Rc::new(WebClipboard), Rc::new(ToastNotifier::from_context()))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Copy text in the background and alert the outcome
    pub fn copy_link(&self, text: String) {
        let clipboard = self.clipboard.clone();
        let notifier = self.notifier.clone();
        spawn(async move {
            copy_link(&*clipboard, &*notifier, &text).await;
        });
    }
}
