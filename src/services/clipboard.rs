//! Clipboard service for copying short links
//!
//! The clipboard is a process-wide capability. Components reach it through
//! the app context instead of calling the Web Clipboard API directly, so the
//! copy flow can be exercised without a browser.

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use crate::services::notifier::Notifier;

/// Something that can place text on the system clipboard
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Clipboard backed by `navigator.clipboard`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebClipboard;

#[async_trait(?Send)]
impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        copy_to_clipboard(text)
            .await
            .map_err(|e| format!("{:?}", e))
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}

/// Copy `text` and report the outcome with a blocking alert
pub async fn copy_link<C, N>(clipboard: &C, notifier: &N, text: &str)
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            log::info!("Copied {} to clipboard", text);
            notifier.alert("Link copied!");
        }
        Err(e) => {
            log::error!("Failed to copy to clipboard: {}", e);
            notifier.alert("Failed to copy link");
        }
    }
}
