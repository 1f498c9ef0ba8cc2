// Services
// Adapters for everything outside the page: the shortening backend,
// the clipboard, and user notifications

pub mod clipboard;
pub mod notifier;
pub mod shortener_api;

pub use clipboard::{copy_link, Clipboard, WebClipboard};
pub use notifier::{Notifier, ToastNotifier};
pub use shortener_api::{CreateShortLinkRequest, HttpShortenerApi, ShortLinkRecord, ShortenerApi};
