use dioxus_primitives::toast::{consume_toast, ToastOptions, Toasts};
use std::time::Duration;

/// How long a banner stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient banner, as handed to the toast stack
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

impl Banner {
    pub fn new(message: &str, kind: ToastKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            duration: TOAST_DURATION,
        }
    }

    pub fn options(&self) -> ToastOptions {
        ToastOptions::new().duration(self.duration).permanent(false)
    }
}

/// Somewhere banners can be stacked
pub trait ToastSink {
    fn show(&self, banner: Banner);
}

impl ToastSink for Toasts {
    fn show(&self, banner: Banner) {
        let options = banner.options();
        match banner.kind {
            ToastKind::Success => self.success(banner.message, options),
            ToastKind::Error => self.error(banner.message, options),
        }
    }
}

/// User-facing feedback channel
///
/// `notify` is a transient banner that never interrupts the user.
/// `alert` blocks until dismissed.
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);

    fn alert(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str, kind: ToastKind) {
        (**self).notify(message, kind)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

/// Notifier that stacks banners on the toast provider and alerts through `window.alert`
#[derive(Clone)]
pub struct ToastNotifier<S = Toasts> {
    toasts: S,
}

impl ToastNotifier {
    /// Bind to the nearest `ToastProvider`. Must be called inside its subtree.
    pub fn from_context() -> Self {
        Self::new(consume_toast())
    }
}

impl<S: ToastSink> ToastNotifier<S> {
    pub fn new(toasts: S) -> Self {
        Self { toasts }
    }
}

impl<S: ToastSink> Notifier for ToastNotifier<S> {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.toasts.show(Banner::new(message, kind));
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("window.alert failed: {:?}", e);
                }
                return;
            }
        }
        log::warn!("alert: {}", message);
    }
}
