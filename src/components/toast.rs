use dioxus::prelude::*;
use dioxus_primitives::toast;

/// Hosts the toast stack for everything rendered inside it
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            {children}
        }
    }
}
