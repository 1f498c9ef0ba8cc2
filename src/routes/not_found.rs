use dioxus::prelude::*;
use super::Route;

/// Shown for any path that is not a known page, including unknown short codes
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page for {}", path);

    rsx! {
        div {
            class: "max-w-xl mx-auto px-6 py-24 text-center space-y-4",
            h1 {
                class: "text-6xl font-bold",
                "404"
            }
            p {
                class: "text-muted-foreground",
                "Oops! This link does not exist."
            }
            Link {
                to: Route::Home {},
                class: "inline-block text-primary hover:underline",
                "Back to home"
            }
        }
    }
}
