use dioxus::prelude::*;
use crate::components::icons::{ChartIcon, CopyIcon, LinkIcon, RefreshIcon};
use crate::stores::links::LinkEntry;
use crate::utils::{format_clicks, truncate_url};

/// Longest original URL shown before truncating; the full value stays in the tooltip
const ORIGINAL_URL_DISPLAY_CHARS: usize = 60;

/// One row of the results list
///
/// All values are rendered as text nodes and attributes, never as markup.
#[component]
pub fn LinkItem(
    entry: LinkEntry,
    on_copy: EventHandler<String>,
    on_refresh_clicks: EventHandler<String>,
) -> Element {
    let short_url = entry.short_url.clone();
    let short_url_copy = entry.short_url.clone();
    let short_code = entry.short_code.clone();
    let original_display = truncate_url(&entry.original_url, ORIGINAL_URL_DISPLAY_CHARS);
    let short_title = entry.backend_short_url.clone().unwrap_or_else(|| entry.short_url.clone());
    let row_class = if entry.active { "" } else { "opacity-60" };

    rsx! {
        div {
            class: "url-item bg-card border border-border rounded-lg p-4 flex flex-col gap-2 {row_class}",

            div {
                class: "short-url flex items-center gap-2 font-semibold",
                LinkIcon { class: "w-4 h-4 text-primary flex-shrink-0" }
                a {
                    href: "{short_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{short_title}",
                    class: "text-primary hover:underline break-all",
                    "{short_url}"
                }
                if !entry.active {
                    span {
                        class: "text-xs px-2 py-0.5 rounded-full bg-muted text-muted-foreground",
                        "Inactive"
                    }
                }
            }

            div {
                class: "original-url text-sm text-muted-foreground truncate",
                title: "{entry.original_url}",
                "{original_display}"
            }

            div {
                class: "flex flex-wrap items-center justify-between gap-2",

                // Metadata
                div {
                    class: "flex items-center gap-3 text-xs text-muted-foreground",
                    if let Some(clicks) = entry.click_count {
                        span {
                            class: "flex items-center gap-1",
                            ChartIcon { class: "w-3 h-3" }
                            {format_clicks(clicks)}
                        }
                    }
                    if let Some(created) = entry.created_at.clone() {
                        span { "Created {created}" }
                    }
                    if let Some(expires) = entry.expires_at.clone() {
                        span { "Expires {expires}" }
                    }
                }

                div {
                    class: "url-actions flex items-center gap-2",
                    button {
                        class: "p-2 rounded-lg hover:bg-accent transition text-muted-foreground",
                        title: "Refresh click count",
                        onclick: move |_| on_refresh_clicks.call(short_code.clone()),
                        RefreshIcon { class: "w-4 h-4" }
                    }
                    button {
                        class: "btn-copy px-3 py-2 rounded-lg bg-secondary hover:bg-secondary/80 transition flex items-center gap-2 text-sm",
                        onclick: move |_| on_copy.call(short_url_copy.clone()),
                        CopyIcon { class: "w-4 h-4" }
                        "Copy"
                    }
                }
            }
        }
    }
}
