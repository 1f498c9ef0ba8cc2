use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{LinkItem, ShortenForm};
use crate::context::app_context::AppContext;
use crate::services::{HttpShortenerApi, ToastNotifier};
use crate::stores::links::{LinkController, LinkList, PageSignals};
use crate::utils::SubmissionInput;

type PageController = LinkController<HttpShortenerApi, ToastNotifier, PageSignals>;

#[component]
pub fn Home() -> Element {
    let app = use_context::<AppContext>();

    let form = use_signal(SubmissionInput::default);
    let submitting = use_signal(|| false);
    let links = use_signal(LinkList::default);

    let controller = use_hook(|| {
        let config = app.config();
        Rc::new(PageController::new(
            HttpShortenerApi::new(config.api_base()),
            ToastNotifier::from_context(),
            PageSignals { form, submitting, links },
            config.public_origin(),
        ))
    });

    // Load the existing links once on mount
    use_effect({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            spawn(async move {
                controller.refresh_list().await;
            });
        }
    });

    let handle_submit = {
        let controller = controller.clone();
        move |_: ()| {
            let controller = controller.clone();
            let input = form.read().clone();
            spawn(async move {
                controller.submit(&input).await;
            });
        }
    };

    let handle_refresh_clicks = {
        let controller = controller.clone();
        move |short_code: String| {
            let controller = controller.clone();
            spawn(async move {
                controller.refresh_clicks(&short_code).await;
            });
        }
    };

    let handle_copy = {
        let app = app.clone();
        move |text: String| app.copy_link(text)
    };

    let list = links.read();
    let results_class = if list.results_visible() { "" } else { "hidden" };
    let count = list.len();

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-12 space-y-8",

            // Header
            header {
                class: "text-center space-y-2",
                h1 {
                    class: "text-4xl font-bold",
                    "URL Shortener"
                }
                p {
                    class: "text-muted-foreground",
                    "Turn long links into short ones you can share anywhere."
                }
            }

            ShortenForm {
                form,
                submitting: *submitting.read(),
                on_submit: handle_submit,
            }

            // Results
            section {
                id: "resultsSection",
                class: "space-y-3 {results_class}",
                h2 {
                    class: "text-xl font-semibold",
                    "Your links ({count})"
                }
                div {
                    id: "urlList",
                    class: "flex flex-col gap-3",
                    {list.entries().iter().cloned().enumerate().map(|(index, entry)| {
                        let key = format!("{}-{}", index, entry.short_code);
                        rsx! {
                            LinkItem {
                                key: "{key}",
                                entry,
                                on_copy: handle_copy.clone(),
                                on_refresh_clicks: handle_refresh_clicks.clone(),
                            }
                        }
                    })}
                }
            }
        }
    }
}
