use dioxus::prelude::*;
use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, LoaderIcon, WandIcon};
use crate::utils::validation::CUSTOM_CODE_EXAMPLE;
use crate::utils::SubmissionInput;

/// URL input, submit button and the optional custom code / expiry fields
#[component]
pub fn ShortenForm(
    /// Form contents, cleared by the controller after a successful submit
    form: Signal<SubmissionInput>,
    /// True while a create request is in flight
    submitting: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let mut form = form;
    let mut show_options = use_signal(|| false);

    let url_value = form.read().url.clone();
    let custom_code_value = form.read().custom_code.clone();
    let expiry_value = form.read().expires_in_days.clone();
    let options_open = *show_options.read();

    rsx! {
        div {
            class: "bg-card border border-border rounded-xl p-6 shadow-sm space-y-4",

            div {
                class: "flex flex-col sm:flex-row gap-3",

                input {
                    r#type: "url",
                    id: "urlInput",
                    placeholder: "Paste a long URL (https://...)",
                    autocomplete: "off",
                    value: "{url_value}",
                    class: "flex-1 px-4 py-3 bg-background border border-border rounded-lg text-base focus:outline-none focus:ring-2 focus:ring-primary",
                    oninput: move |evt| form.write().url = evt.value(),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && !submitting {
                            on_submit.call(());
                        }
                    },
                }

                button {
                    id: "shortenBtn",
                    class: "px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition flex items-center justify-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed",
                    disabled: submitting,
                    onclick: move |_| on_submit.call(()),

                    if submitting {
                        LoaderIcon { class: "w-5 h-5 animate-spin" }
                        span { "Shortening..." }
                    } else {
                        WandIcon { class: "w-5 h-5" }
                        span { "Shorten URL" }
                    }
                }
            }

            // Advanced options
            button {
                class: "text-sm text-muted-foreground hover:text-foreground flex items-center gap-1 transition",
                onclick: move |_| show_options.set(!options_open),
                if options_open {
                    ChevronUpIcon { class: "w-4 h-4" }
                } else {
                    ChevronDownIcon { class: "w-4 h-4" }
                }
                "Advanced options"
            }

            if options_open {
                div {
                    class: "grid sm:grid-cols-2 gap-3",

                    label {
                        class: "flex flex-col gap-1 text-sm",
                        span { class: "text-muted-foreground", "Custom code (letters and digits)" }
                        input {
                            r#type: "text",
                            placeholder: CUSTOM_CODE_EXAMPLE,
                            value: "{custom_code_value}",
                            class: "px-3 py-2 bg-background border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary",
                            oninput: move |evt| form.write().custom_code = evt.value(),
                        }
                    }

                    label {
                        class: "flex flex-col gap-1 text-sm",
                        span { class: "text-muted-foreground", "Expires in (days)" }
                        input {
                            r#type: "number",
                            min: "1",
                            placeholder: "Never",
                            value: "{expiry_value}",
                            class: "px-3 py-2 bg-background border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-primary",
                            oninput: move |evt| form.write().expires_in_days = evt.value(),
                        }
                    }
                }
            }
        }
    }
}
