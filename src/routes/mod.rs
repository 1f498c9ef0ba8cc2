use dioxus::prelude::*;

pub mod home;
pub mod not_found;

use home::Home;
use not_found::NotFound;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",
            Outlet::<Route> {}
        }
    }
}
