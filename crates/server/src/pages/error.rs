use dioxus::prelude::*;

/// Error page body: status code, heading, explanation and a way home.
#[component]
pub fn ErrorPage(code: u16, heading: String, message: String) -> Element {
    rsx! {
        div { class: "error-page",
            div { class: "error-code", "{code}" }
            h2 { class: "page-title", "{heading}" }
            p { class: "page-subtitle", "{message}" }
            p {
                a { href: "/", "Back to all teams" }
            }
        }
    }
}
