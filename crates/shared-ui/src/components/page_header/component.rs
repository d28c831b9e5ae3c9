use dioxus::prelude::*;

/// Page header container: wraps a title and optional subtitle or actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        div { class: "page-header",
            {children}
        }
    }
}

/// Page title element rendered as an h2 (the site banner owns the h1).
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "page-title", {children} }
    }
}

/// Secondary line under the page title, e.g. breadcrumbs or counts.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}

/// Container for links or controls aligned to the right of the title.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
