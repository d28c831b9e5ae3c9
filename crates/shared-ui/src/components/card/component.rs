use dioxus::prelude::*;

/// Join the base class with an optional caller-supplied one.
fn with_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// A bordered card container used for team and player listings.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    let class = with_class("card", &class);
    rsx! {
        div { class: "{class}",
            {children}
        }
    }
}

/// Card whose whole surface is a link.
#[component]
pub fn LinkCard(href: String, #[props(default)] class: String, children: Element) -> Element {
    let class = with_class("card card-link", &class);
    rsx! {
        a { class: "{class}", href: "{href}",
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
