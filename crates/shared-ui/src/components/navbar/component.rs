use dioxus::prelude::*;

/// Site navigation bar. Items are rendered as a flat list.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav { class: "site-nav",
            ul { class: "site-nav-list", {children} }
        }
    }
}

/// A single navigation link.
#[component]
pub fn NavbarItem(href: String, children: Element) -> Element {
    rsx! {
        li { class: "site-nav-item",
            a { href: "{href}", {children} }
        }
    }
}
