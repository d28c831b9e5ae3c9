//! Shared page chrome.
//!
//! Every page is assembled as [`header_fragment`], page-specific markup, then
//! [`footer_fragment`]. The header opens `<main class="container">` and leaves
//! it open; the footer is the only thing that closes it.

use dioxus::prelude::*;
use shared_types::DEFAULT_SITE_TITLE;

use crate::components::{Navbar, NavbarItem};
use crate::stylesheet::STYLESHEET_HREF;

/// The title a page ends up with: its own, or the site default.
pub fn resolve_title(title: Option<&str>) -> &str {
    title.unwrap_or(DEFAULT_SITE_TITLE)
}

/// Site banner with the navigation bar. The nav holds a single Home link.
#[component]
pub fn SiteBanner() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container site-header-inner",
                h1 { class: "site-title", "{DEFAULT_SITE_TITLE}" }
                Navbar {
                    NavbarItem { href: "/", "Home" }
                }
            }
        }
    }
}

/// Document `<head>`: charset, viewport, title and the stylesheet link.
#[component]
fn DocumentHead(title: String) -> Element {
    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            title { "{title}" }
            link { rel: "stylesheet", href: STYLESHEET_HREF }
        }
    }
}

/// Document prologue, banner and the opening of the main container.
pub fn header_fragment(title: Option<&str>) -> String {
    let title = resolve_title(title).to_string();
    let head = dioxus_ssr::render_element(rsx! { DocumentHead { title } });
    let banner = dioxus_ssr::render_element(rsx! { SiteBanner {} });
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         {head}\n\
         <body>\n\
         {banner}\n\
         <main class=\"container\">\n"
    )
}

/// Closes the main container opened by [`header_fragment`] and the document.
pub fn footer_fragment() -> String {
    format!(
        "</main>\n\
         <footer class=\"site-footer\">\n\
         <div class=\"container\">{DEFAULT_SITE_TITLE}</div>\n\
         </footer>\n\
         </body>\n\
         </html>\n"
    )
}

/// Render a full page: header, the given body rendered server-side, footer.
pub fn render_page(title: Option<&str>, body: Element) -> String {
    let mut html = header_fragment(title);
    html.push_str(&dioxus_ssr::render_element(body));
    html.push('\n');
    html.push_str(&footer_fragment());
    html
}
