pub mod components;
pub mod document;
pub mod stylesheet;

pub use components::*;
pub use document::{footer_fragment, header_fragment, render_page};
