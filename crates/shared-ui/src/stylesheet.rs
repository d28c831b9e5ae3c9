/// URL every page links the stylesheet from.
pub const STYLESHEET_HREF: &str = "/css/style.css";

/// Content type the stylesheet is served with.
pub const STYLESHEET_CONTENT_TYPE: &str = "text/css; charset=utf-8";

/// The site stylesheet, compiled into the binary.
pub const STYLESHEET: &str = include_str!("../assets/style.css");
