//! Stylesheet and client script shipped with every site.

const STYLESHEET: &str = include_str!("../static/style.css");
const SITE_SCRIPT: &str = include_str!("../static/site.js");

pub fn stylesheet() -> &'static str {
    STYLESHEET
}

/// Theme toggle, live blog search and the statistics popup loader
pub fn site_script() -> &'static str {
    SITE_SCRIPT
}

/// Content type for a generated asset path
pub fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_handles_theme_and_search() {
        let script = site_script();
        assert!(script.contains("data-theme-toggle"));
        assert!(script.contains("data-live-search"));
        assert!(script.contains("localStorage"));
    }

    #[test]
    fn test_stylesheet_uses_theme_variables() {
        assert!(stylesheet().contains("var(--background)"));
        assert!(stylesheet().contains("var(--brand, var(--primary))"));
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("site.js"), "text/javascript; charset=utf-8");
        assert_eq!(content_type("blob"), "application/octet-stream");
    }
}
