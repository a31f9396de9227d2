//! HTML shell rendering.
//!
//! # Responsibilities
//! - Wrap page documents in the site shell (header, footer, meta tags)
//! - Embed the document and locale as JSON state for client-side code
//! - Render the not-found page (non-indexable) and the transient loading
//!   placeholder used while a fallback resolution is in flight
//!
//! # Design Decisions
//! - Presentational glue only: the document's internal shape is not
//!   interpreted beyond the title
//! - The embedded state re-derives its locale from the visible path on
//!   client-side navigation, mirroring the server's derivation
//! - Everything interpolated into markup is escaped: JSON for the script
//!   element, the title and locale for their HTML contexts (both are
//!   attacker-reachable, via the CMS and the URL respectively)

use serde_json::json;

use crate::content::document::PageDocument;
use crate::routing::path::RoutePath;

/// Element id of the embedded page state JSON.
pub const PAGE_STATE_ID: &str = "__page_state";

/// Render a page document (or an empty draft canvas) inside the shell.
pub fn render_page(route: &RoutePath, document: Option<&PageDocument>) -> String {
    let title = escape_html(
        document
            .and_then(PageDocument::title)
            .unwrap_or("Untitled page"),
    );

    let state = json!({
        "locale": route.locale,
        "page": document.map(PageDocument::as_json),
    });
    let state_json = escape_json_for_html(&state.to_string());

    let lang_attr = match &route.locale {
        Some(locale) => format!(" lang=\"{}\"", escape_html(locale)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html{lang_attr}>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    <header class="site-header"></header>
    <main id="page-root"></main>
    <footer class="site-footer"></footer>
    <script id="{PAGE_STATE_ID}" type="application/json">{state_json}</script>
    <script>{LOCALE_SCRIPT}</script>
</body>
</html>
"#
    )
}

/// Render the not-found page. Marked non-indexable for search engines.
pub fn render_not_found() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="robots" content="noindex">
    <title>404 - Page not found</title>
</head>
<body>
    <header class="site-header"></header>
    <main><h1>404</h1><p>This page could not be found.</p></main>
    <footer class="site-footer"></footer>
</body>
</html>
"#
    .to_string()
}

/// Render the loading placeholder served while a first resolution for the
/// path is still in flight. Refreshes itself until the page is cached.
pub fn render_loading() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="robots" content="noindex">
    <meta http-equiv="refresh" content="1">
    <title>Loading…</title>
</head>
<body>
    <h1>Loading…</h1>
</body>
</html>
"#
    .to_string()
}

/// Re-derives the locale from the first segment of the visible path so
/// client-side navigation keeps personalization in sync without a full
/// reload. Absent segment means no locale, matching the server.
const LOCALE_SCRIPT: &str = r#"(function () {
    var update = function () {
        var seg = window.location.pathname.split('/')[1];
        window.__pageLocale = seg ? seg : null;
    };
    window.addEventListener('popstate', update);
    update();
})();"#;

/// Escape `<` so document JSON cannot terminate the script element.
fn escape_json_for_html(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Escape a value for interpolation into element content or a quoted
/// attribute.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> PageDocument {
        PageDocument::new(json!({
            "data": { "url": "/about", "title": "About us" }
        }))
    }

    #[test]
    fn test_page_shell_has_viewport_and_title() {
        let route = RoutePath::parse("/en/about");
        let html = render_page(&route, Some(&doc()));
        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.contains("<title>About us</title>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(!html.contains("noindex"));
    }

    #[test]
    fn test_draft_canvas_without_document() {
        let route = RoutePath::parse("/");
        let html = render_page(&route, None);
        assert!(html.contains("Untitled page"));
        assert!(html.contains(r#""page":null"#));
        assert!(html.contains("<html>"));
    }

    #[test]
    fn test_not_found_is_noindex() {
        let html = render_not_found();
        assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(html.contains("404"));
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let evil = PageDocument::new(json!({
            "data": { "url": "/x", "title": "t", "body": "</script><script>alert(1)" }
        }));
        let html = render_page(&RoutePath::parse("/x"), Some(&evil));
        assert!(!html.contains("</script><script>alert"));
    }

    #[test]
    fn test_title_markup_is_escaped() {
        let hostile = PageDocument::new(json!({
            "data": { "url": "/x", "title": "</title><script>alert(1)</script>" }
        }));
        let html = render_page(&RoutePath::parse("/x"), Some(&hostile));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;/title&gt;"));
    }

    #[test]
    fn test_locale_attribute_breakout_is_escaped() {
        let route = RoutePath::from_segments([r#"en"><script>alert(1)</script>"#, "page"]);
        let html = render_page(&route, None);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("lang=\"en&quot;&gt;"));
    }

    #[test]
    fn test_loading_placeholder_refreshes() {
        let html = render_loading();
        assert!(html.contains(r#"http-equiv="refresh""#));
    }
}
