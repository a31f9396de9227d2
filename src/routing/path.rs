//! Request path to content lookup derivation.
//!
//! # Responsibilities
//! - Capture the first path segment as the locale code
//! - Join the remaining segments into the content path
//! - Reassemble a full request path for cache keys and enumeration
//!
//! # Design Decisions
//! - The content path is always `/`-prefixed, even at the root
//! - "No locale" is `None`; there is no falsy placeholder value
//! - No validation against a locale set: invalid codes flow through to
//!   the CMS unchanged and simply match nothing

/// A request path split into its locale and content components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    /// Locale code taken from the first path segment, if any.
    pub locale: Option<String>,

    /// Content lookup path. Always starts with `/`; bare `/` at the root.
    pub content_path: String,
}

impl RoutePath {
    /// Derive a route from ordered path segments.
    ///
    /// The first segment (if present) becomes the locale; the remaining
    /// segments join with `/` to form the content path.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = segments.into_iter();
        let locale = iter.next().map(|s| s.as_ref().to_string());

        let rest: Vec<String> = iter.map(|s| s.as_ref().to_string()).collect();
        let content_path = format!("/{}", rest.join("/"));

        Self {
            locale,
            content_path,
        }
    }

    /// Derive a route from a raw URI path such as "/fr/blog/post-1".
    ///
    /// Empty segments (leading, trailing, or doubled slashes) are ignored.
    pub fn parse(path: &str) -> Self {
        Self::from_segments(path.split('/').filter(|s| !s.is_empty()))
    }

    /// Reassemble the full request path ("/{locale}{content_path}").
    ///
    /// Inverse of [`RoutePath::parse`] up to slash normalization.
    pub fn request_path(&self) -> String {
        match &self.locale {
            Some(locale) if self.content_path == "/" => format!("/{}", locale),
            Some(locale) => format!("/{}{}", locale, self.content_path),
            None => self.content_path.clone(),
        }
    }

    /// True when the route has no locale and points at the root.
    pub fn is_root(&self) -> bool {
        self.locale.is_none() && self.content_path == "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_segments() {
        let route = RoutePath::from_segments(Vec::<&str>::new());
        assert_eq!(route.locale, None);
        assert_eq!(route.content_path, "/");
        assert!(route.is_root());
    }

    #[test]
    fn test_locale_only() {
        let route = RoutePath::from_segments(["en"]);
        assert_eq!(route.locale.as_deref(), Some("en"));
        assert_eq!(route.content_path, "/");
    }

    #[test]
    fn test_locale_and_content() {
        let route = RoutePath::from_segments(["en", "blog", "post-1"]);
        assert_eq!(route.locale.as_deref(), Some("en"));
        assert_eq!(route.content_path, "/blog/post-1");
    }

    #[test]
    fn test_parse_normalizes_slashes() {
        let route = RoutePath::parse("//fr//about/");
        assert_eq!(route.locale.as_deref(), Some("fr"));
        assert_eq!(route.content_path, "/about");
    }

    #[test]
    fn test_parse_root() {
        let route = RoutePath::parse("/");
        assert_eq!(route.locale, None);
        assert_eq!(route.content_path, "/");
    }

    #[test]
    fn test_request_path_round_trip() {
        // A published URL re-derives the same locale and content path
        let route = RoutePath::parse("/fr/about");
        assert_eq!(route.locale.as_deref(), Some("fr"));
        assert_eq!(route.content_path, "/about");
        assert_eq!(route.request_path(), "/fr/about");

        let locale_only = RoutePath::parse("/fr");
        assert_eq!(locale_only.request_path(), "/fr");

        let root = RoutePath::parse("/");
        assert_eq!(root.request_path(), "/");
    }

    #[test]
    fn test_unknown_locale_codes_pass_through() {
        // No local validation: anything in the first segment is a locale
        let route = RoutePath::from_segments(["not-a-locale", "page"]);
        assert_eq!(route.locale.as_deref(), Some("not-a-locale"));
        assert_eq!(route.content_path, "/page");
    }
}
