//! ==============================================================================
//! sanitize.rs - allow-list for blog post markup
//! ==============================================================================
//!
//! post bodies are stored and rendered as raw markup. everything goes through
//! `sanitize_content` both when the admin writes a post and when a reader
//! opens one, so rows written by other tools are covered too.
//!
//! ==============================================================================

use std::collections::{HashMap, HashSet};

/// elements kept in post bodies
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "em", "figcaption", "figure", "h2", "h3", "h4",
    "hr", "i", "img", "li", "ol", "p", "pre", "s", "span", "strong", "u", "ul",
];

/// per-element attributes kept in post bodies. `rel` on links is set by the
/// sanitizer itself.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title"]),
    ("img", &["src", "alt", "title", "width", "height"]),
];

/// url schemes accepted in `href` / `src`
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// elements removed together with their text
const STRIPPED_WITH_CONTENT: &[&str] = &["script", "style"];

/// clean untrusted post markup down to the allow-list
pub fn sanitize_content(html: &str) -> String {
    let tag_attributes: HashMap<&str, HashSet<&str>> = ALLOWED_ATTRIBUTES
        .iter()
        .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
        .collect();

    ammonia::Builder::empty()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .url_schemes(ALLOWED_SCHEMES.iter().copied().collect())
        .clean_content_tags(STRIPPED_WITH_CONTENT.iter().copied().collect())
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_basic_formatting() {
        let html = "<h2>Título</h2><p>Um <strong>texto</strong> <em>curto</em>.</p>";
        assert_eq!(sanitize_content(html), html);
    }

    #[test]
    fn test_drops_scripts_and_handlers() {
        let cleaned = sanitize_content(
            r#"<p onclick="steal()">oi</p><script>alert(1)</script><style>p{}</style>"#,
        );
        assert_eq!(cleaned, "<p>oi</p>");
    }

    #[test]
    fn test_links_lose_unsafe_schemes() {
        let cleaned = sanitize_content(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript"));

        let cleaned = sanitize_content(r#"<a href="https://linkedin.com/in/x">perfil</a>"#);
        assert!(cleaned.contains(r#"href="https://linkedin.com/in/x""#));
        assert!(cleaned.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_unknown_elements_keep_their_text() {
        assert_eq!(sanitize_content("<marquee>olá</marquee>"), "olá");
        assert_eq!(sanitize_content(r#"<iframe src="https://x"></iframe>"#), "");
    }
}
