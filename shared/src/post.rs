//! ==============================================================================
//! post.rs - blog post rows and the admin form that writes them
//! ==============================================================================
//!
//! purpose:
//!     the single content entity of the site plus everything derived from it
//!     at write time: slug, tag list, publication timestamp transitions and
//!     the json payloads sent to the content store.
//!
//! relationships:
//!     - used by: store (row type and write payloads)
//!     - used by: feed (search over title / excerpt / tags)
//!     - used by: admin (form model, create / update / toggle)
//!
//! invariants:
//!     - slug is always re-derived from the title, never edited on its own
//!     - a post is published iff published_at is set
//!     - tags never contain blank entries
//!
//! ==============================================================================

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_content;

/// author stamped on every new post
pub const DEFAULT_AUTHOR: &str = "Anderson Garcia";

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

// ==============================================================================
// stored row
// ==============================================================================

/// one row of the `blog_posts` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// markup payload. sanitize before rendering.
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    /// None = draft
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// date shown to readers: publication time, or creation time for drafts
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// case-insensitive substring match over title, excerpt and tags.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

// ==============================================================================
// derived fields
// ==============================================================================

/// url-safe slug from a title.
///
/// lowercases, drops everything outside `[a-z0-9]`, turns runs of whitespace
/// and hyphens into a single hyphen and never leaves one at either end.
/// accented letters are dropped rather than transliterated.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// split a comma separated tag field, trimming entries and dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// inverse of `parse_tags` for pre-filling the edit form
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// publication timestamp after saving the edit form.
///
/// keeping the publish box checked preserves the original date, checking it
/// on a draft stamps `now`, unchecking it turns the post back into a draft.
pub fn publication_after_edit(
    previous: Option<DateTime<Utc>>,
    publish: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if publish {
        previous.or(Some(now))
    } else {
        None
    }
}

/// publication timestamp after the quick publish / unpublish toggle
pub fn toggled_publication(
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match current {
        Some(_) => None,
        None => Some(now),
    }
}

fn optional_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ==============================================================================
// date display
// ==============================================================================

/// `18 de outubro de 2026`
pub fn long_date(date: NaiveDate) -> String {
    let month = MONTHS_PT[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// `18/10/2026`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// ==============================================================================
// admin form and write payloads
// ==============================================================================

/// local mirror of the admin editor fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    /// raw comma separated input
    pub tags: String,
    pub linkedin_url: String,
    /// "publicar imediatamente"
    pub published: bool,
}

impl PostForm {
    /// pre-fill the editor from a stored post
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            image_url: post.featured_image.clone().unwrap_or_default(),
            tags: join_tags(&post.tags),
            linkedin_url: post.linkedin_url.clone().unwrap_or_default(),
            published: post.is_published(),
        }
    }

    /// title, excerpt and content are required
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.excerpt, &self.content]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn slug(&self) -> String {
        derive_slug(&self.title)
    }

    /// payload for inserting a brand new post
    pub fn to_new_post(&self, now: DateTime<Utc>) -> NewPost {
        NewPost {
            title: self.title.clone(),
            content: sanitize_content(&self.content),
            excerpt: self.excerpt.clone(),
            slug: self.slug(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: parse_tags(&self.tags),
            linkedin_url: optional_url(&self.linkedin_url),
            featured_image: optional_url(&self.image_url),
            published_at: self.published.then_some(now),
        }
    }

    /// payload for overwriting an existing post
    pub fn to_changes(&self, existing: &BlogPost, now: DateTime<Utc>) -> PostChanges {
        PostChanges {
            title: self.title.clone(),
            content: sanitize_content(&self.content),
            excerpt: self.excerpt.clone(),
            slug: self.slug(),
            tags: parse_tags(&self.tags),
            linkedin_url: optional_url(&self.linkedin_url),
            featured_image: optional_url(&self.image_url),
            published_at: publication_after_edit(existing.published_at, self.published, now),
            updated_at: now,
        }
    }
}

/// insert payload. id and creation timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub author: String,
    pub tags: Vec<String>,
    pub linkedin_url: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// update payload. every field is overwritten; optional ones are sent as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub linkedin_url: Option<String>,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// quick publish toggle payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PublishToggle {
    pub published_at: Option<DateTime<Utc>>,
}

impl PublishToggle {
    pub fn for_post(post: &BlogPost, now: DateTime<Utc>) -> Self {
        Self {
            published_at: toggled_publication(post.published_at, now),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, 12, 0, 0).unwrap()
    }

    fn sample(published_at: Option<DateTime<Utc>>) -> BlogPost {
        BlogPost {
            id: "p1".to_string(),
            title: "Governança Essencial".to_string(),
            content: "<p>corpo</p>".to_string(),
            excerpt: "Decisões com peso".to_string(),
            slug: "governana-essencial".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: vec!["Estratégia".to_string(), "gestão".to_string()],
            linkedin_url: None,
            featured_image: Some("https://img.example/capa.jpg".to_string()),
            published_at,
            created_at: at(1),
            updated_at: at(1),
        }
    }

    #[test]
    fn test_slug_strips_punctuation_and_trims_hyphens() {
        assert_eq!(derive_slug("Growth & Scale "), "growth-scale");
        assert_eq!(derive_slug("Título Ação!!"), "ttulo-ao");
        assert_eq!(derive_slug("  --Hello   World--  "), "hello-world");
        assert_eq!(derive_slug("a - b"), "a-b");
        assert_eq!(derive_slug("!!!"), "");
        assert_eq!(derive_slug("OKRs 2026"), "okrs-2026");
    }

    #[test]
    fn test_slug_is_idempotent() {
        for title in ["Growth & Scale ", "Título Ação!!", "Foco Produtivo vs. Ativismo"] {
            let once = derive_slug(title);
            assert_eq!(derive_slug(&once), once);
        }
    }

    #[test]
    fn test_parse_tags_drops_blanks_and_keeps_order() {
        assert_eq!(
            parse_tags("estratégia, , liderança ,"),
            vec!["estratégia".to_string(), "liderança".to_string()]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" ,  ,").is_empty());
    }

    #[test]
    fn test_form_round_trips_tags_through_join() {
        let post = sample(None);
        let form = PostForm::from_post(&post);
        assert_eq!(form.tags, "Estratégia, gestão");
        assert_eq!(parse_tags(&form.tags), post.tags);
        assert_eq!(form.image_url, "https://img.example/capa.jpg");
        assert!(!form.published);
    }

    #[test]
    fn test_new_post_payload() {
        let form = PostForm {
            title: "Growth & Scale ".to_string(),
            content: "<p>ok</p><script>alert(1)</script>".to_string(),
            excerpt: "resumo".to_string(),
            image_url: "   ".to_string(),
            tags: "a, b,".to_string(),
            linkedin_url: "https://linkedin.com/posts/1".to_string(),
            published: false,
        };
        let new_post = form.to_new_post(at(5));

        assert_eq!(new_post.slug, "growth-scale");
        assert_eq!(new_post.author, DEFAULT_AUTHOR);
        assert_eq!(new_post.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(new_post.featured_image, None);
        assert_eq!(new_post.linkedin_url.as_deref(), Some("https://linkedin.com/posts/1"));
        assert_eq!(new_post.published_at, None);
        assert!(!new_post.content.contains("script"));

        let published = PostForm { published: true, ..form }.to_new_post(at(5));
        assert_eq!(published.published_at, Some(at(5)));
    }

    #[test]
    fn test_edit_keeps_original_publication_date() {
        let post = sample(Some(at(2)));
        let form = PostForm::from_post(&post);
        let changes = form.to_changes(&post, at(9));
        assert_eq!(changes.published_at, Some(at(2)));
        assert_eq!(changes.updated_at, at(9));
    }

    #[test]
    fn test_edit_publication_transitions() {
        assert_eq!(publication_after_edit(None, true, at(9)), Some(at(9)));
        assert_eq!(publication_after_edit(Some(at(2)), false, at(9)), None);
        assert_eq!(publication_after_edit(None, false, at(9)), None);
    }

    #[test]
    fn test_toggle_twice_returns_to_draft() {
        let once = toggled_publication(None, at(3));
        assert_eq!(once, Some(at(3)));
        let twice = toggled_publication(once, at(4));
        assert_eq!(twice, None);
    }

    #[test]
    fn test_search_matches_tags_only() {
        let post = sample(None);
        assert!(post.matches("estrat"));
        assert!(post.matches("governança"));
        assert!(post.matches("peso"));
        assert!(!post.matches("marketing"));
    }

    #[test]
    fn test_row_deserializes_with_null_publication() {
        let json = r#"{
            "id": "5b1c",
            "title": "t",
            "content": "c",
            "excerpt": "e",
            "slug": "t",
            "author": "Anderson Garcia",
            "tags": [],
            "linkedin_url": null,
            "featured_image": null,
            "published_at": null,
            "created_at": "2026-10-01T12:00:00.123456+00:00",
            "updated_at": "2026-10-01T12:00:00+00:00"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(!post.is_published());
        assert_eq!(post.display_date(), post.created_at);
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(long_date(date), "7 de março de 2026");
        assert_eq!(short_date(date), "07/03/2026");
    }
}
