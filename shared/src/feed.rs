//! ==============================================================================
//! feed.rs - public blog list, search and detail state
//! ==============================================================================
//!
//! purpose:
//!     everything the public blog page keeps between renders. the page holds
//!     one `BlogFeed` in a reactive cell and drives it with
//!     `begin_load` / `finish_load` around the store call.
//!
//! guarantees:
//!     - every load replaces the whole collection, nothing is merged
//!     - a failed load keeps the previous collection and sets an error
//!     - the loading flag is cleared on every outcome
//!     - search and detail selection never touch the network
//!
//! ==============================================================================

use crate::post::BlogPost;
use crate::store::{ContentStore, PostOrder, StoreError};

/// message shown when the list cannot be fetched
pub const LOAD_ERROR: &str = "Erro ao carregar posts do blog";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFeed {
    posts: Vec<BlogPost>,
    loading: bool,
    error: Option<String>,
    search: String,
    selected: Option<BlogPost>,
}

impl BlogFeed {
    /// state for a page that is about to fetch
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<&BlogPost> {
        self.selected.as_ref()
    }

    // --------------------------------------------------------------------------
    // loading
    // --------------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<BlogPost>, StoreError>) {
        match result {
            Ok(posts) => {
                log::debug!("blog feed loaded {} posts", posts.len());
                self.posts = posts;
            }
            Err(err) => {
                log::error!("error fetching blog posts: {err}");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// fetch every post, newest publication first
    pub async fn load_posts<S: ContentStore>(&mut self, store: &S) {
        self.begin_load();
        let result = store.list_posts(PostOrder::PublishedDesc).await;
        self.finish_load(result);
    }

    // --------------------------------------------------------------------------
    // search
    // --------------------------------------------------------------------------

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// posts matching the current search term, in load order
    pub fn visible(&self) -> Vec<&BlogPost> {
        filter_posts(&self.posts, &self.search)
    }

    // --------------------------------------------------------------------------
    // detail view
    // --------------------------------------------------------------------------

    pub fn select_post(&mut self, post: BlogPost) {
        self.selected = Some(post);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// case-insensitive substring filter over title, excerpt and tags.
/// an empty term keeps everything.
pub fn filter_posts<'a>(posts: &'a [BlogPost], term: &str) -> Vec<&'a BlogPost> {
    let needle = term.to_lowercase();
    posts.iter().filter(|post| post.matches(&needle)).collect()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::{DateTime, TimeZone, Utc};
    use futures::executor::block_on;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, day, 10, 0, 0).unwrap()
    }

    fn post(id: &str, title: &str, tags: &[&str], published: Option<u32>) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            content: "<p>texto</p>".to_string(),
            excerpt: format!("resumo de {title}"),
            slug: crate::post::derive_slug(title),
            author: "Anderson Garcia".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            linkedin_url: None,
            featured_image: None,
            published_at: published.map(at),
            created_at: at(1),
            updated_at: at(1),
        }
    }

    fn rows() -> Vec<BlogPost> {
        vec![
            post("a", "Antifragilidade Organizacional", &["Filosofia"], Some(3)),
            post("b", "Governança Essencial", &["Gestão", "Conselho"], Some(10)),
            post("c", "Rascunho Interno", &[], None),
        ]
    }

    #[test]
    fn test_load_orders_newest_first_and_hides_drafts_from_readers() {
        let store = MemoryStore::with_rows(rows());
        let mut feed = BlogFeed::loading();
        block_on(feed.load_posts(&store));

        let ids: Vec<&str> = feed.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(!feed.is_loading());
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_failed_first_load_leaves_empty_list_and_error() {
        let store = MemoryStore::with_rows(rows());
        store.set_offline(true);
        let mut feed = BlogFeed::loading();
        block_on(feed.load_posts(&store));

        assert!(feed.posts().is_empty());
        assert_eq!(feed.error(), Some(LOAD_ERROR));
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_failed_reload_keeps_previous_posts() {
        let store = MemoryStore::with_rows(rows());
        let mut feed = BlogFeed::default();
        block_on(feed.load_posts(&store));
        let before = feed.posts().to_vec();

        store.set_offline(true);
        block_on(feed.load_posts(&store));
        assert_eq!(feed.posts(), before.as_slice());
        assert!(feed.error().is_some());
        assert!(!feed.is_loading());

        // retry clears the error
        store.set_offline(false);
        block_on(feed.load_posts(&store));
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_search_is_case_insensitive_and_reaches_tags() {
        let mut feed = BlogFeed::default();
        feed.finish_load(Ok(rows()));

        feed.set_search("GOVERNANÇA");
        assert_eq!(feed.visible().len(), 1);

        // only present in a tag
        feed.set_search("conselho");
        let hits: Vec<&str> = feed.visible().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(hits, vec!["b"]);

        // excerpt
        feed.set_search("resumo de anti");
        assert_eq!(feed.visible()[0].id, "a");

        feed.set_search("nada disso");
        assert!(feed.visible().is_empty());

        feed.clear_search();
        assert_eq!(feed.visible().len(), 3);
    }

    #[test]
    fn test_selection_is_local() {
        let store = MemoryStore::with_rows(rows());
        let mut feed = BlogFeed::default();
        block_on(feed.load_posts(&store));

        let chosen = feed.posts()[1].clone();
        store.set_offline(true);
        feed.select_post(chosen.clone());
        assert_eq!(feed.selected(), Some(&chosen));
        feed.clear_selection();
        assert_eq!(feed.selected(), None);
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn test_reload_replaces_whole_collection() {
        let mut feed = BlogFeed::default();
        feed.finish_load(Ok(rows()));
        feed.begin_load();
        assert!(feed.is_loading());
        feed.finish_load(Ok(vec![post("z", "Novo", &[], Some(12))]));
        assert_eq!(feed.posts().len(), 1);
        assert_eq!(feed.posts()[0].id, "z");
    }
}
