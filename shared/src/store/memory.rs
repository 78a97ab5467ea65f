//! in-memory `ContentStore` for tests.
//!
//! models the hosted store's row policy: anonymous readers only see published
//! rows and every write needs a session.

use std::cell::{Cell, RefCell};

use chrono::Utc;

use super::{ContentStore, Credentials, PostOrder, Session, StoreError};
use crate::post::{BlogPost, NewPost, PostChanges, PublishToggle};

pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";
pub(crate) const ADMIN_PASSWORD: &str = "correct horse";

#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: RefCell<Vec<BlogPost>>,
    session: RefCell<Option<Session>>,
    next_id: Cell<u32>,
    offline: Cell<bool>,
    reads_failing: Cell<bool>,
    writes: Cell<u32>,
}

impl MemoryStore {
    pub(crate) fn with_rows(rows: Vec<BlogPost>) -> Self {
        let store = Self::default();
        *store.rows.borrow_mut() = rows;
        store
    }

    pub(crate) fn signed_in(self) -> Self {
        *self.session.borrow_mut() = Some(admin_session());
        self
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// list requests time out while writes keep working
    pub(crate) fn set_reads_failing(&self, failing: bool) {
        self.reads_failing.set(failing);
    }

    /// all rows regardless of session
    pub(crate) fn rows(&self) -> Vec<BlogPost> {
        self.rows.borrow().clone()
    }

    /// number of successful writes
    pub(crate) fn writes(&self) -> u32 {
        self.writes.get()
    }

    fn reachable(&self) -> Result<(), StoreError> {
        if self.offline.get() {
            Err(StoreError::Network("offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn authorized(&self) -> Result<(), StoreError> {
        self.reachable()?;
        if self.session.borrow().is_none() {
            return Err(StoreError::Unauthenticated);
        }
        Ok(())
    }

    fn modify(&self, id: &str, change: impl FnOnce(&mut BlogPost)) {
        if let Some(row) = self.rows.borrow_mut().iter_mut().find(|row| row.id == id) {
            change(row);
        }
        self.writes.set(self.writes.get() + 1);
    }
}

fn admin_session() -> Session {
    Session {
        access_token: "memory-token".to_string(),
        refresh_token: None,
        expires_at: None,
        email: Some(ADMIN_EMAIL.to_string()),
    }
}

impl ContentStore for MemoryStore {
    async fn list_posts(&self, order: PostOrder) -> Result<Vec<BlogPost>, StoreError> {
        self.reachable()?;
        if self.reads_failing.get() {
            return Err(StoreError::Network("timeout".to_string()));
        }
        let signed_in = self.session.borrow().is_some();
        let mut rows: Vec<BlogPost> = self
            .rows
            .borrow()
            .iter()
            .filter(|row| signed_in || row.is_published())
            .cloned()
            .collect();

        // descending with nulls first, as postgres orders them
        match order {
            PostOrder::PublishedDesc => rows.sort_by(|a, b| {
                (b.published_at.is_none(), b.published_at)
                    .cmp(&(a.published_at.is_none(), a.published_at))
            }),
            PostOrder::CreatedDesc => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        Ok(rows)
    }

    async fn insert_post(&self, post: &NewPost) -> Result<(), StoreError> {
        self.authorized()?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let now = Utc::now();

        self.rows.borrow_mut().push(BlogPost {
            id: format!("post-{id}"),
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            slug: post.slug.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            linkedin_url: post.linkedin_url.clone(),
            featured_image: post.featured_image.clone(),
            published_at: post.published_at,
            created_at: now,
            updated_at: now,
        });
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    async fn update_post(&self, id: &str, changes: &PostChanges) -> Result<(), StoreError> {
        self.authorized()?;
        self.modify(id, |row| {
            row.title = changes.title.clone();
            row.content = changes.content.clone();
            row.excerpt = changes.excerpt.clone();
            row.slug = changes.slug.clone();
            row.tags = changes.tags.clone();
            row.linkedin_url = changes.linkedin_url.clone();
            row.featured_image = changes.featured_image.clone();
            row.published_at = changes.published_at;
            row.updated_at = changes.updated_at;
        });
        Ok(())
    }

    async fn set_published(&self, id: &str, toggle: &PublishToggle) -> Result<(), StoreError> {
        self.authorized()?;
        self.modify(id, |row| row.published_at = toggle.published_at);
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        self.authorized()?;
        self.rows.borrow_mut().retain(|row| row.id != id);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    async fn session(&self) -> Result<Option<Session>, StoreError> {
        self.reachable()?;
        Ok(self.session.borrow().clone())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, StoreError> {
        self.reachable()?;
        if credentials.email != ADMIN_EMAIL || credentials.password != ADMIN_PASSWORD {
            return Err(StoreError::Rejected {
                status: 400,
                message: "Invalid login credentials".to_string(),
            });
        }
        let session = admin_session();
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        *self.session.borrow_mut() = None;
        self.reachable()
    }
}
