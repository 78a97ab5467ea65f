//! ==============================================================================
//! store/mod.rs - content store interface
//! ==============================================================================
//!
//! purpose:
//!     the minimal data-access surface the blog views need from the hosted
//!     table store: ordered reads, single row writes and a password session.
//!
//! relationships:
//!     - implemented by: site/api (RestStore, http against the hosted store)
//!     - implemented by: store/memory (test double, cfg(test) only)
//!     - used by: feed, admin
//!
//! access control:
//!     the store is the enforcement point. the admin view only checks for a
//!     session to decide what to show; a client without one is still refused
//!     by the store on every write.
//!
//! ==============================================================================

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::post::{BlogPost, NewPost, PostChanges, PublishToggle};

#[cfg(test)]
pub(crate) mod memory;

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// store answered with a non-2xx status
    #[error("{message} (status {status})")]
    Rejected { status: u16, message: String },
    /// response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// operation needs a signed-in session
    #[error("not signed in")]
    Unauthenticated,
    /// persisted session could not be read or written
    #[error("session storage: {0}")]
    Storage(String),
}

// ==============================================================================
// query and session types
// ==============================================================================

/// row ordering supported by the list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    /// public feed
    PublishedDesc,
    /// admin table
    CreatedDesc,
}

impl PostOrder {
    /// value of the `order` query parameter
    pub fn query(self) -> &'static str {
        match self {
            PostOrder::PublishedDesc => "published_at.desc",
            PostOrder::CreatedDesc => "created_at.desc",
        }
    }
}

/// authenticated store session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now.timestamp())
    }
}

/// email / password pair for the login form
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ==============================================================================
// store trait
// ==============================================================================

/// hosted table store holding `blog_posts` rows and the admin session.
///
/// futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    /// every row visible to the caller, in the given order
    async fn list_posts(&self, order: PostOrder) -> Result<Vec<BlogPost>, StoreError>;

    async fn insert_post(&self, post: &NewPost) -> Result<(), StoreError>;

    /// overwrite the row with this id
    async fn update_post(&self, id: &str, changes: &PostChanges) -> Result<(), StoreError>;

    /// change only the publication timestamp of the row with this id
    async fn set_published(&self, id: &str, toggle: &PublishToggle) -> Result<(), StoreError>;

    async fn delete_post(&self, id: &str) -> Result<(), StoreError>;

    /// current unexpired session, if any
    async fn session(&self) -> Result<Option<Session>, StoreError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, StoreError>;

    async fn sign_out(&self) -> Result<(), StoreError>;
}

// ==============================================================================
// tests
// ==============================================================================
