//! ==============================================================================
//! api.rs - http client for the hosted content store
//! ==============================================================================
//!
//! purpose:
//!     implements `shared::store::ContentStore` against the store's rest
//!     table api and its password auth api. the session returned by sign-in
//!     is kept in local storage so a reload keeps the admin signed in.
//!
//! endpoints:
//!     GET    /rest/v1/blog_posts?select=*&order=<col>.desc
//!     POST   /rest/v1/blog_posts            body: [row]
//!     PATCH  /rest/v1/blog_posts?id=eq.<id>
//!     DELETE /rest/v1/blog_posts?id=eq.<id>
//!     POST   /auth/v1/token?grant_type=password
//!     POST   /auth/v1/logout
//!
//! ==============================================================================

use chrono::Utc;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::expect_context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use shared::config::{StoreConfig, POSTS_TABLE};
use shared::post::{BlogPost, NewPost, PostChanges, PublishToggle};
use shared::store::{ContentStore, Credentials, PostOrder, Session, StoreError};

// ==============================================================================
// auth response types
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<AuthUser>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthUser {
    #[serde(default)]
    email: Option<String>,
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        let expires_at = token.expires_at.or_else(|| {
            token
                .expires_in
                .map(|seconds| Utc::now().timestamp() + seconds)
        });
        Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
            email: token.user.and_then(|user| user.email),
        }
    }
}

// ==============================================================================
// store client
// ==============================================================================

#[derive(Debug, Clone)]
pub struct RestStore {
    config: StoreConfig,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// configuration baked in at build time
    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_values(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
        ))
    }

    fn posts_url(&self) -> String {
        self.config.table_url(POSTS_TABLE)
    }

    fn stored_session(&self) -> Option<Session> {
        LocalStorage::get::<Session>(self.config.session_storage_key()).ok()
    }

    fn forget_session(&self) {
        LocalStorage::delete(self.config.session_storage_key());
    }

    /// attach the project key and the caller's token (anon key when signed out)
    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        let token = self
            .stored_session()
            .filter(|session| !session.is_expired(Utc::now()))
            .map(|session| session.access_token)
            .unwrap_or_else(|| self.config.anon_key.clone());

        req.header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {token}"))
    }

    fn row_filter(id: &str) -> String {
        format!("eq.{id}")
    }
}

impl ContentStore for RestStore {
    async fn list_posts(&self, order: PostOrder) -> Result<Vec<BlogPost>, StoreError> {
        let response = self
            .authorized(Request::get(&self.posts_url()))
            .query([("select", "*"), ("order", order.query())])
            .send()
            .await
            .map_err(network)?;
        into_json(response).await
    }

    async fn insert_post(&self, post: &NewPost) -> Result<(), StoreError> {
        let response = self
            .authorized(Request::post(&self.posts_url()))
            .header("Prefer", "return=minimal")
            .json(std::slice::from_ref(post))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await
    }

    async fn update_post(&self, id: &str, changes: &PostChanges) -> Result<(), StoreError> {
        let filter = Self::row_filter(id);
        let response = self
            .authorized(Request::patch(&self.posts_url()))
            .query([("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(changes)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await
    }

    async fn set_published(&self, id: &str, toggle: &PublishToggle) -> Result<(), StoreError> {
        let filter = Self::row_filter(id);
        let response = self
            .authorized(Request::patch(&self.posts_url()))
            .query([("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(toggle)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        let filter = Self::row_filter(id);
        let response = self
            .authorized(Request::delete(&self.posts_url()))
            .query([("id", filter.as_str())])
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await
    }

    async fn session(&self) -> Result<Option<Session>, StoreError> {
        match self.stored_session() {
            Some(session) if session.is_expired(Utc::now()) => {
                log::debug!("stored session expired");
                self.forget_session();
                Ok(None)
            }
            session => Ok(session),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, StoreError> {
        let response = Request::post(&self.config.auth_url("token"))
            .query([("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let session: Session = into_json::<TokenResponse>(response).await?.into();

        LocalStorage::set(self.config.session_storage_key(), &session)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), StoreError> {
        let Some(session) = self.stored_session() else {
            return Ok(());
        };
        // local session goes first so a failed request still signs out
        self.forget_session();

        let response = Request::post(&self.config.auth_url("logout"))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await
            .map_err(network)?;
        ensure_success(response).await
    }
}

/// store handle provided by the root component
pub fn use_store() -> RestStore {
    expect_context::<RestStore>()
}

// ==============================================================================
// response helpers
// ==============================================================================

fn network(err: gloo_net::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

async fn ensure_success(response: Response) -> Result<(), StoreError> {
    if response.ok() {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

async fn into_json<T>(response: Response) -> Result<T, StoreError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

async fn rejection(response: Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    StoreError::Rejected {
        status,
        message: error_message(&body),
    }
}

/// human readable message out of a store error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(*key)?.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_fields() {
        assert_eq!(
            error_message(r#"{"code":"42501","message":"permission denied for table blog_posts"}"#),
            "permission denied for table blog_posts"
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"hint":null}"#), r#"{"hint":null}"#);
    }

    #[test]
    fn test_token_response_becomes_session() {
        let token: TokenResponse = serde_json::from_str(
            r#"{
                "access_token": "jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "expires_at": 1790000000,
                "refresh_token": "r1",
                "user": {"id": "u1", "email": "admin@example.com"}
            }"#,
        )
        .unwrap();
        let session = Session::from(token);
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.expires_at, Some(1_790_000_000));
        assert_eq!(session.email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn test_row_filter() {
        assert_eq!(RestStore::row_filter("5b1c"), "eq.5b1c");
    }
}
