//! ==============================================================================
//! admin.rs - blog admin panel state and operations
//! ==============================================================================
//!
//! purpose:
//!     authenticated crud over blog posts. the panel keeps one `AdminDesk` in a
//!     reactive cell; each store operation is an async fn here that returns the
//!     freshly reloaded rows, and the desk applies the outcome.
//!
//! loading flag:
//!     `AdminDesk::begin` sets it and hands out a `Pending` token that only
//!     `AdminDesk::settle` consumes. settle clears the flag on every outcome.
//!
//! writes and reloads:
//!     a write that reached the store is reported as done even when the
//!     reload after it fails (`Refresh::Stale`). the editor closes and the
//!     reload failure is shown as a load error, so the form is never left
//!     open over a row that already exists.
//!
//! access control:
//!     `require_session` decides whether the panel is shown at all. the store
//!     refuses writes from clients without a session regardless.
//!
//! ==============================================================================

use chrono::{DateTime, Utc};

use crate::page::Page;
use crate::post::{BlogPost, PostForm, PublishToggle};
use crate::store::{ContentStore, Credentials, PostOrder, StoreError};

/// question shown before a post is deleted
pub const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este post?";

/// prefix of the login form error
pub const SIGN_IN_ERROR: &str = "Email ou senha inválidos";

// ==============================================================================
// actions and outcomes
// ==============================================================================

/// store operations the panel can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Load,
    Create,
    Update,
    Delete,
    TogglePublished,
}

impl AdminAction {
    fn failure_message(self) -> &'static str {
        match self {
            AdminAction::Load => "Erro ao carregar posts",
            AdminAction::Create => "Erro ao criar post",
            AdminAction::Update => "Erro ao atualizar post",
            AdminAction::Delete => "Erro ao excluir post",
            AdminAction::TogglePublished => "Erro ao alterar status",
        }
    }

    /// short user-facing message for a failed action
    pub fn describe(self, err: &StoreError) -> String {
        match self {
            AdminAction::Load => self.failure_message().to_string(),
            _ => format!("{}: {err}", self.failure_message()),
        }
    }
}

/// what a finished operation did to the post list
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    /// the operation ran and the list was reloaded
    Posts(Vec<BlogPost>),
    /// the write went through but reloading the list failed
    Stale(StoreError),
    /// nothing was sent to the store
    Unchanged,
}

/// proof that an operation is in flight. hand it back to `AdminDesk::settle`.
#[must_use = "an unsettled operation leaves the panel loading"]
#[derive(Debug)]
pub struct Pending {
    action: AdminAction,
}

impl Pending {
    pub fn action(&self) -> AdminAction {
        self.action
    }
}

// ==============================================================================
// panel state
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDesk {
    posts: Vec<BlogPost>,
    loading: bool,
    error: Option<String>,
    /// editor fields, bound directly to the form inputs
    pub form: PostForm,
    editing: Option<BlogPost>,
    show_form: bool,
}

impl AdminDesk {
    /// state for a panel that is about to fetch
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

    /// post currently open in the editor, None when creating
    pub fn editing(&self) -> Option<&BlogPost> {
        self.editing.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.show_form
    }

    pub fn open_new_form(&mut self) {
        self.clear_form();
        self.show_form = true;
    }

    pub fn edit(&mut self, post: &BlogPost) {
        self.form = PostForm::from_post(post);
        self.editing = Some(post.clone());
        self.show_form = true;
    }

    pub fn close_form(&mut self) {
        self.show_form = false;
        self.clear_form();
    }

    fn clear_form(&mut self) {
        self.form = PostForm::default();
        self.editing = None;
    }

    pub fn begin(&mut self, action: AdminAction) -> Pending {
        self.loading = true;
        Pending { action }
    }

    pub fn settle(&mut self, pending: Pending, result: Result<Refresh, StoreError>) {
        let action = pending.action;
        let saved = matches!(action, AdminAction::Create | AdminAction::Update);
        match result {
            Ok(Refresh::Posts(posts)) => {
                self.posts = posts;
                self.error = None;
                if saved {
                    self.close_form();
                }
            }
            Ok(Refresh::Stale(err)) => {
                log::error!("admin {action:?} stored, reload failed: {err}");
                self.error = Some(AdminAction::Load.describe(&err));
                if saved {
                    self.close_form();
                }
            }
            // nothing was sent, whatever is on screen still holds
            Ok(Refresh::Unchanged) => {}
            Err(err) => {
                log::error!("admin {action:?} failed: {err}");
                self.error = Some(action.describe(&err));
            }
        }
        self.loading = false;
    }
}

// ==============================================================================
// operations
// ==============================================================================

/// page to leave for when there is no usable session
pub async fn require_session<S: ContentStore>(store: &S) -> Option<Page> {
    match store.session().await {
        Ok(Some(_)) => None,
        Ok(None) => {
            log::debug!("no admin session, redirecting to login");
            Some(Page::Login)
        }
        Err(err) => {
            log::warn!("session check failed: {err}");
            Some(Page::Login)
        }
    }
}

/// every post, newest created first
pub async fn load_posts<S: ContentStore>(store: &S) -> Result<Refresh, StoreError> {
    store
        .list_posts(PostOrder::CreatedDesc)
        .await
        .map(Refresh::Posts)
}

/// reload after a successful write; a failure here no longer fails the write
async fn reload_after_write<S: ContentStore>(store: &S) -> Refresh {
    match load_posts(store).await {
        Ok(refresh) => refresh,
        Err(err) => Refresh::Stale(err),
    }
}

pub async fn create_post<S: ContentStore>(
    store: &S,
    form: &PostForm,
    now: DateTime<Utc>,
) -> Result<Refresh, StoreError> {
    if !form.is_complete() {
        log::warn!("refusing to create a post with empty required fields");
        return Ok(Refresh::Unchanged);
    }
    store.insert_post(&form.to_new_post(now)).await?;
    log::info!("created post \"{}\"", form.title);
    Ok(reload_after_write(store).await)
}

pub async fn update_post<S: ContentStore>(
    store: &S,
    existing: &BlogPost,
    form: &PostForm,
    now: DateTime<Utc>,
) -> Result<Refresh, StoreError> {
    if !form.is_complete() {
        log::warn!("refusing to save post {} with empty required fields", existing.id);
        return Ok(Refresh::Unchanged);
    }
    store
        .update_post(&existing.id, &form.to_changes(existing, now))
        .await?;
    log::info!("updated post {}", existing.id);
    Ok(reload_after_write(store).await)
}

/// delete after `confirm` accepts `CONFIRM_DELETE`; declining sends nothing
pub async fn delete_post<S, F>(store: &S, id: &str, confirm: F) -> Result<Refresh, StoreError>
where
    S: ContentStore,
    F: FnOnce(&str) -> bool,
{
    if !confirm(CONFIRM_DELETE) {
        return Ok(Refresh::Unchanged);
    }
    store.delete_post(id).await?;
    log::info!("deleted post {id}");
    Ok(reload_after_write(store).await)
}

/// flip one post between draft and published without opening the editor
pub async fn toggle_published<S: ContentStore>(
    store: &S,
    post: &BlogPost,
    now: DateTime<Utc>,
) -> Result<Refresh, StoreError> {
    let toggle = PublishToggle::for_post(post, now);
    store.set_published(&post.id, &toggle).await?;
    Ok(reload_after_write(store).await)
}

/// end the session; the panel always ends up on the login page
pub async fn logout<S: ContentStore>(store: &S) -> Page {
    if let Err(err) = store.sign_out().await {
        log::warn!("sign out failed: {err}");
    }
    Page::Login
}

/// password sign-in for the login page, returning where to go next
pub async fn sign_in<S: ContentStore>(
    store: &S,
    credentials: &Credentials,
) -> Result<Page, String> {
    match store.sign_in(credentials).await {
        Ok(_) => {
            log::info!("signed in as {}", credentials.email);
            Ok(Page::Admin)
        }
        Err(err) => {
            log::error!("unable to sign in as {}: {err}", credentials.email);
            Err(format!("{SIGN_IN_ERROR}: {err}"))
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
