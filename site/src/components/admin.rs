//! ==============================================================================
//! components/admin.rs - blog admin panel
//! ==============================================================================
//!
//! purpose:
//!     post table, editor modal and the header actions of the admin page.
//!     all state lives in one `AdminDesk` signal; every store call goes
//!     through `perform`, which holds the desk's loading flag until the
//!     call settles.
//!
//! ==============================================================================

use std::future::Future;

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::admin::{self, AdminAction, AdminDesk, Refresh};
use shared::post::{short_date, BlogPost, PostForm};
use shared::store::StoreError;

use crate::api::use_store;
use crate::browser;
use crate::nav::use_navigator;

/// tags shown per table row before collapsing into "+N"
const TABLE_TAGS: usize = 2;

// ==============================================================================
// editor fields
// ==============================================================================

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Excerpt,
    Content,
    ImageUrl,
    LinkedinUrl,
    Tags,
}

impl Field {
    fn get(self, form: &PostForm) -> &str {
        match self {
            Field::Title => &form.title,
            Field::Excerpt => &form.excerpt,
            Field::Content => &form.content,
            Field::ImageUrl => &form.image_url,
            Field::LinkedinUrl => &form.linkedin_url,
            Field::Tags => &form.tags,
        }
    }

    fn set(self, form: &mut PostForm, value: String) {
        let slot = match self {
            Field::Title => &mut form.title,
            Field::Excerpt => &mut form.excerpt,
            Field::Content => &mut form.content,
            Field::ImageUrl => &mut form.image_url,
            Field::LinkedinUrl => &mut form.linkedin_url,
            Field::Tags => &mut form.tags,
        };
        *slot = value;
    }
}

// ==============================================================================
// store calls
// ==============================================================================

/// run one store operation with the loading flag held until it settles
fn perform<F, Fut>(desk: RwSignal<AdminDesk>, action: AdminAction, op: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Refresh, StoreError>> + 'static,
{
    // the page may already be gone
    let Some(pending) = desk.try_update(|d| d.begin(action)) else {
        return;
    };
    spawn_local(async move {
        let result = op().await;
        desk.update(|d| d.settle(pending, result));
    });
}

// ==============================================================================
// page
// ==============================================================================

#[component]
pub fn AdminPage() -> impl IntoView {
    let nav = use_navigator();
    let store = StoredValue::new(use_store());
    let desk = RwSignal::new(AdminDesk::loading());

    // gate on the session, then fetch
    Effect::new(move || {
        spawn_local(async move {
            if let Some(page) = admin::require_session(&store.get_value()).await {
                nav.navigate(page);
                return;
            }
            perform(desk, AdminAction::Load, move || async move {
                admin::load_posts(&store.get_value()).await
            });
        });
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (form, editing) = desk.with_untracked(|d| (d.form.clone(), d.editing().cloned()));
        match editing {
            Some(existing) => perform(desk, AdminAction::Update, move || async move {
                admin::update_post(&store.get_value(), &existing, &form, Utc::now()).await
            }),
            None => perform(desk, AdminAction::Create, move || async move {
                admin::create_post(&store.get_value(), &form, Utc::now()).await
            }),
        }
    };

    let toggle = move |post: BlogPost| {
        perform(desk, AdminAction::TogglePublished, move || async move {
            admin::toggle_published(&store.get_value(), &post, Utc::now()).await
        })
    };

    // ask before the desk starts loading, a "no" leaves the panel untouched
    let delete = move |id: String| {
        if !browser::confirm(admin::CONFIRM_DELETE) {
            return;
        }
        perform(desk, AdminAction::Delete, move || async move {
            admin::delete_post(&store.get_value(), &id, |_| true).await
        })
    };

    let logout = move |_| {
        spawn_local(async move {
            let page = admin::logout(&store.get_value()).await;
            nav.navigate(page);
        });
    };

    view! {
        <section class="admin">
            <div class="admin-header">
                <h1>"Painel "<span class="accent">"Administrativo"</span></h1>
                <div class="button-row">
                    <button class="cta" on:click=move |_| desk.update(AdminDesk::open_new_form)>
                        "＋ Novo Post"
                    </button>
                    <button class="danger" on:click=logout>"Sair"</button>
                </div>
            </div>

            {move || desk.with(|d| d.error().map(|message| {
                let message = message.to_string();
                view! { <div class="result error">{message}</div> }
            }))}

            <Show when=move || desk.with(AdminDesk::is_form_open)>
                {post_editor(desk, submit)}
            </Show>

            <div class="card">
                <h2>"Posts do Blog"</h2>
                {move || posts_table(desk, toggle, delete)}
            </div>
        </section>
    }
}

// ==============================================================================
// editor modal
// ==============================================================================

fn post_editor(
    desk: RwSignal<AdminDesk>,
    submit: impl Fn(SubmitEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let saving = move || desk.with(AdminDesk::is_loading);
    let editing = move || desk.with(|d| d.editing().is_some());

    view! {
        <div class="modal">
            <div class="card editor">
                <div class="editor-header">
                    <h2>{move || if editing() { "Editar Post" } else { "Novo Post" }}</h2>
                    <button class="link" on:click=move |_| desk.update(AdminDesk::close_form)>"✕"</button>
                </div>

                <form on:submit=submit>
                    {text_input(desk, Field::Title, "Título *", "text", "", true)}
                    {text_area(desk, Field::Excerpt, "Resumo *", "3")}
                    {text_area(desk, Field::Content, "Conteúdo *", "12")}
                    {text_input(desk, Field::ImageUrl, "URL da Imagem", "url", "https://...", false)}
                    {text_input(desk, Field::LinkedinUrl, "URL do LinkedIn", "url", "https://www.linkedin.com/...", false)}
                    {text_input(desk, Field::Tags, "Tags (separadas por vírgula)", "text", "estratégia, liderança, governança", false)}

                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || desk.with(|d| d.form.published)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                desk.update(|d| d.form.published = checked);
                            }
                        />
                        "Publicar imediatamente"
                    </label>

                    <div class="button-row">
                        <button type="submit" class="cta" prop:disabled=saving>
                            {move || if saving() {
                                "Salvando..."
                            } else if editing() {
                                "Atualizar"
                            } else {
                                "Criar Post"
                            }}
                        </button>
                        <button type="button" on:click=move |_| desk.update(AdminDesk::close_form)>
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_input(
    desk: RwSignal<AdminDesk>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=kind
                placeholder=placeholder
                required=required
                prop:value=move || desk.with(|d| field.get(&d.form).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    desk.update(|d| field.set(&mut d.form, value));
                }
            />
        </label>
    }
}

/// required multi-line field
fn text_area(
    desk: RwSignal<AdminDesk>,
    field: Field,
    label: &'static str,
    rows: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <textarea
                rows=rows
                required
                prop:value=move || desk.with(|d| field.get(&d.form).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    desk.update(|d| field.set(&mut d.form, value));
                }
            ></textarea>
        </label>
    }
}

// ==============================================================================
// post table
// ==============================================================================

fn posts_table(
    desk: RwSignal<AdminDesk>,
    toggle: impl Fn(BlogPost) + Copy + Send + Sync + 'static,
    delete: impl Fn(String) + Copy + Send + Sync + 'static,
) -> AnyView {
    desk.with(|d| {
        // keep the table on screen while a row action runs
        if d.is_loading() && d.posts().is_empty() {
            return view! {
                <div class="center">
                    <span class="spinner"></span>
                    <p class="muted">"Carregando posts..."</p>
                </div>
            }
            .into_any();
        }

        if d.posts().is_empty() {
            return view! { <p class="muted center">"Nenhum post encontrado"</p> }.into_any();
        }

        let busy = d.is_loading();
        let rows = d
            .posts()
            .iter()
            .cloned()
            .map(|post| post_row(post, busy, desk, toggle, delete))
            .collect::<Vec<_>>();

        view! {
            <table class="posts-table">
                <thead>
                    <tr>
                        <th>"Título"</th>
                        <th>"Status"</th>
                        <th>"Data"</th>
                        <th>"Tags"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        }
        .into_any()
    })
}

fn post_row(
    post: BlogPost,
    busy: bool,
    desk: RwSignal<AdminDesk>,
    toggle: impl Fn(BlogPost) + Copy + 'static,
    delete: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let published = post.is_published();
    let created = short_date(browser::local_day(post.created_at));
    let shown_tags = post.tags.iter().take(TABLE_TAGS).cloned().collect::<Vec<_>>();
    let hidden_tags = post.tags.len().saturating_sub(TABLE_TAGS);
    let title = post.title.clone();
    let excerpt = post.excerpt.clone();
    let id = post.id.clone();
    let for_toggle = post.clone();

    view! {
        <tr>
            <td>
                <div class="strong">{title}</div>
                <div class="muted small truncate">{excerpt}</div>
            </td>
            <td>
                <span class=if published { "status published" } else { "status draft" }>
                    {if published { "Publicado" } else { "Rascunho" }}
                </span>
            </td>
            <td class="muted small">{created}</td>
            <td>
                {shown_tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{tag}</span> })
                    .collect::<Vec<_>>()}
                {(hidden_tags > 0).then(|| view! { <span class="muted small">"+"{hidden_tags}</span> })}
            </td>
            <td class="actions">
                <button
                    title=if published { "Despublicar" } else { "Publicar" }
                    disabled=busy
                    on:click=move |_| toggle(for_toggle.clone())
                >
                    {if published { "🙈" } else { "👁" }}
                </button>
                <button
                    title="Editar"
                    disabled=busy
                    on:click=move |_| desk.update(|d| d.edit(&post))
                >
                    "✏️"
                </button>
                <button
                    title="Excluir"
                    class="danger"
                    disabled=busy
                    on:click=move |_| delete(id.clone())
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
