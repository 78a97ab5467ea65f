//! Blog page: post grid, search and article view

use leptos::prelude::*;
use shared::calendar::LINKEDIN_URL;
use shared::feed::BlogFeed;
use shared::post::{long_date, BlogPost};
use shared::sanitize::sanitize_content;
use shared::store::{ContentStore, PostOrder};

use crate::api::use_store;
use crate::browser;

/// tags shown on a card before collapsing into "+N"
const CARD_TAGS: usize = 3;

#[component]
pub fn BlogPage() -> impl IntoView {
    let store = StoredValue::new(use_store());
    let feed = RwSignal::new(BlogFeed::loading());

    // fetch every post, replacing whatever is loaded
    let load = move || {
        feed.update(BlogFeed::begin_load);
        leptos::task::spawn_local(async move {
            let result = store.get_value().list_posts(PostOrder::PublishedDesc).await;
            feed.update(|f| f.finish_load(result));
        });
    };

    // fetch on mount
    Effect::new(move || load());

    // only swap between grid and article when the selection itself changes
    let selected = Memo::new(move |_| feed.with(|f| f.selected().cloned()));

    view! {
        {move || match selected.get() {
            Some(post) => post_detail(post, feed).into_any(),
            None => post_index(feed, load).into_any(),
        }}
    }
}

fn post_index(
    feed: RwSignal<BlogFeed>,
    load: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Blog "<span class="accent">"Estratégico"</span></h1>
            <p class="muted">
                "Insights, reflexões e estratégias para líderes que querem transformar suas empresas com propósito."
            </p>
            <input
                type="text"
                class="search"
                placeholder="Buscar posts..."
                prop:value=move || feed.with(|f| f.search_term().to_string())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    feed.update(|f| f.set_search(term));
                }
            />
        </section>

        <section class="posts">
            {move || feed.with(|f| {
                if f.is_loading() {
                    return view! {
                        <div class="center">
                            <span class="spinner"></span>
                            <p class="muted">"Carregando posts..."</p>
                        </div>
                    }
                    .into_any();
                }

                if let Some(error) = f.error() {
                    return view! {
                        <div class="center">
                            <p class="error-text">{error.to_string()}</p>
                            <p class="muted">"Verifique a conexão com o servidor de conteúdo e tente novamente."</p>
                            <button class="cta" on:click=move |_| load()>"Tentar Novamente"</button>
                        </div>
                    }
                    .into_any();
                }

                let visible = f.visible();
                if visible.is_empty() {
                    return empty_state(feed, f.search_term()).into_any();
                }

                let cards = visible
                    .into_iter()
                    .cloned()
                    .map(|post| post_card(post, feed))
                    .collect::<Vec<_>>();
                view! { <div class="grid">{cards}</div> }.into_any()
            })}
        </section>
    }
}

fn empty_state(feed: RwSignal<BlogFeed>, term: &str) -> impl IntoView {
    if term.is_empty() {
        view! {
            <div class="center">
                <p class="muted">"Em breve, novos conteúdos estratégicos serão publicados aqui."</p>
                <p class="muted">
                    "Acompanhe também no "
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                </p>
            </div>
        }
        .into_any()
    } else {
        let term = term.to_string();
        view! {
            <div class="center">
                <p class="muted">"Nenhum post encontrado para \""{term}"\""</p>
                <button class="link" on:click=move |_| feed.update(BlogFeed::clear_search)>
                    "Limpar busca"
                </button>
            </div>
        }
        .into_any()
    }
}

fn post_card(post: BlogPost, feed: RwSignal<BlogFeed>) -> impl IntoView {
    let date = long_date(browser::local_day(post.display_date()));
    let shown_tags = post.tags.iter().take(CARD_TAGS).cloned().collect::<Vec<_>>();
    let hidden_tags = post.tags.len().saturating_sub(CARD_TAGS);
    let cover = post.featured_image.clone();
    let alt = post.title.clone();
    let title = post.title.clone();
    let excerpt = post.excerpt.clone();
    let has_link = post.linkedin_url.is_some();

    view! {
        <article
            class="card post-card"
            on:click=move |_| {
                feed.update(|f| f.select_post(post.clone()));
                browser::scroll_to_top();
            }
        >
            {cover.map(|src| view! { <img class="cover" src=src alt=alt /> })}
            <h3>{title}</h3>
            <p class="muted">{excerpt}</p>
            <div class="meta">
                <span>"📅 "{date}</span>
                {has_link.then(|| view! { <span class="accent">"↗ LinkedIn"</span> })}
            </div>
            <div class="tags">
                {shown_tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">"#"{tag}</span> })
                    .collect::<Vec<_>>()}
                {(hidden_tags > 0).then(|| view! { <span class="muted small">"+"{hidden_tags}</span> })}
            </div>
        </article>
    }
}

fn post_detail(post: BlogPost, feed: RwSignal<BlogFeed>) -> impl IntoView {
    let date = long_date(browser::local_day(post.display_date()));
    let body = sanitize_content(&post.content);
    let alt = post.title.clone();

    view! {
        <article class="article">
            <button class="link" on:click=move |_| feed.update(BlogFeed::clear_selection)>
                "← Voltar ao Blog"
            </button>

            {post.featured_image.map(|src| view! { <img class="cover wide" src=src alt=alt /> })}

            <h1>{post.title}</h1>
            <div class="meta">
                <span>"👤 "{post.author}</span>
                <span>"📅 "{date}</span>
                {post.linkedin_url.map(|href| view! {
                    <a href=href target="_blank" rel="noopener noreferrer">"↗ Ver no LinkedIn"</a>
                })}
            </div>

            <div class="tags">
                {post.tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">"#"{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="prose" inner_html=body></div>
        </article>
    }
}
