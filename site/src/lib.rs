//! ==============================================================================
//! lib.rs - anderson garcia site
//! ==============================================================================
//!
//! purpose:
//!     single page site for the consultancy: institutional pages, a public
//!     blog and a password protected admin panel for its posts.
//!
//! architecture:
//!     - leptos csr (client-side rendering), compiled to wasm
//!     - one `Navigator` decides which page is rendered; no url router
//!     - posts and auth come from a hosted rest store (see api.rs)
//!     - domain rules and page state live in the `shared` crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use shared::page::Page;
use wasm_bindgen::prelude::*;

mod api;
mod browser;
mod components;
mod nav;

use api::RestStore;
use components::{
    AboutPage, AdminPage, BlogPage, BrandingPage, FixedHeader, FloatingCta, Footer, HomePage,
    LoginPage, ManifestoPage, NavBar, PortfolioPage,
};
use nav::{provide_navigator, Navigator};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init (hot reload) is harmless
    _ = console_log::init_with_level(level);

    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RestStore::from_env());

    let nav = Navigator::new(Page::from_path(&browser::current_path()));
    provide_navigator(nav);
    nav.listen_for_events();

    // every page change starts at the top
    Effect::new(move || {
        nav.page().track();
        browser::scroll_to_top();
    });

    view! {
        <Title text=move || format!("{} | Anderson Garcia", nav.page().get().label()) />
        <NavBar />
        <FixedHeader />
        <main>{move || render_page(nav.page().get())}</main>
        <FloatingCta />
        <Footer />
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Portfolio => view! { <PortfolioPage /> }.into_any(),
        Page::Blog => view! { <BlogPage /> }.into_any(),
        Page::Branding => view! { <BrandingPage /> }.into_any(),
        Page::Manifesto => view! { <ManifestoPage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Admin => view! { <AdminPage /> }.into_any(),
    }
}
