//! Top navigation bar

use leptos::prelude::*;
use shared::calendar::CONTACT_NAME;
use shared::page::Page;

use crate::nav::use_navigator;

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = use_navigator();
    let (menu_open, set_menu_open) = signal(false);

    // one button per menu entry; picking one also folds the mobile menu
    let entries = move || {
        Page::MENU
            .into_iter()
            .map(|page| {
                view! {
                    <button
                        class=move || if nav.page().get() == page { "nav-link active" } else { "nav-link" }
                        on:click=move |_| {
                            nav.navigate(page);
                            set_menu_open.set(false);
                        }
                    >
                        {page.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <span class="brand">{CONTACT_NAME}</span>
                <div class="nav-links desktop">{entries()}</div>
                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-links mobile">{entries()}</div>
            </Show>
        </nav>
    }
}
