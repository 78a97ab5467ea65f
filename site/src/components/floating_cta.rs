//! Floating contact menu in the bottom-right corner

use leptos::prelude::*;
use shared::calendar::LINKEDIN_URL;
use shared::page::Page;

use crate::browser;
use crate::nav::use_navigator;

#[component]
pub fn FloatingCta() -> impl IntoView {
    let nav = use_navigator();
    let (open, set_open) = signal(false);

    view! {
        <div class="floating-cta">
            <Show when=move || open.get()>
                <div class="floating-menu">
                    <button
                        class="cta"
                        on:click=move |_| {
                            browser::schedule_meeting(None);
                            set_open.set(false);
                        }
                    >
                        "📅 Agendar Conversa"
                    </button>
                    <button
                        on:click=move |_| {
                            nav.navigate(Page::Portfolio);
                            set_open.set(false);
                        }
                    >
                        "💼 Ver Serviços"
                    </button>
                    <button
                        on:click=move |_| {
                            browser::open_in_new_tab(LINKEDIN_URL);
                            set_open.set(false);
                        }
                    >
                        "💬 Falar com Anderson"
                    </button>
                </div>
            </Show>
            <button
                class="floating-toggle"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}
