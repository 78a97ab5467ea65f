//! Closing contact block shared by the content pages

use leptos::prelude::*;
use shared::calendar::{CONTACT_EMAIL, LINKEDIN_URL};
use shared::page::Page;

use crate::browser;
use crate::nav::use_navigator;

#[component]
pub fn ContactSection() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="card contact">
            <h2>"Pronto para a "<span class="accent">"transformação real"</span>"?"</h2>
            <p class="muted">
                "Se você chegou até aqui, provavelmente já entendeu que não trabalho com todo mundo. "
                "Trabalho com quem está pronto para a transformação real."
            </p>

            <div class="button-row">
                <button class="cta" on:click=move |_| browser::schedule_meeting(None)>
                    "📅 Agendar Diagnóstico"
                </button>
                <button on:click=move |_| browser::open_in_new_tab(LINKEDIN_URL)>"LinkedIn"</button>
            </div>

            <div class="button-row">
                <button class="link" on:click=move |_| nav.navigate(Page::Portfolio)>"Ver Portfolio"</button>
                <button class="link" on:click=move |_| nav.navigate(Page::Blog)>"Ler Blog"</button>
            </div>

            <p class="muted small">
                <strong>"Email: "</strong>{CONTACT_EMAIL}" | "
                <strong>"LinkedIn: "</strong>
                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">"/in/angarciabr"</a>
            </p>
        </section>
    }
}
