//! Home page

use leptos::prelude::*;
use shared::page::Page;

use super::ContactSection;
use crate::browser;
use crate::nav::use_navigator;

const PROMISES: [&str; 5] = [
    "Implementar governança real e decisões com peso",
    "Tirar sua operação do improviso crônico",
    "Crescer com propósito – sem perder a essência",
    "Estruturar sua empresa para durar, ser mais rentável",
    "Aconselhar sua empresa em tomada de decisões estratégicas",
];

const PILLARS: [(&str, &str, &str); 3] = [
    ("🧭", "Método", "Governança, rituais e indicadores que tiram a empresa do improviso."),
    ("📖", "Filosofia Aplicada", "Decisões difíceis tomadas com lógica estruturada e coerência."),
    ("💡", "Clareza", "Menos ruído, mais foco no que sustenta o crescimento."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="hero">
            <p class="tagline">"Transformação estratégica com essência"</p>
            <h1>"BEM VINDO,"</h1>
            <h2>"Você está no lugar certo se está procurando alguém que possa:"</h2>
            <ul class="checklist">
                {PROMISES.into_iter().map(|item| view! { <li>"✔ "{item}</li> }).collect::<Vec<_>>()}
            </ul>

            <h2>"Entenda mais sobre como fazemos essa transformação"</h2>
            <div class="button-row">
                <button class="outline" on:click=move |_| nav.navigate(Page::Portfolio)>"Portfólio"</button>
                <button class="outline" on:click=move |_| nav.navigate(Page::Branding)>"Branding"</button>
                <button class="outline" on:click=move |_| nav.navigate(Page::About)>"Sobre Eu"</button>
            </div>
            <button class="cta" on:click=move |_| browser::schedule_meeting(None)>
                "📅 Agendar Diagnóstico Estratégico"
            </button>
        </section>

        <section class="card">
            <h2>"Como eu trabalho"</h2>
            <div class="grid">
                {PILLARS
                    .into_iter()
                    .map(|(icon, title, text)| view! {
                        <div class="pillar">
                            <span class="icon">{icon}</span>
                            <h3>{title}</h3>
                            <p class="muted">{text}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="button-row">
                <button on:click=move |_| nav.navigate(Page::Portfolio)>"Ver Serviços"</button>
                <button class="link" on:click=move |_| nav.navigate(Page::Manifesto)>"Ler o Manifesto"</button>
            </div>
        </section>

        <ContactSection />
    }
}
