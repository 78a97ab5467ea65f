//! Branding page: mission, vision and values

use leptos::prelude::*;
use shared::page::Page;

use super::ContactSection;
use crate::browser;
use crate::nav::use_navigator;

const IDENTITY: [(&str, &str); 4] = [
    (
        "Missão",
        "Estruturar empresas para que cresçam com propósito, eliminando a dependência do improviso e construindo bases sólidas para o futuro.",
    ),
    (
        "Visão",
        "Ser referência em transformação estratégica, criando um mundo onde empresas operam com clareza, método e essência preservada.",
    ),
    (
        "Valores",
        "Coerência, transparência, excelência operacional, sustentabilidade, responsabilidade e compromisso com resultados duradouros.",
    ),
    (
        "Propósito",
        "Transformar a forma como líderes pensam e empresas operam, criando legados que transcendem gerações.",
    ),
];

const PRINCIPLES: [(&str, &str); 3] = [
    ("Clareza Absoluta", "Elimino ambiguidades e trago transparência total aos processos e decisões."),
    ("Excelência Operacional", "Cada estrutura criada é pensada para durar e evoluir com a empresa."),
    ("Legado Sustentável", "Construo bases que transcendem tendências e resistem ao tempo."),
];

#[component]
pub fn BrandingPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero">
            <h1>"Minha "<span class="accent">"Marca"</span></h1>
            <p class="muted">
                "Não estou aqui para entreter. Estou aqui para estruturar. Não sou coach. Não sou guru. "
                "Não vendo atalhos. Falo de coerência, legado e sistemas que não colapsam sob pressão."
            </p>
            <div class="button-row">
                <button class="outline" on:click=move |_| nav.navigate(Page::Portfolio)>"Ver Serviços"</button>
                <button class="outline" on:click=move |_| nav.navigate(Page::Manifesto)>"Ler o Manifesto"</button>
            </div>
        </section>

        <section class="grid">
            {IDENTITY
                .into_iter()
                .map(|(title, text)| view! {
                    <div class="card">
                        <h2>{title}</h2>
                        <p class="muted">{text}</p>
                    </div>
                })
                .collect::<Vec<_>>()}
        </section>

        <section class="card">
            <h2>"Princípios "<span class="accent">"Fundamentais"</span></h2>
            <div class="grid">
                {PRINCIPLES
                    .into_iter()
                    .map(|(title, text)| view! {
                        <div class="pillar">
                            <h3>{title}</h3>
                            <p class="muted">{text}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class="quote">"Não escalo promessas. Escalo estruturas."</blockquote>
            <button class="cta" on:click=move |_| browser::schedule_meeting(None)>
                "📅 Agendar Conversa"
            </button>
        </section>

        <ContactSection />
    }
}
