//! About page

use leptos::prelude::*;
use shared::calendar::CONTACT_NAME;

use super::ContactSection;

const EXPERTISE: [(&str, &str); 4] = [
    ("Gestão Estratégica", "Planejamento e execução de estratégias que saem do papel"),
    ("Liderança Organizacional", "Formação e desenvolvimento de líderes em diversos segmentos"),
    ("Transformação Digital", "Condução de processos de modernização e inovação"),
    ("Governança Corporativa", "Implementação de estruturas de governança robustas"),
];

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("Top 10 Consultores Brasil 2023", "Reconhecimento nacional"),
    ("Autor de 3 Livros sobre Gestão", "Publicações sobre estratégia"),
    ("Speaker em 50+ Eventos", "Conferências Nacionais"),
    ("Mentor de 200+ Executivos", "Programa de Mentoria"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Sobre "<span class="accent">"Eu"</span></h1>
            <h2>{CONTACT_NAME}</h2>
            <p class="muted">
                "Estrategista, mentor e estruturador de empresas. Ajudo líderes a trocar o improviso "
                "por método, sem perder aquilo que torna cada empresa única."
            </p>
        </section>

        <section class="card">
            <h2>"Áreas de "<span class="accent">"Atuação"</span></h2>
            <div class="grid">
                {EXPERTISE
                    .into_iter()
                    .map(|(title, text)| view! {
                        <div class="pillar">
                            <h3>{title}</h3>
                            <p class="muted">{text}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="card">
            <h2>"Reconhecimentos"</h2>
            <ul class="checklist">
                {ACHIEVEMENTS
                    .into_iter()
                    .map(|(title, detail)| view! {
                        <li><strong>{title}</strong>" · "<span class="muted">{detail}</span></li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>

        <ContactSection />
    }
}
