//! Manifesto page

use leptos::prelude::*;
use shared::page::Page;

use crate::nav::use_navigator;

const CHAPTERS: [(&str, &str); 3] = [
    (
        "O que vi de perto",
        "Já vi gente brilhante ser engolida por processos frágeis. Líderes exaustos tentando escalar o caos. Estratégias que pareciam sólidas, mas eram só medo bem apresentado. E foi aí que entendi: Pensar bem é liderar melhor.",
    ),
    (
        "A lógica da entrega",
        "Não aumento faturamento com mágica. Eu elimino a dependência da sorte. Trago método. Governança. Filosofia aplicada. Mas acima de tudo: clareza.",
    ),
    (
        "Para quem é isso?",
        "Trabalho com líderes que querem parar de apagar incêndio. Com empresas que cansaram de improvisar. Gente que prefere o desconforto da verdade à ilusão confortável. Só caminho com quem escolhe o difícil que liberta.",
    ),
];

const BELIEFS: [(&str, &str); 3] = [
    ("Base Sólida", "Toda solução deve ter base sólida e ser construída para durar, não para impressionar."),
    ("Essência Preservada", "Preservar a identidade da empresa enquanto promove sua evolução e crescimento."),
    ("Execução Real", "Estratégias sem execução são apenas sonhos. Foco total na implementação prática."),
];

#[component]
pub fn ManifestoPage() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section class="page-hero">
            <button class="link" on:click=move |_| nav.navigate(Page::Home)>"← Voltar"</button>
            <h1>"Manifesto"</h1>
            <p class="muted">
                "Não estou aqui para entreter. Estou aqui para estruturar. Não sou coach. Não sou guru. "
                "Não vendo atalhos. Falo de coerência, legado e sistemas que não colapsam sob pressão."
            </p>
        </section>

        {CHAPTERS
            .into_iter()
            .map(|(title, text)| view! {
                <section class="card">
                    <h2>{title}</h2>
                    <p>{text}</p>
                </section>
            })
            .collect::<Vec<_>>()}

        <section class="card">
            <p>
                "Toda estrutura que crio é pra durar. Não entrego moda. Entrego base. "
                "Se for pra fazer, que seja com raiz. Se for pra crescer, que seja com sentido."
            </p>
            <p class="accent">
                "Esse é meu branding. Essa é minha marca. Esse é o tipo de rastro que eu deixo quando passo."
            </p>
        </section>

        <section class="card">
            <h2>"Crenças "<span class="accent">"Fundamentais"</span></h2>
            <div class="grid">
                {BELIEFS
                    .into_iter()
                    .map(|(title, text)| view! {
                        <div class="pillar">
                            <h3>{title}</h3>
                            <p class="muted">{text}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class="quote">
                "Não escalo promessas. Escalo estruturas."
                <footer>"- Anderson Garcia"</footer>
            </blockquote>
            <div class="button-row">
                <button on:click=move |_| nav.navigate(Page::Portfolio)>"Conhecer os Serviços"</button>
                <button class="outline" on:click=move |_| nav.navigate(Page::About)>"Sobre Anderson"</button>
            </div>
        </section>
    }
}
