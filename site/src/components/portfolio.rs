//! Portfolio page: services and case studies

use leptos::prelude::*;

use super::ContactSection;
use crate::browser;

struct Service {
    title: &'static str,
    challenge: &'static str,
    solution: &'static str,
    result: &'static str,
    call: &'static str,
}

static SERVICES: [Service; 6] = [
    Service {
        title: "Governança Essencial",
        challenge: "Empresas em crescimento muitas vezes operam com decisões dispersas, sem clareza de papéis ou rituais de governança. Isso gera confusão, retrabalho e lentidão estratégica.",
        solution: "Implantação de mapa de governança, definição de cadência de reuniões, rituais de alinhamento e integração com conselhos ou lideranças chave. Tudo com base nos frameworks RAMAL, VRIO e Service Blueprint.",
        result: "Estrutura clara de tomada de decisão, aumento da confiança entre áreas e velocidade estratégica sem perder coerência institucional.",
        call: "Vamos estruturar a governança que sustenta seu crescimento.",
    },
    Service {
        title: "Mentoria Executiva",
        challenge: "Líderes maduros em transição ou sobrecarga costumam se sentir isolados, desorientados e sem espaço seguro para reflexão estratégica.",
        solution: "Sessões individuais com frameworks de decisão, provocações filosóficas e planos de ação táticos com metas claras por fase.",
        result: "Clareza para decisões críticas, suporte emocional com lógica estruturada e aceleração de próximos passos com segurança e propósito.",
        call: "Agende sua sessão de mentoria estratégica e recomece com profundidade.",
    },
    Service {
        title: "Estratégia Aplicada",
        challenge: "Muitas empresas têm planos estratégicos que ficam na gaveta, sem conexão real com a operação diária e sem mecanismos de execução efetivos.",
        solution: "Desenvolvimento de roadmap estratégico integrado, definição de OKRs por área, criação de rituais de acompanhamento e ajuste contínuo baseado em resultados.",
        result: "Estratégia que sai do papel e vira realidade, com indicadores claros, responsabilidades definidas e ritmo de execução sustentável.",
        call: "Transforme sua estratégia em resultados concretos.",
    },
    Service {
        title: "Transformação Operacional",
        challenge: "Processos fragmentados, dependência excessiva de pessoas-chave e falta de padronização geram ineficiência e limitam o crescimento sustentável.",
        solution: "Mapeamento completo de processos críticos, implementação de automações estratégicas, criação de manuais operacionais e treinamento de equipes para autonomia.",
        result: "Operação enxuta, previsível e escalável, com redução de custos operacionais e aumento significativo da produtividade das equipes.",
        call: "Otimize sua operação para crescer sem limites.",
    },
    Service {
        title: "Gestão de Crises",
        challenge: "Crises expõem fragilidades estruturais e muitas empresas não têm protocolos claros para navegar momentos críticos sem perder a essência.",
        solution: "Desenvolvimento de planos de contingência, criação de comitês de crise, treinamento de lideranças e implementação de comunicação estratégica.",
        result: "Capacidade de resposta rápida e estruturada, preservação da reputação e transformação de crises em oportunidades de fortalecimento organizacional.",
        call: "Prepare-se para transformar crises em oportunidades.",
    },
    Service {
        title: "Estruturação para Investimento",
        challenge: "Empresas com potencial de crescimento frequentemente carecem da estrutura e governança necessárias para atrair e gerenciar capital externo.",
        solution: "Auditoria completa de estruturas, adequação de governança corporativa, criação de relatórios gerenciais e preparação de documentação para investidores.",
        result: "Organização preparada para due diligence, processos auditáveis e governança que gera confiança em investidores e parceiros estratégicos.",
        call: "Estruture sua empresa para o próximo nível de crescimento.",
    },
];

const CASES: [(&str, &str); 3] = [
    (
        "A Reinvenção da Profit",
        "Aplicamos na própria Profit tudo que entregamos para os clientes. Desde a governança até o ciclo comercial, o que você vê aqui é vivido na prática.",
    ),
    (
        "Mentoria de Transição com Executiva Sênior",
        "Ela chegou esgotada e sem clareza. Saiu com um plano de três etapas e coragem para recomeçar do próprio jeito.",
    ),
    (
        "Auditoria Estratégica em Grupo Educacional",
        "Acharam que era só um ajuste operacional. Mas o buraco era ético. Mapear os riscos invisíveis salvou a reputação da marca.",
    ),
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Serviços "<span class="accent">"Estratégicos"</span></h1>
            <p class="muted">"Não escalo promessas. Escalo estruturas."</p>
        </section>

        <section class="grid services">
            {SERVICES
                .iter()
                .map(|service| {
                    let title = service.title;
                    view! {
                        <article class="card service">
                            <h2>{service.title}</h2>
                            <p><strong>"🎯 Desafio: "</strong>{service.challenge}</p>
                            <p><strong>"💡 Solução: "</strong>{service.solution}</p>
                            <p><strong>"🚀 Resultado: "</strong>{service.result}</p>
                            <p class="accent">{service.call}</p>
                            <button class="cta" on:click=move |_| browser::schedule_meeting(Some(title))>
                                "📅 Agendar Diagnóstico"
                            </button>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </section>

        <section class="card">
            <h2>"O Método "<span class="accent">"em Ação"</span></h2>
            {CASES
                .into_iter()
                .map(|(title, story)| view! {
                    <div class="case">
                        <h3>{title}</h3>
                        <p class="muted">{story}</p>
                    </div>
                })
                .collect::<Vec<_>>()}
        </section>

        <ContactSection />
    }
}
