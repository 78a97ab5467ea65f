//! Footer component

use leptos::prelude::*;
use shared::calendar::CONTACT_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 "{CONTACT_NAME}". Todos os direitos reservados."</p>
            <p class="subtitle">"Bem vindo"</p>
        </footer>
    }
}
