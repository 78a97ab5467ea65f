//! Admin login page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::admin;
use shared::page::Page;
use shared::store::Credentials;

use crate::api::use_store;
use crate::nav::use_navigator;

#[component]
pub fn LoginPage() -> impl IntoView {
    let nav = use_navigator();
    let store = StoredValue::new(use_store());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (waiting, set_waiting) = signal(false);

    // already signed in: straight to the panel
    Effect::new(move || {
        spawn_local(async move {
            if admin::require_session(&store.get_value()).await.is_none() {
                nav.navigate(Page::Admin);
            }
        });
    });

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        set_waiting.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = admin::sign_in(&store.get_value(), &credentials).await;
            set_waiting.set(false);
            match outcome {
                Ok(page) => nav.navigate(page),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let disabled =
        move || waiting.get() || email.with(String::is_empty) || password.with(String::is_empty);

    view! {
        <section class="login">
            <div class="card narrow">
                <h1>"Área "<span class="accent">"Administrativa"</span></h1>
                <p class="muted">"Entre para gerenciar os posts do blog."</p>

                <form on:submit=submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            required
                            placeholder="seu@email.com"
                            prop:disabled=move || waiting.get()
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Senha"</span>
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:disabled=move || waiting.get()
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|message| view! {
                        <div class="result error">{message}</div>
                    })}

                    <button type="submit" class="cta wide" prop:disabled=disabled>
                        {move || if waiting.get() {
                            view! { <span class="spinner"></span> " Entrando..." }.into_any()
                        } else {
                            view! { "Entrar" }.into_any()
                        }}
                    </button>
                </form>

                <button class="link" on:click=move |_| nav.navigate(Page::Home)>
                    "← Voltar ao site"
                </button>
            </div>
        </section>
    }
}
