//! Sticky call-to-action bar shown once the reader scrolls down

use leptos::prelude::*;
use shared::calendar::CONTACT_NAME;

use crate::browser;

const SHOW_AFTER_PX: f64 = 100.0;

#[component]
pub fn FixedHeader() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener_untyped("scroll", move |_| {
        set_visible.set(browser::scroll_y() > SHOW_AFTER_PX);
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <header class="fixed-header">
                <div>
                    <span class="fixed-header-name">{CONTACT_NAME}</span>
                    <span class="subtitle">"Transformação Estratégica"</span>
                </div>
                <button class="cta" on:click=move |_| browser::schedule_meeting(None)>
                    "📅 Fale com Anderson"
                </button>
            </header>
        </Show>
    }
}
