//! ==============================================================================
//! nav.rs - navigation shell state
//! ==============================================================================
//!
//! purpose:
//!     owns the current page. created once by the root component, handed to
//!     every page through context. pages call `navigate`, the shell renders
//!     whatever `page()` reports. the last write wins; there is no history
//!     stack and no transition guard.
//!
//! custom event:
//!     scripts outside the component tree can fire a window event named
//!     `navigate` whose detail is a page id. it goes through the same
//!     `navigate` call as everything else.
//!
//! ==============================================================================

use leptos::prelude::*;
use shared::page::{Page, NAVIGATE_EVENT};
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Page>,
}

impl Navigator {
    pub fn new(initial: Page) -> Self {
        log::debug!("navigation starts at {initial}");
        Self {
            current: RwSignal::new(initial),
        }
    }

    pub fn navigate(&self, to: Page) {
        log::debug!("navigate {} -> {to}", self.current.get_untracked());
        self.current.set(to);
    }

    /// the single subscription point for the current page
    pub fn page(&self) -> ReadSignal<Page> {
        self.current.read_only()
    }

    /// subscribe to the `navigate` window event for the lifetime of the
    /// calling owner
    pub fn listen_for_events(&self) {
        let nav = *self;
        let handle = window_event_listener_untyped(NAVIGATE_EVENT, move |ev| {
            let detail = ev
                .dyn_ref::<web_sys::CustomEvent>()
                .and_then(|custom| custom.detail().as_string());
            if let Some(page) = page_from_detail(detail) {
                nav.navigate(page);
            }
        });
        on_cleanup(move || handle.remove());
    }
}

/// page named by a `navigate` event; unknown ids resolve to home
fn page_from_detail(detail: Option<String>) -> Option<Page> {
    let Some(id) = detail else {
        log::warn!("navigate event without a page id");
        return None;
    };
    let page = Page::from_id(&id);
    if page.id() != id {
        log::warn!("navigate event with unknown page `{id}`, showing {page}");
    }
    Some(page)
}

pub fn provide_navigator(navigator: Navigator) {
    provide_context(navigator);
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_navigation_wins() {
        let nav = Navigator::new(Page::from_path("/login"));
        assert_eq!(nav.page().get_untracked(), Page::Login);

        nav.navigate(Page::Blog);
        nav.navigate(Page::Admin);
        assert_eq!(nav.page().get_untracked(), Page::Admin);
    }

    #[test]
    fn test_page_from_event_detail() {
        assert_eq!(page_from_detail(Some("admin".to_string())), Some(Page::Admin));
        assert_eq!(page_from_detail(Some("manifesto".to_string())), Some(Page::Manifesto));
        assert_eq!(page_from_detail(Some("contato".to_string())), Some(Page::Home));
        assert_eq!(page_from_detail(Some(String::new())), Some(Page::Home));
        assert_eq!(page_from_detail(None), None);
    }

    #[test]
    fn test_every_page_is_reachable_from_every_page() {
        let nav = Navigator::new(Page::Home);
        for from in Page::ALL {
            for to in Page::ALL {
                nav.navigate(from);
                nav.navigate(to);
                assert_eq!(nav.page().get_untracked(), to);
            }
        }
    }
}
