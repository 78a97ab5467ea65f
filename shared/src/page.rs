//! ==============================================================================
//! page.rs - page identifiers for the navigation shell
//! ==============================================================================
//!
//! purpose:
//!     the closed set of top-level views the site can show. the shell keeps
//!     exactly one of these as its current state and renders the matching page.
//!
//! relationships:
//!     - used by: site/nav (Navigator state, custom event decoding)
//!     - used by: site/components (menu entries, page dispatch)
//!     - used by: admin (session checks redirect to Login)
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// reserved path that opens the admin panel directly
pub const ADMIN_PATH: &str = "/admin";

/// reserved path that opens the login form directly
pub const LOGIN_PATH: &str = "/login";

/// name of the window event other scripts can fire to request navigation.
/// the event detail carries the page id as a string.
pub const NAVIGATE_EVENT: &str = "navigate";

/// top-level view selected by the navigation shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Portfolio,
    Blog,
    Branding,
    Manifesto,
    About,
    Login,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page id `{0}`")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Portfolio,
        Page::Blog,
        Page::Branding,
        Page::Manifesto,
        Page::About,
        Page::Login,
        Page::Admin,
    ];

    /// entries shown in the top navigation bar, in display order
    pub const MENU: [Page; 5] = [
        Page::Home,
        Page::Portfolio,
        Page::Blog,
        Page::Branding,
        Page::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Portfolio => "portfolio",
            Page::Blog => "blog",
            Page::Branding => "branding",
            Page::Manifesto => "manifesto",
            Page::About => "about",
            Page::Login => "login",
            Page::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Portfolio => "Portfolio",
            Page::Blog => "Blog",
            Page::Branding => "Branding",
            Page::Manifesto => "Manifesto",
            Page::About => "Sobre Eu",
            Page::Login => "Login",
            Page::Admin => "Admin",
        }
    }

    /// lenient lookup used by the shell: anything unrecognised renders home
    pub fn from_id(id: &str) -> Page {
        id.parse().unwrap_or_default()
    }

    /// initial page for a url path. only the two reserved admin paths are
    /// recognised; every other path starts at home.
    pub fn from_path(path: &str) -> Page {
        match path {
            ADMIN_PATH => Page::Admin,
            LOGIN_PATH => Page::Login,
            _ => Page::Home,
        }
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_paths_seed_initial_page() {
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/login"), Page::Login);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/blog"), Page::Home);
        assert_eq!(Page::from_path("/admin/"), Page::Home);
    }

    #[test]
    fn test_every_id_parses_back() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
            assert_eq!(page.to_string(), page.id());
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_home() {
        assert_eq!(
            "contato".parse::<Page>(),
            Err(UnknownPage("contato".to_string()))
        );
        assert_eq!(Page::from_id("contato"), Page::Home);
        assert_eq!(Page::from_id("Blog"), Page::Home);
    }

    #[test]
    fn test_serde_uses_page_id() {
        let json = serde_json::to_string(&Page::Manifesto).unwrap();
        assert_eq!(json, "\"manifesto\"");
        let page: Page = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(page, Page::Admin);
    }
}
