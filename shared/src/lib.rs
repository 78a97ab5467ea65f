//! ==============================================================================
//! lib.rs - shared domain logic for the anderson garcia site
//! ==============================================================================
//!
//! purpose:
//!     everything the site does that is not rendering: page identifiers,
//!     blog post rules, the content store interface and the state behind
//!     the blog and admin pages. kept free of browser apis so it runs and
//!     tests natively.
//!
//! relationships:
//!     - used by: site (leptos csr app, implements ContentStore over http)
//!
//! modules:
//!     - page:      closed set of top-level views
//!     - post:      BlogPost row, slug / tag derivation, admin form payloads
//!     - sanitize:  allow-list for post markup
//!     - calendar:  meeting deep link and contact details
//!     - config:    store endpoint configuration with placeholder fallback
//!     - store:     ContentStore trait, errors, session
//!     - feed:      public blog list / search / detail state
//!     - admin:     admin panel state and crud operations
//!
//! ==============================================================================

pub mod admin;
pub mod calendar;
pub mod config;
pub mod feed;
pub mod page;
pub mod post;
pub mod sanitize;
pub mod store;

pub use admin::{AdminAction, AdminDesk, Pending, Refresh};
pub use config::StoreConfig;
pub use feed::BlogFeed;
pub use page::Page;
pub use post::{BlogPost, PostForm};
pub use store::{ContentStore, Credentials, PostOrder, Session, StoreError};
