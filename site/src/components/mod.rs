//! ==============================================================================
//! components/mod.rs - page shell and pages
//! ==============================================================================

mod about;
mod admin;
mod blog;
mod branding;
mod contact;
mod fixed_header;
mod floating_cta;
mod footer;
mod home;
mod login;
mod manifesto;
mod nav_bar;
mod portfolio;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use blog::BlogPage;
pub use branding::BrandingPage;
pub use contact::ContactSection;
pub use fixed_header::FixedHeader;
pub use floating_cta::FloatingCta;
pub use footer::Footer;
pub use home::HomePage;
pub use login::LoginPage;
pub use manifesto::ManifestoPage;
pub use nav_bar::NavBar;
pub use portfolio::PortfolioPage;
