//! Shared UI crate for EmoMap. The survey wizard, the dashboard chart and
//! the views both platform shells route to live here.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod survey;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
