//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod featured_strip;
mod lightbox_modal;
mod status_banner;
mod delete_confirm_button;
mod toast;
mod site_nav;

pub use category_tabs::CategoryTabs;
pub use featured_strip::FeaturedStrip;
pub use lightbox_modal::LightboxModal;
pub use status_banner::StatusBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use toast::ToastHost;
pub use site_nav::SiteNav;
