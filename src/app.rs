//! Member Site Frontend App
//!
//! Router shell: navigation, toast host and one route per page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{SiteNav, ToastHost};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::i18n::{browser_locale, tr};
use crate::pages::{AdminGalleryPage, DocumentsPage, GalleryPage, HomePage, TeamPage, TestimonialsPage};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(browser_locale());
    provide_context(AppContext::new());

    view! {
        <Router>
            <SiteNav />
            <ToastHost />
            <main class="main-content">
                <Routes fallback=|| view! { <div class="not-found">{tr("errors.not_found")}</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/documents") view=DocumentsPage />
                    <Route path=path!("/testimonials") view=TestimonialsPage />
                    <Route path=path!("/team") view=TeamPage />
                    <Route path=path!("/admin/gallery") view=AdminGalleryPage />
                </Routes>
            </main>
        </Router>
    }
}
