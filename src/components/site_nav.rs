//! Site Navigation Component
//!
//! Top bar linking the public pages and the admin screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::tr;

const LINKS: &[(&str, &str)] = &[
    ("/", "nav.home"),
    ("/gallery", "nav.gallery"),
    ("/documents", "nav.documents"),
    ("/testimonials", "nav.testimonials"),
    ("/team", "nav.team"),
    ("/admin/gallery", "nav.admin"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            {LINKS.iter().map(|(href, key)| {
                view! { <A href=*href attr:class="site-nav-link">{tr(key)}</A> }
            }).collect_view()}
        </nav>
    }
}
