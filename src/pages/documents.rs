//! Documents Page

use collection_view::Lightbox;
use leptos::prelude::*;

use crate::api::{self, document_download_url};
use crate::components::{CategoryTabs, FeaturedStrip, LightboxModal, StatusBanner};
use crate::config::{use_config, SiteConfig};
use crate::i18n::tr;
use crate::models::Document;
use crate::resource::{use_category_filter, use_collection};

/// "PDF · 1.2 MB · 14 pages"
fn document_meta(doc: &Document) -> String {
    let mut parts = Vec::new();
    if !doc.doc_type.is_empty() {
        parts.push(doc.doc_type.clone());
    }
    if !doc.size.is_empty() {
        parts.push(doc.size.clone());
    }
    if doc.pages > 0 {
        parts.push(format!("{} {}", doc.pages, tr("documents.pages")));
    }
    parts.join(" · ")
}

#[component]
fn DocumentCard(doc: Document, #[prop(into)] on_open: Callback<u32>) -> impl IntoView {
    let id = doc.id;
    let meta = document_meta(&doc);
    view! {
        <article class="document-card" on:click=move |_| on_open.run(id)>
            {doc.image_url.map(|src| view! { <img class="document-cover" src=src alt="" loading="lazy" /> })}
            <h3>{doc.title}</h3>
            <p class="document-meta">{meta}</p>
            <p class="document-date">{doc.publish_date}</p>
        </article>
    }
}

fn document_detail(config: SiteConfig) -> impl Fn(Document) -> AnyView + Clone + Send + Sync + 'static {
    move |doc: Document| {
        let href = document_download_url(&config, doc.id);
        let meta = document_meta(&doc);
        view! {
            <article class="document-detail">
                <h3>{doc.title}</h3>
                <p class="document-meta">{meta}</p>
                <p>{doc.description}</p>
                <p class="document-downloads">{doc.downloads}" "{tr("documents.downloads")}</p>
                <a class="document-download" href=href download="">{tr("documents.download")}</a>
            </article>
        }
        .into_any()
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let config = use_config();
    let collection = use_collection(|config| async move { api::list_documents(&config).await });
    let filter = use_category_filter(collection);
    let lightbox = RwSignal::new(Lightbox::<u32>::new());

    let open = Callback::new(move |id: u32| lightbox.update(|state| state.open_id(id)));

    view! {
        <div class="page documents-page">
            <h1>{tr("nav.documents")}</h1>

            <FeaturedStrip
                items=collection.featured(config.featured.documents)
                card=move |doc: Document| view! { <DocumentCard doc=doc on_open=open /> }
            />

            <CategoryTabs categories=collection.categories() active=filter.active />

            <StatusBanner state=collection.state empty=collection.is_empty() />

            <div class="document-grid">
                <For
                    each=move || filter.filtered.get()
                    key=|doc| doc.id
                    children=move |doc| view! { <DocumentCard doc=doc on_open=open /> }
                />
            </div>

            <LightboxModal
                subset=filter.filtered
                items=collection.items()
                state=lightbox
                render=document_detail(config.clone())
            />
        </div>
    }
}
