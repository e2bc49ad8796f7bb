//! Gallery Page
//!
//! Photo grid with category tabs, a featured strip and a photo lightbox.

use collection_view::Lightbox;
use leptos::prelude::*;

use crate::api;
use crate::components::{CategoryTabs, FeaturedStrip, LightboxModal, StatusBanner};
use crate::config::use_config;
use crate::i18n::tr;
use crate::models::GalleryItem;
use crate::resource::{use_category_filter, use_collection};

/// Thumbnail card; `on_open` is called with the photo's id
#[component]
pub fn PhotoCard(item: GalleryItem, #[prop(into)] on_open: Callback<u32>) -> impl IntoView {
    let id = item.id;
    view! {
        <figure class="photo-card" on:click=move |_| on_open.run(id)>
            <img src=item.url alt=item.title.clone() loading="lazy" />
            <figcaption>
                <span class="photo-title">{item.title}</span>
                <span class="photo-date">{item.date}</span>
            </figcaption>
        </figure>
    }
}

/// Full-size view inside the lightbox
pub fn photo_detail(item: GalleryItem) -> impl IntoView {
    view! {
        <figure class="photo-detail">
            <img src=item.url alt=item.title.clone() />
            <figcaption>
                <h3>{item.title}</h3>
                <p class="photo-category">{item.category}" · "{item.date}</p>
                <p>{item.description}</p>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = use_config();
    let collection = use_collection(|config| async move { api::list_gallery(&config).await });
    let filter = use_category_filter(collection);
    let lightbox = RwSignal::new(Lightbox::<u32>::new());

    let open = Callback::new(move |id: u32| lightbox.update(|state| state.open_id(id)));

    view! {
        <div class="page gallery-page">
            <h1>{tr("nav.gallery")}</h1>

            <FeaturedStrip
                items=collection.featured(config.featured.gallery)
                card=move |item: GalleryItem| view! { <PhotoCard item=item on_open=open /> }
            />

            <CategoryTabs categories=collection.categories() active=filter.active />

            <StatusBanner state=collection.state empty=collection.is_empty() />

            <div class="photo-grid">
                <For
                    each=move || filter.filtered.get()
                    key=|item| item.id
                    children=move |item| view! { <PhotoCard item=item on_open=open /> }
                />
            </div>

            <LightboxModal
                subset=filter.filtered
                items=collection.items()
                state=lightbox
                render=photo_detail
            />
        </div>
    }
}
