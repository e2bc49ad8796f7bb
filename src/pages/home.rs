//! Home Page
//!
//! Featured photos and success stories, each opening in its own lightbox.

use collection_view::Lightbox;
use leptos::prelude::*;

use super::gallery::{photo_detail, PhotoCard};
use super::testimonials::{testimonial_detail, TestimonialCard};
use crate::api;
use crate::components::{FeaturedStrip, LightboxModal, StatusBanner};
use crate::config::use_config;
use crate::models::{GalleryItem, Testimonial};
use crate::resource::use_collection;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();
    let gallery = use_collection(|config| async move { api::list_gallery(&config).await });
    let stories = use_collection(|config| async move { api::list_testimonials(&config).await });

    let featured_photos = gallery.featured(config.featured.gallery);
    let featured_stories = stories.featured(config.featured.testimonials);

    let photo_box = RwSignal::new(Lightbox::<u32>::new());
    let story_box = RwSignal::new(Lightbox::<u32>::new());
    let open_photo = Callback::new(move |id: u32| photo_box.update(|state| state.open_id(id)));
    let open_story = Callback::new(move |id: u32| story_box.update(|state| state.open_id(id)));

    view! {
        <div class="page home-page">
            <StatusBanner state=gallery.state empty=gallery.is_empty() />
            <FeaturedStrip
                items=featured_photos
                card=move |item: GalleryItem| view! { <PhotoCard item=item on_open=open_photo /> }
            />
            <LightboxModal subset=featured_photos items=featured_photos state=photo_box render=photo_detail />

            <StatusBanner state=stories.state empty=stories.is_empty() />
            <FeaturedStrip
                items=featured_stories
                card=move |story: Testimonial| view! { <TestimonialCard story=story on_open=open_story /> }
            />
            <LightboxModal
                subset=featured_stories
                items=featured_stories
                state=story_box
                render=testimonial_detail
            />
        </div>
    }
}
