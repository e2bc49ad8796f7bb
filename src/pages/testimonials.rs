//! Success Stories Page

use collection_view::Lightbox;
use leptos::prelude::*;

use crate::api;
use crate::components::{CategoryTabs, FeaturedStrip, LightboxModal, StatusBanner};
use crate::config::use_config;
use crate::i18n::tr;
use crate::models::Testimonial;
use crate::resource::{use_category_filter, use_collection};

const EXCERPT_CHARS: usize = 160;

/// Five-star rating as filled and empty stars
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Story cut at a word boundary, with an ellipsis when shortened
pub fn excerpt(story: &str, max_chars: usize) -> String {
    if story.chars().count() <= max_chars {
        return story.to_string();
    }
    let cut: String = story.chars().take(max_chars).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(i) => &cut[..i],
        None => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

#[component]
pub fn TestimonialCard(story: Testimonial, #[prop(into)] on_open: Callback<u32>) -> impl IntoView {
    let id = story.id;
    view! {
        <article class="testimonial-card" on:click=move |_| on_open.run(id)>
            <img class="testimonial-avatar" src=story.image alt=story.name.clone() loading="lazy" />
            <h3>{story.name}</h3>
            <p class="testimonial-location">{story.location}" · "{story.year}</p>
            <p class="testimonial-rating">{stars(story.rating)}</p>
            <p class="testimonial-excerpt">{excerpt(&story.story, EXCERPT_CHARS)}</p>
        </article>
    }
}

/// Full story inside the lightbox
pub fn testimonial_detail(story: Testimonial) -> impl IntoView {
    view! {
        <article class="testimonial-detail">
            <img class="testimonial-portrait" src=story.image alt=story.name.clone() />
            <h3>{story.name}</h3>
            <p class="testimonial-location">{story.location}" · "{story.year}</p>
            <p class="testimonial-rating">{stars(story.rating)}</p>
            <p class="testimonial-story">{story.story}</p>
            <h4>{tr("testimonials.impact")}</h4>
            <p class="testimonial-impact">{story.impact}</p>
        </article>
    }
}

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let config = use_config();
    let collection = use_collection(|config| async move { api::list_testimonials(&config).await });
    let filter = use_category_filter(collection);
    let lightbox = RwSignal::new(Lightbox::<u32>::new());

    let open = Callback::new(move |id: u32| lightbox.update(|state| state.open_id(id)));

    view! {
        <div class="page testimonials-page">
            <h1>{tr("nav.testimonials")}</h1>

            <FeaturedStrip
                items=collection.featured(config.featured.testimonials)
                card=move |story: Testimonial| view! { <TestimonialCard story=story on_open=open /> }
            />

            <CategoryTabs categories=collection.categories() active=filter.active />

            <StatusBanner state=collection.state empty=collection.is_empty() />

            <div class="testimonial-grid">
                <For
                    each=move || filter.filtered.get()
                    key=|story| story.id
                    children=move |story| view! { <TestimonialCard story=story on_open=open /> }
                />
            </div>

            <LightboxModal
                subset=filter.filtered
                items=collection.items()
                state=lightbox
                render=testimonial_detail
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("Short story", 40), "Short story");
        assert_eq!(excerpt("Joined the program in spring", 14), "Joined the…");
        assert_eq!(excerpt("Unbreakable", 4), "Unbr…");
    }
}
