//! Featured Strip Component

use collection_view::Listable;
use leptos::prelude::*;

use crate::i18n::tr;

/// Row of promoted items; renders nothing when none are featured
#[component]
pub fn FeaturedStrip<T, F, IV>(
    #[prop(into)] items: Signal<Vec<T>>,
    card: F,
) -> impl IntoView
where
    T: Listable + Clone + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    F: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let title = tr("featured.title");

    view! {
        <Show when=move || items.with(|items| !items.is_empty())>
            <section class="featured-strip">
                <h2 class="featured-title">{title.clone()}</h2>
                <div class="featured-grid">
                    <For
                        each=move || items.get()
                        key=|item| item.id()
                        children={
                            let card = card.clone();
                            move |item| card(item)
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
