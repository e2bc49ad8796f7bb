//! Lightbox Modal Component
//!
//! Full-view modal over the filtered grid. The selection is resolved against
//! the filtered subset; if the active tab no longer holds it, the item is
//! still shown (looked up in the full list) but navigation is disabled until
//! the lightbox is closed or reopened.

use collection_view::{Lightbox, Listable};
use leptos::ev;
use leptos::prelude::*;

use crate::i18n::tr;

#[component]
pub fn LightboxModal<T, F, IV>(
    /// Current filtered subset; navigation wraps within it
    #[prop(into)] subset: Signal<Vec<T>>,
    /// Full list, for showing a selection the subset lost
    #[prop(into)] items: Signal<Vec<T>>,
    state: RwSignal<Lightbox<T::Id>>,
    render: F,
) -> impl IntoView
where
    T: Listable + Clone + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    F: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let go_next = move || {
        subset.with_untracked(|items| state.update(|lightbox| lightbox.next(items)));
    };
    let go_previous = move || {
        subset.with_untracked(|items| state.update(|lightbox| lightbox.previous(items)));
    };
    let close = move || state.update(|lightbox| lightbox.close());

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if !state.with_untracked(|lightbox| lightbox.is_open()) {
            return;
        }
        match ev.key().as_str() {
            "ArrowRight" => go_next(),
            "ArrowLeft" => go_previous(),
            "Escape" => close(),
            _ => {}
        }
    });
    on_cleanup(move || keydown.remove());

    let close_label = tr("lightbox.close");
    let previous_label = tr("lightbox.previous");
    let next_label = tr("lightbox.next");

    move || {
        let lightbox = state.get();
        let Some(selected) = lightbox.selected_id().cloned() else {
            return view! { <div class="lightbox-closed"></div> }.into_any();
        };

        let (item, position, len) = subset.with(|subset_items| {
            match lightbox.position(subset_items) {
                Some(i) => (Some(subset_items[i].clone()), Some(i), subset_items.len()),
                None => (
                    items.with(|all| all.iter().find(|item| item.id() == selected).cloned()),
                    None,
                    subset_items.len(),
                ),
            }
        });
        let Some(item) = item else {
            return view! { <div class="lightbox-closed"></div> }.into_any();
        };
        let can_navigate = position.is_some() && len > 1;
        let counter = position.map(|i| format!("{} / {}", i + 1, len));
        let render = render.clone();

        view! {
            <div class="lightbox-overlay" on:click=move |_| close()>
                <div
                    class="lightbox-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="lightbox-close" title=close_label.clone() on:click=move |_| close()>
                        "×"
                    </button>
                    <button
                        class="lightbox-nav previous"
                        title=previous_label.clone()
                        disabled=!can_navigate
                        on:click=move |_| go_previous()
                    >
                        "‹"
                    </button>
                    <div class="lightbox-body">{render(item)}</div>
                    <button
                        class="lightbox-nav next"
                        title=next_label.clone()
                        disabled=!can_navigate
                        on:click=move |_| go_next()
                    >
                        "›"
                    </button>
                    {counter.map(|text| view! { <div class="lightbox-counter">{text}</div> })}
                </div>
            </div>
        }
        .into_any()
    }
}
