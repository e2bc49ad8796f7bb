//! Category Tabs Component
//!
//! Tab bar with one button per category and its live item count.

use collection_view::Category;
use leptos::prelude::*;

/// Category tab bar; clicking a tab makes it the active filter
#[component]
pub fn CategoryTabs(
    #[prop(into)] categories: Signal<Vec<Category>>,
    active: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="category-tabs" role="tablist">
            <For
                each=move || categories.get()
                key=|category| (category.id.clone(), category.count)
                children=move |category| {
                    let id = category.id.clone();
                    let is_active = {
                        let id = id.clone();
                        Memo::new(move |_| active.with(|current| *current == id))
                    };
                    let tab_class = move || {
                        if is_active.get() { "category-tab active" } else { "category-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| active.set(id.clone())
                        >
                            <span class="category-name">{category.name}</span>
                            <span class="category-count">{category.count}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
