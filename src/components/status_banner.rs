//! Status Banner Component
//!
//! Loading, failure and empty-list messages for a collection page.

use collection_view::LoadState;
use leptos::prelude::*;

use crate::i18n::tr;

/// Translation key and CSS modifier of the banner to show, if any
fn banner(state: &LoadState, empty: bool) -> Option<(&'static str, &'static str)> {
    match state {
        LoadState::Loading if empty => Some(("status.loading", "loading")),
        LoadState::Failed(_) => Some(("errors.fetch", "error")),
        LoadState::Loaded if empty => Some(("status.empty", "empty")),
        _ => None,
    }
}

#[component]
pub fn StatusBanner(
    state: ReadSignal<LoadState>,
    #[prop(into)] empty: Signal<bool>,
) -> impl IntoView {
    move || {
        state.with(|state| banner(state, empty.get())).map(|(key, modifier)| {
            let role = if modifier == "error" { "alert" } else { "status" };
            view! {
                <div class=format!("status-banner {}", modifier) role=role>{tr(key)}</div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_always_shows_error() {
        let failed = LoadState::Failed("Server returned 500: boom".into());
        assert_eq!(banner(&failed, true), Some(("errors.fetch", "error")));
        assert_eq!(banner(&failed, false), Some(("errors.fetch", "error")));
    }

    #[test]
    fn test_loading_and_empty() {
        assert_eq!(banner(&LoadState::Loading, true), Some(("status.loading", "loading")));
        assert_eq!(banner(&LoadState::Loading, false), None);
        assert_eq!(banner(&LoadState::Loaded, true), Some(("status.empty", "empty")));
        assert_eq!(banner(&LoadState::Loaded, false), None);
        assert_eq!(banner(&LoadState::Idle, true), None);
    }
}
