//! Gallery Admin Page
//!
//! Add and delete photos. Every successful change refetches the whole list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CategoryTabs, DeleteConfirmButton, StatusBanner};
use crate::config::use_config;
use crate::context::{use_app_context, ToastKind};
use crate::error::ApiError;
use crate::i18n::tr;
use crate::models::NewGalleryItem;
use crate::resource::{use_category_filter, use_collection};

/// Toast text for a failed admin mutation
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation(message) if !message.is_empty() => message.clone(),
        other => tr(other.user_message_key()),
    }
}

/// Form for adding a gallery photo
#[component]
fn NewPhotoForm() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let draft = RwSignal::new(NewGalleryItem::default());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = draft.get();
        let missing = item.missing_fields();
        if !missing.is_empty() {
            let fields: Vec<String> = missing.iter().map(|key| tr(key)).collect();
            ctx.notify(ToastKind::Error, format!("{}: {}", tr("errors.validation"), fields.join(", ")));
            return;
        }

        set_saving.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::create_gallery_item(&config, &item).await {
                Ok(created) => {
                    tracing::info!("[ADMIN] created gallery item {}", created.id);
                    draft.try_set(NewGalleryItem::default());
                    ctx.notify(ToastKind::Success, tr("admin.gallery.saved"));
                    ctx.reload();
                }
                Err(err) => {
                    tracing::warn!("[ADMIN] create rejected: {}", err);
                    ctx.notify(ToastKind::Error, failure_message(&err));
                }
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <form class="admin-form" on:submit=submit>
            <label>
                {tr("form.title")}
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>
            <label>
                {tr("form.category")}
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                />
            </label>
            <label>
                {tr("form.date")}
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                />
            </label>
            <label>
                {tr("form.url")}
                <input
                    type="url"
                    prop:value=move || draft.with(|d| d.url.clone())
                    on:input=move |ev| draft.update(|d| d.url = event_target_value(&ev))
                />
            </label>
            <label>
                {tr("form.description")}
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.featured)
                    on:change=move |ev| draft.update(|d| d.featured = event_target_checked(&ev))
                />
                {tr("form.featured")}
            </label>
            <button type="submit" disabled=move || saving.get()>{tr("admin.gallery.add")}</button>
        </form>
    }
}

#[component]
pub fn AdminGalleryPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let collection = use_collection(|config| async move { api::list_gallery(&config).await });
    let filter = use_category_filter(collection);

    let delete = move |id: u32| {
        let config = config.clone();
        spawn_local(async move {
            match api::delete_gallery_item(&config, id).await {
                Ok(()) => {
                    tracing::info!("[ADMIN] deleted gallery item {}", id);
                    ctx.notify(ToastKind::Success, tr("admin.gallery.deleted"));
                    ctx.reload();
                }
                Err(err) => {
                    tracing::warn!("[ADMIN] delete of {} failed: {}", id, err);
                    ctx.notify(ToastKind::Error, failure_message(&err));
                }
            }
        });
    };

    view! {
        <div class="page admin-page">
            <h1>{tr("admin.gallery.title")}</h1>

            <NewPhotoForm />

            <CategoryTabs categories=collection.categories() active=filter.active />

            <StatusBanner state=collection.state empty=collection.is_empty() />

            <table class="admin-table">
                <tbody>
                    <For
                        each=move || filter.filtered.get()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let delete = delete.clone();
                            view! {
                                <tr>
                                    <td><img class="admin-thumb" src=item.url alt="" /></td>
                                    <td>{item.title}</td>
                                    <td>{item.category}</td>
                                    <td>{item.date}</td>
                                    <td>{if item.featured { "★" } else { "" }}</td>
                                    <td>
                                        <DeleteConfirmButton
                                            prompt=format!("{}?", tr("admin.gallery.delete"))
                                            on_confirm=move |_| delete(id)
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_backend_text() {
        assert_eq!(failure_message(&ApiError::Validation("Title too long".into())), "Title too long");
        assert_eq!(
            failure_message(&ApiError::Validation(String::new())),
            "Please check the form and try again."
        );
        assert_eq!(
            failure_message(&ApiError::Network("offline".into())),
            "We couldn't load this content. Please try again later."
        );
    }
}
